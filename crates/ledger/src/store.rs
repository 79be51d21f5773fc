use std::collections::HashMap;

use crate::{LedgerError, MoneyCents, TransactionRecord};

/// A state transition requested by a table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    ToggleSelection { id: String },
    ToggleCleared { id: String },
    UpdateMemo { id: String, text: String },
}

/// Aggregates shown in the footer of the table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub selected: usize,
    pub cleared: usize,
    pub outflow: MoneyCents,
    pub inflow: MoneyCents,
}

/// Ordered, in-memory sequence of transaction records.
///
/// Records keep their seed order forever: the store never inserts, removes
/// or reorders. Every mutation replaces exactly the record matching the id
/// and leaves the others untouched. An unknown id is a no-op.
///
/// Besides the records the store keeps:
/// - an `id -> position` index, built once since the set never changes;
/// - a revision counter per record, bumped on each change, so views derived
///   from a record can tell whether they are stale.
#[derive(Debug, Clone, Default)]
pub struct TransactionStore {
    records: Vec<TransactionRecord>,
    positions: HashMap<String, usize>,
    revisions: Vec<u64>,
    revision: u64,
}

impl TransactionStore {
    /// Builds a store, rejecting duplicate ids.
    pub fn new(records: Vec<TransactionRecord>) -> Result<Self, LedgerError> {
        let mut positions = HashMap::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            if positions.insert(record.id.clone(), index).is_some() {
                return Err(LedgerError::DuplicateId(record.id.clone()));
            }
        }

        let revisions = vec![0; records.len()];
        Ok(Self {
            records,
            positions,
            revisions,
            revision: 0,
        })
    }

    pub fn records(&self) -> &[TransactionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&TransactionRecord> {
        self.position(id).map(|index| &self.records[index])
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.positions.get(id).copied()
    }

    /// Revision of the whole store: increases on every applied mutation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Revision at which the record at `index` last changed (`0` if never).
    pub fn record_revision(&self, index: usize) -> Option<u64> {
        self.revisions.get(index).copied()
    }

    /// Flips `selected`. Returns whether a record matched.
    pub fn toggle_selection(&mut self, id: &str) -> bool {
        self.modify(id, |record| record.selected = !record.selected)
    }

    /// Flips `cleared`. Returns whether a record matched.
    pub fn toggle_cleared(&mut self, id: &str) -> bool {
        self.modify(id, |record| record.cleared = !record.cleared)
    }

    /// Replaces the memo verbatim: no trimming, empty text allowed.
    pub fn update_memo(&mut self, id: &str, text: impl Into<String>) -> bool {
        let text = text.into();
        self.modify(id, |record| record.memo = text)
    }

    pub fn apply(&mut self, mutation: Mutation) -> bool {
        match mutation {
            Mutation::ToggleSelection { id } => self.toggle_selection(&id),
            Mutation::ToggleCleared { id } => self.toggle_cleared(&id),
            Mutation::UpdateMemo { id, text } => self.update_memo(&id, text),
        }
    }

    pub fn summary(&self) -> Summary {
        self.records
            .iter()
            .fold(Summary::default(), |mut summary, record| {
                summary.total += 1;
                summary.selected += usize::from(record.selected);
                summary.cleared += usize::from(record.cleared);
                summary.outflow = saturating_add(summary.outflow, record.outflow);
                summary.inflow = saturating_add(summary.inflow, record.inflow);
                summary
            })
    }

    fn modify(&mut self, id: &str, change: impl FnOnce(&mut TransactionRecord)) -> bool {
        let Some(index) = self.position(id) else {
            tracing::debug!(id, "ignoring mutation for unknown transaction");
            return false;
        };

        change(&mut self.records[index]);
        self.revision += 1;
        self.revisions[index] = self.revision;
        tracing::debug!(id, revision = self.revision, "transaction updated");
        true
    }
}

fn saturating_add(total: MoneyCents, amount: Option<MoneyCents>) -> MoneyCents {
    match amount {
        Some(amount) => total
            .checked_add(amount)
            .unwrap_or(MoneyCents::new(i64::MAX)),
        None => total,
    }
}
