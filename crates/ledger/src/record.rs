use serde::Deserialize;

use crate::{LedgerError, MoneyCents};

/// One ledger entry shown as a table row.
///
/// Apart from `selected`, every field is what the account statement says
/// about the transaction. `selected` is a pure UI flag and defaults to
/// `false` when absent from a seed file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TransactionRecord {
    pub id: String,
    #[serde(default)]
    pub selected: bool,
    pub account: String,
    pub date: String,
    pub payee: String,
    pub category: String,
    #[serde(default)]
    pub memo: String,
    #[serde(default)]
    pub outflow: Option<MoneyCents>,
    #[serde(default)]
    pub inflow: Option<MoneyCents>,
    #[serde(default)]
    pub cleared: bool,
}

impl TransactionRecord {
    /// Creates an unselected, uncleared record with an empty memo and no
    /// amounts.
    pub fn new(
        id: impl Into<String>,
        account: impl Into<String>,
        date: impl Into<String>,
        payee: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            selected: false,
            account: account.into(),
            date: date.into(),
            payee: payee.into(),
            category: category.into(),
            memo: String::new(),
            outflow: None,
            inflow: None,
            cleared: false,
        }
    }

    #[must_use]
    pub fn with_outflow(mut self, cents: i64) -> Self {
        self.outflow = Some(MoneyCents::new(cents));
        self
    }

    #[must_use]
    pub fn with_inflow(mut self, cents: i64) -> Self {
        self.inflow = Some(MoneyCents::new(cents));
        self
    }

    #[must_use]
    pub fn with_memo(mut self, memo: impl Into<String>) -> Self {
        self.memo = memo.into();
        self
    }

    #[must_use]
    pub fn cleared(mut self, cleared: bool) -> Self {
        self.cleared = cleared;
        self
    }

    /// Checks the amount constraints: no negative amount, and at most one
    /// of `outflow`/`inflow` set.
    ///
    /// Mutations never call this; it guards records entering the store from
    /// outside (seed files).
    pub fn validate(&self) -> Result<(), LedgerError> {
        let negative = [self.outflow, self.inflow]
            .into_iter()
            .flatten()
            .any(MoneyCents::is_negative);
        if negative {
            return Err(LedgerError::NegativeAmount(self.id.clone()));
        }
        if self.outflow.is_some() && self.inflow.is_some() {
            return Err(LedgerError::BothAmounts(self.id.clone()));
        }
        Ok(())
    }
}
