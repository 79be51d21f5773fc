use std::collections::HashMap;

use ledger::{Currency, Mutation, TransactionRecord, TransactionStore};

use crate::ui::components::{
    table_header::Column,
    table_row::{CommitTrigger, RowState, RowView},
    virtual_list::VirtualList,
};

#[derive(Debug, Clone)]
struct CachedView {
    revision: u64,
    view: RowView,
}

/// State of the accounts screen: the store, the windowed list of rows and
/// the row cursor.
///
/// Rows talk back only through [`Mutation`]s; after each applied mutation
/// the screen re-derives the views of rows whose record revision moved,
/// which is the changed row alone.
#[derive(Debug)]
pub struct AccountsState {
    store: TransactionStore,
    list: VirtualList,
    views: HashMap<String, CachedView>,
    cursor: usize,
    editing: Option<String>,
    currency: Currency,
    rows_derived: u64,
}

impl AccountsState {
    pub fn new(
        store: TransactionStore,
        currency: Currency,
        row_height: u16,
        overscan: usize,
    ) -> Self {
        let mut state = Self {
            store,
            list: VirtualList::new(row_height, overscan),
            views: HashMap::new(),
            cursor: 0,
            editing: None,
            currency,
            rows_derived: 0,
        };
        state.sync();
        state
    }

    pub fn store(&self) -> &TransactionStore {
        &self.store
    }

    pub fn list(&self) -> &VirtualList {
        &self.list
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Id of the row whose memo is being edited.
    pub fn editing(&self) -> Option<&str> {
        self.editing.as_deref()
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn view(&self, id: &str) -> Option<&RowView> {
        self.views.get(id).map(|cached| &cached.view)
    }

    /// Number of row views derived so far.
    #[cfg(test)]
    pub fn rows_derived(&self) -> u64 {
        self.rows_derived
    }

    /// Applies the viewport height. Called before every frame, so the window
    /// only follows the cursor when the height actually changed.
    pub fn resize(&mut self, viewport_lines: u16) {
        if self.list.viewport_lines() == viewport_lines {
            return;
        }
        self.list.resize(viewport_lines);
        self.list.scroll_to(self.cursor);
        self.sync();
    }

    pub fn toggle_selection(&mut self, id: &str) -> bool {
        self.dispatch(Mutation::ToggleSelection { id: id.to_string() })
    }

    pub fn toggle_cleared(&mut self, id: &str) -> bool {
        self.dispatch(Mutation::ToggleCleared { id: id.to_string() })
    }

    pub fn update_memo(&mut self, id: &str, text: impl Into<String>) -> bool {
        self.dispatch(Mutation::UpdateMemo {
            id: id.to_string(),
            text: text.into(),
        })
    }

    pub fn dispatch(&mut self, mutation: Mutation) -> bool {
        let changed = self.store.apply(mutation);
        if changed {
            self.sync();
        }
        changed
    }

    pub fn toggle_selection_at_cursor(&mut self) -> bool {
        match self.cursor_record().map(|record| record.id.clone()) {
            Some(id) => self.toggle_selection(&id),
            None => false,
        }
    }

    pub fn toggle_cleared_at_cursor(&mut self) -> bool {
        match self.cursor_record().map(|record| record.id.clone()) {
            Some(id) => self.toggle_cleared(&id),
            None => false,
        }
    }

    /// Moves the cursor, committing any memo being edited first.
    pub fn move_cursor(&mut self, delta: isize) {
        self.blur();
        if self.store.is_empty() {
            return;
        }
        self.cursor = self
            .cursor
            .saturating_add_signed(delta)
            .min(self.store.len() - 1);
        self.list.scroll_to(self.cursor);
        self.sync();
    }

    /// Scrolls the viewport without moving the cursor. A memo being edited
    /// loses focus before its row can scroll away.
    pub fn scroll(&mut self, delta: isize) {
        self.blur();
        self.list.scroll_by(delta);
        self.sync();
    }

    /// Pointer activation on the memo cell of row `index`.
    pub fn begin_memo_edit(&mut self, index: usize) -> bool {
        let Some(record) = self.store.records().get(index) else {
            return false;
        };
        let id = record.id.clone();
        let memo = record.memo.clone();
        if self.editing.as_deref() == Some(id.as_str()) {
            return false;
        }

        self.blur();
        self.cursor = index;
        self.list.scroll_to(index);
        self.sync();

        let started = self
            .list
            .row_state_mut(&id)
            .is_some_and(|state| state.memo.begin(&memo));
        if started {
            tracing::debug!(id = id.as_str(), "memo edit started");
            self.editing = Some(id);
        }
        started
    }

    pub fn edit_input(&mut self, ch: char) {
        if let Some(state) = self.editing_state_mut() {
            state.memo.input(ch);
        }
    }

    pub fn edit_backspace(&mut self) {
        if let Some(state) = self.editing_state_mut() {
            state.memo.backspace();
        }
    }

    /// Focus left the memo cell: commit the draft.
    pub fn blur(&mut self) -> bool {
        self.finish_edit(CommitTrigger::Blur)
    }

    /// Explicit submission of the memo cell: commit the draft.
    pub fn submit(&mut self) -> bool {
        self.finish_edit(CommitTrigger::Submit)
    }

    /// Pointer activation on a cell of row `index`.
    pub fn click(&mut self, index: usize, column: Option<Column>) {
        if column == Some(Column::Memo) {
            self.begin_memo_edit(index);
            return;
        }

        self.blur();
        let Some(id) = self.store.records().get(index).map(|record| record.id.clone()) else {
            return;
        };
        self.cursor = index;
        match column {
            Some(Column::Select) => {
                self.toggle_selection(&id);
            }
            Some(Column::Cleared) => {
                self.toggle_cleared(&id);
            }
            _ => {}
        }
        self.sync();
    }

    fn cursor_record(&self) -> Option<&TransactionRecord> {
        self.store.records().get(self.cursor)
    }

    fn editing_state_mut(&mut self) -> Option<&mut RowState> {
        let id = self.editing.as_deref()?;
        self.list.row_state_mut(id)
    }

    fn finish_edit(&mut self, trigger: CommitTrigger) -> bool {
        let Some(id) = self.editing.take() else {
            return false;
        };
        let draft = self
            .list
            .row_state_mut(&id)
            .and_then(|state| state.memo.finish(trigger));
        match draft {
            Some(text) => self.update_memo(&id, text),
            None => false,
        }
    }

    /// Re-mounts the rows around the viewport and refreshes stale views.
    fn sync(&mut self) {
        self.list.set_len(self.store.len());
        let range = self.list.mounted_range();
        let records = &self.store.records()[range.clone()];
        self.list
            .reconcile(records.iter().map(|record| record.id.as_str()));

        if let Some(id) = self.editing.as_deref() {
            if !self.list.is_mounted(id) {
                tracing::warn!(id, "row unmounted while editing its memo");
                self.editing = None;
            }
        }

        self.views.retain(|id, _| self.list.is_mounted(id));
        let mut derived = 0;
        for index in range {
            let record = &self.store.records()[index];
            let revision = self.store.record_revision(index).unwrap_or_default();
            let stale = self
                .views
                .get(&record.id)
                .is_none_or(|cached| cached.revision != revision);
            if stale {
                self.views.insert(
                    record.id.clone(),
                    CachedView {
                        revision,
                        view: RowView::new(record, self.currency),
                    },
                );
                derived += 1;
            }
        }
        if derived > 0 {
            self.rows_derived += derived;
            tracing::trace!(derived, total = self.rows_derived, "row views derived");
        }
    }
}
