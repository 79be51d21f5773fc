//! Windowed rendering of the transaction rows.
//!
//! Only the rows inside the viewport are drawn. Rows inside the viewport
//! plus an overscan margin on each side are *mounted*: they own a
//! [`RowState`] keyed by record id. Rows leaving the mounted window drop
//! their state; rows entering it start from a fresh one.

use std::{collections::HashMap, ops::Range};

use crate::ui::components::table_row::RowState;

#[derive(Debug, Clone)]
pub struct VirtualList {
    len: usize,
    offset: usize,
    viewport_lines: u16,
    item_height: u16,
    overscan: usize,
    mounted: HashMap<String, RowState>,
}

impl VirtualList {
    /// `item_height` is the estimated number of terminal lines per row.
    pub fn new(item_height: u16, overscan: usize) -> Self {
        Self {
            len: 0,
            offset: 0,
            viewport_lines: 0,
            item_height: item_height.max(1),
            overscan,
            mounted: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn viewport_lines(&self) -> u16 {
        self.viewport_lines
    }

    pub fn item_height(&self) -> u16 {
        self.item_height
    }

    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        self.clamp_offset();
    }

    pub fn resize(&mut self, viewport_lines: u16) {
        self.viewport_lines = viewport_lines;
        self.clamp_offset();
    }

    /// Number of rows that fit the viewport (at least one).
    pub fn page_size(&self) -> usize {
        usize::from((self.viewport_lines / self.item_height).max(1))
    }

    pub fn visible_range(&self) -> Range<usize> {
        self.offset..(self.offset + self.page_size()).min(self.len)
    }

    pub fn mounted_range(&self) -> Range<usize> {
        let visible = self.visible_range();
        let end = (visible.end + self.overscan).min(self.len);
        visible.start.saturating_sub(self.overscan)..end
    }

    pub fn scroll_by(&mut self, delta: isize) {
        self.offset = self.offset.saturating_add_signed(delta);
        self.clamp_offset();
    }

    /// Scrolls the least amount needed for `index` to be visible.
    pub fn scroll_to(&mut self, index: usize) {
        if index < self.offset {
            self.offset = index;
        } else if index >= self.offset + self.page_size() {
            self.offset = index + 1 - self.page_size();
        }
        self.clamp_offset();
    }

    /// Row index drawn at `line` lines below the top of the viewport.
    pub fn row_at(&self, line: u16) -> Option<usize> {
        if line >= self.viewport_lines {
            return None;
        }
        let index = self.offset + usize::from(line / self.item_height);
        (index < self.visible_range().end).then_some(index)
    }

    /// Mounts the given keys and unmounts every other row.
    ///
    /// Keys must be unique; a repeated key shares the first row's state.
    /// Returns `(mounted, unmounted)` counts.
    pub fn reconcile<'a>(&mut self, keys: impl IntoIterator<Item = &'a str>) -> (usize, usize) {
        let mut next = HashMap::with_capacity(self.mounted.len());
        let mut mounted = 0;
        for key in keys {
            if next.contains_key(key) {
                continue;
            }
            let state = self.mounted.remove(key).unwrap_or_else(|| {
                mounted += 1;
                RowState::default()
            });
            next.insert(key.to_string(), state);
        }
        let unmounted = self.mounted.len();
        self.mounted = next;

        if mounted > 0 || unmounted > 0 {
            tracing::debug!(mounted, unmounted, offset = self.offset, "rows reconciled");
        }
        (mounted, unmounted)
    }

    pub fn row_state(&self, key: &str) -> Option<&RowState> {
        self.mounted.get(key)
    }

    pub fn row_state_mut(&mut self, key: &str) -> Option<&mut RowState> {
        self.mounted.get_mut(key)
    }

    pub fn is_mounted(&self, key: &str) -> bool {
        self.mounted.contains_key(key)
    }

    fn clamp_offset(&mut self) {
        let max_offset = self.len.saturating_sub(self.page_size());
        self.offset = self.offset.min(max_offset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(len: usize, viewport: u16) -> VirtualList {
        let mut list = VirtualList::new(1, 2);
        list.set_len(len);
        list.resize(viewport);
        list
    }

    fn keys(range: Range<usize>) -> Vec<String> {
        range.map(|i| i.to_string()).collect()
    }

    #[test]
    fn visible_and_mounted_ranges_follow_offset() {
        let mut list = list(100, 10);
        assert_eq!(list.visible_range(), 0..10);
        assert_eq!(list.mounted_range(), 0..12);

        list.scroll_by(20);
        assert_eq!(list.visible_range(), 20..30);
        assert_eq!(list.mounted_range(), 18..32);
    }

    #[test]
    fn scrolling_is_clamped() {
        let mut list = list(15, 10);
        list.scroll_by(100);
        assert_eq!(list.offset(), 5);
        list.scroll_by(-100);
        assert_eq!(list.offset(), 0);
    }

    #[test]
    fn short_lists_never_scroll() {
        let mut list = list(3, 10);
        list.scroll_by(5);
        assert_eq!(list.visible_range(), 0..3);
        assert_eq!(list.row_at(5), None);
    }

    #[test]
    fn scroll_to_keeps_index_visible() {
        let mut list = list(100, 10);
        list.scroll_to(25);
        assert_eq!(list.visible_range(), 16..26);
        list.scroll_to(3);
        assert_eq!(list.visible_range(), 3..13);
        list.scroll_to(8);
        assert_eq!(list.offset(), 3);
    }

    #[test]
    fn taller_rows_fit_fewer_items() {
        let mut list = VirtualList::new(2, 0);
        list.set_len(50);
        list.resize(10);
        assert_eq!(list.page_size(), 5);
        assert_eq!(list.row_at(0), Some(0));
        assert_eq!(list.row_at(3), Some(1));
        assert_eq!(list.row_at(9), Some(4));
        assert_eq!(list.row_at(10), None);
    }

    #[test]
    fn reconcile_keeps_state_of_rows_that_stay_mounted() {
        let mut list = list(100, 10);
        let first = keys(list.mounted_range());
        assert_eq!(list.reconcile(first.iter().map(String::as_str)), (12, 0));
        list.row_state_mut("5").unwrap().memo.begin("draft");

        list.scroll_by(4);
        let second = keys(list.mounted_range());
        assert_eq!(list.reconcile(second.iter().map(String::as_str)), (4, 2));

        assert!(list.row_state("5").unwrap().memo.is_editing());
        assert!(!list.is_mounted("0"));
        assert!(list.is_mounted("15"));
    }

    #[test]
    fn unmounted_rows_come_back_fresh() {
        let mut list = list(100, 10);
        list.reconcile(["a", "b"]);
        list.row_state_mut("a").unwrap().memo.begin("draft");

        list.reconcile(["b"]);
        list.reconcile(["a", "b"]);

        assert!(!list.row_state("a").unwrap().memo.is_editing());
    }
}
