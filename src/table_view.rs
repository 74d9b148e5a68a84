use super::*;

/// Sort order and cursor for the result table. Rows live in the results
/// cache, so every bound is checked against the row count passed in.
#[derive(Debug, Default)]
pub(crate) struct TableView {
  offset: usize,
  reverse: bool,
  selected: usize,
  sort_key: SortKey,
}

impl TableView {
  pub(crate) fn is_reversed(&self) -> bool {
    self.reverse
  }

  pub(crate) fn offset(&self, len: usize) -> usize {
    let selected = self.selected_index(len).unwrap_or(0);

    if len == 0 { 0 } else { self.offset.min(selected) }
  }

  pub(crate) fn reset_selection(&mut self) {
    self.offset = 0;
    self.selected = 0;
  }

  pub(crate) fn reset_sort(&mut self) {
    self.reverse = false;
    self.sort_key = SortKey::None;
  }

  pub(crate) fn rows<'a>(&self, hits: &'a [Hit]) -> Vec<&'a Hit> {
    let mut rows = self.sort_key.sort(hits);

    if self.reverse {
      rows.reverse();
    }

    rows
  }

  pub(crate) fn select(&mut self, index: usize, len: usize) {
    self.selected = index.min(len.saturating_sub(1));
  }

  pub(crate) fn selected_index(&self, len: usize) -> Option<usize> {
    if len == 0 {
      None
    } else {
      Some(self.selected.min(len.saturating_sub(1)))
    }
  }

  pub(crate) fn selected_raw(&self) -> usize {
    self.selected
  }

  pub(crate) fn set_offset(&mut self, offset: usize, len: usize) {
    self.offset = offset.min(len.saturating_sub(1));
  }

  /// Picking the active key again flips the direction; any other key starts
  /// in its natural order.
  pub(crate) fn sort_by(&mut self, key: SortKey) {
    self.reverse = self.sort_key == key && !self.reverse;
    self.sort_key = key;
  }

  pub(crate) fn sort_key(&self) -> SortKey {
    self.sort_key
  }
}
