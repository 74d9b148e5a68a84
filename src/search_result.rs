use super::*;

/// Every page fetched so far for one query key, concatenated in fetch order.
#[derive(Debug, Default)]
pub(crate) struct SearchResult {
  pub(crate) hits: Vec<Hit>,
  /// Zero when the API did not report a page count.
  pub(crate) nb_pages: usize,
  pub(crate) page: usize,
}

impl SearchResult {
  pub(crate) fn has_more(&self) -> bool {
    self.nb_pages == 0 || self.next_page() < self.nb_pages
  }

  pub(crate) fn next_page(&self) -> usize {
    self.page.saturating_add(1)
  }
}
