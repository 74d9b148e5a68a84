use super::*;

pub(crate) enum Event {
  Page {
    page: usize,
    query: String,
    result: Result<SearchResponse>,
  },
}
