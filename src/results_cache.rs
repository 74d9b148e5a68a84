use super::*;

/// Search results keyed by query. Entries only grow, except when a hit is
/// dismissed; nothing is ever evicted.
#[derive(Debug, Default)]
pub(crate) struct ResultsCache {
  results: HashMap<String, SearchResult>,
}

impl ResultsCache {
  pub(crate) fn contains(&self, key: &str) -> bool {
    self.results.contains_key(key)
  }

  pub(crate) fn get(&self, key: &str) -> Option<&SearchResult> {
    self.results.get(key)
  }

  pub(crate) fn hits(&self, key: &str) -> &[Hit] {
    self.get(key).map_or(&[], |result| result.hits.as_slice())
  }

  pub(crate) fn merge_page(
    &mut self,
    key: &str,
    hits: Vec<Hit>,
    page: usize,
    nb_pages: usize,
  ) {
    let result = self.results.entry(key.to_string()).or_default();

    result.hits.extend(hits);
    result.page = page;
    result.nb_pages = nb_pages;
  }

  /// Returns whether a hit was removed.
  pub(crate) fn remove_item(&mut self, key: &str, id: &str) -> bool {
    let Some(result) = self.results.get_mut(key) else {
      return false;
    };

    let before = result.hits.len();

    result.hits.retain(|hit| hit.object_id != id);

    result.hits.len() != before
  }
}
