#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Effect {
  FetchPage { page: usize, query: String },
  OpenUrl { url: String },
}
