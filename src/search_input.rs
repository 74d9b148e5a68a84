/// An open search box. The term itself is edited in place on the state; this
/// keeps what to restore if the edit is cancelled.
pub(crate) struct SearchInput {
  pub(crate) message_backup: String,
  pub(crate) term_backup: String,
}

impl SearchInput {
  pub(crate) fn new(message_backup: String, term_backup: String) -> Self {
    Self {
      message_backup,
      term_backup,
    }
  }

  pub(crate) fn prompt(term: &str) -> String {
    format!("Search: {term}")
  }
}
