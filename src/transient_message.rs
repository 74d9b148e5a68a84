use super::*;

/// A status line message that reverts to `original` once it expires.
#[derive(Clone)]
pub(crate) struct TransientMessage {
  expires_at: Instant,
  original: String,
  text: String,
}

impl TransientMessage {
  const TTL: Duration = Duration::from_secs(3);

  pub(crate) fn is_expired(&self) -> bool {
    self.is_expired_at(Instant::now())
  }

  fn is_expired_at(&self, now: Instant) -> bool {
    now >= self.expires_at
  }

  pub(crate) fn new(text: String, original: String) -> Self {
    Self {
      expires_at: Instant::now() + Self::TTL,
      original,
      text,
    }
  }

  pub(crate) fn original(&self) -> &str {
    &self.original
  }

  pub(crate) fn text(&self) -> &str {
    &self.text
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn expires_after_ttl() {
    let message = TransientMessage::new("Dismissed".into(), "status".into());

    assert!(!message.is_expired());
    assert!(message.is_expired_at(Instant::now() + TransientMessage::TTL));
    assert_eq!(message.text(), "Dismissed");
    assert_eq!(message.original(), "status");
  }
}
