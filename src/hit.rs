use super::*;

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub(crate) struct Hit {
  #[serde(default, deserialize_with = "deserialize_optional_string")]
  pub(crate) author: Option<String>,
  pub(crate) num_comments: Option<u64>,
  #[serde(rename = "objectID", deserialize_with = "deserialize_object_id")]
  pub(crate) object_id: String,
  pub(crate) points: Option<u64>,
  #[serde(default, deserialize_with = "deserialize_optional_string")]
  pub(crate) title: Option<String>,
  #[serde(default, deserialize_with = "deserialize_optional_string")]
  pub(crate) url: Option<String>,
}

impl Hit {
  pub(crate) fn display_title(&self) -> &str {
    self
      .title
      .as_deref()
      .filter(|title| !title.is_empty())
      .unwrap_or("Untitled")
  }

  /// The story link, or the discussion page when the hit has no link.
  pub(crate) fn resolved_url(&self) -> String {
    self
      .url
      .clone()
      .filter(|url| !url.is_empty())
      .unwrap_or_else(|| {
        format!("https://news.ycombinator.com/item?id={}", self.object_id)
      })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn deserializes_algolia_hit() {
    let hit = serde_json::from_str::<Hit>(
      r#"{
        "author": "pg",
        "created_at": "2006-10-09T18:21:51.000Z",
        "num_comments": 15,
        "objectID": "1",
        "points": 57,
        "title": "Y Combinator",
        "url": "http://ycombinator.com"
      }"#,
    )
    .unwrap();

    assert_eq!(
      hit,
      Hit {
        author: Some("pg".into()),
        num_comments: Some(15),
        object_id: "1".into(),
        points: Some(57),
        title: Some("Y Combinator".into()),
        url: Some("http://ycombinator.com".into()),
      }
    );
  }

  #[test]
  fn missing_and_null_fields_become_none() {
    let hit = serde_json::from_str::<Hit>(
      r#"{"objectID": 42, "title": null, "points": null}"#,
    )
    .unwrap();

    assert_eq!(hit.object_id, "42");
    assert_eq!(hit.author, None);
    assert_eq!(hit.num_comments, None);
    assert_eq!(hit.points, None);
    assert_eq!(hit.display_title(), "Untitled");
  }

  #[test]
  fn missing_object_id_is_rejected() {
    assert!(serde_json::from_str::<Hit>(r#"{"title": "x"}"#).is_err());
  }

  #[test]
  fn resolved_url_falls_back_to_discussion_page() {
    let mut hit = serde_json::from_str::<Hit>(
      r#"{"objectID": "7", "url": "https://example.com"}"#,
    )
    .unwrap();

    assert_eq!(hit.resolved_url(), "https://example.com");

    hit.url = Some(String::new());

    assert_eq!(
      hit.resolved_url(),
      "https://news.ycombinator.com/item?id=7"
    );
  }
}
