use super::*;

pub(crate) fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
  let available_width = area.width.saturating_sub(2).max(1);
  let available_height = area.height.saturating_sub(2).max(1);

  let width = available_width.clamp(1, width.max(1)).min(area.width);
  let height = available_height.clamp(1, height.max(1)).min(area.height);

  let x = area.x + (area.width.saturating_sub(width)) / 2;
  let y = area.y + (area.height.saturating_sub(height)) / 2;

  Rect::new(x, y, width, height)
}

pub(crate) fn deserialize_object_id<'de, D>(
  deserializer: D,
) -> Result<String, D::Error>
where
  D: Deserializer<'de>,
{
  deserialize_optional_string(deserializer)?
    .filter(|id| !id.is_empty())
    .ok_or_else(|| {
      de::Error::invalid_value(Unexpected::Unit, &"non-empty string or number")
    })
}

pub(crate) fn deserialize_optional_string<'de, D>(
  deserializer: D,
) -> Result<Option<String>, D::Error>
where
  D: Deserializer<'de>,
{
  let value = Option::<Value>::deserialize(deserializer)?;

  match value {
    None | Some(Value::Null) => Ok(None),
    Some(Value::String(s)) => Ok(Some(s)),
    Some(Value::Number(n)) => Ok(Some(n.to_string())),
    Some(Value::Bool(b)) => Err(de::Error::invalid_type(
      Unexpected::Bool(b),
      &"string or number",
    )),
    Some(Value::Array(_)) => Err(de::Error::invalid_type(
      Unexpected::Seq,
      &"string or number",
    )),
    Some(Value::Object(_)) => Err(de::Error::invalid_type(
      Unexpected::Map,
      &"string or number",
    )),
  }
}

pub(crate) fn format_count(
  count: usize,
  singular: &str,
  plural: &str,
) -> String {
  match count {
    1 => format!("1 {singular}"),
    _ => format!("{count} {plural}"),
  }
}

pub(crate) fn saturating_usize_to_u16(value: usize) -> u16 {
  u16::try_from(value).unwrap_or(u16::MAX)
}

pub(crate) fn truncate(text: &str, max_chars: usize) -> String {
  if text.chars().count() <= max_chars {
    return text.to_string();
  }

  let mut result = String::new();

  for (idx, ch) in text.chars().enumerate() {
    if idx >= max_chars {
      result.push_str("...");
      break;
    }

    result.push(ch);
  }

  result.trim_end().to_string()
}

#[cfg(test)]
mod tests {
  use {super::*, serde::Deserialize};

  #[derive(Deserialize, Debug, PartialEq)]
  struct IdWrapper {
    #[serde(deserialize_with = "deserialize_object_id")]
    id: String,
  }

  #[derive(Deserialize, Debug, PartialEq)]
  struct OptionalWrapper {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    value: Option<String>,
  }

  fn parse_id(input: &str) -> Result<String, serde_json::Error> {
    serde_json::from_str::<IdWrapper>(input).map(|wrapper| wrapper.id)
  }

  fn parse_value(input: &str) -> Result<Option<String>, serde_json::Error> {
    serde_json::from_str::<OptionalWrapper>(input).map(|wrapper| wrapper.value)
  }

  #[test]
  fn centered_rect_is_clamped_to_area() {
    let area = Rect::new(0, 0, 20, 10);

    assert_eq!(centered_rect(area, 10, 4), Rect::new(5, 3, 10, 4));
    assert_eq!(centered_rect(area, 100, 100), Rect::new(1, 1, 18, 8));
  }

  #[test]
  fn deserialize_object_id_accepts_strings_and_numbers() {
    assert_eq!(parse_id(r#"{"id": "123"}"#).unwrap(), "123");
    assert_eq!(parse_id(r#"{"id": 456}"#).unwrap(), "456");
    assert!(parse_id(r#"{"id": null}"#).is_err());
    assert!(parse_id(r#"{"id": ""}"#).is_err());
  }

  #[test]
  fn deserialize_optional_string_supports_string_numbers_and_null() {
    assert_eq!(
      parse_value(r#"{"value": "hello"}"#).unwrap(),
      Some("hello".to_string())
    );

    assert_eq!(
      parse_value(r#"{"value": 42}"#).unwrap(),
      Some("42".to_string())
    );

    assert_eq!(parse_value(r#"{"value": null}"#).unwrap(), None);

    assert_eq!(parse_value("{}").unwrap(), None);

    assert!(
      parse_value(r#"{"value": true}"#).is_err(),
      "bools should fail deserialization"
    );
  }

  #[test]
  fn format_count_handles_singular_and_plural() {
    assert_eq!(format_count(1, "result", "results"), "1 result");
    assert_eq!(format_count(2, "result", "results"), "2 results");
    assert_eq!(format_count(0, "result", "results"), "0 results");
  }

  #[test]
  fn saturating_usize_to_u16_caps_large_values() {
    assert_eq!(saturating_usize_to_u16(12), 12);
    assert_eq!(saturating_usize_to_u16(usize::MAX), u16::MAX);
  }

  #[test]
  fn truncate_appends_ellipsis_when_exceeding_limit() {
    assert_eq!(truncate("This is a longer line", 4), "This...");
  }

  #[test]
  fn truncate_preserves_exact_length_strings() {
    assert_eq!(truncate("exact", 5), "exact");
  }

  #[test]
  fn truncate_returns_original_when_within_limit() {
    assert_eq!(truncate("short", 10), "short");
  }
}
