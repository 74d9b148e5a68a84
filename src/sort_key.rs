use super::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum SortKey {
  Author,
  Comments,
  #[default]
  None,
  Points,
  Title,
}

impl SortKey {
  pub(crate) const COLUMNS: [SortKey; 4] =
    [SortKey::Title, SortKey::Author, SortKey::Comments, SortKey::Points];

  pub(crate) fn label(self) -> &'static str {
    match self {
      Self::Author => "Author",
      Self::Comments => "Comments",
      Self::None => "None",
      Self::Points => "Points",
      Self::Title => "Title",
    }
  }

  /// Titles and authors sort ascending with hits missing the field last.
  /// Counts reverse that order, so ties and missing values flip as well.
  pub(crate) fn sort<'a>(self, hits: &'a [Hit]) -> Vec<&'a Hit> {
    let mut sorted = hits.iter().collect::<Vec<_>>();

    match self {
      Self::None => {}
      Self::Author => sorted.sort_by(|a, b| {
        present_first(a.author.as_deref(), b.author.as_deref())
      }),
      Self::Title => sorted.sort_by(|a, b| {
        present_first(a.title.as_deref(), b.title.as_deref())
      }),
      Self::Comments => {
        sorted.sort_by(|a, b| present_first(a.num_comments, b.num_comments));
        sorted.reverse();
      }
      Self::Points => {
        sorted.sort_by(|a, b| present_first(a.points, b.points));
        sorted.reverse();
      }
    }

    sorted
  }
}

fn present_first<T: Ord>(a: Option<T>, b: Option<T>) -> Ordering {
  match (a, b) {
    (Some(a), Some(b)) => a.cmp(&b),
    (Some(_), None) => Ordering::Less,
    (None, Some(_)) => Ordering::Greater,
    (None, None) => Ordering::Equal,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn hit(
    id: &str,
    title: Option<&str>,
    author: &str,
    comments: u64,
    points: Option<u64>,
  ) -> Hit {
    Hit {
      author: Some(author.to_string()),
      num_comments: Some(comments),
      object_id: id.to_string(),
      points,
      title: title.map(str::to_string),
      url: None,
    }
  }

  fn hits() -> Vec<Hit> {
    vec![
      hit("1", Some("Beta"), "carol", 5, Some(10)),
      hit("2", Some("Alpha"), "alice", 20, None),
      hit("3", None, "bob", 1, Some(30)),
      hit("4", Some("Gamma"), "alice", 20, Some(10)),
    ]
  }

  fn ids(sorted: &[&Hit]) -> Vec<String> {
    sorted.iter().map(|hit| hit.object_id.clone()).collect()
  }

  #[test]
  fn author_sort_is_stable() {
    let hits = hits();

    assert_eq!(ids(&SortKey::Author.sort(&hits)), ["2", "4", "3", "1"]);
  }

  #[test]
  fn comments_sort_descending() {
    let hits = hits();

    assert_eq!(ids(&SortKey::Comments.sort(&hits)), ["4", "2", "1", "3"]);
  }

  #[test]
  fn none_keeps_fetch_order() {
    let hits = hits();

    assert_eq!(ids(&SortKey::None.sort(&hits)), ["1", "2", "3", "4"]);
  }

  #[test]
  fn points_sort_descending_with_missing_first() {
    let hits = hits();

    assert_eq!(ids(&SortKey::Points.sort(&hits)), ["2", "3", "4", "1"]);
  }

  #[test]
  fn sorting_empty_list_is_empty() {
    assert!(SortKey::Title.sort(&[]).is_empty());
  }

  #[test]
  fn title_sort_ascending_with_missing_last() {
    let hits = hits();

    assert_eq!(ids(&SortKey::Title.sort(&hits)), ["2", "1", "4", "3"]);
  }
}
