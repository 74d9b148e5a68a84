use super::*;

#[derive(Debug, Parser)]
#[command(
  name = "hn-search",
  version,
  about = "Search Hacker News from the terminal"
)]
pub(crate) struct Arguments {
  /// Results fetched per page
  #[arg(
    long,
    env = "HN_SEARCH_HITS_PER_PAGE",
    default_value_t = 100,
    value_parser = clap::value_parser!(u16).range(1..=1000)
  )]
  pub(crate) hits_per_page: u16,

  /// Append logs to this file, filtered by RUST_LOG
  #[arg(long, env = "HN_SEARCH_LOG_FILE")]
  pub(crate) log_file: Option<PathBuf>,

  /// Search term submitted at startup
  #[arg(short, long, env = "HN_SEARCH_QUERY", default_value = "react")]
  pub(crate) query: String,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn defaults() {
    // SAFETY: No test in this crate sets these variables, so clearing them
    // only keeps the caller's shell environment out of the defaults.
    unsafe {
      std::env::remove_var("HN_SEARCH_HITS_PER_PAGE");
      std::env::remove_var("HN_SEARCH_LOG_FILE");
      std::env::remove_var("HN_SEARCH_QUERY");
    }

    let arguments = Arguments::try_parse_from(["hn-search"]).unwrap();

    assert_eq!(arguments.hits_per_page, 100);
    assert_eq!(arguments.log_file, None);
    assert_eq!(arguments.query, "react");
  }

  #[test]
  fn explicit_values() {
    let arguments = Arguments::try_parse_from([
      "hn-search",
      "-q",
      "rust",
      "--hits-per-page",
      "20",
      "--log-file",
      "hn.log",
    ])
    .unwrap();

    assert_eq!(arguments.hits_per_page, 20);
    assert_eq!(arguments.log_file, Some(PathBuf::from("hn.log")));
    assert_eq!(arguments.query, "rust");
  }

  #[test]
  fn hits_per_page_is_bounded() {
    assert!(
      Arguments::try_parse_from(["hn-search", "--hits-per-page", "0"]).is_err()
    );

    assert!(
      Arguments::try_parse_from(["hn-search", "--hits-per-page", "1001"])
        .is_err()
    );
  }
}
