use super::*;

#[derive(Clone)]
pub(crate) struct Client {
  client: reqwest::Client,
  hits_per_page: usize,
}

impl Client {
  const SEARCH_URL: &str = "https://hn.algolia.com/api/v1/search";

  pub(crate) fn new(hits_per_page: usize) -> Self {
    Self {
      client: reqwest::Client::new(),
      hits_per_page,
    }
  }

  pub(crate) async fn search(
    &self,
    query: &str,
    page: usize,
  ) -> Result<SearchResponse> {
    let url = self.search_url(query, page)?;

    log::debug!("GET {url}");

    self
      .client
      .get(url)
      .send()
      .await
      .context("search request failed")?
      .error_for_status()?
      .json::<SearchResponse>()
      .await
      .context("could not parse search response")
  }

  fn search_url(&self, query: &str, page: usize) -> Result<Url> {
    Ok(Url::parse_with_params(
      Self::SEARCH_URL,
      &[
        ("query", query.to_string()),
        ("page", page.to_string()),
        ("hitsPerPage", self.hits_per_page.to_string()),
      ],
    )?)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn search_url_encodes_parameters() {
    let client = Client::new(100);

    assert_eq!(
      client.search_url("rust lang", 2).unwrap().as_str(),
      "https://hn.algolia.com/api/v1/search?query=rust+lang&page=2&hitsPerPage=100"
    );

    assert_eq!(
      client.search_url("c++ & go", 0).unwrap().as_str(),
      "https://hn.algolia.com/api/v1/search?query=c%2B%2B+%26+go&page=0&hitsPerPage=100"
    );
  }
}
