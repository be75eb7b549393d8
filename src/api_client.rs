use reqwest::{Client, RequestBuilder, Url};
use tracing::debug;

use crate::errors::{Error, Result};
use crate::request::SearchRequest;

pub const GITHUB_API_URL: &str = "https://api.github.com";
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

// Join the endpoint onto the API root, keeping any path prefix (GitHub Enterprise uses /api/v3)
fn endpoint_url(api_url: &str, request: &impl SearchRequest) -> Result<Url> {
    let invalid = |reason: String| Error::InvalidUrl {
        url: api_url.to_owned(),
        reason,
    };
    let root = Url::parse(&format!("{}/", api_url.trim_end_matches('/')))
        .map_err(|e| invalid(e.to_string()))?;
    if root.cannot_be_a_base() {
        return Err(invalid("not a base url".to_owned()));
    }
    root.join(request.endpoint()).map_err(|e| invalid(e.to_string()))
}

// Full request url, with `q`, `sort`, `order`, `page` and `per_page` url-encoded
pub fn search_url(api_url: &str, request: &impl SearchRequest) -> Result<Url> {
    let mut url = endpoint_url(api_url, request)?;
    let encoded =
        serde_urlencoded::to_string(&request.parameters()).map_err(|e| Error::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;
    url.set_query(Some(&encoded));
    debug!(url = %url, "built search url");
    Ok(url)
}

// Prepare (but do not send) the search request
pub fn search_request(
    client: &Client,
    api_url: &str,
    request: &impl SearchRequest,
) -> Result<RequestBuilder> {
    let url = endpoint_url(api_url, request)?;
    debug!(url = %url, "preparing search request");

    Ok(client
        .get(url)
        .query(&request.parameters()) // q, sort, order, page, per_page
        .header(reqwest::header::ACCEPT, "application/vnd.github+json")
        .header(reqwest::header::USER_AGENT, USER_AGENT))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::Language;
    use crate::models::RepoSearchSort;
    use crate::search_query::SearchRepositoriesRequest;
    use std::collections::HashMap;

    fn query_map(url: &Url) -> HashMap<String, String> {
        url.query_pairs().into_owned().collect()
    }

    fn request() -> SearchRepositoriesRequest {
        SearchRepositoriesRequest::new("web framework")
            .language(Language::CPlusPlus)
            .min_stars(100)
            .sort_by(RepoSearchSort::Stars)
    }

    #[test]
    fn test_search_url() {
        let url = search_url(GITHUB_API_URL, &request()).unwrap();
        assert_eq!(url.path(), "/search/repositories");

        let params = query_map(&url);
        assert_eq!(params["q"], "web framework stars:>=100 language:C++");
        assert_eq!(params["sort"], "stars");
        assert_eq!(params["order"], "desc");
        assert_eq!(params["page"], "1");
        assert_eq!(params["per_page"], "100");
    }

    #[test]
    fn test_search_url_keeps_enterprise_prefix() {
        let url = search_url("https://github.example.com/api/v3/", &request()).unwrap();
        assert_eq!(url.path(), "/api/v3/search/repositories");
    }

    #[test]
    fn test_search_url_without_sort() {
        let url = search_url(GITHUB_API_URL, &SearchRepositoriesRequest::new("x")).unwrap();
        assert!(!query_map(&url).contains_key("sort"));
    }

    #[test]
    fn test_invalid_api_url() {
        let err = search_url("not a url", &request()).unwrap_err();
        assert!(matches!(err, Error::InvalidUrl { .. }));
    }

    #[test]
    fn test_search_request_is_not_sent() {
        let built = search_request(&Client::new(), GITHUB_API_URL, &request())
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(built.method(), &reqwest::Method::GET);
        assert_eq!(query_map(built.url())["q"], "web framework stars:>=100 language:C++");
        assert_eq!(built.headers()[reqwest::header::USER_AGENT], USER_AGENT);
        assert_eq!(
            built.headers()[reqwest::header::ACCEPT],
            "application/vnd.github+json"
        );
    }
}
