use serde::Serialize;
use tracing::debug;

use crate::models::SortDirection;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PER_PAGE: u32 = 100;

/// The part every search request shares: the free-text term plus paging and ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseSearchRequest {
    pub term: String,
    pub order: SortDirection,
    pub page: u32,
    pub per_page: u32,
}

impl BaseSearchRequest {
    pub fn new(term: &str) -> Self {
        Self {
            term: term.to_owned(),
            order: SortDirection::default(),
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl Default for BaseSearchRequest {
    fn default() -> Self {
        Self::new("")
    }
}

/// Query-string parameters for a search endpoint, ready for `RequestBuilder::query`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchParameters {
    pub q: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<&'static str>,
    pub order: SortDirection,
    pub page: u32,
    pub per_page: u32,
}

/// Implemented by each endpoint-specific search request.
pub trait SearchRequest {
    fn base(&self) -> &BaseSearchRequest;

    // Path of the endpoint relative to the API root, e.g. "search/repositories"
    fn endpoint(&self) -> &'static str;

    fn sort(&self) -> Option<&'static str>;

    // Qualifier tokens for the fields that were set, in the order they are sent
    fn merged_qualifiers(&self) -> Vec<String>;

    // The term followed by every qualifier, separated by spaces
    fn term_and_qualifiers(&self) -> String {
        let term = self.base().term.trim();
        let mut parts = Vec::new();
        if !term.is_empty() {
            parts.push(term.to_owned());
        }
        parts.extend(self.merged_qualifiers());
        let query = parts.join(" ");
        debug!(endpoint = self.endpoint(), query = %query, "built search query");
        query
    }

    fn parameters(&self) -> SearchParameters {
        let base = self.base();
        SearchParameters {
            q: self.term_and_qualifiers(),
            sort: self.sort(),
            order: base.order,
            page: base.page,
            per_page: base.per_page,
        }
    }
}
