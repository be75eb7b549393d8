//! Builds query strings and request parameters for GitHub's repository search
//! endpoint (`GET /search/repositories`).
//!
//! ```
//! use github_search_query::{Language, Range, SearchRepositoriesRequest};
//!
//! let query = SearchRepositoriesRequest::new("rust async")
//!     .language(Language::Rust)
//!     .stars(Range::greater_than(500))
//!     .to_query_string();
//!
//! assert_eq!(query, "rust async stars:>500 language:Rust");
//! ```

mod token;

pub mod api_client;
pub mod config;
pub mod errors;
pub mod language;
pub mod models;
pub mod range;
pub mod request;
pub mod search_query;

pub use errors::{Error, Result};
pub use language::Language;
pub use models::{ForkQualifier, InQualifier, RepoSearchSort, SortDirection};
pub use range::{DateRange, Range, SearchQualifierOperator};
pub use request::{BaseSearchRequest, SearchParameters, SearchRequest};
pub use search_query::SearchRepositoriesRequest;
