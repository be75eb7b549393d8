use anyhow::{Context, Result};
use clap::Parser;

use github_search_query::api_client::search_url;
use github_search_query::config::Config;
use github_search_query::{
    DateRange, ForkQualifier, InQualifier, Language, Range, RepoSearchSort,
    SearchRepositoriesRequest, SearchRequest, SortDirection,
};

// GitHub refuses larger pages
const MAX_PER_PAGE: i64 = 100;

/// Build a GitHub repository search query without sending it.
///
/// Ranges take the forms N, >N, >=N, <N, <=N and MIN..MAX.
/// Dates are written yyyy-MM-dd and use the same forms.
#[derive(Parser, Debug)]
#[command(name = "github_search_query", version)]
pub struct Cli {
    /// Free-text search term, e.g. "rust async"
    #[arg(default_value = "")]
    pub term: String,

    /// Fields the term is matched against (name, description, readme)
    #[arg(long = "in", value_delimiter = ',')]
    pub in_fields: Vec<InQualifier>,

    /// Repository size in kilobytes
    #[arg(long)]
    pub size: Option<Range>,

    #[arg(long)]
    pub forks: Option<Range>,

    /// Include forks ("true") or only search forks ("only")
    #[arg(long)]
    pub fork: Option<ForkQualifier>,

    #[arg(long)]
    pub stars: Option<Range>,

    #[arg(long)]
    pub language: Option<Language>,

    #[arg(long)]
    pub user: Option<String>,

    #[arg(long)]
    pub created: Option<DateRange>,

    /// Date of the last push
    #[arg(long)]
    pub updated: Option<DateRange>,

    #[arg(long)]
    pub topic: Option<String>,

    /// Number of topics on the repository
    #[arg(long)]
    pub topics: Option<Range>,

    #[arg(long)]
    pub archived: Option<bool>,

    /// Sort field (stars, forks, updated)
    #[arg(long)]
    pub sort: Option<RepoSearchSort>,

    /// Sort direction (asc, desc)
    #[arg(long)]
    pub order: Option<SortDirection>,

    #[arg(long)]
    pub page: Option<u32>,

    /// Results per page (1-100), overrides GITHUB_SEARCH_PER_PAGE
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=MAX_PER_PAGE))]
    pub per_page: Option<u32>,

    /// Print the full request url instead of the query string
    #[arg(long, conflicts_with = "json")]
    pub url: bool,

    /// Print every request parameter as JSON
    #[arg(long)]
    pub json: bool,

    /// Print every known language and exit
    #[arg(long)]
    pub list_languages: bool,
}

impl Cli {
    pub fn to_request(&self, default_per_page: u32) -> SearchRepositoriesRequest {
        let mut request = SearchRepositoriesRequest::new(&self.term)
            .in_qualifiers(self.in_fields.iter().copied())
            .per_page(self.per_page.unwrap_or(default_per_page));

        request.size = self.size;
        request.forks = self.forks;
        request.fork = self.fork;
        request.stars = self.stars;
        request.language = self.language;
        request.user = self.user.clone();
        request.created = self.created;
        request.updated = self.updated;
        request.topic = self.topic.clone();
        request.topics = self.topics;
        request.archived = self.archived;
        request.sort = self.sort;

        if let Some(order) = self.order {
            request = request.order(order);
        }
        if let Some(page) = self.page {
            request = request.page(page);
        }
        request
    }

    // The text to print: the url, the parameters as JSON, or the bare query string
    pub fn render(&self, config: &Config) -> Result<String> {
        let request = self.to_request(config.per_page);

        if self.url {
            let url = search_url(&config.api_url, &request)
                .with_context(|| format!("Failed to build a url from {}", config.api_url))?;
            Ok(url.to_string())
        } else if self.json {
            serde_json::to_string_pretty(&request.parameters())
                .context("Failed to serialize search parameters")
        } else {
            Ok(request.to_query_string())
        }
    }
}
