use std::borrow::Cow;

use crate::language::Language;
use crate::models::{ForkQualifier, InQualifier, RepoSearchSort, SortDirection};
use crate::range::{DateRange, Range};
use crate::request::{BaseSearchRequest, SearchRequest};

/// Search request for `GET /search/repositories`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchRepositoriesRequest {
    pub base: BaseSearchRequest,
    pub sort: Option<RepoSearchSort>,
    pub in_qualifiers: Vec<InQualifier>,
    pub size: Option<Range>,
    pub forks: Option<Range>,
    pub fork: Option<ForkQualifier>,
    pub stars: Option<Range>,
    pub language: Option<Language>,
    pub user: Option<String>,
    pub created: Option<DateRange>,
    pub updated: Option<DateRange>, // sent as `pushed:`
    pub topic: Option<String>,
    pub topics: Option<Range>,
    pub archived: Option<bool>,
}

impl SearchRepositoriesRequest {
    // Initialize a new search query with a search term
    pub fn new(term: &str) -> Self {
        Self {
            base: BaseSearchRequest::new(term),
            ..Default::default()
        }
    }

    pub fn sort_by(mut self, sort: RepoSearchSort) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn order(mut self, order: SortDirection) -> Self {
        self.base.order = order;
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.base.page = page;
        self
    }

    pub fn per_page(mut self, per_page: u32) -> Self {
        self.base.per_page = per_page;
        self
    }

    // Restrict which fields the term is matched against
    pub fn in_qualifiers(mut self, fields: impl IntoIterator<Item = InQualifier>) -> Self {
        self.in_qualifiers.extend(fields);
        self
    }

    // Size in kilobytes
    pub fn size(mut self, size: Range) -> Self {
        self.size = Some(size);
        self
    }

    pub fn forks(mut self, forks: Range) -> Self {
        self.forks = Some(forks);
        self
    }

    pub fn fork(mut self, fork: ForkQualifier) -> Self {
        self.fork = Some(fork);
        self
    }

    pub fn stars(mut self, stars: Range) -> Self {
        self.stars = Some(stars);
        self
    }

    // Add a min_stars filter to the search query
    pub fn min_stars(self, stars: u64) -> Self {
        self.stars(Range::greater_than_or_equals(stars))
    }

    // Add a language filter to the search query
    pub fn language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }

    pub fn user(mut self, user: &str) -> Self {
        self.user = Some(user.to_owned());
        self
    }

    pub fn created(mut self, created: DateRange) -> Self {
        self.created = Some(created);
        self
    }

    // Last push to the repository
    pub fn updated(mut self, updated: DateRange) -> Self {
        self.updated = Some(updated);
        self
    }

    // Add a topic filter to the search query
    pub fn topic(mut self, topic: &str) -> Self {
        self.topic = Some(topic.to_owned());
        self
    }

    // Number of topics attached to the repository
    pub fn topics(mut self, topics: Range) -> Self {
        self.topics = Some(topics);
        self
    }

    pub fn archived(mut self, archived: bool) -> Self {
        self.archived = Some(archived);
        self
    }

    // Convert the query to a GitHub-compatible query string
    pub fn to_query_string(&self) -> String {
        self.term_and_qualifiers()
    }
}

impl SearchRequest for SearchRepositoriesRequest {
    fn base(&self) -> &BaseSearchRequest {
        &self.base
    }

    fn endpoint(&self) -> &'static str {
        "search/repositories"
    }

    fn sort(&self) -> Option<&'static str> {
        self.sort.map(|sort| sort.as_str())
    }

    fn merged_qualifiers(&self) -> Vec<String> {
        let mut qualifiers = Vec::new();

        if !self.in_qualifiers.is_empty() {
            let mut fields: Vec<&str> = Vec::new();
            for field in &self.in_qualifiers {
                if !fields.contains(&field.as_str()) {
                    fields.push(field.as_str());
                }
            }
            qualifiers.push(format!("in:{}", fields.join(",")));
        }
        if let Some(size) = &self.size {
            qualifiers.push(format!("size:{}", size));
        }
        if let Some(forks) = &self.forks {
            qualifiers.push(format!("forks:{}", forks));
        }
        if let Some(fork) = &self.fork {
            qualifiers.push(format!("fork:{}", fork));
        }
        if let Some(stars) = &self.stars {
            qualifiers.push(format!("stars:{}", stars));
        }
        if let Some(language) = &self.language {
            qualifiers.push(format!("language:{}", quoted(language.as_str())));
        }
        if let Some(user) = non_blank(&self.user) {
            qualifiers.push(format!("user:{}", quoted(&user)));
        }
        if let Some(created) = &self.created {
            qualifiers.push(format!("created:{}", created));
        }
        if let Some(updated) = &self.updated {
            qualifiers.push(format!("pushed:{}", updated));
        }
        if let Some(topic) = non_blank(&self.topic) {
            qualifiers.push(format!("topic:{}", quoted(&topic)));
        }
        if let Some(topics) = &self.topics {
            qualifiers.push(format!("topics:{}", topics));
        }
        if let Some(archived) = self.archived {
            qualifiers.push(format!("archived:{}", archived));
        }

        qualifiers
    }
}

// Embedded `"` would leave the quoting unbalanced, so it is dropped before the blank check
fn non_blank(value: &Option<String>) -> Option<Cow<'_, str>> {
    let value = value.as_deref()?.trim();
    let value = if value.contains('"') {
        Cow::Owned(value.replace('"', "").trim().to_owned())
    } else {
        Cow::Borrowed(value)
    };
    (!value.is_empty()).then_some(value)
}

// Values with whitespace must be quoted or GitHub reads the rest as search terms
fn quoted(value: &str) -> Cow<'_, str> {
    if value.contains(char::is_whitespace) {
        Cow::Owned(format!("\"{}\"", value))
    } else {
        Cow::Borrowed(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_term_only() {
        assert_eq!(SearchRepositoriesRequest::new("rust async").to_query_string(), "rust async");
    }

    #[test]
    fn test_language_and_min_stars() {
        let query = SearchRepositoriesRequest::new("rust async")
            .language(Language::Rust)
            .min_stars(5000)
            .to_query_string();
        assert_eq!(query, "rust async stars:>=5000 language:Rust");
    }

    #[test]
    fn test_symbolic_language() {
        let query = SearchRepositoriesRequest::new("json")
            .language(Language::CPlusPlus)
            .to_query_string();
        assert_eq!(query, "json language:C++");
    }

    #[test]
    fn test_multi_word_language_is_quoted() {
        let query = SearchRepositoriesRequest::new("forms")
            .language(Language::VisualBasic)
            .to_query_string();
        assert_eq!(query, "forms language:\"Visual Basic\"");
    }

    #[test]
    fn test_in_qualifiers_are_deduplicated() {
        let query = SearchRepositoriesRequest::new("http")
            .in_qualifiers([InQualifier::Name, InQualifier::Readme, InQualifier::Name])
            .in_qualifiers([InQualifier::Readme, InQualifier::Description])
            .to_query_string();
        assert_eq!(query, "http in:name,readme,description");
    }

    #[test]
    fn test_fixed_qualifier_order() {
        // Setters are called out of order on purpose
        let request = SearchRepositoriesRequest::new("cli")
            .archived(false)
            .topics(Range::greater_than(2))
            .topic("terminal")
            .updated(DateRange::greater_than(date(2024, 1, 1)))
            .created(DateRange::between(date(2015, 1, 1), date(2016, 12, 31)))
            .user("octocat")
            .language(Language::Go)
            .stars(Range::between(10, 100))
            .fork(ForkQualifier::IncludeForks)
            .forks(Range::less_than(5))
            .size(Range::less_than_or_equals(1024))
            .in_qualifiers([InQualifier::Description]);

        assert_eq!(
            request.merged_qualifiers(),
            vec![
                "in:description",
                "size:<=1024",
                "forks:<5",
                "fork:true",
                "stars:10..100",
                "language:Go",
                "user:octocat",
                "created:2015-01-01..2016-12-31",
                "pushed:>2024-01-01",
                "topic:terminal",
                "topics:>2",
                "archived:false",
            ]
        );
    }

    #[test]
    fn test_blank_user_and_topic_are_omitted() {
        let request = SearchRepositoriesRequest::new("x").user("  ").topic("");
        assert!(request.merged_qualifiers().is_empty());

        let request = SearchRepositoriesRequest::new("x").topic("\"\"");
        assert!(request.merged_qualifiers().is_empty());
    }

    #[test]
    fn test_embedded_quotes_are_dropped() {
        let request = SearchRepositoriesRequest::new("x")
            .topic("game \"engine\"")
            .user("oct\"ocat");
        assert_eq!(
            request.merged_qualifiers(),
            vec!["user:octocat", "topic:\"game engine\""]
        );
    }

    #[test]
    fn test_parameters() {
        let params = SearchRepositoriesRequest::new("serde")
            .sort_by(RepoSearchSort::Stars)
            .order(SortDirection::Ascending)
            .page(3)
            .per_page(25)
            .fork(ForkQualifier::OnlyForks)
            .parameters();

        assert_eq!(params.q, "serde fork:only");
        assert_eq!(params.sort, Some("stars"));
        assert_eq!(params.order, SortDirection::Ascending);
        assert_eq!(params.page, 3);
        assert_eq!(params.per_page, 25);
    }
}
