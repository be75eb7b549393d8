use chrono::NaiveDate;
use github_search_query::api_client::{GITHUB_API_URL, search_url};
use github_search_query::{
    DateRange, ForkQualifier, InQualifier, Language, Range, RepoSearchSort,
    SearchRepositoriesRequest, SearchRequest, SortDirection,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_full_query() {
    let request = SearchRepositoriesRequest::new("game engine")
        .in_qualifiers([InQualifier::Name, InQualifier::Description])
        .size(Range::less_than(50_000))
        .forks(Range::greater_than_or_equals(10))
        .fork(ForkQualifier::IncludeForks)
        .stars(Range::between(100, 5000))
        .language(Language::CSharp)
        .user("unity")
        .created(DateRange::greater_than(date(2018, 6, 1)))
        .updated(DateRange::less_than_or_equals(date(2023, 12, 31)));

    assert_eq!(
        request.to_query_string(),
        "game engine in:name,description size:<50000 forks:>=10 fork:true \
         stars:100..5000 language:C# user:unity created:>2018-06-01 pushed:<=2023-12-31"
    );
}

#[test]
fn test_unset_qualifiers_are_omitted() {
    let request = SearchRepositoriesRequest::new("linter").language(Language::Python);
    assert_eq!(request.merged_qualifiers(), vec!["language:Python"]);
}

#[test]
fn test_parsed_values_match_constructed_ones() {
    let parsed = SearchRepositoriesRequest::new("orm")
        .stars(">=1000".parse().unwrap())
        .created("2019-01-01..2019-12-31".parse().unwrap())
        .language("typescript".parse().unwrap());
    let built = SearchRepositoriesRequest::new("orm")
        .min_stars(1000)
        .created(DateRange::between(date(2019, 1, 1), date(2019, 12, 31)))
        .language(Language::TypeScript);

    assert_eq!(parsed, built);
}

#[test]
fn test_url_round_trip() {
    let request = SearchRepositoriesRequest::new("tokio")
        .stars(Range::greater_than(10))
        .sort_by(RepoSearchSort::Updated)
        .order(SortDirection::Ascending)
        .page(2)
        .per_page(30);

    let url = search_url(GITHUB_API_URL, &request).unwrap();
    let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();

    assert_eq!(url.host_str(), Some("api.github.com"));
    assert_eq!(
        pairs,
        vec![
            ("q".to_owned(), "tokio stars:>10".to_owned()),
            ("sort".to_owned(), "updated".to_owned()),
            ("order".to_owned(), "asc".to_owned()),
            ("page".to_owned(), "2".to_owned()),
            ("per_page".to_owned(), "30".to_owned()),
        ]
    );
}
