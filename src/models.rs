use crate::token::token_enum;

token_enum! {
    /// Fields searched by the free-text term (`in:name,description`).
    pub enum InQualifier as "in qualifier" {
        Name => "name",
        Description => "description",
        Readme => "readme",
    }
}

token_enum! {
    /// Whether forked repositories show up in the results.
    pub enum ForkQualifier as "fork qualifier" {
        IncludeForks => "true", // forks and sources
        OnlyForks => "only",    // forks only
    }
}

token_enum! {
    pub enum RepoSearchSort as "sort field" {
        Stars => "stars",
        Forks => "forks",
        Updated => "updated",
    }
}

token_enum! {
    pub enum SortDirection as "sort direction" {
        Ascending => "asc",
        Descending => "desc",
    }
}

impl Default for SortDirection {
    fn default() -> Self {
        SortDirection::Descending
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;

    #[test]
    fn test_tokens() {
        assert_eq!(InQualifier::Readme.to_string(), "readme");
        assert_eq!(ForkQualifier::IncludeForks.to_string(), "true");
        assert_eq!(ForkQualifier::OnlyForks.to_string(), "only");
        assert_eq!(RepoSearchSort::Updated.as_str(), "updated");
        assert_eq!(SortDirection::default().as_str(), "desc");
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Description".parse::<InQualifier>().unwrap(), InQualifier::Description);
        assert_eq!("ONLY".parse::<ForkQualifier>().unwrap(), ForkQualifier::OnlyForks);
        assert_eq!("asc".parse::<SortDirection>().unwrap(), SortDirection::Ascending);
    }

    #[test]
    fn test_parse_unknown_value() {
        assert_eq!(
            "watchers".parse::<RepoSearchSort>(),
            Err(Error::UnknownValue {
                kind: "sort field",
                value: "watchers".to_owned(),
            })
        );
    }

    #[test]
    fn test_serializes_as_token() {
        assert_eq!(serde_json::to_string(&SortDirection::Ascending).unwrap(), "\"asc\"");
        assert_eq!(serde_json::to_string(&RepoSearchSort::Stars).unwrap(), "\"stars\"");
    }
}
