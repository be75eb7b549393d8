use std::env;

use dotenv::dotenv;

use crate::api_client::GITHUB_API_URL;
use crate::errors::{Error, Result};
use crate::request::DEFAULT_PER_PAGE;

pub const API_URL_VAR: &str = "GITHUB_API_URL";
pub const PER_PAGE_VAR: &str = "GITHUB_SEARCH_PER_PAGE";

// GitHub refuses larger pages
const MAX_PER_PAGE: u32 = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_url: String,
    pub per_page: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: GITHUB_API_URL.to_owned(),
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl Config {
    // Read the process environment, after loading `.env` if there is one
    pub fn from_env() -> Result<Self> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Config::default();

        if let Some(api_url) = lookup(API_URL_VAR).filter(|v| !v.trim().is_empty()) {
            config.api_url = api_url.trim().to_owned();
        }

        if let Some(raw) = lookup(PER_PAGE_VAR) {
            config.per_page = raw
                .trim()
                .parse()
                .ok()
                .filter(|n| (1..=MAX_PER_PAGE).contains(n))
                .ok_or(Error::Config {
                    key: PER_PAGE_VAR,
                    value: raw.clone(),
                })?;
        }

        Ok(config)
    }
}
