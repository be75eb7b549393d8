mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use github_search_query::config::Config;
use github_search_query::Language;

use crate::cli::Cli;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr) // keep stdout for the query itself
        .init();

    let cli = Cli::parse();

    if cli.list_languages {
        for language in Language::ALL {
            println!("{}", language);
        }
        return Ok(());
    }

    let config = Config::from_env().context("Failed to load configuration")?;
    info!(term = %cli.term, "building repository search");
    println!("{}", cli.render(&config)?);

    Ok(())
}
