//! Command-line flags and the headless `--print` mode.

use clap::Parser;
use emovies_core::config::AppConfig;
use emovies_core::{MovieCard, Query, SearchController, SearchView};

use crate::app;

#[derive(Debug, Parser)]
#[command(name = "emovies")]
#[command(about = "Search the OMDb movie database")]
pub struct Cli {
    /// Title to search at startup instead of the configured default.
    #[arg(short, long)]
    pub query: Option<String>,

    /// Run one search, print the results and exit without opening a window.
    #[arg(short, long)]
    pub print: bool,

    /// Print the path of the user config file and exit.
    #[arg(long)]
    pub print_config_path: bool,
}

/// Startup query: `--query` if given, else the configured default, else the
/// built-in seed title. Blank values fall through to the next source.
pub fn seed_query(flag: Option<&str>, config: &AppConfig) -> Query {
    flag.and_then(|q| Query::parse(q).ok())
        .or_else(|| Query::parse(&config.search.default_query).ok())
        .unwrap_or_default()
}

pub fn run_headless(config: &AppConfig, query: Query) -> Result<(), Box<dyn std::error::Error>> {
    let client = app::omdb_client(&config.api)?;
    let runtime = tokio::runtime::Runtime::new()?;

    let mut controller = SearchController::new(query.clone());
    runtime.block_on(controller.run(&client, query));

    let view = SearchView::derive(controller.state(), &config.search.placeholder_poster);
    if let Some(notice) = view.notice {
        return Err(notice.into());
    }
    for card in &view.cards {
        println!("{}", format_card(card));
    }
    eprintln!("{}", view.status_line());
    Ok(())
}

fn format_card(card: &MovieCard) -> String {
    format!(
        "{}\t[{}]\t{} ({})\t{}",
        card.key, card.type_label, card.title, card.year, card.poster_url
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_overrides_config() {
        let config = AppConfig::default();
        assert_eq!(seed_query(Some("Alien"), &config).as_str(), "Alien");
    }

    #[test]
    fn blank_flag_falls_back_to_config() {
        let mut config = AppConfig::default();
        config.search.default_query = "The Thing".into();
        assert_eq!(seed_query(Some("  "), &config).as_str(), "The Thing");
    }

    #[test]
    fn blank_config_falls_back_to_builtin() {
        let mut config = AppConfig::default();
        config.search.default_query = String::new();
        assert_eq!(seed_query(None, &config).as_str(), "Jurassic Park");
    }

    #[test]
    fn parses_flags() {
        let cli = Cli::parse_from(["emovies", "--print", "-q", "Heat"]);
        assert!(cli.print);
        assert_eq!(cli.query.as_deref(), Some("Heat"));
        assert!(!cli.print_config_path);
    }

    #[test]
    fn card_line_format() {
        let card = MovieCard {
            key: "tt0113277".into(),
            poster_url: "N/A-placeholder".into(),
            has_poster: false,
            type_label: "movie".into(),
            title: "Heat".into(),
            year: "1995".into(),
        };
        assert_eq!(
            format_card(&card),
            "tt0113277\t[movie]\tHeat (1995)\tN/A-placeholder"
        );
    }
}
