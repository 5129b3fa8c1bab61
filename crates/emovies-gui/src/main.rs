mod app;
mod cli;
mod poster_cache;
mod screen;
mod style;
mod subscription;
mod theme;
mod widgets;
mod window_state;

use clap::Parser;
use emovies_core::config::AppConfig;
use emovies_core::Query;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = cli::Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("EMOVIES_LOG").unwrap_or_else(|_| EnvFilter::new("emovies=info")),
        )
        .init();

    if cli.print_config_path {
        println!("{}", AppConfig::config_path().display());
        return Ok(());
    }

    let config = AppConfig::load().unwrap_or_else(|e| {
        tracing::warn!("Failed to load config, using defaults: {e}");
        AppConfig::default()
    });
    let seed = cli::seed_query(cli.query.as_deref(), &config);

    if cli.print {
        return cli::run_headless(&config, seed);
    }

    run_gui(config, seed)?;
    Ok(())
}

fn run_gui(config: AppConfig, seed: Query) -> iced::Result {
    let ws = window_state::WindowState::load();

    let mut win = iced::window::Settings {
        size: ws.size(),
        min_size: Some(iced::Size::new(400.0, 300.0)),
        ..Default::default()
    };

    if let Some(pos) = ws.position() {
        win.position = iced::window::Position::Specific(pos);
    } else {
        win.position = iced::window::Position::Centered;
    }

    iced::application(
        move || app::EMovies::new(config.clone(), seed.clone()),
        app::EMovies::update,
        app::EMovies::view,
    )
    .title(app::EMovies::title)
    .subscription(app::EMovies::subscription)
    .theme(app::EMovies::theme)
    .font(lucide_icons::LUCIDE_FONT_BYTES)
    .window(win)
    .run()
}
