use iced::widget::{column, container, text};
use iced::window;
use iced::{Element, Length, Subscription, Task, Theme};

use emovies_api::{MovieSearchProvider, OmdbClient, OmdbError};
use emovies_core::config::{ApiConfig, AppConfig, ThemeMode};
use emovies_core::{MovieCard, Query, SearchTicket};

use crate::poster_cache::{self, PosterCache, PosterState};
use crate::screen::{search, Action};
use crate::style;
use crate::subscription;
use crate::theme::{self, EMoviesTheme};
use crate::window_state::WindowState;

/// Build the OMDb client described by the `[api]` config section.
pub(crate) fn omdb_client(api: &ApiConfig) -> Result<OmdbClient, OmdbError> {
    let client = OmdbClient::new(api.api_key.clone()).with_base_url(&api.base_url)?;
    match api.timeout() {
        Some(timeout) => client.with_timeout(timeout),
        None => Ok(client),
    }
}

/// Application state: owns the client and shared caches, delegates the
/// page itself to the search screen.
pub struct EMovies {
    config: AppConfig,
    client: OmdbClient,
    // Theme
    current_theme: EMoviesTheme,
    active_mode: ThemeMode,
    search: search::Search,
    posters: PosterCache,
    status_message: String,
    window_state: WindowState,
}

#[derive(Debug, Clone)]
pub enum Message {
    Search(search::Message),
    PosterLoaded {
        key: String,
        result: Result<std::path::PathBuf, String>,
    },
    AppearanceTick,
    WindowEvent(window::Event),
}

impl EMovies {
    pub fn new(config: AppConfig, seed: Query) -> (Self, Task<Message>) {
        let client = omdb_client(&config.api).unwrap_or_else(|e| {
            tracing::warn!("Invalid [api] settings, using the public endpoint: {e}");
            OmdbClient::new(config.api.api_key.clone())
        });
        let active_mode = theme::resolve_mode(config.appearance.mode);
        let search = search::Search::new(seed.clone(), config.search.placeholder_poster.clone());

        let mut app = Self {
            config,
            client,
            current_theme: EMoviesTheme::default_theme(),
            active_mode,
            search,
            posters: PosterCache::default(),
            status_message: "Ready".into(),
            window_state: WindowState::load(),
        };

        let action = app.search.start(seed);
        app.status_message = app.search.status_line();
        let task = app.handle_action(action);
        (app, task)
    }

    pub fn title(&self) -> String {
        "EMovies".into()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Search(msg) => {
                let action = self.search.update(msg);
                self.status_message = self.search.status_line();
                self.handle_action(action)
            }
            Message::PosterLoaded { key, result } => {
                let state = match result {
                    Ok(path) => PosterState::Loaded(path),
                    Err(e) => {
                        tracing::debug!(key = %key, "poster download failed: {e}");
                        PosterState::Failed
                    }
                };
                self.posters.states.insert(key, state);
                Task::none()
            }
            Message::AppearanceTick => {
                self.sync_theme();
                Task::none()
            }
            Message::WindowEvent(event) => {
                match event {
                    window::Event::Resized(size) => {
                        self.window_state.width = size.width;
                        self.window_state.height = size.height;
                        self.window_state.save();
                    }
                    window::Event::Moved(pos) => {
                        self.window_state.x = pos.x;
                        self.window_state.y = pos.y;
                        self.window_state.save();
                    }
                    _ => {}
                }
                Task::none()
            }
        }
    }

    fn handle_action(&mut self, action: Action) -> Task<Message> {
        match action {
            Action::None => Task::none(),
            Action::Fetch { ticket, query } => self.spawn_search(ticket, query),
            Action::LoadPosters => {
                let cards: Vec<MovieCard> = self.search.cards().to_vec();
                let tasks: Vec<_> = cards.iter().map(|card| self.request_poster(card)).collect();
                Task::batch(tasks)
            }
        }
    }

    fn spawn_search(&self, ticket: SearchTicket, query: String) -> Task<Message> {
        let client = self.client.clone();
        Task::perform(
            async move {
                client
                    .search_movies(&query)
                    .await
                    .map_err(|e| e.to_string())
            },
            move |result| Message::Search(search::Message::ResultsLoaded(ticket, result)),
        )
    }

    /// Request a poster download for a card if not already requested.
    fn request_poster(&mut self, card: &MovieCard) -> Task<Message> {
        let key = poster_cache::cache_key(card).to_string();
        if self.posters.states.contains_key(&key) {
            return Task::none();
        }
        // Check disk cache first.
        let path = poster_cache::poster_path(&poster_cache::posters_dir(), &key);
        if path.exists() {
            self.posters.states.insert(key, PosterState::Loaded(path));
            return Task::none();
        }
        self.posters.states.insert(key.clone(), PosterState::Loading);
        let url = card.poster_url.clone();
        Task::perform(
            poster_cache::fetch_poster(key.clone(), url),
            move |result| Message::PosterLoaded {
                key: key.clone(),
                result,
            },
        )
    }

    pub fn view(&self) -> Element<'_, Message> {
        let cs = self.current_theme.colors(self.active_mode);

        let page = self.search.view(cs, &self.posters).map(Message::Search);

        let status_bar = container(
            text(&self.status_message)
                .size(style::TEXT_XS)
                .line_height(style::LINE_HEIGHT_LOOSE),
        )
        .style(theme::status_bar(cs))
        .width(Length::Fill)
        .height(Length::Fixed(style::STATUS_BAR_HEIGHT))
        .padding([4.0, style::SPACE_MD]);

        column![container(page).height(Length::Fill), status_bar].into()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        subscription::subscriptions(self.config.appearance.mode)
    }

    pub fn theme(&self) -> Theme {
        self.current_theme.iced_theme(self.active_mode)
    }

    /// Re-resolve the active mode; only `System` can change between calls.
    fn sync_theme(&mut self) {
        let mode = theme::resolve_mode(self.config.appearance.mode);
        if mode != self.active_mode {
            tracing::debug!(?mode, "appearance changed");
            self.active_mode = mode;
        }
    }
}
