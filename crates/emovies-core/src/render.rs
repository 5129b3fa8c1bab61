//! Presentation model derived from a [`SearchState`].
//!
//! Pure functions only; the GUI and the `--print` CLI both render from
//! [`SearchView`].

use emovies_api::MovieSummary;

use crate::state::{SearchPhase, SearchState};

/// Everything a front-end needs to draw one frame of the search page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchView {
    pub phase: SearchPhase,
    pub query: String,
    /// Show a loading indicator. The grid keeps its previous cards meanwhile.
    pub loading: bool,
    /// Inline error notice.
    pub notice: Option<String>,
    pub cards: Vec<MovieCard>,
}

/// One grid card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieCard {
    /// Stable list key (the IMDb id).
    pub key: String,
    /// Poster to display; the placeholder image when the API has none.
    pub poster_url: String,
    pub has_poster: bool,
    pub type_label: String,
    pub title: String,
    pub year: String,
}

impl MovieCard {
    pub fn from_summary(movie: &MovieSummary, placeholder_url: &str) -> Self {
        let (poster_url, has_poster) = match movie.poster_url() {
            Some(url) => (url.to_string(), true),
            None => (placeholder_url.to_string(), false),
        };
        Self {
            key: movie.imdb_id.clone(),
            poster_url,
            has_poster,
            type_label: movie.media_type.clone(),
            title: movie.title.clone(),
            year: movie.year.clone(),
        }
    }
}

impl SearchView {
    pub fn derive(state: &SearchState, placeholder_url: &str) -> Self {
        Self {
            phase: state.phase(),
            query: state.query.to_string(),
            loading: state.is_loading,
            notice: state.error_message.clone(),
            cards: state
                .results
                .iter()
                .map(|m| MovieCard::from_summary(m, placeholder_url))
                .collect(),
        }
    }

    /// One-line summary for a status bar.
    pub fn status_line(&self) -> String {
        match self.phase {
            SearchPhase::Idle => "Ready".to_string(),
            SearchPhase::Loading => format!("Searching for \"{}\"...", self.query),
            SearchPhase::Failure => self.notice.clone().unwrap_or_default(),
            SearchPhase::Success => match self.cards.len() {
                1 => format!("1 result for \"{}\"", self.query),
                n => format!("{n} results for \"{}\"", self.query),
            },
        }
    }
}
