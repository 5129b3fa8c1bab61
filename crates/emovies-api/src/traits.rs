//! Trait definitions for movie search services.
//!
//! The OMDb client implements [`MovieSearchProvider`], which lets the search
//! controller and the UI stay independent of the concrete service.

use std::future::Future;

/// Poster value the API sends when no artwork exists.
pub const NO_POSTER: &str = "N/A";

/// A title search against a movie database.
pub trait MovieSearchProvider: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Search titles matching `query`.
    ///
    /// `Ok(SearchOutcome::Failure)` is a logical failure reported by the
    /// service itself (e.g. "Movie not found!"). Transport problems, bad
    /// HTTP statuses and undecodable bodies are `Err`.
    fn search_movies(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<SearchOutcome, Self::Error>> + Send;
}

/// One search result.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MovieSummary {
    pub imdb_id: String,
    pub title: String,
    /// Release year; series use a range like `2010–2014`.
    pub year: String,
    /// `movie`, `series`, `episode` or `game`.
    pub media_type: String,
    /// Poster URL, or [`NO_POSTER`].
    pub poster: String,
}

impl MovieSummary {
    /// Poster URL, if the service has one for this title.
    pub fn poster_url(&self) -> Option<&str> {
        let poster = self.poster.trim();
        if poster.is_empty() || poster == NO_POSTER {
            None
        } else {
            Some(poster)
        }
    }
}

/// Service-level classification of a search response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Results in the order the service returned them.
    Success(Vec<MovieSummary>),
    /// Error text supplied by the service.
    Failure(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(poster: &str) -> MovieSummary {
        MovieSummary {
            imdb_id: "tt0107290".into(),
            title: "Jurassic Park".into(),
            year: "1993".into(),
            media_type: "movie".into(),
            poster: poster.into(),
        }
    }

    #[test]
    fn poster_url_present() {
        let m = summary("https://m.media-amazon.com/images/M/jp.jpg");
        assert_eq!(
            m.poster_url(),
            Some("https://m.media-amazon.com/images/M/jp.jpg")
        );
    }

    #[test]
    fn poster_url_sentinel_or_blank() {
        assert_eq!(summary("N/A").poster_url(), None);
        assert_eq!(summary("").poster_url(), None);
    }
}
