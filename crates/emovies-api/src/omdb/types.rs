use serde::Deserialize;

use crate::traits::{MovieSummary, SearchOutcome, NO_POSTER};

/// Error text used when a failed response carries none.
const UNKNOWN_ERROR: &str = "Unknown error";

// ── Search responses ────────────────────────────────────────────

/// Body of `GET /?s=...`.
///
/// OMDb reports logical success in the `Response` field (`"True"` or
/// `"False"`) rather than through the HTTP status.
#[derive(Debug, Deserialize)]
pub struct OmdbSearchResponse {
    #[serde(rename = "Response")]
    pub response: String,
    #[serde(rename = "Search", default)]
    pub search: Vec<OmdbSearchItem>,
    #[serde(rename = "totalResults")]
    pub total_results: Option<String>,
    #[serde(rename = "Error")]
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct OmdbSearchItem {
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    #[serde(rename = "Title", default)]
    pub title: String,
    #[serde(rename = "Year", default)]
    pub year: String,
    #[serde(rename = "Type", default)]
    pub media_type: String,
    #[serde(rename = "Poster")]
    pub poster: Option<String>,
}

// ── Conversions to shared trait types ───────────────────────────

impl OmdbSearchItem {
    pub fn into_summary(self) -> MovieSummary {
        MovieSummary {
            imdb_id: self.imdb_id,
            title: self.title,
            year: self.year,
            media_type: self.media_type,
            poster: self.poster.unwrap_or_else(|| NO_POSTER.to_string()),
        }
    }
}

impl OmdbSearchResponse {
    pub fn is_success(&self) -> bool {
        self.response == "True"
    }

    pub fn into_outcome(self) -> SearchOutcome {
        if self.is_success() {
            SearchOutcome::Success(
                self.search
                    .into_iter()
                    .map(OmdbSearchItem::into_summary)
                    .collect(),
            )
        } else {
            SearchOutcome::Failure(self.error.unwrap_or_else(|| UNKNOWN_ERROR.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_search_response() {
        let json = r#"{
            "Search": [
                {
                    "Title": "Jurassic Park",
                    "Year": "1993",
                    "imdbID": "tt0107290",
                    "Type": "movie",
                    "Poster": "https://m.media-amazon.com/images/M/jp.jpg"
                },
                {
                    "Title": "Jurassic Park: The Game",
                    "Year": "2011",
                    "imdbID": "tt1986193",
                    "Type": "game",
                    "Poster": "N/A"
                },
                {
                    "Title": "Jurassic World: Camp Cretaceous",
                    "Year": "2020–2022",
                    "imdbID": "tt10436228",
                    "Type": "series",
                    "Poster": "https://m.media-amazon.com/images/M/cc.jpg"
                }
            ],
            "totalResults": "97",
            "Response": "True"
        }"#;

        let resp: OmdbSearchResponse = serde_json::from_str(json).unwrap();
        assert!(resp.is_success());
        assert_eq!(resp.total_results.as_deref(), Some("97"));

        let SearchOutcome::Success(movies) = resp.into_outcome() else {
            panic!("expected success");
        };
        let ids: Vec<&str> = movies.iter().map(|m| m.imdb_id.as_str()).collect();
        assert_eq!(ids, ["tt0107290", "tt1986193", "tt10436228"]);
        assert_eq!(movies[1].poster, "N/A");
        assert_eq!(movies[1].poster_url(), None);
        assert_eq!(movies[2].year, "2020–2022");
        assert_eq!(movies[2].media_type, "series");
    }

    #[test]
    fn test_deserialize_failure_response() {
        let json = r#"{"Response":"False","Error":"Movie not found!"}"#;
        let resp: OmdbSearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            resp.into_outcome(),
            SearchOutcome::Failure("Movie not found!".into())
        );
    }

    #[test]
    fn test_failure_without_error_text() {
        let json = r#"{"Response":"False"}"#;
        let resp: OmdbSearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            resp.into_outcome(),
            SearchOutcome::Failure("Unknown error".into())
        );
    }

    #[test]
    fn test_success_without_list() {
        let json = r#"{"Response":"True"}"#;
        let resp: OmdbSearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.into_outcome(), SearchOutcome::Success(Vec::new()));
    }

    #[test]
    fn test_deserialize_minimal_item() {
        let json = r#"{ "imdbID": "tt0000001" }"#;
        let item: OmdbSearchItem = serde_json::from_str(json).unwrap();
        let movie = item.into_summary();
        assert_eq!(movie.imdb_id, "tt0000001");
        assert!(movie.title.is_empty());
        assert_eq!(movie.poster, "N/A");
    }
}
