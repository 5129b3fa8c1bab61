use std::collections::HashMap;
use std::path::{Path, PathBuf};

use emovies_core::config::AppConfig;
use emovies_core::MovieCard;

/// Cache key shared by every card that shows the placeholder image.
pub const PLACEHOLDER_KEY: &str = "placeholder";

/// State of a poster image for a given cache key.
#[derive(Debug, Clone)]
pub enum PosterState {
    Loading,
    Loaded(PathBuf),
    Failed,
}

/// In-memory map from cache key to poster state.
#[derive(Debug, Default)]
pub struct PosterCache {
    pub states: HashMap<String, PosterState>,
}

impl PosterCache {
    pub fn get(&self, key: &str) -> Option<&PosterState> {
        self.states.get(key)
    }
}

/// Cache key for a card's poster.
pub fn cache_key(card: &MovieCard) -> &str {
    if card.has_poster {
        &card.key
    } else {
        PLACEHOLDER_KEY
    }
}

/// Directory for cached poster images.
pub fn posters_dir() -> PathBuf {
    AppConfig::data_dir().join("posters")
}

/// Expected file path for a poster under `dir`.
pub fn poster_path(dir: &Path, key: &str) -> PathBuf {
    let name: String = key
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '_' })
        .collect();
    dir.join(format!("{name}.jpg"))
}

/// Download a poster and save it to disk. Returns the saved path.
pub async fn fetch_poster(key: String, url: String) -> Result<PathBuf, String> {
    let dir = posters_dir();
    std::fs::create_dir_all(&dir).map_err(|e| e.to_string())?;

    let path = poster_path(&dir, &key);

    let resp = reqwest::get(&url).await.map_err(|e| e.to_string())?;
    if !resp.status().is_success() {
        return Err(format!("poster request failed with status {}", resp.status()));
    }
    let bytes = resp.bytes().await.map_err(|e| e.to_string())?;

    std::fs::write(&path, &bytes).map_err(|e| e.to_string())?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(has_poster: bool) -> MovieCard {
        MovieCard {
            key: "tt0107290".into(),
            poster_url: "https://img/jp.jpg".into(),
            has_poster,
            type_label: "movie".into(),
            title: "Jurassic Park".into(),
            year: "1993".into(),
        }
    }

    #[test]
    fn key_for_real_and_placeholder_posters() {
        assert_eq!(cache_key(&card(true)), "tt0107290");
        assert_eq!(cache_key(&card(false)), PLACEHOLDER_KEY);
    }

    #[test]
    fn path_is_sanitized() {
        let dir = Path::new("/cache");
        assert_eq!(
            poster_path(dir, "tt0107290"),
            PathBuf::from("/cache/tt0107290.jpg")
        );
        assert_eq!(
            poster_path(dir, "../etc/passwd"),
            PathBuf::from("/cache/___etc_passwd.jpg")
        );
    }
}
