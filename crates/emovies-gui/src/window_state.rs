//! Persist and restore window size and position across sessions.
//!
//! Saves a small JSON file next to the poster cache in the data directory.

use std::path::{Path, PathBuf};

use emovies_core::config::AppConfig;
use iced::{Point, Size};
use serde::{Deserialize, Serialize};

const FILE_NAME: &str = "window.json";

/// Persisted window geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowState {
    pub width: f32,
    pub height: f32,
    pub x: f32,
    pub y: f32,
}

impl Default for WindowState {
    fn default() -> Self {
        Self {
            width: 1100.0,
            height: 760.0,
            x: -1.0,
            y: -1.0,
        }
    }
}

impl WindowState {
    pub fn size(&self) -> Size {
        Size::new(self.width.max(400.0), self.height.max(300.0))
    }

    /// Saved position, if there is a valid one.
    pub fn position(&self) -> Option<Point> {
        if self.x >= 0.0 && self.y >= 0.0 {
            Some(Point::new(self.x, self.y))
        } else {
            None
        }
    }

    /// Load from disk, returning default if file doesn't exist or is invalid.
    pub fn load() -> Self {
        Self::load_from(&state_path())
    }

    fn load_from(path: &Path) -> Self {
        std::fs::read_to_string(path)
            .ok()
            .and_then(|content| serde_json::from_str(&content).ok())
            .unwrap_or_default()
    }

    /// Save to disk. Errors are logged but not propagated.
    pub fn save(&self) {
        self.save_to(&state_path());
    }

    fn save_to(&self, path: &Path) {
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(path, json) {
                    tracing::warn!("Failed to save window state: {e}");
                }
            }
            Err(e) => tracing::warn!("Failed to serialize window state: {e}"),
        }
    }
}

fn state_path() -> PathBuf {
    AppConfig::data_dir().join(FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_no_position() {
        let ws = WindowState::default();
        assert!(ws.position().is_none());
        assert_eq!(ws.size(), Size::new(1100.0, 760.0));
    }

    #[test]
    fn size_is_clamped() {
        let ws = WindowState {
            width: 10.0,
            height: 10.0,
            ..Default::default()
        };
        assert_eq!(ws.size(), Size::new(400.0, 300.0));
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sub").join(FILE_NAME);
        let ws = WindowState {
            width: 800.0,
            height: 600.0,
            x: 20.0,
            y: 40.0,
        };
        ws.save_to(&path);
        assert_eq!(WindowState::load_from(&path), ws);
        assert_eq!(ws.position(), Some(Point::new(20.0, 40.0)));
    }

    #[test]
    fn corrupt_file_gives_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(FILE_NAME);
        std::fs::write(&path, "{not json").unwrap();
        assert_eq!(WindowState::load_from(&path), WindowState::default());
    }
}
