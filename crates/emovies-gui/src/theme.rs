//! Dark and light themes with a green accent over neutral grey surfaces.
//!
//! The palette lives in one embedded TOML file holding both variants.

mod catalog;
mod colors;

pub use catalog::*;
pub use colors::*;

use iced::Theme;

/// Embedded theme TOML source (contains both dark and light).
pub(crate) const DEFAULT_THEME_TOML: &str = include_str!("../assets/themes/default.toml");

/// A fully loaded theme with both appearance variants.
#[derive(Debug, Clone)]
pub struct EMoviesTheme {
    pub name: String,
    pub dark: ColorScheme,
    pub light: ColorScheme,
}

impl EMoviesTheme {
    /// Load a theme from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        let file: ThemeFile =
            toml::from_str(toml_str).map_err(|e| format!("theme parse error: {e}"))?;
        Ok(Self {
            name: file.meta.name.clone(),
            dark: ColorScheme::from_variant(&file.dark),
            light: ColorScheme::from_variant(&file.light),
        })
    }

    /// Load the embedded default theme.
    pub fn default_theme() -> Self {
        Self::from_toml(DEFAULT_THEME_TOML).expect("embedded default theme is valid TOML")
    }

    /// Color scheme for a resolved mode.
    pub fn colors(&self, mode: ThemeMode) -> &ColorScheme {
        match mode {
            ThemeMode::Light => &self.light,
            // Dark is the fallback for both Dark and System.
            _ => &self.dark,
        }
    }

    pub fn iced_theme(&self, mode: ThemeMode) -> Theme {
        build_theme(&self.name, self.colors(mode))
    }
}

/// Resolve `ThemeMode::System` to a concrete Dark or Light.
pub fn resolve_mode(mode: ThemeMode) -> ThemeMode {
    match mode {
        ThemeMode::System => match dark_light::detect() {
            Ok(dark_light::Mode::Light) => ThemeMode::Light,
            _ => ThemeMode::Dark,
        },
        other => other,
    }
}

/// Build the iced Theme from a ColorScheme.
pub fn build_theme(name: &str, cs: &ColorScheme) -> Theme {
    use iced::theme::Palette;

    Theme::custom(
        name.to_string(),
        Palette {
            background: cs.surface,
            text: cs.on_surface,
            primary: cs.primary,
            success: cs.primary,
            warning: cs.tertiary,
            danger: cs.error,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_theme_parses() {
        let theme = EMoviesTheme::default_theme();
        assert_eq!(theme.name, "EMovies");
        assert_ne!(theme.dark.surface, theme.light.surface);
        assert_ne!(theme.dark.on_surface, theme.light.on_surface);
    }

    #[test]
    fn explicit_modes_pass_through() {
        assert_eq!(resolve_mode(ThemeMode::Dark), ThemeMode::Dark);
        assert_eq!(resolve_mode(ThemeMode::Light), ThemeMode::Light);
    }

    #[test]
    fn bad_toml_is_an_error() {
        assert!(EMoviesTheme::from_toml("[meta]\nname = 1").is_err());
    }
}
