//! # Style Configuration
//!
//! Startup settings for the style engine, loaded from a TOML file, from
//! environment variables, or built programmatically.
//!
//! ## Environment Variables
//!
//! - `LUNAQT_STYLE_CONFIG`: Path to a TOML configuration file, loaded first
//! - `LUNAQT_THEME`: Startup mode (`light` or `dark`)
//! - `LUNAQT_UI_FONT_SIZE`: UI font point size
//! - `LUNAQT_UI_FONT_FAMILY`: UI font family
//!
//! Malformed values are logged and ignored.
//!
//! ## Configuration File Format
//!
//! ```toml
//! [style]
//! mode = "dark"
//! ui_font_family = "Inter"
//! ui_font_size = 13
//! font_families = ["Inter", "Noto Sans"]
//!
//! [style.font_size]
//! min = 10
//! max = 18
//! step = 1
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use lunaqt_theme::config::StyleConfig;
//! use lunaqt_theme::mode::ThemeMode;
//!
//! let config = StyleConfig::new()
//!     .with_mode(ThemeMode::Dark)
//!     .with_font_size(14);
//!
//! assert_eq!(config.preferences().ui_font_size, 14);
//! ```

use std::env;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ThemeError, ThemeResult};
use crate::mode::ThemeMode;
use crate::preferences::{
    FontCatalog, FontSizeBounds, StylePreferences, DEFAULT_FONT_FAMILIES, DEFAULT_UI_FONT,
    DEFAULT_UI_FONT_POINT_SIZE,
};

/// Environment variable holding the configuration file path.
pub const ENV_STYLE_CONFIG: &str = "LUNAQT_STYLE_CONFIG";
/// Environment variable holding the startup mode.
pub const ENV_THEME: &str = "LUNAQT_THEME";
/// Environment variable holding the UI font point size.
pub const ENV_UI_FONT_SIZE: &str = "LUNAQT_UI_FONT_SIZE";
/// Environment variable holding the UI font family.
pub const ENV_UI_FONT_FAMILY: &str = "LUNAQT_UI_FONT_FAMILY";

/// Startup settings of the style engine.
///
/// Every field has a default, so partial configuration files are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Mode applied at startup.
    pub mode: ThemeMode,
    /// Requested UI font family.
    pub ui_font_family: String,
    /// Requested UI font point size.
    pub ui_font_size: u32,
    /// Allowed UI font sizes.
    pub font_size: FontSizeBounds,
    /// Families offered to the user, in display order.
    pub font_families: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    style: StyleConfig,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            mode: ThemeMode::Light,
            ui_font_family: DEFAULT_UI_FONT.to_string(),
            ui_font_size: DEFAULT_UI_FONT_POINT_SIZE,
            font_size: FontSizeBounds::default(),
            font_families: DEFAULT_FONT_FAMILIES.iter().map(|f| f.to_string()).collect(),
        }
    }
}

impl StyleConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration from the process environment or use defaults.
    pub fn from_env_or_default() -> Self {
        Self::from_env_with(|key| env::var(key).ok())
    }

    /// Create a configuration from an arbitrary variable lookup.
    ///
    /// The file named by `LUNAQT_STYLE_CONFIG` is loaded first; the other
    /// variables override it.
    pub fn from_env_with<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = match lookup(ENV_STYLE_CONFIG) {
            Some(path) => Self::from_file(&path).unwrap_or_else(|err| {
                log::warn!("Ignoring style configuration: {}", err);
                Self::default()
            }),
            None => Self::default(),
        };

        config.apply_env_with(lookup)
    }

    /// Apply `LUNAQT_THEME`, `LUNAQT_UI_FONT_SIZE` and `LUNAQT_UI_FONT_FAMILY`
    /// overrides from `lookup`.
    pub fn apply_env_with<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(mode) = lookup(ENV_THEME) {
            match mode.parse::<ThemeMode>() {
                Ok(mode) => self.mode = mode,
                Err(err) => log::warn!("Ignoring {}: {}", ENV_THEME, err),
            }
        }

        if let Some(size) = lookup(ENV_UI_FONT_SIZE) {
            match size.trim().parse::<u32>() {
                Ok(size) => self.ui_font_size = size,
                Err(err) => log::warn!("Ignoring {}='{}': {}", ENV_UI_FONT_SIZE, size, err),
            }
        }

        if let Some(family) = lookup(ENV_UI_FONT_FAMILY) {
            let family = family.trim();
            if family.is_empty() {
                log::warn!("Ignoring empty {}", ENV_UI_FONT_FAMILY);
            } else {
                self.ui_font_family = family.to_string();
            }
        }

        self
    }

    /// Load a configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> ThemeResult<Self> {
        let path = path.as_ref();

        if path.extension().and_then(|s| s.to_str()) != Some("toml") {
            return Err(ThemeError::UnsupportedConfigFormat {
                path: path.to_path_buf(),
            });
        }

        if !path.exists() {
            return Err(ThemeError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = fs::read_to_string(path).map_err(|source| ThemeError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse_toml(&content).map_err(|details| ThemeError::parse_error(path, details))
    }

    /// Load a configuration from TOML content with a `[style]` table.
    pub fn from_toml(content: &str) -> ThemeResult<Self> {
        Self::parse_toml(content).map_err(|details| ThemeError::parse_error("<inline>", details))
    }

    fn parse_toml(content: &str) -> Result<Self, String> {
        toml::from_str::<ConfigFile>(content)
            .map(|file| file.style)
            .map_err(|err| err.to_string())
    }

    /// Set the startup mode.
    pub fn with_mode(mut self, mode: ThemeMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the requested UI font size.
    pub fn with_font_size(mut self, size: u32) -> Self {
        self.ui_font_size = size;
        self
    }

    /// Set the requested UI font family.
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.ui_font_family = family.into();
        self
    }

    /// Set the families offered to the user.
    pub fn with_font_families<I, S>(mut self, families: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.font_families = families.into_iter().map(Into::into).collect();
        self
    }

    /// Font size bounds with `min` and `max` in order.
    pub fn bounds(&self) -> FontSizeBounds {
        FontSizeBounds::new(self.font_size.min, self.font_size.max, self.font_size.step)
    }

    /// The configured font families as a catalog.
    pub fn catalog(&self) -> FontCatalog {
        FontCatalog::new(self.font_families.iter().cloned())
    }

    /// Validated preferences: the size is clamped and the family resolved.
    pub fn preferences(&self) -> StylePreferences {
        StylePreferences::new(
            &self.ui_font_family,
            self.ui_font_size,
            &self.catalog(),
            &self.bounds(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = StyleConfig::new();
        assert_eq!(config.mode, ThemeMode::Light);
        assert_eq!(config.ui_font_size, 12);
        assert_eq!(config.preferences(), StylePreferences::default());
    }

    #[test]
    fn test_from_toml() {
        let config = StyleConfig::from_toml(
            r#"
            [style]
            mode = "dark"
            ui_font_size = 30

            [style.font_size]
            max = 20
            "#,
        )
        .unwrap();

        assert_eq!(config.mode, ThemeMode::Dark);
        assert_eq!(config.bounds().min, 10);
        assert_eq!(config.bounds().max, 20);
        assert_eq!(config.preferences().ui_font_size, 20);
        assert_eq!(config.ui_font_family, "Noto Sans");
    }

    #[test]
    fn test_from_toml_without_style_table() {
        let config = StyleConfig::from_toml("").unwrap();
        assert_eq!(config, StyleConfig::default());
    }

    #[test]
    fn test_from_toml_rejects_bad_mode() {
        let result = StyleConfig::from_toml("[style]\nmode = \"sepia\"\n");
        assert!(matches!(result, Err(ThemeError::ConfigParse { .. })));
    }

    #[test]
    fn test_from_file_requires_toml_extension() {
        let result = StyleConfig::from_file("style.json");
        assert!(matches!(
            result,
            Err(ThemeError::UnsupportedConfigFormat { .. })
        ));
    }

    #[test]
    fn test_from_file_missing() {
        let result = StyleConfig::from_file("/nonexistent/lunaqt/style.toml");
        assert!(matches!(result, Err(ThemeError::ConfigNotFound { .. })));
    }

    #[test]
    fn test_env_overrides() {
        let config = StyleConfig::new().apply_env_with(lookup(&[
            (ENV_THEME, "DARK"),
            (ENV_UI_FONT_SIZE, " 15 "),
            (ENV_UI_FONT_FAMILY, "Inter"),
        ]));

        assert_eq!(config.mode, ThemeMode::Dark);
        assert_eq!(config.ui_font_size, 15);
        assert_eq!(config.ui_font_family, "Inter");
    }

    #[test]
    fn test_invalid_env_values_are_ignored() {
        let config = StyleConfig::new().apply_env_with(lookup(&[
            (ENV_THEME, "sepia"),
            (ENV_UI_FONT_SIZE, "large"),
            (ENV_UI_FONT_FAMILY, "  "),
        ]));

        assert_eq!(config, StyleConfig::default());
    }

    #[test]
    fn test_unreadable_config_path_falls_back() {
        let config = StyleConfig::from_env_with(lookup(&[
            (ENV_STYLE_CONFIG, "/nonexistent/lunaqt/style.toml"),
            (ENV_THEME, "dark"),
        ]));

        assert_eq!(config.mode, ThemeMode::Dark);
        assert_eq!(config.ui_font_size, DEFAULT_UI_FONT_POINT_SIZE);
    }

    #[test]
    fn test_unknown_family_resolves_to_first() {
        let config = StyleConfig::new()
            .with_font_families(["Roboto", "Inter"])
            .with_font_family("Papyrus");
        assert_eq!(config.preferences().ui_font_family, "Roboto");
    }
}
