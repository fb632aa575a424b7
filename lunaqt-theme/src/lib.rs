#![warn(missing_docs)]

//! # LunaQt Theme
//!
//! Mode-aware color tokens, spacing and typography metrics, and the theme
//! resolver of the LunaQt notebook shell.
//!
//! ## Overview
//!
//! - **[ThemeMode](mode::ThemeMode)**: The light/dark selector
//! - **[ModeAwareColor](color::ModeAwareColor)**: A color declared for both modes
//! - **[Metrics](metrics::Metrics)**: Spacing, sizing and typography values
//! - **[tokens]**: Every color of the application, grouped by surface
//! - **[widget_tokens]**: Metric-derived sizing per widget family
//! - **[Theme](theme::Theme)**: The resolved palettes and metrics
//! - **[StylePreferences](preferences::StylePreferences)**: UI font knobs
//! - **[StyleConfig](config::StyleConfig)**: Startup configuration from files and environment
//!
//! ## Quick Start
//!
//! ```rust
//! use lunaqt_theme::mode::ThemeMode;
//! use lunaqt_theme::preferences::{FontSizeBounds, StylePreferences};
//! use lunaqt_theme::theme::get_theme;
//!
//! let metrics = StylePreferences::default()
//!     .with_font_size(14, &FontSizeBounds::default())
//!     .build_metrics(None);
//! let theme = get_theme(ThemeMode::Dark, Some(metrics));
//!
//! assert_eq!(theme.bg.app, "#1e1e1e");
//! assert_eq!(theme.metrics.font_size_large, 16);
//! ```
//!
//! Resolution never fails: every token carries both mode variants and every
//! palette shares its field list with its tokens.

/// Hex color parsing and mode-aware color declarations.
pub mod color;

/// Style configuration from files and environment variables.
pub mod config;

/// Error types.
pub mod error;

/// Spacing, sizing and typography metrics.
pub mod metrics;

/// The light/dark mode selector.
pub mod mode;

/// UI font preferences, bounds and the font catalog.
pub mod preferences;

/// The resolved theme.
pub mod theme;

/// Color token groups and their palettes.
pub mod tokens;

/// Metric-derived widget sizing.
pub mod widget_tokens;

pub use error::{ThemeError, ThemeResult};
pub use metrics::Metrics;
pub use mode::ThemeMode;
pub use theme::{get_theme, Theme};
