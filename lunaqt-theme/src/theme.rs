//! # Theme Resolution
//!
//! A [Theme] is the fully resolved bundle every stylesheet generator reads:
//! one palette per token group plus the metrics in effect. Resolution is a
//! pure function of the mode and the metrics, so it is safe to call as often
//! as needed and never caches.

use serde::{Deserialize, Serialize};

use crate::error::ThemeResult;
use crate::metrics::Metrics;
use crate::mode::ThemeMode;
use crate::tokens::{
    BackgroundPalette, BorderPalette, ButtonPalettes, MenuPalette, StatusBarPalette, TextPalette,
    ViewportPalette, BACKGROUND, BORDER, BUTTONS, MENU, STATUS_BAR, TEXT, VIEWPORT,
};
use crate::widget_tokens::{
    ButtonTokens, CellContainerTokens, CellGutterTokens, MenuBarTokens, SidebarTokens,
    StatusBarTokens,
};

/// A fully resolved theme. Holds only concrete color strings and metrics.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Theme {
    /// The mode every palette was resolved for.
    pub mode: ThemeMode,
    /// Background colors.
    pub bg: BackgroundPalette,
    /// Border colors.
    pub border: BorderPalette,
    /// Text colors.
    pub text: TextPalette,
    /// Item view and editor colors.
    pub viewport: ViewportPalette,
    /// Button variant colors.
    pub buttons: ButtonPalettes,
    /// Menu colors.
    pub menu: MenuPalette,
    /// Status bar colors.
    pub statusbar: StatusBarPalette,
    /// Metrics in effect.
    pub metrics: Metrics,
}

impl Theme {
    /// Resolve every token group for `mode`.
    ///
    /// `None` metrics means [Metrics::default].
    pub fn resolve(mode: ThemeMode, metrics: Option<Metrics>) -> Self {
        Self {
            mode,
            bg: BACKGROUND.resolve(mode),
            border: BORDER.resolve(mode),
            text: TEXT.resolve(mode),
            viewport: VIEWPORT.resolve(mode),
            buttons: BUTTONS.resolve(mode),
            menu: MENU.resolve(mode),
            statusbar: STATUS_BAR.resolve(mode),
            metrics: metrics.unwrap_or_default(),
        }
    }

    /// Button sizing derived from this theme's metrics.
    pub fn button_tokens(&self) -> ButtonTokens {
        ButtonTokens::from_metrics(&self.metrics)
    }

    /// Menu bar sizing derived from this theme's metrics.
    pub fn menubar_tokens(&self) -> MenuBarTokens {
        MenuBarTokens::from_metrics(&self.metrics)
    }

    /// Cell container sizing derived from this theme's metrics.
    pub fn cell_container_tokens(&self) -> CellContainerTokens {
        CellContainerTokens::from_metrics(&self.metrics)
    }

    /// Cell gutter sizing derived from this theme's metrics.
    pub fn cell_gutter_tokens(&self) -> CellGutterTokens {
        CellGutterTokens::from_metrics(&self.metrics)
    }

    /// Sidebar sizing derived from this theme's metrics.
    pub fn sidebar_tokens(&self) -> SidebarTokens {
        SidebarTokens::from_metrics(&self.metrics)
    }

    /// Status bar sizing derived from this theme's metrics.
    pub fn statusbar_tokens(&self) -> StatusBarTokens {
        StatusBarTokens::from_metrics(&self.metrics)
    }

    /// Pretty JSON snapshot of the resolved theme.
    pub fn to_json(&self) -> ThemeResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::resolve(ThemeMode::default(), None)
    }
}

/// Return a fully resolved theme for the requested mode.
///
/// Equal inputs always give value-equal themes.
pub fn get_theme(mode: ThemeMode, metrics: Option<Metrics>) -> Theme {
    Theme::resolve(mode, metrics)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::build_metrics_for_ui_font;

    #[test]
    fn test_default_theme_is_dark() {
        let theme = Theme::default();
        assert_eq!(theme.mode, ThemeMode::Dark);
        assert_eq!(theme.bg.app, "#1e1e1e");
        assert_eq!(theme.metrics, Metrics::default());
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let metrics = build_metrics_for_ui_font(15, None);
        let first = get_theme(ThemeMode::Light, Some(metrics.clone()));
        let second = get_theme(ThemeMode::Light, Some(metrics));
        assert_eq!(first, second);
    }

    #[test]
    fn test_metrics_override_is_used() {
        let metrics = build_metrics_for_ui_font(16, None);
        let theme = get_theme(ThemeMode::Dark, Some(metrics));
        assert_eq!(theme.metrics.font_size_medium, 16);
        assert_eq!(theme.button_tokens().toolbar_min_height, 22);
    }

    #[test]
    fn test_to_json_snapshot() {
        let json = get_theme(ThemeMode::Dark, None).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["mode"], "dark");
        assert_eq!(value["bg"]["app"], "#1e1e1e");
        assert_eq!(value["buttons"]["warning"]["focus"], "#ffa45c");
    }
}
