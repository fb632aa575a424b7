//! The main window status bar.

use lunaqt_theme::mode::ThemeMode;
use lunaqt_theme::Theme;

use super::StyleGenerator;
use crate::rule::{join_rules, pt, px, Rule};

/// The main window status bar.
pub const STATUSBAR_SELECTOR: &str = "QStatusBar#MainStatusBar";

/// Generator for the status bar.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatusBarStyle;

impl StyleGenerator for StatusBarStyle {
    fn name(&self) -> &'static str {
        "statusbar"
    }

    fn generate(&self, theme: &Theme) -> String {
        let metrics = &theme.metrics;
        let tokens = theme.statusbar_tokens();
        let palette = &theme.statusbar;

        join_rules(&[
            Rule::new(STATUSBAR_SELECTOR)
                .decl("background-color", &palette.background)
                .decl("color", &palette.text)
                .decl(
                    "border-top",
                    format!("{} solid {}", px(tokens.border_width), palette.border_top),
                )
                .decl("padding", format!("0 {}", px(tokens.padding_x)))
                .decl("min-height", px(tokens.min_height))
                .decl("font-family", &metrics.font_family)
                .decl("font-size", pt(metrics.font_size_small)),
            Rule::new(format!("{} QLabel", STATUSBAR_SELECTOR)).decl("color", &palette.text),
            Rule::new(format!("{} QLabel[statusRole=\"warning\"]", STATUSBAR_SELECTOR))
                .decl("color", &palette.warning)
                .decl("font-weight", 600),
        ])
    }
}

/// Status bar QSS for `mode`, or for `theme` when given.
pub fn get_qss(mode: ThemeMode, theme: Option<&Theme>) -> String {
    StatusBarStyle.qss(mode, theme)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statusbar_block() {
        let qss = get_qss(ThemeMode::Dark, None);
        assert!(qss.starts_with("QStatusBar#MainStatusBar {\n    background-color: #252525;"));
        assert!(qss.contains("border-top: 1px solid #2d2d2d;"));
        assert!(qss.contains("min-height: 32px;"));
    }

    #[test]
    fn test_warning_label() {
        let qss = get_qss(ThemeMode::Light, None);
        assert!(qss.ends_with(
            "QStatusBar#MainStatusBar QLabel[statusRole=\"warning\"] {\n    color: #b05a00;\n    font-weight: 600;\n}"
        ));
    }
}
