//! The application-wide base block, emitted ahead of every generator.

use lunaqt_theme::Theme;

use crate::generators::sidebars::{SIDEBAR_DOCKS, SIDEBAR_PANELS, SIDEBAR_TOOLBAR_SELECTOR};
use crate::rule::{join_rules, pt, px, Rule};

/// Render the base block: widget defaults, sidebar panel backgrounds and the
/// main toolbar.
pub fn base_style(theme: &Theme) -> String {
    let metrics = &theme.metrics;
    let bg = &theme.bg;
    let text = &theme.text;

    let mut panel_selectors: Vec<String> = SIDEBAR_DOCKS.iter().map(|d| d.to_string()).collect();
    panel_selectors.extend(SIDEBAR_DOCKS.iter().map(|dock| format!("{} > QWidget", dock)));
    panel_selectors.extend(
        SIDEBAR_DOCKS
            .iter()
            .zip(SIDEBAR_PANELS.iter())
            .map(|(dock, panel)| format!("{} {}", dock, panel)),
    );

    join_rules(&[
        Rule::new("QWidget")
            .decl("background-color", &bg.app)
            .decl("color", &text.primary)
            .decl("font-family", &metrics.font_family)
            .decl("font-size", pt(metrics.font_size_medium)),
        Rule::group(panel_selectors)
            .decl("background-color", &bg.sidebar_content)
            .decl("color", &text.primary),
        Rule::group(
            SIDEBAR_DOCKS
                .iter()
                .map(|dock| format!("{} {}", dock, SIDEBAR_TOOLBAR_SELECTOR)),
        )
        .decl("background-color", &bg.sidebar_toolbar)
        .decl("color", &text.primary),
        Rule::group(SIDEBAR_DOCKS.iter().map(|dock| format!("{} QListWidget", dock)))
            .decl("color", &text.primary),
        Rule::new("QToolBar")
            .decl("background-color", &bg.toolbar)
            .decl("spacing", px(metrics.padding_small))
            .decl("padding", format!("0 {}", px(metrics.padding_small))),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use lunaqt_theme::{get_theme, ThemeMode};

    #[test]
    fn test_base_block_starts_with_widget_defaults() {
        let theme = get_theme(ThemeMode::Dark, None);
        let base = base_style(&theme);
        assert!(base.starts_with(
            "QWidget {\n    background-color: #1e1e1e;\n    color: #fafafa;\n"
        ));
        assert!(base.contains("font-size: 12pt;"));
    }

    #[test]
    fn test_base_block_covers_sidebar_panels() {
        let base = base_style(&get_theme(ThemeMode::Light, None));
        assert!(base.contains("QDockWidget#SettingsDock QWidget#SettingsSidebarPanel"));
        assert!(base.contains("QDockWidget#NotebooksDock QWidget[sidebarRole=\"toolbar\"]"));
        assert!(base.ends_with(
            "QToolBar {\n    background-color: #ededed;\n    spacing: 4px;\n    padding: 0 4px;\n}"
        ));
    }
}
