//! Dock-based sidebars (notebooks, settings).

use lunaqt_theme::mode::ThemeMode;
use lunaqt_theme::Theme;

use super::StyleGenerator;
use crate::rule::{join_rules, px, Rule};

/// Object names of the sidebar docks.
pub const SIDEBAR_DOCKS: [&str; 2] = ["QDockWidget#NotebooksDock", "QDockWidget#SettingsDock"];
/// Panels hosted by each dock, in [SIDEBAR_DOCKS] order.
pub const SIDEBAR_PANELS: [&str; 2] = [
    "QWidget#NotebookSidebarPanel",
    "QWidget#SettingsSidebarPanel",
];
/// Toolbar strip inside a sidebar.
pub const SIDEBAR_TOOLBAR_SELECTOR: &str = "QWidget[sidebarRole=\"toolbar\"]";
/// A row of actions inside a sidebar.
pub const SIDEBAR_ACTION_ROW_SELECTOR: &str = "QWidget[sidebarRole=\"action-row\"]";

/// One selector per dock, each followed by `suffix`.
fn per_dock(suffix: &str) -> Vec<String> {
    SIDEBAR_DOCKS
        .iter()
        .map(|dock| format!("{}{}", dock, suffix))
        .collect()
}

/// One selector per dock for each of the given descendant widgets.
fn per_dock_children(children: &[&str]) -> Vec<String> {
    children
        .iter()
        .flat_map(|child| per_dock(&format!(" {}", child)))
        .collect()
}

/// Generator for sidebar docks.
#[derive(Debug, Clone, Copy, Default)]
pub struct SidebarStyle;

impl StyleGenerator for SidebarStyle {
    fn name(&self) -> &'static str {
        "sidebars"
    }

    fn generate(&self, theme: &Theme) -> String {
        let tokens = theme.sidebar_tokens();
        let bg = &theme.bg;
        let border = &theme.border;
        let text = &theme.text;
        let border_line = |color: &str| format!("{} solid {}", px(tokens.border_width), color);

        let panels: Vec<String> = SIDEBAR_DOCKS
            .iter()
            .zip(SIDEBAR_PANELS.iter())
            .map(|(dock, panel)| format!("{} {}", dock, panel))
            .collect();

        join_rules(&[
            Rule::group(per_dock(""))
                .decl("background-color", &bg.sidebar_content)
                .decl("color", &text.primary)
                .decl("border-left", border_line(border.strong.as_str())),
            Rule::group(per_dock("::title"))
                .decl("background-color", &bg.sidebar_header)
                .decl("color", &text.primary)
                .decl("text-align", "left")
                .decl("padding", px(tokens.title_padding)),
            Rule::group(per_dock(" > QWidget")).decl("background-color", &bg.sidebar_content),
            Rule::group(panels).decl("background-color", &bg.sidebar_content),
            Rule::new(SIDEBAR_TOOLBAR_SELECTOR)
                .decl("background-color", &bg.sidebar_toolbar)
                .decl("color", &text.primary)
                .decl("padding", px(tokens.title_padding))
                .decl("border-bottom", border_line(border.strong.as_str())),
            Rule::new(format!("{} QLabel", SIDEBAR_TOOLBAR_SELECTOR)).decl("color", &text.primary),
            Rule::new(SIDEBAR_ACTION_ROW_SELECTOR)
                .decl("background-color", &bg.sidebar_toolbar)
                .decl("border-radius", px(tokens.action_row_radius))
                .decl(
                    "padding",
                    format!(
                        "{} {}",
                        px(tokens.action_row_padding_y),
                        px(tokens.action_row_padding_x)
                    ),
                ),
            Rule::group(per_dock_children(&["QListWidget"]))
                .decl("background-color", "transparent")
                .decl("border", "none")
                .decl("color", &text.primary),
            Rule::group(per_dock_children(&["QListWidget::item"]))
                .decl("background-color", "transparent")
                .decl("color", &text.primary),
            Rule::group(per_dock_children(&["QListWidget::item:selected"]))
                .decl("background-color", &bg.sidebar_toolbar)
                .decl("color", &text.primary),
            Rule::group(per_dock_children(&["QComboBox", "QSpinBox"]))
                .decl("background-color", &bg.sidebar_content)
                .decl("border", border_line(border.subtle.as_str()))
                .decl("padding", px(tokens.title_padding)),
            Rule::group(per_dock_children(&["QComboBox:hover", "QSpinBox:hover"]))
                .decl("border-color", &border.strong),
            Rule::group(per_dock_children(&["QLabel"])).decl("background-color", "transparent"),
        ])
    }
}

/// Sidebar QSS for `mode`, or for `theme` when given.
pub fn get_qss(mode: ThemeMode, theme: Option<&Theme>) -> String {
    SidebarStyle.qss(mode, theme)
}
