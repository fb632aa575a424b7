//! The main window menu bar and its drop-down menus.

use lunaqt_theme::mode::ThemeMode;
use lunaqt_theme::Theme;

use super::StyleGenerator;
use crate::rule::{join_rules, pt, px, Rule};

/// The main window menu bar.
pub const MENUBAR_SELECTOR: &str = "QMenuBar#MainMenuBar";
/// Menus opened from the main menu bar.
pub const MENU_SELECTOR: &str = "QMenu[menuRole=\"primary\"]";
/// Corner widget hosted in the menu bar.
pub const MENUBAR_CORNER_SELECTOR: &str = "QWidget[widgetRole=\"menubar-corner\"]";

fn padding(vertical: u32, horizontal: u32) -> String {
    format!("{} {}", px(vertical), px(horizontal))
}

/// Generator for the menu bar and the primary menus.
#[derive(Debug, Clone, Copy, Default)]
pub struct MenuBarStyle;

impl StyleGenerator for MenuBarStyle {
    fn name(&self) -> &'static str {
        "menubar"
    }

    fn generate(&self, theme: &Theme) -> String {
        let metrics = &theme.metrics;
        let tokens = theme.menubar_tokens();
        let menu = &theme.menu;

        join_rules(&[
            Rule::new(MENUBAR_SELECTOR)
                .decl("background-color", &menu.background)
                .decl("color", &menu.text)
                .decl("spacing", px(tokens.spacing))
                .decl("padding", format!("0px {}", px(tokens.padding_horizontal)))
                .decl("margin", "0px")
                .decl("border-top", "none")
                .decl("border-bottom", "none")
                .decl("min-height", px(tokens.min_height))
                .decl("font-family", &metrics.font_family)
                .decl("font-size", pt(metrics.font_size_medium)),
            Rule::new(format!("{}::item", MENUBAR_SELECTOR))
                .decl("background", "transparent")
                .decl("padding", padding(tokens.item_padding_y, tokens.item_padding_x)),
            Rule::new(format!("{}::item:selected", MENUBAR_SELECTOR))
                .decl("background", &menu.item_hover)
                .decl("padding", padding(tokens.item_padding_y, tokens.item_padding_x)),
            Rule::new(format!("{}:focus", MENUBAR_SELECTOR)).decl("outline", "none"),
            Rule::new(MENUBAR_CORNER_SELECTOR).decl("background-color", &menu.background),
            Rule::new(MENU_SELECTOR)
                .decl("background-color", &theme.bg.dropdown)
                .decl(
                    "border",
                    format!("{} solid {}", px(tokens.border_width), menu.separator),
                )
                .decl("padding", format!("{} 0px", px(tokens.menu_padding_y))),
            Rule::new(format!("{}::item", MENU_SELECTOR))
                .decl(
                    "padding",
                    padding(tokens.menu_item_padding_y, tokens.menu_item_padding_x),
                )
                .decl("background", "transparent"),
            Rule::new(format!("{}::item:selected", MENU_SELECTOR))
                .decl("background", &menu.item_hover)
                .decl("color", &theme.text.primary),
            Rule::new(format!("{}::separator", MENU_SELECTOR))
                .decl("height", px(tokens.border_width))
                .decl(
                    "margin",
                    padding(tokens.separator_margin_y, tokens.separator_margin_x),
                )
                .decl("background", &menu.separator),
        ])
    }
}

/// Menu bar QSS for `mode`, or for `theme` when given.
pub fn get_qss(mode: ThemeMode, theme: Option<&Theme>) -> String {
    MenuBarStyle.qss(mode, theme)
}
