//! Gutter decorations beside cell editors.

use lunaqt_theme::mode::ThemeMode;
use lunaqt_theme::Theme;

use super::StyleGenerator;
use crate::rule::{join_rules, pt, px, Rule};
use crate::state::CellState;

/// The gutter widget of a cell.
pub const GUTTER_SELECTOR: &str = "QWidget[cellType=\"gutter\"]";
/// Line-number labels inside the gutter.
pub const GUTTER_LABEL_SELECTOR: &str = "QLabel[cellRole=\"line-number\"]";

/// Generator for cell gutters.
#[derive(Debug, Clone, Copy, Default)]
pub struct CellGutterStyle;

impl StyleGenerator for CellGutterStyle {
    fn name(&self) -> &'static str {
        "cell_gutter"
    }

    fn generate(&self, theme: &Theme) -> String {
        let metrics = &theme.metrics;
        let gutter = theme.cell_gutter_tokens();
        let border = &theme.border;
        let text = &theme.text;

        join_rules(&[
            Rule::new(GUTTER_SELECTOR)
                .decl("background-color", &theme.bg.cell_gutter)
                .decl(
                    "border-right",
                    format!("{} solid {}", px(gutter.border_width), border.cell_gutter),
                )
                .decl("padding", format!("0 {}", px(gutter.padding_x)))
                .decl("min-width", px(gutter.width))
                .decl("color", &text.muted),
            Rule::group([
                CellState::Focused.selector(GUTTER_SELECTOR),
                CellState::Selected.selector(GUTTER_SELECTOR),
            ])
            .decl("border-color", &border.cell_in_focus),
            Rule::new(format!("{} > {}", GUTTER_SELECTOR, GUTTER_LABEL_SELECTOR))
                .decl("color", &text.secondary)
                .decl("min-width", px(gutter.label_min_width))
                .decl("qproperty-alignment", "'AlignRight | AlignVCenter'")
                .decl("font-family", &metrics.font_family)
                .decl("font-size", pt(metrics.font_size_small)),
        ])
    }
}

/// Cell gutter QSS for `mode`, or for `theme` when given.
pub fn get_qss(mode: ThemeMode, theme: Option<&Theme>) -> String {
    CellGutterStyle.qss(mode, theme)
}
