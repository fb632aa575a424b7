//! Notebook cell frames and the editors embedded in them.

use lunaqt_theme::mode::ThemeMode;
use lunaqt_theme::Theme;

use super::StyleGenerator;
use crate::rule::{join_rules, pt, px, Rule};
use crate::state::CellState;

/// The list widget holding all cells.
pub const CELL_LIST_SELECTOR: &str = "QWidget[cellType=\"list\"]";
/// A single cell frame.
pub const CELL_SELECTOR: &str = "QFrame[cellType=\"container\"]";
/// Header strip of a cell.
pub const CELL_HEADER_SELECTOR: &str = "QWidget[cellPart=\"header\"]";
/// Body of a cell.
pub const CELL_BODY_SELECTOR: &str = "QWidget[cellPart=\"body\"]";

/// Generator for cell containers.
#[derive(Debug, Clone, Copy, Default)]
pub struct CellContainerStyle;

impl StyleGenerator for CellContainerStyle {
    fn name(&self) -> &'static str {
        "cell_container"
    }

    fn generate(&self, theme: &Theme) -> String {
        let metrics = &theme.metrics;
        let spacing = theme.cell_container_tokens();
        let bg = &theme.bg;
        let border = &theme.border;
        let text = &theme.text;
        let viewport = &theme.viewport;

        join_rules(&[
            Rule::new(CELL_LIST_SELECTOR).decl("background", "transparent"),
            Rule::new(CELL_SELECTOR)
                .decl("background-color", &bg.cell)
                .decl(
                    "border",
                    format!("{} solid {}", px(spacing.border_width), border.cell),
                )
                .decl("border-radius", px(spacing.border_radius))
                .decl("padding", px(spacing.padding)),
            Rule::group([
                CellState::Focused.selector(CELL_SELECTOR),
                CellState::Selected.selector(CELL_SELECTOR),
            ])
            .decl("border-color", &border.cell_in_focus),
            Rule::new(format!("{} > {}", CELL_SELECTOR, CELL_HEADER_SELECTOR))
                .decl("background-color", &bg.cell)
                .decl("margin-bottom", px(spacing.header_margin_bottom))
                .decl("color", &text.secondary)
                .decl("font-size", pt(metrics.font_size_small))
                .decl("text-transform", "uppercase")
                .decl("letter-spacing", "0.08em"),
            Rule::new(format!("{} > {}", CELL_SELECTOR, CELL_BODY_SELECTOR))
                .decl("background-color", &bg.cell)
                .decl("color", &text.primary)
                .decl("font-size", pt(metrics.cell_body_font_size)),
            Rule::group([
                format!("{} QTextEdit", CELL_SELECTOR),
                format!("{} QTableView", CELL_SELECTOR),
            ])
            .decl("background-color", &viewport.base)
            .decl("alternate-background-color", &viewport.alternate)
            .decl("color", &text.primary)
            .decl("selection-background-color", &viewport.selection)
            .decl("selection-color", &viewport.selection_text)
            .decl("border", "none"),
        ])
    }
}

/// Cell container QSS for `mode`, or for `theme` when given.
pub fn get_qss(mode: ThemeMode, theme: Option<&Theme>) -> String {
    CellContainerStyle.qss(mode, theme)
}
