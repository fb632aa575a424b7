//! Metric-derived sizing bundles for each widget family.
//!
//! These carry no colors. They translate the generic [Metrics] scale into the
//! concrete spacing a generator needs, so generators never pick scale steps
//! themselves.

use serde::Serialize;

use crate::metrics::Metrics;

/// Minimum width of a line-number label in the cell gutter.
pub const GUTTER_LABEL_MIN_WIDTH: u32 = 32;

/// Push button sizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ButtonTokens {
    /// Border width of regular buttons.
    pub border_width: u32,
    /// Corner radius of regular buttons.
    pub radius: u32,
    /// Vertical padding of regular buttons.
    pub padding_y: u32,
    /// Horizontal padding of regular buttons.
    pub padding_x: u32,
    /// Corner radius of toolbar buttons.
    pub toolbar_radius: u32,
    /// Vertical padding of toolbar buttons.
    pub toolbar_padding_y: u32,
    /// Horizontal padding of toolbar buttons.
    pub toolbar_padding_x: u32,
    /// Minimum height of toolbar buttons.
    pub toolbar_min_height: u32,
    /// Corner radius of menu bar buttons.
    pub menubar_radius: u32,
    /// Vertical padding of menu bar buttons.
    pub menubar_padding_y: u32,
    /// Horizontal padding of menu bar buttons.
    pub menubar_padding_x: u32,
}

impl ButtonTokens {
    /// Derive button sizing from metrics.
    pub fn from_metrics(metrics: &Metrics) -> Self {
        let text_height = metrics
            .font_size_large
            .saturating_add(metrics.padding_extra_small.saturating_mul(2));
        Self {
            border_width: metrics.border_width_small,
            radius: metrics.radius_medium,
            padding_y: metrics.padding_small,
            padding_x: metrics.padding_medium,
            toolbar_radius: metrics.radius_small,
            toolbar_padding_y: metrics.padding_extra_small,
            toolbar_padding_x: metrics.padding_small,
            toolbar_min_height: metrics.min_toolbar_height.max(text_height),
            menubar_radius: metrics.radius_zero,
            menubar_padding_y: metrics.padding_extra_small,
            menubar_padding_x: metrics.padding_medium,
        }
    }
}

/// Main menu bar and drop-down menu sizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct MenuBarTokens {
    /// Spacing between menu bar items.
    pub spacing: u32,
    /// Horizontal padding of the bar.
    pub padding_horizontal: u32,
    /// Border width of the bar and the menu panel.
    pub border_width: u32,
    /// Minimum height of the bar.
    pub min_height: u32,
    /// Vertical padding of bar items.
    pub item_padding_y: u32,
    /// Horizontal padding of bar items.
    pub item_padding_x: u32,
    /// Vertical padding of the menu panel.
    pub menu_padding_y: u32,
    /// Vertical padding of menu items.
    pub menu_item_padding_y: u32,
    /// Horizontal padding of menu items.
    pub menu_item_padding_x: u32,
    /// Vertical margin of separators.
    pub separator_margin_y: u32,
    /// Horizontal margin of separators.
    pub separator_margin_x: u32,
}

impl MenuBarTokens {
    /// Derive menu bar sizing from metrics.
    pub fn from_metrics(metrics: &Metrics) -> Self {
        Self {
            spacing: metrics.padding_small,
            padding_horizontal: metrics.padding_small,
            border_width: metrics.border_width_small,
            min_height: metrics.min_menubar_height,
            item_padding_y: metrics.padding_extra_small,
            item_padding_x: metrics.padding_large,
            menu_padding_y: metrics.padding_small,
            menu_item_padding_y: metrics.padding_small,
            menu_item_padding_x: metrics.padding_extra_large,
            separator_margin_y: metrics.padding_extra_small,
            separator_margin_x: metrics.padding_medium,
        }
    }
}

/// Cell container sizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CellContainerTokens {
    /// Frame border width.
    pub border_width: u32,
    /// Frame corner radius.
    pub border_radius: u32,
    /// Inner padding of the frame.
    pub padding: u32,
    /// Gap between the header and the body.
    pub header_margin_bottom: u32,
}

impl CellContainerTokens {
    /// Derive cell container sizing from metrics.
    pub fn from_metrics(metrics: &Metrics) -> Self {
        Self {
            border_width: metrics.border_width_small,
            border_radius: metrics.radius_medium,
            padding: metrics.padding_medium,
            header_margin_bottom: metrics.padding_small,
        }
    }
}

/// Cell gutter sizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CellGutterTokens {
    /// Gutter width.
    pub width: u32,
    /// Width of the separating edge.
    pub border_width: u32,
    /// Horizontal padding.
    pub padding_x: u32,
    /// Minimum width of line-number labels.
    pub label_min_width: u32,
}

impl CellGutterTokens {
    /// Derive cell gutter sizing from metrics.
    pub fn from_metrics(metrics: &Metrics) -> Self {
        Self {
            width: metrics.gutter_width,
            border_width: metrics.border_width_small,
            padding_x: metrics.padding_small,
            label_min_width: GUTTER_LABEL_MIN_WIDTH,
        }
    }
}

/// Sidebar dock sizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SidebarTokens {
    /// Initial dock width.
    pub default_width: u32,
    /// Narrowest dock width.
    pub min_width: u32,
    /// Widest dock width.
    pub max_width: u32,
    /// Width of dock and toolbar borders.
    pub border_width: u32,
    /// Padding of the dock title and sidebar toolbar.
    pub title_padding: u32,
    /// Corner radius of action rows.
    pub action_row_radius: u32,
    /// Vertical padding of action rows.
    pub action_row_padding_y: u32,
    /// Horizontal padding of action rows.
    pub action_row_padding_x: u32,
}

impl SidebarTokens {
    /// Derive sidebar sizing from metrics.
    pub fn from_metrics(metrics: &Metrics) -> Self {
        Self {
            default_width: metrics.sidebar_default_width,
            min_width: metrics.sidebar_min_width,
            max_width: metrics.sidebar_max_width,
            border_width: metrics.border_width_small,
            title_padding: metrics.padding_small,
            action_row_radius: metrics.radius_small,
            action_row_padding_y: metrics.padding_extra_small,
            action_row_padding_x: metrics.padding_small,
        }
    }

    /// Bound a requested dock width by the minimum and maximum widths.
    pub fn clamp_width(&self, width: u32) -> u32 {
        let (low, high) = if self.min_width <= self.max_width {
            (self.min_width, self.max_width)
        } else {
            (self.max_width, self.min_width)
        };
        width.clamp(low, high)
    }
}

/// Status bar sizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct StatusBarTokens {
    /// Width of the top border.
    pub border_width: u32,
    /// Horizontal padding.
    pub padding_x: u32,
    /// Minimum bar height.
    pub min_height: u32,
}

impl StatusBarTokens {
    /// Derive status bar sizing from metrics.
    pub fn from_metrics(metrics: &Metrics) -> Self {
        Self {
            border_width: metrics.border_width_small,
            padding_x: metrics.padding_medium,
            min_height: metrics.min_statusbar_height,
        }
    }
}

/// Button sizing for the given metrics.
pub fn button_tokens(metrics: &Metrics) -> ButtonTokens {
    ButtonTokens::from_metrics(metrics)
}

/// Menu bar sizing for the given metrics.
pub fn menubar_tokens(metrics: &Metrics) -> MenuBarTokens {
    MenuBarTokens::from_metrics(metrics)
}

/// Cell container sizing for the given metrics.
pub fn cell_container_tokens(metrics: &Metrics) -> CellContainerTokens {
    CellContainerTokens::from_metrics(metrics)
}

/// Cell gutter sizing for the given metrics.
pub fn cell_gutter_tokens(metrics: &Metrics) -> CellGutterTokens {
    CellGutterTokens::from_metrics(metrics)
}

/// Sidebar sizing for the given metrics.
pub fn sidebar_tokens(metrics: &Metrics) -> SidebarTokens {
    SidebarTokens::from_metrics(metrics)
}

/// Status bar sizing for the given metrics.
pub fn statusbar_tokens(metrics: &Metrics) -> StatusBarTokens {
    StatusBarTokens::from_metrics(metrics)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::build_metrics_for_ui_font;

    #[test]
    fn test_button_tokens_follow_metrics() {
        let tokens = button_tokens(&Metrics::default());
        assert_eq!(tokens.radius, 4);
        assert_eq!(tokens.padding_y, 4);
        assert_eq!(tokens.padding_x, 6);
        assert_eq!(tokens.menubar_radius, 0);
        // font_size_large 14 + 2 * 2
        assert_eq!(tokens.toolbar_min_height, 18);
    }

    #[test]
    fn test_toolbar_height_grows_with_font() {
        let small = button_tokens(&build_metrics_for_ui_font(10, None));
        let large = button_tokens(&build_metrics_for_ui_font(18, None));
        assert!(large.toolbar_min_height > small.toolbar_min_height);
    }

    #[test]
    fn test_toolbar_height_saturates() {
        let metrics = Metrics {
            padding_extra_small: u32::MAX,
            ..build_metrics_for_ui_font(u32::MAX, None)
        };
        assert_eq!(button_tokens(&metrics).toolbar_min_height, u32::MAX);
    }

    #[test]
    fn test_sidebar_clamp_width() {
        let tokens = sidebar_tokens(&Metrics::default());
        assert_eq!(tokens.clamp_width(100), 220);
        assert_eq!(tokens.clamp_width(320), 320);
        assert_eq!(tokens.clamp_width(900), 560);
    }

    #[test]
    fn test_sidebar_clamp_with_inverted_bounds() {
        let metrics = Metrics {
            sidebar_min_width: 600,
            sidebar_max_width: 200,
            ..Metrics::default()
        };
        let tokens = sidebar_tokens(&metrics);
        assert_eq!(tokens.clamp_width(100), 200);
        assert_eq!(tokens.clamp_width(700), 600);
    }

    #[test]
    fn test_small_widget_tokens() {
        let metrics = Metrics::default();
        assert_eq!(menubar_tokens(&metrics).menu_item_padding_x, 12);
        assert_eq!(cell_container_tokens(&metrics).padding, 6);
        assert_eq!(cell_gutter_tokens(&metrics).label_min_width, 32);
        assert_eq!(statusbar_tokens(&metrics).min_height, 32);
    }
}
