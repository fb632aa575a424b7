//! Spacing, sizing and typography metrics shared by every stylesheet generator.

use serde::{Deserialize, Serialize};

/// Offset subtracted from the UI point size to obtain the small font size.
pub const DEFAULT_SMALL_FONT_OFFSET: u32 = 2;
/// Offset added to the UI point size to obtain the large font size.
pub const DEFAULT_LARGE_FONT_OFFSET: u32 = 2;
/// Smallest font size the derivation will ever produce.
pub const MIN_FONT_SIZE: u32 = 6;

/// Spacing, sizing and typography values shared by all styles.
///
/// Values are plain pixel (or point, for fonts) counts. A `Metrics` is never
/// mutated in place; the derivation helpers return new instances.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Metrics {
    /// Square corners.
    pub radius_zero: u32,
    /// Small corner radius.
    pub radius_small: u32,
    /// Medium corner radius.
    pub radius_medium: u32,
    /// Large corner radius.
    pub radius_large: u32,

    /// No padding.
    pub padding_zero: u32,
    /// Extra small padding.
    pub padding_extra_small: u32,
    /// Small padding.
    pub padding_small: u32,
    /// Medium padding.
    pub padding_medium: u32,
    /// Large padding.
    pub padding_large: u32,
    /// Extra large padding.
    pub padding_extra_large: u32,

    /// Width of the cell gutter.
    pub gutter_width: u32,
    /// Minimum toolbar height.
    pub min_toolbar_height: u32,
    /// Minimum menu bar height.
    pub min_menubar_height: u32,
    /// Minimum status bar height.
    pub min_statusbar_height: u32,

    /// Initial sidebar dock width.
    pub sidebar_default_width: u32,
    /// Narrowest sidebar dock width.
    pub sidebar_min_width: u32,
    /// Widest sidebar dock width.
    pub sidebar_max_width: u32,

    /// QSS `font-family` value, possibly a comma separated fallback list.
    pub font_family: String,
    /// Small UI font size in points.
    pub font_size_small: u32,
    /// Medium UI font size in points.
    pub font_size_medium: u32,
    /// Large UI font size in points.
    pub font_size_large: u32,
    /// Font size of cell bodies. Not affected by the UI font size.
    pub cell_body_font_size: u32,

    /// No border.
    pub border_width_zero: u32,
    /// Thin border.
    pub border_width_small: u32,
    /// Medium border.
    pub border_width_medium: u32,
    /// Thick border.
    pub border_width_large: u32,
}

impl Default for Metrics {
    fn default() -> Self {
        Self {
            radius_zero: 0,
            radius_small: 2,
            radius_medium: 4,
            radius_large: 6,

            padding_zero: 0,
            padding_extra_small: 2,
            padding_small: 4,
            padding_medium: 6,
            padding_large: 8,
            padding_extra_large: 12,

            gutter_width: 12,
            min_toolbar_height: 5,
            min_menubar_height: 5,
            min_statusbar_height: 32,

            sidebar_default_width: 320,
            sidebar_min_width: 220,
            sidebar_max_width: 560,

            font_family: "Segoe UI, 'Noto Sans', sans-serif".to_string(),
            font_size_small: 11,
            font_size_medium: 12,
            font_size_large: 14,
            cell_body_font_size: 12,

            border_width_zero: 0,
            border_width_small: 1,
            border_width_medium: 2,
            border_width_large: 4,
        }
    }
}

impl Metrics {
    /// Return a copy with font sizes derived from the given UI point size.
    ///
    /// `small = max(point_size - small_offset, 6)`, `medium = point_size` and
    /// `large = point_size + large_offset`. The cell body size is kept.
    pub fn derive_for_font_size(
        &self,
        point_size: u32,
        small_offset: u32,
        large_offset: u32,
    ) -> Metrics {
        Metrics {
            font_size_small: point_size.saturating_sub(small_offset).max(MIN_FONT_SIZE),
            font_size_medium: point_size,
            font_size_large: point_size.saturating_add(large_offset),
            ..self.clone()
        }
    }

    /// Return a copy using the given font family.
    pub fn with_font_family(&self, family: impl Into<String>) -> Metrics {
        Metrics {
            font_family: family.into(),
            ..self.clone()
        }
    }

    /// Whether every scale (radius, padding, border width, font size) is
    /// monotonically non-decreasing from its smallest to its largest step.
    pub fn is_graduated(&self) -> bool {
        fn ordered(steps: &[u32]) -> bool {
            steps.windows(2).all(|pair| pair[0] <= pair[1])
        }

        ordered(&[
            self.radius_zero,
            self.radius_small,
            self.radius_medium,
            self.radius_large,
        ]) && ordered(&[
            self.padding_zero,
            self.padding_extra_small,
            self.padding_small,
            self.padding_medium,
            self.padding_large,
            self.padding_extra_large,
        ]) && ordered(&[
            self.border_width_zero,
            self.border_width_small,
            self.border_width_medium,
            self.border_width_large,
        ]) && ordered(&[
            self.font_size_small,
            self.font_size_medium,
            self.font_size_large,
        ])
    }
}

/// Build metrics adjusted to the requested UI font size using the default offsets.
///
/// `template` defaults to [Metrics::default] and is left untouched.
pub fn build_metrics_for_ui_font(point_size: u32, template: Option<&Metrics>) -> Metrics {
    match template {
        Some(base) => base.derive_for_font_size(
            point_size,
            DEFAULT_SMALL_FONT_OFFSET,
            DEFAULT_LARGE_FONT_OFFSET,
        ),
        None => Metrics::default().derive_for_font_size(
            point_size,
            DEFAULT_SMALL_FONT_OFFSET,
            DEFAULT_LARGE_FONT_OFFSET,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_metrics() {
        let metrics = Metrics::default();
        assert_eq!(metrics.font_size_medium, 12);
        assert_eq!(metrics.sidebar_default_width, 320);
        assert_eq!(metrics.min_statusbar_height, 32);
        assert!(metrics.is_graduated());
    }

    #[test]
    fn test_build_metrics_for_ui_font() {
        let metrics = build_metrics_for_ui_font(14, None);
        assert_eq!(metrics.font_size_small, 12);
        assert_eq!(metrics.font_size_medium, 14);
        assert_eq!(metrics.font_size_large, 16);
        assert_eq!(metrics.cell_body_font_size, 12);
    }

    #[test]
    fn test_small_font_floor() {
        let metrics = build_metrics_for_ui_font(6, None);
        assert_eq!(metrics.font_size_small, 6);
        assert_eq!(metrics.font_size_large, 8);

        let tiny = Metrics::default().derive_for_font_size(3, 10, 0);
        assert_eq!(tiny.font_size_small, MIN_FONT_SIZE);
    }

    #[test]
    fn test_derivation_leaves_template_unchanged() {
        let template = Metrics {
            gutter_width: 20,
            ..Metrics::default()
        };
        let derived = build_metrics_for_ui_font(16, Some(&template));

        assert_eq!(template.font_size_medium, 12);
        assert_eq!(derived.font_size_medium, 16);
        assert_eq!(derived.gutter_width, 20);
        assert_eq!(derived.font_family, template.font_family);
    }

    #[test]
    fn test_with_font_family_replaces_wholesale() {
        let metrics = Metrics::default().with_font_family("Inter");
        assert_eq!(metrics.font_family, "Inter");
        assert_eq!(metrics.font_size_medium, 12);
    }

    #[test]
    fn test_is_graduated_detects_inverted_scale() {
        let metrics = Metrics {
            radius_small: 10,
            ..Metrics::default()
        };
        assert!(!metrics.is_graduated());
    }
}
