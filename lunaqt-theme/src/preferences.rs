//! # Style Preferences
//!
//! User-facing knobs that influence the generated stylesheet: the UI font
//! family and the UI font point size. Sizes are always clamped to
//! [FontSizeBounds] and families are always resolved through a
//! [FontCatalog], so every [StylePreferences] built with
//! [StylePreferences::new] or its `with_*` methods stays valid.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::metrics::{build_metrics_for_ui_font, Metrics};

/// Default UI font point size.
pub const DEFAULT_UI_FONT_POINT_SIZE: u32 = 12;
/// Smallest selectable UI font point size.
pub const MIN_UI_FONT_POINT_SIZE: u32 = 10;
/// Largest selectable UI font point size.
pub const MAX_UI_FONT_POINT_SIZE: u32 = 18;
/// Increment used by font size controls.
pub const FONT_SIZE_STEP: u32 = 1;
/// Default UI font family.
pub const DEFAULT_UI_FONT: &str = "Noto Sans";
/// Families offered when no catalog is configured.
pub const DEFAULT_FONT_FAMILIES: [&str; 4] = ["Noto Sans", "Inter", "Roboto", "Segoe UI"];

/// Inclusive font size range with a control step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct FontSizeBounds {
    /// Smallest allowed size.
    pub min: u32,
    /// Largest allowed size.
    pub max: u32,
    /// Increment used by size controls.
    pub step: u32,
}

impl Default for FontSizeBounds {
    fn default() -> Self {
        Self {
            min: MIN_UI_FONT_POINT_SIZE,
            max: MAX_UI_FONT_POINT_SIZE,
            step: FONT_SIZE_STEP,
        }
    }
}

impl FontSizeBounds {
    /// Create bounds, swapping `min` and `max` when given in reverse order.
    pub fn new(min: u32, max: u32, step: u32) -> Self {
        Self {
            min: min.min(max),
            max: max.max(min),
            step: step.max(1),
        }
    }

    /// Clamp a size into the bounds.
    pub fn clamp(&self, size: u32) -> u32 {
        let normalized = Self::new(self.min, self.max, self.step);
        size.clamp(normalized.min, normalized.max)
    }

    /// Whether the size is inside the bounds.
    pub fn contains(&self, size: u32) -> bool {
        self.clamp(size) == size
    }
}

/// Clamp the provided UI font size to the default bounds.
pub fn clamp_ui_font_point_size(size: u32) -> u32 {
    FontSizeBounds::default().clamp(size)
}

/// Ordered set of font families available to the UI.
///
/// An empty catalog behaves as the default family list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct FontCatalog {
    families: IndexSet<String>,
}

impl Default for FontCatalog {
    fn default() -> Self {
        Self::new(DEFAULT_FONT_FAMILIES)
    }
}

impl From<Vec<String>> for FontCatalog {
    fn from(families: Vec<String>) -> Self {
        Self::new(families)
    }
}

impl From<FontCatalog> for Vec<String> {
    fn from(catalog: FontCatalog) -> Self {
        catalog.families.into_iter().collect()
    }
}

impl FontCatalog {
    /// Build a catalog from family names. Duplicates and blank names are dropped.
    pub fn new<I, S>(families: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let families = families
            .into_iter()
            .map(|family| {
                let family: String = family.into();
                family.trim().to_string()
            })
            .filter(|family| !family.is_empty())
            .collect();
        Self { families }
    }

    /// Whether the family is in the catalog.
    pub fn contains(&self, family: &str) -> bool {
        self.families.contains(family)
    }

    /// Iterate over the families in order.
    pub fn families(&self) -> impl Iterator<Item = &str> {
        self.families.iter().map(String::as_str)
    }

    /// Number of families.
    pub fn len(&self) -> usize {
        self.families.len()
    }

    /// Whether the catalog has no families.
    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }

    /// Return `family` if available, otherwise the first available family.
    pub fn resolve(&self, family: &str) -> String {
        let family = family.trim();
        if self.families.contains(family) {
            return family.to_string();
        }

        let Some(fallback) = self.families.first() else {
            return Self::default().resolve(family);
        };
        log::debug!(
            "Font family '{}' is not available, using '{}'",
            family,
            fallback
        );
        fallback.clone()
    }
}

/// The UI font settings that feed the metrics.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StylePreferences {
    /// UI font family name.
    pub ui_font_family: String,
    /// UI font point size.
    pub ui_font_size: u32,
}

impl Default for StylePreferences {
    fn default() -> Self {
        Self {
            ui_font_family: DEFAULT_UI_FONT.to_string(),
            ui_font_size: DEFAULT_UI_FONT_POINT_SIZE,
        }
    }
}

impl StylePreferences {
    /// Create preferences with the family resolved through `catalog` and the
    /// size clamped to `bounds`.
    pub fn new(
        family: &str,
        size: u32,
        catalog: &FontCatalog,
        bounds: &FontSizeBounds,
    ) -> Self {
        Self {
            ui_font_family: catalog.resolve(family),
            ui_font_size: bounds.clamp(size),
        }
    }

    /// Return a copy with the font size clamped to `bounds`.
    pub fn with_font_size(&self, size: u32, bounds: &FontSizeBounds) -> Self {
        Self {
            ui_font_size: bounds.clamp(size),
            ..self.clone()
        }
    }

    /// Return a copy with the font family resolved through `catalog`.
    pub fn with_font_family(&self, family: &str, catalog: &FontCatalog) -> Self {
        Self {
            ui_font_family: catalog.resolve(family),
            ..self.clone()
        }
    }

    /// Metrics adjusted to these preferences.
    ///
    /// Font sizes are derived from `ui_font_size` and the font family replaces
    /// the template's family entirely.
    pub fn build_metrics(&self, template: Option<&Metrics>) -> Metrics {
        build_metrics_for_ui_font(self.ui_font_size, template)
            .with_font_family(self.ui_font_family.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_ui_font_point_size() {
        assert_eq!(clamp_ui_font_point_size(5), 10);
        assert_eq!(clamp_ui_font_point_size(10), 10);
        assert_eq!(clamp_ui_font_point_size(14), 14);
        assert_eq!(clamp_ui_font_point_size(18), 18);
        assert_eq!(clamp_ui_font_point_size(25), 18);
    }

    #[test]
    fn test_reversed_bounds_are_swapped() {
        let bounds = FontSizeBounds::new(20, 8, 0);
        assert_eq!(bounds.min, 8);
        assert_eq!(bounds.max, 20);
        assert_eq!(bounds.step, 1);

        let raw = FontSizeBounds {
            min: 20,
            max: 8,
            step: 1,
        };
        assert_eq!(raw.clamp(30), 20);
        assert_eq!(raw.clamp(2), 8);
    }

    #[test]
    fn test_catalog_resolve_falls_back() {
        let catalog = FontCatalog::new(["Inter", "Roboto", "Inter", " "]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.resolve("Roboto"), "Roboto");
        assert_eq!(catalog.resolve("Comic Sans"), "Inter");

        let empty = FontCatalog::new(Vec::<String>::new());
        assert!(empty.is_empty());
        assert_eq!(empty.resolve("Inter"), "Inter");
        assert_eq!(empty.resolve("Papyrus"), DEFAULT_UI_FONT);
    }

    #[test]
    fn test_default_preferences() {
        let prefs = StylePreferences::default();
        assert_eq!(prefs.ui_font_family, "Noto Sans");
        assert_eq!(prefs.ui_font_size, 12);
    }

    #[test]
    fn test_new_validates_inputs() {
        let prefs = StylePreferences::new(
            "Papyrus",
            40,
            &FontCatalog::default(),
            &FontSizeBounds::default(),
        );
        assert_eq!(prefs.ui_font_family, "Noto Sans");
        assert_eq!(prefs.ui_font_size, 18);
    }

    #[test]
    fn test_with_methods_keep_values_valid() {
        let bounds = FontSizeBounds::default();
        let catalog = FontCatalog::new(["Inter", "Roboto"]);
        let prefs = StylePreferences::default()
            .with_font_size(40, &bounds)
            .with_font_family("Papyrus", &catalog);

        assert_eq!(prefs.ui_font_size, 18);
        assert_eq!(prefs.ui_font_family, "Inter");
        assert_eq!(prefs.build_metrics(None).font_size_medium, 18);
        assert_eq!(prefs.with_font_size(2, &bounds).ui_font_size, 10);
    }

    #[test]
    fn test_catalog_deserializes_through_new() {
        let catalog: FontCatalog =
            serde_json::from_str(r#"[" Inter ", "", "Roboto", "Inter", "   "]"#).unwrap();
        assert_eq!(catalog, FontCatalog::new(["Inter", "Roboto"]));
        assert_eq!(catalog.families().collect::<Vec<_>>(), ["Inter", "Roboto"]);

        let json = serde_json::to_string(&catalog).unwrap();
        assert_eq!(json, r#"["Inter","Roboto"]"#);
    }

    #[test]
    fn test_build_metrics_replaces_family() {
        let prefs = StylePreferences::default()
            .with_font_size(14, &FontSizeBounds::default())
            .with_font_family("Inter", &FontCatalog::default());
        let metrics = prefs.build_metrics(None);

        assert_eq!(metrics.font_family, "Inter");
        assert_eq!(metrics.font_size_small, 12);
        assert_eq!(metrics.font_size_medium, 14);
        assert_eq!(metrics.font_size_large, 16);
    }
}
