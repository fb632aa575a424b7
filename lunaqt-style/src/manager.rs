//! # Style Manager
//!
//! Owns the style state of a running application (mode and UI font
//! preferences) and re-installs the stylesheet whenever that state actually
//! changes. Requests that leave the state unchanged are no-ops and do not
//! touch the sink.

use lunaqt_theme::config::StyleConfig;
use lunaqt_theme::metrics::Metrics;
use lunaqt_theme::mode::ThemeMode;
use lunaqt_theme::preferences::{FontCatalog, FontSizeBounds, StylePreferences};
use lunaqt_theme::theme::{get_theme, Theme};

use crate::assembler::{StyleSink, StylesheetAssembler};

/// Runtime style state bound to one stylesheet sink.
///
/// ```rust
/// use lunaqt_style::assembler::StylesheetSlot;
/// use lunaqt_style::manager::StyleManager;
/// use lunaqt_theme::config::StyleConfig;
/// use lunaqt_theme::mode::ThemeMode;
///
/// let mut manager = StyleManager::new(StylesheetSlot::new(), &StyleConfig::default());
/// assert!(manager.switch_theme(ThemeMode::Dark));
/// assert!(!manager.switch_theme(ThemeMode::Dark));
/// assert_eq!(manager.sink().writes(), 2);
/// ```
#[derive(Debug)]
pub struct StyleManager<S: StyleSink> {
    sink: S,
    assembler: StylesheetAssembler,
    mode: ThemeMode,
    preferences: StylePreferences,
    bounds: FontSizeBounds,
    catalog: FontCatalog,
    template: Metrics,
    theme: Theme,
}

impl<S: StyleSink> StyleManager<S> {
    /// Create a manager with the built-in generators and install the startup stylesheet.
    pub fn new(sink: S, config: &StyleConfig) -> Self {
        Self::with_assembler(sink, config, StylesheetAssembler::new())
    }

    /// Create a manager with a custom assembler and install the startup stylesheet.
    pub fn with_assembler(sink: S, config: &StyleConfig, assembler: StylesheetAssembler) -> Self {
        let preferences = config.preferences();
        let template = Metrics::default();
        let theme = get_theme(config.mode, Some(preferences.build_metrics(Some(&template))));

        let mut manager = Self {
            sink,
            assembler,
            mode: config.mode,
            preferences,
            bounds: config.bounds(),
            catalog: config.catalog(),
            template,
            theme,
        };
        log::debug!(
            "Starting in {} mode with {} {}pt",
            manager.mode,
            manager.preferences.ui_font_family,
            manager.preferences.ui_font_size
        );
        manager.install();
        manager
    }

    /// Replace the metrics every theme is derived from and re-install.
    pub fn with_template(mut self, template: Metrics) -> Self {
        self.template = template;
        self.rebuild();
        self
    }

    /// Switch to `mode`. Returns `false` when already in that mode.
    pub fn switch_theme(&mut self, mode: ThemeMode) -> bool {
        if self.mode == mode {
            log::debug!("Already in {} mode", mode);
            return false;
        }

        log::debug!("Switching theme {} -> {}", self.mode, mode);
        self.mode = mode;
        self.rebuild();
        true
    }

    /// Switch to the opposite mode.
    pub fn toggle_theme(&mut self) -> bool {
        self.switch_theme(self.mode.toggle())
    }

    /// Change the UI font size, clamped to the configured bounds.
    ///
    /// Returns `false` when the clamped size equals the current one.
    pub fn change_font_size(&mut self, size: u32) -> bool {
        let clamped = self.bounds.clamp(size);
        if clamped == self.preferences.ui_font_size {
            log::debug!("Font size {}pt unchanged (requested {}pt)", clamped, size);
            return false;
        }

        log::debug!(
            "Changing font size {}pt -> {}pt",
            self.preferences.ui_font_size,
            clamped
        );
        self.preferences = self.preferences.with_font_size(clamped, &self.bounds);
        self.rebuild();
        true
    }

    /// Grow the UI font by one step.
    pub fn increase_font_size(&mut self) -> bool {
        let size = self.preferences.ui_font_size.saturating_add(self.bounds.step);
        self.change_font_size(size)
    }

    /// Shrink the UI font by one step.
    pub fn decrease_font_size(&mut self) -> bool {
        let size = self.preferences.ui_font_size.saturating_sub(self.bounds.step);
        self.change_font_size(size)
    }

    /// Change the UI font family, resolved through the font catalog.
    ///
    /// Returns `false` when the resolved family equals the current one.
    pub fn change_font_family(&mut self, family: &str) -> bool {
        let resolved = self.catalog.resolve(family);
        if resolved == self.preferences.ui_font_family {
            log::debug!("Font family '{}' unchanged", resolved);
            return false;
        }

        log::debug!(
            "Changing font family '{}' -> '{}'",
            self.preferences.ui_font_family,
            resolved
        );
        self.preferences = self
            .preferences
            .with_font_family(&resolved, &self.catalog);
        self.rebuild();
        true
    }

    /// Rebuild and re-install the stylesheet for the current state.
    pub fn reapply(&mut self) {
        self.rebuild();
    }

    /// The current mode.
    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// The theme of the installed stylesheet.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// The current font preferences.
    pub fn preferences(&self) -> &StylePreferences {
        &self.preferences
    }

    /// The font size bounds.
    pub fn bounds(&self) -> FontSizeBounds {
        self.bounds
    }

    /// The font families offered to the user.
    pub fn catalog(&self) -> &FontCatalog {
        &self.catalog
    }

    /// The sink the stylesheet is installed on.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Release the sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    fn rebuild(&mut self) {
        let metrics = self.preferences.build_metrics(Some(&self.template));
        self.theme = get_theme(self.mode, Some(metrics));
        self.install();
    }

    fn install(&mut self) {
        self.assembler.apply(&mut self.sink, &self.theme);
    }
}
