//! # Stylesheet Generators
//!
//! One generator per widget family. A generator is a pure function from a
//! resolved [Theme] to a QSS fragment: it reads palettes, metrics and the
//! metric-derived widget tokens, and nothing else.

use lunaqt_theme::mode::ThemeMode;
use lunaqt_theme::theme::{get_theme, Theme};

pub mod buttons;
pub mod cell_container;
pub mod cell_gutter;
pub mod menubar;
pub mod sidebars;
pub mod statusbar;

pub use buttons::ButtonStyle;
pub use cell_container::CellContainerStyle;
pub use cell_gutter::CellGutterStyle;
pub use menubar::MenuBarStyle;
pub use sidebars::SidebarStyle;
pub use statusbar::StatusBarStyle;

/// A boxed generator as held by the assembler.
pub type BoxedGenerator = Box<dyn StyleGenerator + Send + Sync>;

/// A producer of one stylesheet fragment.
pub trait StyleGenerator {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Render the fragment for a resolved theme.
    fn generate(&self, theme: &Theme) -> String;

    /// Render the fragment, resolving a default-metrics theme for `mode` when
    /// no theme is given. A given theme takes precedence over `mode`.
    fn qss(&self, mode: ThemeMode, theme: Option<&Theme>) -> String {
        match theme {
            Some(theme) => self.generate(theme),
            None => self.generate(&get_theme(mode, None)),
        }
    }
}

/// The built-in generators in assembly order.
pub fn default_generators() -> Vec<BoxedGenerator> {
    vec![
        Box::new(ButtonStyle),
        Box::new(CellContainerStyle),
        Box::new(CellGutterStyle),
        Box::new(MenuBarStyle),
        Box::new(SidebarStyle),
        Box::new(StatusBarStyle),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_generator_order() {
        let names: Vec<&str> = default_generators().iter().map(|g| g.name()).collect();
        assert_eq!(
            names,
            vec![
                "buttons",
                "cell_container",
                "cell_gutter",
                "menubar",
                "sidebars",
                "statusbar"
            ]
        );
    }

    #[test]
    fn test_given_theme_wins_over_mode() {
        let light = get_theme(ThemeMode::Light, None);
        for generator in default_generators() {
            assert_eq!(
                generator.qss(ThemeMode::Dark, Some(&light)),
                generator.qss(ThemeMode::Light, None),
                "{}",
                generator.name()
            );
        }
    }

    #[test]
    fn test_generators_are_deterministic() {
        let theme = get_theme(ThemeMode::Dark, None);
        for generator in default_generators() {
            let first = generator.generate(&theme);
            assert!(!first.is_empty());
            assert_eq!(first, generator.generate(&theme));
        }
    }
}
