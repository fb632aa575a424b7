//! # Stylesheet Assembly
//!
//! The assembler concatenates the base block and every generator fragment, in
//! a fixed order, into one application stylesheet. Installing it is the only
//! side effect of the engine and goes through a [StyleSink], which replaces
//! the whole stylesheet on every write.

use std::fmt;

use lunaqt_theme::metrics::Metrics;
use lunaqt_theme::mode::ThemeMode;
use lunaqt_theme::theme::{get_theme, Theme};

use crate::base::base_style;
use crate::generators::{default_generators, BoxedGenerator, StyleGenerator};
use crate::rule::BLOCK_SEPARATOR;

/// Receiver of the assembled application stylesheet.
///
/// The GUI layer implements this for its application object. Every call is a
/// full replacement of the previous stylesheet.
pub trait StyleSink {
    /// Install `stylesheet`, replacing whatever was installed before.
    fn set_stylesheet(&mut self, stylesheet: &str);
}

impl<S: StyleSink + ?Sized> StyleSink for &mut S {
    fn set_stylesheet(&mut self, stylesheet: &str) {
        (**self).set_stylesheet(stylesheet)
    }
}

impl<S: StyleSink + ?Sized> StyleSink for Box<S> {
    fn set_stylesheet(&mut self, stylesheet: &str) {
        (**self).set_stylesheet(stylesheet)
    }
}

/// An in-memory sink holding the current stylesheet and counting writes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StylesheetSlot {
    current: Option<String>,
    writes: usize,
}

impl StylesheetSlot {
    /// Create an empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// The installed stylesheet, if any.
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Number of stylesheets installed so far.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl StyleSink for StylesheetSlot {
    fn set_stylesheet(&mut self, stylesheet: &str) {
        self.current = Some(stylesheet.to_string());
        self.writes += 1;
    }
}

/// Ordered list of generators rendered after the base block.
pub struct StylesheetAssembler {
    generators: Vec<BoxedGenerator>,
}

impl fmt::Debug for StylesheetAssembler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StylesheetAssembler")
            .field("generators", &self.generator_names())
            .finish()
    }
}

impl Default for StylesheetAssembler {
    fn default() -> Self {
        Self::new()
    }
}

impl StylesheetAssembler {
    /// Create an assembler with the built-in generators.
    pub fn new() -> Self {
        Self {
            generators: default_generators(),
        }
    }

    /// Create an assembler with no generators; only the base block is emitted.
    pub fn empty() -> Self {
        Self {
            generators: Vec::new(),
        }
    }

    /// Append a generator after the existing ones.
    pub fn with_generator<G>(mut self, generator: G) -> Self
    where
        G: StyleGenerator + Send + Sync + 'static,
    {
        self.generators.push(Box::new(generator));
        self
    }

    /// Names of the generators in assembly order.
    pub fn generator_names(&self) -> Vec<&'static str> {
        self.generators.iter().map(|g| g.name()).collect()
    }

    /// Render the base block followed by every generator fragment.
    pub fn build(&self, theme: &Theme) -> String {
        let mut blocks = Vec::with_capacity(self.generators.len() + 1);
        blocks.push(base_style(theme));
        blocks.extend(
            self.generators
                .iter()
                .map(|generator| generator.qss(theme.mode, Some(theme))),
        );
        blocks.join(BLOCK_SEPARATOR)
    }

    /// Build the stylesheet for `theme` and install it on `sink`.
    pub fn apply<S>(&self, sink: &mut S, theme: &Theme)
    where
        S: StyleSink + ?Sized,
    {
        let stylesheet = self.build(theme);
        log::debug!(
            "Installing {} stylesheet ({} bytes, {} generators)",
            theme.mode,
            stylesheet.len(),
            self.generators.len()
        );
        sink.set_stylesheet(&stylesheet);
    }
}

/// Build the full application stylesheet.
///
/// A given `theme` takes precedence; otherwise one is resolved from `mode`
/// and `metrics`.
pub fn build_application_stylesheet(
    mode: ThemeMode,
    theme: Option<&Theme>,
    metrics: Option<Metrics>,
) -> String {
    let assembler = StylesheetAssembler::new();
    match theme {
        Some(theme) => assembler.build(theme),
        None => assembler.build(&get_theme(mode, metrics)),
    }
}

/// Build the application stylesheet for `mode` and install it on `sink`.
pub fn apply_global_style<S>(sink: &mut S, mode: ThemeMode, metrics: Option<Metrics>)
where
    S: StyleSink + ?Sized,
{
    StylesheetAssembler::new().apply(sink, &get_theme(mode, metrics));
}
