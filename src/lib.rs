#![warn(missing_docs)]

//! Theme resolution and Qt stylesheet assembly for the LunaQt notebook shell.

pub use lunaqt_theme as theme;
#[cfg(feature = "style")]
pub use lunaqt_style as style;

/// A "prelude" for users of the lunaqt style engine.
///
/// Importing this module brings into scope the types needed to resolve a
/// theme and install the application stylesheet.
///
/// ```rust
/// use lunaqt::prelude::*;
///
/// let theme = get_theme(ThemeMode::Dark, None);
/// assert_eq!(theme.bg.app, "#1e1e1e");
/// ```
pub mod prelude {
    pub use crate::theme::config::StyleConfig;
    pub use crate::theme::metrics::{build_metrics_for_ui_font, Metrics};
    pub use crate::theme::mode::ThemeMode;
    pub use crate::theme::preferences::{FontCatalog, FontSizeBounds, StylePreferences};
    pub use crate::theme::theme::{get_theme, Theme};
    pub use crate::theme::{ThemeError, ThemeResult};

    #[cfg(feature = "style")]
    pub use crate::style::assembler::{
        apply_global_style, build_application_stylesheet, StyleSink, StylesheetAssembler,
        StylesheetSlot,
    };
    #[cfg(feature = "style")]
    pub use crate::style::generators::StyleGenerator;
    #[cfg(feature = "style")]
    pub use crate::style::manager::StyleManager;
    #[cfg(feature = "style")]
    pub use crate::style::state::{apply_state, CellState, StyledElement};
}
