#![warn(missing_docs)]

//! # LunaQt Style
//!
//! Qt style sheet (QSS) generation for the LunaQt notebook shell.
//!
//! - **[Rule](rule::Rule)**: Builder for one QSS rule block
//! - **[StyleGenerator](generators::StyleGenerator)**: One generator per widget family
//! - **[StylesheetAssembler](assembler::StylesheetAssembler)**: Base block plus fragments, in order
//! - **[StyleSink](assembler::StyleSink)**: Where the assembled stylesheet is installed
//! - **[StyleManager](manager::StyleManager)**: Runtime theme and font switching
//! - **[CellState](state::CellState)**: Widget state matched by attribute selectors
//!
//! ```rust
//! use lunaqt_style::assembler::build_application_stylesheet;
//! use lunaqt_theme::mode::ThemeMode;
//!
//! let qss = build_application_stylesheet(ThemeMode::Dark, None, None);
//! assert!(qss.starts_with("QWidget {\n    background-color: #1e1e1e;"));
//! ```

/// Stylesheet assembly and installation.
pub mod assembler;

/// The application-wide base block.
pub mod base;

/// Per-widget-family stylesheet generators.
pub mod generators;

/// Runtime style state.
pub mod manager;

/// QSS rule builder.
pub mod rule;

/// Widget state carried as dynamic properties.
pub mod state;

pub use assembler::{
    apply_global_style, build_application_stylesheet, StyleSink, StylesheetAssembler,
    StylesheetSlot,
};
pub use generators::StyleGenerator;
pub use manager::StyleManager;
