//! # Mode-Aware Color Tokens
//!
//! Every color of the application is declared here exactly once, with a light
//! and a dark value. Each token group is generated together with its resolved
//! palette by `token_group!`, so a palette always has the same field names as
//! the tokens it was resolved from.

use serde::{Deserialize, Serialize};

use crate::color::ModeAwareColor;
use crate::mode::ThemeMode;

/// Declare a token group and its resolved palette from one field list.
///
/// The generated token struct holds [ModeAwareColor] fields, the palette holds
/// the resolved `String` values. Both get the same field names and docs.
macro_rules! token_group {
    (
        $(#[$tokens_meta:meta])*
        $tokens:ident => $(#[$palette_meta:meta])* $palette:ident {
            $( $(#[$field_meta:meta])* $field:ident ),* $(,)?
        }
    ) => {
        $(#[$tokens_meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
        pub struct $tokens {
            $( $(#[$field_meta])* pub $field: ModeAwareColor, )*
        }

        $(#[$palette_meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $palette {
            $( $(#[$field_meta])* pub $field: String, )*
        }

        impl $tokens {
            /// Resolve every token of the group for the given mode.
            pub fn resolve(&self, mode: ThemeMode) -> $palette {
                $palette {
                    $( $field: self.$field.value_for(mode).to_string(), )*
                }
            }

            /// Field names with their declarations, in declaration order.
            pub fn fields(&self) -> Vec<(&'static str, ModeAwareColor)> {
                vec![$( (stringify!($field), self.$field), )*]
            }
        }

        impl $palette {
            /// Field names with their resolved values, in declaration order.
            pub fn entries(&self) -> Vec<(&'static str, &str)> {
                vec![$( (stringify!($field), self.$field.as_str()), )*]
            }
        }
    };
}

token_group! {
    /// Background colors of the application surfaces.
    BackgroundTokens =>
    /// Resolved background colors.
    BackgroundPalette {
        /// Main window background.
        app,
        /// Main menu bar.
        menubar,
        /// Status bar.
        statusbar,
        /// Combo box drop-downs.
        dropdown,
        /// Notebook cell body.
        cell,
        /// Cell gutter.
        cell_gutter,
        /// Main toolbar.
        toolbar,
        /// Sidebar dock title bar.
        sidebar_header,
        /// Sidebar dock panel.
        sidebar_content,
        /// Toolbar strip inside a sidebar.
        sidebar_toolbar,
    }
}

token_group! {
    /// Border colors.
    BorderTokens =>
    /// Resolved border colors.
    BorderPalette {
        /// Low-contrast separators.
        subtle,
        /// Emphasized frames.
        strong,
        /// Focus and accent borders.
        highlight,
        /// Cell container frame.
        cell,
        /// Cell gutter edge.
        cell_gutter,
        /// Frame of the focused cell.
        cell_in_focus,
    }
}

token_group! {
    /// Text colors.
    TextTokens =>
    /// Resolved text colors.
    TextPalette {
        /// Body text.
        primary,
        /// Secondary labels.
        secondary,
        /// De-emphasized text such as line numbers.
        muted,
        /// Warning messages.
        warning,
    }
}

token_group! {
    /// Colors of item views and text editors embedded in cells.
    ViewportTokens =>
    /// Resolved viewport colors.
    ViewportPalette {
        /// Viewport background.
        base,
        /// Alternating row background.
        alternate,
        /// Selection background.
        selection,
        /// Selected text.
        selection_text,
    }
}

token_group! {
    /// Colors of one push button variant.
    ButtonPaletteTokens =>
    /// Resolved colors of one push button variant.
    ButtonPalette {
        /// Idle background.
        normal,
        /// Hovered background.
        hover,
        /// Pressed and checked background.
        pressed,
        /// Disabled background and border.
        disabled,
        /// Idle border.
        border,
        /// Label color.
        text,
        /// Focus and checked border.
        focus,
    }
}

token_group! {
    /// Colors of the main menu and its drop-down menus.
    MenuColorTokens =>
    /// Resolved menu colors.
    MenuPalette {
        /// Menu bar and menu panel background.
        background,
        /// Item text.
        text,
        /// Hovered or selected item background.
        item_hover,
        /// Separator line.
        separator,
    }
}

token_group! {
    /// Colors of the main status bar.
    StatusBarColorTokens =>
    /// Resolved status bar colors.
    StatusBarPalette {
        /// Bar background.
        background,
        /// Message text.
        text,
        /// Top border line.
        border_top,
        /// Warning label text.
        warning,
    }
}

/// The button variants, each resolved independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ButtonTokenSet {
    /// Default dialog and panel buttons.
    pub primary: ButtonPaletteTokens,
    /// Buttons placed in the main menu bar.
    pub menubar: ButtonPaletteTokens,
    /// Flat toolbar buttons.
    pub toolbar: ButtonPaletteTokens,
    /// Destructive actions.
    pub warning: ButtonPaletteTokens,
}

/// Resolved palettes of every button variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ButtonPalettes {
    /// Default dialog and panel buttons.
    pub primary: ButtonPalette,
    /// Buttons placed in the main menu bar.
    pub menubar: ButtonPalette,
    /// Flat toolbar buttons.
    pub toolbar: ButtonPalette,
    /// Destructive actions.
    pub warning: ButtonPalette,
}

impl ButtonTokenSet {
    /// Resolve every button variant for the given mode.
    pub fn resolve(&self, mode: ThemeMode) -> ButtonPalettes {
        ButtonPalettes {
            primary: self.primary.resolve(mode),
            menubar: self.menubar.resolve(mode),
            toolbar: self.toolbar.resolve(mode),
            warning: self.warning.resolve(mode),
        }
    }

    /// Variant names with their tokens.
    pub fn variants(&self) -> [(&'static str, &ButtonPaletteTokens); 4] {
        [
            ("primary", &self.primary),
            ("menubar", &self.menubar),
            ("toolbar", &self.toolbar),
            ("warning", &self.warning),
        ]
    }
}

/// Background tokens.
pub const BACKGROUND: BackgroundTokens = BackgroundTokens {
    app: ModeAwareColor::new("#f4f4f4", "#1e1e1e"),
    menubar: ModeAwareColor::new("#ececec", "#2b2b2b"),
    statusbar: ModeAwareColor::new("#e8e8e8", "#252525"),
    dropdown: ModeAwareColor::new("#ffffff", "#333333"),
    cell: ModeAwareColor::new("#ffffff", "#1f1f1f"),
    cell_gutter: ModeAwareColor::new("#f0f0f0", "#181818"),
    toolbar: ModeAwareColor::new("#ededed", "#2a2a2a"),
    sidebar_header: ModeAwareColor::new("#e6e6e6", "#2a2a2a"),
    sidebar_content: ModeAwareColor::new("#f0f0f0", "#262626"),
    sidebar_toolbar: ModeAwareColor::new("#e4e4e4", "#333333"),
};

/// Border tokens.
pub const BORDER: BorderTokens = BorderTokens {
    subtle: ModeAwareColor::new("#dcdcdc", "#2d2d2d"),
    strong: ModeAwareColor::new("#bcbcbc", "#3a3a3a"),
    highlight: ModeAwareColor::new("#4a90e2", "#5a5a5a"),
    cell: ModeAwareColor::new("#cfcfcf", "#3a3a3a"),
    cell_gutter: ModeAwareColor::new("#d5d5d5", "#2a2a2a"),
    cell_in_focus: ModeAwareColor::new("#4a90e2", "#5ea2ff"),
};

/// Text tokens.
pub const TEXT: TextTokens = TextTokens {
    primary: ModeAwareColor::new("#111111", "#fafafa"),
    secondary: ModeAwareColor::new("#333333", "#c0c0c0"),
    muted: ModeAwareColor::new("#666666", "#8a8a8a"),
    warning: ModeAwareColor::new("#b05a00", "#f5d17a"),
};

/// Viewport tokens.
pub const VIEWPORT: ViewportTokens = ViewportTokens {
    base: BACKGROUND.cell,
    alternate: ModeAwareColor::new("#f6f6f6", "#232323"),
    selection: ModeAwareColor::new("#cfe1ff", "#2e4a70"),
    selection_text: TEXT.primary,
};

/// Menu tokens.
pub const MENU: MenuColorTokens = MenuColorTokens {
    background: BACKGROUND.menubar,
    text: TEXT.primary,
    item_hover: ModeAwareColor::new("#e0e0e0", "#3d3d3d"),
    separator: BORDER.subtle,
};

/// Status bar tokens.
pub const STATUS_BAR: StatusBarColorTokens = StatusBarColorTokens {
    background: BACKGROUND.statusbar,
    text: TEXT.secondary,
    border_top: BORDER.subtle,
    warning: TEXT.warning,
};

/// Button tokens.
pub const BUTTONS: ButtonTokenSet = ButtonTokenSet {
    primary: ButtonPaletteTokens {
        normal: ModeAwareColor::new("#e0e0e0", "#404040"),
        hover: ModeAwareColor::new("#d3d3d3", "#505050"),
        pressed: ModeAwareColor::new("#c0c0c0", "#303030"),
        disabled: ModeAwareColor::new("#f0f0f0", "#292929"),
        border: ModeAwareColor::new("#bcbcbc", "#707070"),
        text: TEXT.primary,
        focus: BORDER.highlight,
    },
    menubar: ButtonPaletteTokens {
        normal: BACKGROUND.menubar,
        hover: MENU.item_hover,
        pressed: ModeAwareColor::new("#d0d0d0", "#333333"),
        disabled: BACKGROUND.menubar,
        border: BACKGROUND.menubar,
        text: TEXT.primary,
        focus: BORDER.highlight,
    },
    toolbar: ButtonPaletteTokens {
        normal: ModeAwareColor::new("#f3f3f3", "#2d2d2d"),
        hover: ModeAwareColor::new("#e9e9e9", "#3b3b3b"),
        pressed: ModeAwareColor::new("#dcdcdc", "#1f1f1f"),
        disabled: ModeAwareColor::new("#f8f8f8", "#1a1a1a"),
        border: ModeAwareColor::new("#dadada", "#404040"),
        text: TEXT.secondary,
        focus: BORDER.highlight,
    },
    warning: ButtonPaletteTokens {
        normal: ModeAwareColor::new("#fbe2c5", "#6a381f"),
        hover: ModeAwareColor::new("#f8d4a3", "#7c4225"),
        pressed: ModeAwareColor::new("#f4c07e", "#4d2817"),
        disabled: ModeAwareColor::new("#fdf0df", "#3a1c10"),
        border: ModeAwareColor::new("#f2a25d", "#c4672e"),
        text: TEXT.primary,
        focus: ModeAwareColor::new("#ff8800", "#ffa45c"),
    },
};

/// Every declared color as `(group, field, color)`, in declaration order.
///
/// Button variants are reported as `buttons.<variant>` groups.
pub fn declared_colors() -> Vec<(String, &'static str, ModeAwareColor)> {
    let groups: [(&str, Vec<(&'static str, ModeAwareColor)>); 6] = [
        ("bg", BACKGROUND.fields()),
        ("border", BORDER.fields()),
        ("text", TEXT.fields()),
        ("viewport", VIEWPORT.fields()),
        ("menu", MENU.fields()),
        ("statusbar", STATUS_BAR.fields()),
    ];

    let mut colors: Vec<(String, &'static str, ModeAwareColor)> = groups
        .into_iter()
        .flat_map(|(group, fields)| {
            fields
                .into_iter()
                .map(move |(field, color)| (group.to_string(), field, color))
        })
        .collect();

    let buttons = BUTTONS;
    for (variant, tokens) in buttons.variants() {
        let group = format!("buttons.{}", variant);
        colors.extend(
            tokens
                .fields()
                .into_iter()
                .map(|(field, color)| (group.clone(), field, color)),
        );
    }

    colors
}
