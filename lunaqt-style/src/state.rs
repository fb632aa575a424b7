//! Widget state carried as data.
//!
//! Stylesheets select a cell's appearance through its `state` dynamic
//! property. The GUI layer implements [StyledElement] for its widgets and
//! calls [apply_state] on every transition; the stylesheet itself is never
//! rebuilt for a state change.

use std::fmt;
use std::str::FromStr;

/// Name of the dynamic property the stylesheets match on.
pub const STATE_PROPERTY: &str = "state";

/// Visual state of a notebook cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellState {
    /// Neither selected nor focused.
    #[default]
    Default,
    /// Part of the current selection.
    Selected,
    /// Being edited.
    Focused,
}

impl CellState {
    /// Property value matched by the stylesheets.
    pub fn as_str(&self) -> &'static str {
        match self {
            CellState::Default => "default",
            CellState::Selected => "selected",
            CellState::Focused => "focused",
        }
    }

    /// Whether the state is drawn with the focus border.
    pub fn is_highlighted(&self) -> bool {
        !matches!(self, CellState::Default)
    }

    /// Attribute selector for this state, e.g. `QFrame[state="focused"]`.
    pub fn selector(&self, base: &str) -> String {
        format!("{}[{}=\"{}\"]", base, STATE_PROPERTY, self.as_str())
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CellState {
    type Err = ();

    /// Unknown values are rejected so the caller can keep its current state.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "default" | "" => Ok(CellState::Default),
            "selected" => Ok(CellState::Selected),
            "focused" => Ok(CellState::Focused),
            _ => Err(()),
        }
    }
}

/// A styled widget that can carry dynamic properties.
pub trait StyledElement {
    /// Set a dynamic property matched by attribute selectors.
    fn set_style_property(&mut self, name: &str, value: &str);

    /// Ask the style engine to re-match selectors for this element.
    fn refresh_style(&mut self);
}

/// Move an element from `previous` to `next`.
///
/// Returns `false` and leaves the element untouched when the state is unchanged.
pub fn apply_state<E>(element: &mut E, previous: CellState, next: CellState) -> bool
where
    E: StyledElement + ?Sized,
{
    if previous == next {
        return false;
    }

    element.set_style_property(STATE_PROPERTY, next.as_str());
    element.refresh_style();
    true
}
