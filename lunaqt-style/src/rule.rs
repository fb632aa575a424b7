//! A small builder for QSS rule blocks.

use std::fmt;

/// Separator between rule blocks and between stylesheet fragments.
pub const BLOCK_SEPARATOR: &str = "\n\n";

/// One QSS rule: one or more selectors and an ordered list of declarations.
///
/// ```rust
/// use lunaqt_style::rule::{px, Rule};
///
/// let rule = Rule::new("QToolBar")
///     .decl("background-color", "#2a2a2a")
///     .decl("spacing", px(4));
///
/// assert_eq!(
///     rule.to_string(),
///     "QToolBar {\n    background-color: #2a2a2a;\n    spacing: 4px;\n}"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    selectors: Vec<String>,
    declarations: Vec<(String, String)>,
}

impl Rule {
    /// Start a rule for a single selector.
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selectors: vec![selector.into()],
            declarations: Vec::new(),
        }
    }

    /// Start a rule shared by several selectors. They are rendered one per line.
    pub fn group<I, S>(selectors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            selectors: selectors.into_iter().map(Into::into).collect(),
            declarations: Vec::new(),
        }
    }

    /// Append a declaration.
    pub fn decl(mut self, property: impl Into<String>, value: impl fmt::Display) -> Self {
        self.declarations.push((property.into(), value.to_string()));
        self
    }

    /// The selectors of the rule.
    pub fn selectors(&self) -> &[String] {
        &self.selectors
    }

    /// The value of the last declaration of `property`, if any.
    pub fn value_of(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .rev()
            .find(|(name, _)| name == property)
            .map(|(_, value)| value.as_str())
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {{", self.selectors.join(",\n"))?;
        for (property, value) in &self.declarations {
            writeln!(f, "    {}: {};", property, value)?;
        }
        f.write_str("}")
    }
}

/// Render rules separated by blank lines.
pub fn join_rules(rules: &[Rule]) -> String {
    rules
        .iter()
        .map(Rule::to_string)
        .collect::<Vec<_>>()
        .join(BLOCK_SEPARATOR)
}

/// Join rendered fragments with blank lines, skipping empty ones.
pub fn join_fragments<I, S>(fragments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    fragments
        .into_iter()
        .filter(|fragment| !fragment.as_ref().trim().is_empty())
        .map(|fragment| fragment.as_ref().trim().to_string())
        .collect::<Vec<_>>()
        .join(BLOCK_SEPARATOR)
}

/// Pixel length, e.g. `4px`.
pub fn px(value: u32) -> String {
    format!("{}px", value)
}

/// Point size, e.g. `12pt`.
pub fn pt(value: u32) -> String {
    format!("{}pt", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grouped_selectors_render_one_per_line() {
        let rule = Rule::group(["QSpinBox", "QComboBox"]).decl("border", "none");
        assert_eq!(rule.to_string(), "QSpinBox,\nQComboBox {\n    border: none;\n}");
    }

    #[test]
    fn test_empty_rule() {
        assert_eq!(Rule::new("QWidget").to_string(), "QWidget {\n}");
    }

    #[test]
    fn test_value_of_returns_last_declaration() {
        let rule = Rule::new("QMenuBar")
            .decl("border-top", "1px solid #000000")
            .decl("border-top", "none");
        assert_eq!(rule.value_of("border-top"), Some("none"));
        assert_eq!(rule.value_of("color"), None);
    }

    #[test]
    fn test_join_rules_and_fragments() {
        let rules = [Rule::new("A").decl("x", 1), Rule::new("B").decl("y", 2)];
        assert_eq!(
            join_rules(&rules),
            "A {\n    x: 1;\n}\n\nB {\n    y: 2;\n}"
        );
        assert_eq!(join_fragments(["a", "  ", "\nb\n"]), "a\n\nb");
    }

    #[test]
    fn test_units() {
        assert_eq!(px(0), "0px");
        assert_eq!(pt(12), "12pt");
    }
}
