//! Push button styling, scoped by the `btnType` dynamic property.

use lunaqt_theme::color::to_rgba;
use lunaqt_theme::metrics::Metrics;
use lunaqt_theme::mode::ThemeMode;
use lunaqt_theme::tokens::ButtonPalette;
use lunaqt_theme::widget_tokens::ButtonTokens;
use lunaqt_theme::Theme;

use super::StyleGenerator;
use crate::rule::{join_fragments, join_rules, pt, px, Rule};

/// Opacity of button text in the disabled state.
pub const DISABLED_TEXT_ALPHA: f32 = 0.6;

/// Selector for a button variant, e.g. `QPushButton[btnType="primary"]`.
pub fn button_selector(variant: &str) -> String {
    format!("QPushButton[btnType=\"{}\"]", variant)
}

fn disabled_text(palette: &ButtonPalette) -> String {
    to_rgba(&palette.text, DISABLED_TEXT_ALPHA).unwrap_or_else(|err| {
        log::warn!("Using opaque disabled button text: {}", err);
        palette.text.clone()
    })
}

fn variant_rules(
    selector: &str,
    palette: &ButtonPalette,
    metrics: &Metrics,
    tokens: &ButtonTokens,
) -> String {
    join_rules(&[
        Rule::new(selector)
            .decl("background-color", &palette.normal)
            .decl("color", &palette.text)
            .decl(
                "border",
                format!("{} solid {}", px(tokens.border_width), palette.border),
            )
            .decl("border-radius", px(tokens.radius))
            .decl(
                "padding",
                format!("{} {}", px(tokens.padding_y), px(tokens.padding_x)),
            )
            .decl("font-family", &metrics.font_family)
            .decl("font-size", pt(metrics.font_size_medium)),
        Rule::new(format!("{}:hover", selector)).decl("background-color", &palette.hover),
        Rule::new(format!("{}:pressed", selector)).decl("background-color", &palette.pressed),
        Rule::new(format!("{}:checked", selector))
            .decl("background-color", &palette.pressed)
            .decl("border-color", &palette.focus),
        Rule::new(format!("{}:disabled", selector))
            .decl("background-color", &palette.disabled)
            .decl("color", disabled_text(palette))
            .decl("border-color", &palette.disabled),
        Rule::new(format!("{}:focus-visible", selector))
            .decl("outline", "none")
            .decl("border-color", &palette.focus),
    ])
}

/// Generator for every push button variant.
#[derive(Debug, Clone, Copy, Default)]
pub struct ButtonStyle;

impl StyleGenerator for ButtonStyle {
    fn name(&self) -> &'static str {
        "buttons"
    }

    fn generate(&self, theme: &Theme) -> String {
        let metrics = &theme.metrics;
        let tokens = theme.button_tokens();
        let palettes = &theme.buttons;

        let variants = [
            ("primary", &palettes.primary),
            ("menubar", &palettes.menubar),
            ("toolbar", &palettes.toolbar),
            ("warning", &palettes.warning),
        ];

        let mut fragments: Vec<String> = variants
            .iter()
            .map(|(variant, palette)| {
                variant_rules(&button_selector(variant), palette, metrics, &tokens)
            })
            .collect();

        // Flat variants override the shared block, so they must come after it.
        fragments.push(
            Rule::new(button_selector("toolbar"))
                .decl("border", "none")
                .decl("border-radius", px(tokens.toolbar_radius))
                .decl(
                    "padding",
                    format!(
                        "{} {}",
                        px(tokens.toolbar_padding_y),
                        px(tokens.toolbar_padding_x)
                    ),
                )
                .decl("min-height", px(tokens.toolbar_min_height))
                .to_string(),
        );
        fragments.push(
            Rule::new(button_selector("menubar"))
                .decl("border", "none")
                .decl("border-radius", px(tokens.menubar_radius))
                .decl(
                    "padding",
                    format!(
                        "{} {}",
                        px(tokens.menubar_padding_y),
                        px(tokens.menubar_padding_x)
                    ),
                )
                .decl("margin-top", "0px")
                .decl("margin-bottom", "0px")
                .to_string(),
        );
        fragments.push(Rule::new("QPushButton").decl("outline", "none").to_string());

        join_fragments(fragments)
    }
}

/// Button QSS for `mode`, or for `theme` when given.
pub fn get_qss(mode: ThemeMode, theme: Option<&Theme>) -> String {
    ButtonStyle.qss(mode, theme)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lunaqt_theme::get_theme;

    #[test]
    fn test_every_variant_is_styled() {
        let qss = get_qss(ThemeMode::Dark, None);
        for variant in ["primary", "menubar", "toolbar", "warning"] {
            let selector = button_selector(variant);
            assert!(qss.contains(&format!("{} {{", selector)), "{}", variant);
            assert!(qss.contains(&format!("{}:focus-visible {{", selector)));
        }
    }

    #[test]
    fn test_toolbar_override_follows_base_block() {
        let qss = get_qss(ThemeMode::Light, None);
        let selector = format!("{} {{", button_selector("toolbar"));
        let first = qss.find(&selector).unwrap();
        let last = qss.rfind(&selector).unwrap();
        assert!(first < last);
        assert!(qss[last..].contains("border: none;"));
        assert!(qss.trim_end().ends_with("QPushButton {\n    outline: none;\n}"));
    }

    #[test]
    fn test_disabled_text_is_translucent() {
        let theme = get_theme(ThemeMode::Dark, None);
        let qss = ButtonStyle.generate(&theme);
        // primary text #fafafa at 60%
        assert!(qss.contains("color: rgba(250, 250, 250, 0.6);"));
    }

    #[test]
    fn test_font_comes_from_metrics() {
        let metrics = Metrics::default()
            .derive_for_font_size(16, 2, 2)
            .with_font_family("Inter");
        let theme = get_theme(ThemeMode::Dark, Some(metrics));
        let qss = ButtonStyle.generate(&theme);
        assert!(qss.contains("font-family: Inter;"));
        assert!(qss.contains("font-size: 16pt;"));
    }
}
