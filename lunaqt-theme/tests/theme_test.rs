//! Tests for theme resolution and style configuration

use std::collections::BTreeSet;
use std::fs;

use lunaqt_theme::color::{is_valid_hex_color, parse_hex_color};
use lunaqt_theme::config::StyleConfig;
use lunaqt_theme::metrics::build_metrics_for_ui_font;
use lunaqt_theme::preferences::{FontCatalog, FontSizeBounds, StylePreferences};
use lunaqt_theme::tokens::declared_colors;
use lunaqt_theme::{get_theme, ThemeError, ThemeMode};
use serde_json::Value;

/// Flatten a JSON object into `path -> value` pairs for its string leaves.
fn string_leaves(value: &Value, prefix: &str, out: &mut Vec<(String, String)>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                string_leaves(child, &path, out);
            }
        }
        Value::String(s) => out.push((prefix.to_string(), s.clone())),
        _ => {}
    }
}

fn palette_leaves(mode: ThemeMode) -> Vec<(String, String)> {
    let theme = get_theme(mode, None);
    let mut value = serde_json::to_value(&theme).unwrap();
    if let Value::Object(map) = &mut value {
        map.remove("mode");
        map.remove("metrics");
    }
    let mut leaves = Vec::new();
    string_leaves(&value, "", &mut leaves);
    leaves
}

#[test]
fn test_every_declared_color_parses_in_both_modes() {
    for (group, field, color) in declared_colors() {
        for mode in ThemeMode::ALL {
            let value = color.value_for(mode);
            assert!(
                parse_hex_color(value).is_ok(),
                "{}.{} = {:?} in {} mode",
                group,
                field,
                value,
                mode
            );
        }
    }
}

#[test]
fn test_every_resolved_palette_value_is_a_color() {
    for mode in ThemeMode::ALL {
        let leaves = palette_leaves(mode);
        assert!(!leaves.is_empty());
        for (path, value) in leaves {
            assert!(is_valid_hex_color(&value), "{} = {:?}", path, value);
        }
    }
}

#[test]
fn test_palettes_have_identical_keys_in_both_modes() {
    let light: BTreeSet<String> = palette_leaves(ThemeMode::Light)
        .into_iter()
        .map(|(path, _)| path)
        .collect();
    let dark: BTreeSet<String> = palette_leaves(ThemeMode::Dark)
        .into_iter()
        .map(|(path, _)| path)
        .collect();

    assert_eq!(light, dark);
    assert!(light.contains("bg.sidebar_content"));
    assert!(light.contains("buttons.menubar.focus"));
}

#[test]
fn test_resolution_is_idempotent() {
    for mode in ThemeMode::ALL {
        let metrics = build_metrics_for_ui_font(13, None);
        assert_eq!(
            get_theme(mode, Some(metrics.clone())),
            get_theme(mode, Some(metrics))
        );
    }
}

#[test]
fn test_dark_app_background_end_to_end() {
    let theme = get_theme(ThemeMode::Dark, None);
    assert_eq!(theme.bg.app, "#1e1e1e");
    assert_eq!(theme.viewport.base, theme.bg.cell);
}

#[test]
fn test_mode_switch_changes_every_field_consistently() {
    let light = get_theme(ThemeMode::Light, None);
    let dark = get_theme(ThemeMode::Dark, None);

    let light_leaves = palette_leaves(ThemeMode::Light);
    let dark_leaves = palette_leaves(ThemeMode::Dark);

    for (group, field, color) in declared_colors() {
        let path = format!("{}.{}", group, field);
        let light_value = light_leaves.iter().find(|(p, _)| *p == path).map(|(_, v)| v);
        let dark_value = dark_leaves.iter().find(|(p, _)| *p == path).map(|(_, v)| v);

        assert_eq!(light_value.map(String::as_str), Some(color.light), "{}", path);
        assert_eq!(dark_value.map(String::as_str), Some(color.dark), "{}", path);
    }

    assert_eq!(light.metrics, dark.metrics);
}

#[test]
fn test_preferences_flow_into_theme() {
    let metrics = StylePreferences::default()
        .with_font_family("Inter", &FontCatalog::default())
        .with_font_size(16, &FontSizeBounds::default())
        .build_metrics(None);
    let theme = get_theme(ThemeMode::Light, Some(metrics));

    assert_eq!(theme.metrics.font_family, "Inter");
    assert_eq!(theme.metrics.font_size_small, 14);
    assert_eq!(theme.metrics.font_size_large, 18);
    assert_eq!(theme.metrics.cell_body_font_size, 12);
}

#[test]
fn test_config_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("style.toml");
    fs::write(
        &path,
        r#"
[style]
mode = "dark"
ui_font_family = "Roboto"
ui_font_size = 9
font_families = ["Inter", "Roboto"]
"#,
    )
    .unwrap();

    let config = StyleConfig::from_file(&path).unwrap();
    assert_eq!(config.mode, ThemeMode::Dark);

    let prefs = config.preferences();
    assert_eq!(prefs.ui_font_family, "Roboto");
    assert_eq!(prefs.ui_font_size, 10);
}

#[test]
fn test_config_file_parse_error_names_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "[style\nmode = ").unwrap();

    match StyleConfig::from_file(&path) {
        Err(ThemeError::ConfigParse { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected a parse error, got {:?}", other),
    }
}

#[test]
fn test_config_env_path_is_loaded_first() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("style.toml");
    fs::write(&path, "[style]\nmode = \"dark\"\nui_font_size = 14\n").unwrap();
    let path_str = path.to_string_lossy().into_owned();

    let config = StyleConfig::from_env_with(|key| match key {
        "LUNAQT_STYLE_CONFIG" => Some(path_str.clone()),
        "LUNAQT_UI_FONT_SIZE" => Some("16".to_string()),
        _ => None,
    });

    assert_eq!(config.mode, ThemeMode::Dark);
    assert_eq!(config.ui_font_size, 16);
}
