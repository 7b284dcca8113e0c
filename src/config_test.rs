use super::*;
use crate::theme::Theme;

#[test]
fn default_config_matches_markup_contract() {
    let config = ToggleConfig::default();
    assert_eq!(config.control_id, "theme-toggle");
    assert_eq!(config.storage_key, "theme");
    assert_eq!(config.changing_class, "theme-changing");
    assert_eq!(config.changing_duration_ms, 600);
}

#[test]
fn tooltip_describes_next_state() {
    let config = ToggleConfig::default();
    assert_eq!(config.tooltip_for(&AppliedTheme::Known(Theme::Dark)), "Cambiar a tema claro");
    assert_eq!(config.tooltip_for(&AppliedTheme::Known(Theme::Light)), "Cambiar a tema oscuro");
}

#[test]
fn tooltip_for_unrecognized_value_is_light_like() {
    let config = ToggleConfig::default();
    let applied = AppliedTheme::Unrecognized("sepia".into());
    assert_eq!(config.tooltip_for(&applied), LABEL_SWITCH_TO_DARK);
}

#[test]
fn partial_json_keeps_defaults() {
    let config: ToggleConfig =
        serde_json::from_str(r#"{"control_id": "nav-theme", "changing_duration_ms": 250}"#).unwrap();
    assert_eq!(config.control_id, "nav-theme");
    assert_eq!(config.changing_duration_ms, 250);
    assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
    assert_eq!(config.switch_to_light_label, LABEL_SWITCH_TO_LIGHT);
}

#[test]
fn empty_json_is_default() {
    let config: ToggleConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config, ToggleConfig::default());
}

#[test]
fn custom_labels_are_used() {
    let config: ToggleConfig = serde_json::from_str(
        r#"{"switch_to_light_label": "Switch to light", "switch_to_dark_label": "Switch to dark"}"#,
    )
    .unwrap();
    assert_eq!(config.tooltip_for(&AppliedTheme::Known(Theme::Dark)), "Switch to light");
    assert_eq!(config.tooltip_for(&AppliedTheme::Known(Theme::Light)), "Switch to dark");
}
