//! Toggle configuration.
//!
//! Defaults reproduce the markup contract the stylesheets expect; embedding
//! pages only override what differs. Deserializes from partial JSON.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::theme::AppliedTheme;

pub const DEFAULT_CONTROL_ID: &str = "theme-toggle";
pub const DEFAULT_STORAGE_KEY: &str = "theme";
pub const DEFAULT_CHANGING_CLASS: &str = "theme-changing";
pub const DEFAULT_CHANGING_DURATION_MS: u32 = 600;
pub const LABEL_SWITCH_TO_LIGHT: &str = "Cambiar a tema claro";
pub const LABEL_SWITCH_TO_DARK: &str = "Cambiar a tema oscuro";

/// Names, timings, and labels used by the controller.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ToggleConfig {
    /// `id` of the toggle control element.
    pub control_id: String,
    /// Storage key holding the preference.
    pub storage_key: String,
    /// Class added to the control while the switch animates.
    pub changing_class: String,
    pub changing_duration_ms: u32,
    /// Tooltip shown while dark (describes the next state).
    pub switch_to_light_label: String,
    /// Tooltip shown while light or unrecognized.
    pub switch_to_dark_label: String,
}

impl Default for ToggleConfig {
    fn default() -> Self {
        Self {
            control_id: DEFAULT_CONTROL_ID.to_owned(),
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            changing_class: DEFAULT_CHANGING_CLASS.to_owned(),
            changing_duration_ms: DEFAULT_CHANGING_DURATION_MS,
            switch_to_light_label: LABEL_SWITCH_TO_LIGHT.to_owned(),
            switch_to_dark_label: LABEL_SWITCH_TO_DARK.to_owned(),
        }
    }
}

impl ToggleConfig {
    /// Tooltip/label text for the control while `applied` is on screen.
    #[must_use]
    pub fn tooltip_for(&self, applied: &AppliedTheme) -> &str {
        if applied.is_dark() {
            &self.switch_to_light_label
        } else {
            &self.switch_to_dark_label
        }
    }
}
