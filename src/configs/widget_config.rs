use serde::{ Deserialize, Serialize };

use crate::error::ThemeError;
use crate::utils::ThemeState;

pub const DEFAULT_MOUNT_SELECTOR: &str = ".swagger-ui .topbar .wrapper";
pub const DEFAULT_STORAGE_KEY: &str = "swagger-ui-theme";
pub const DEFAULT_BUTTON_ID: &str = "swagger-ui-theme-toggle";
pub const DEFAULT_MARKER_CLASS: &str = "dark-mode";
pub const DEFAULT_BUTTON_STYLE: &str =
    "margin-left: 20px; padding: 5px 10px; background: transparent; color: white; border: 1px solid white; border-radius: 4px; cursor: pointer;";

/// Everything the toggle needs to know about the host page.
///
/// Fields missing from a JSON override keep their defaults, which match the
/// stock Swagger UI layout.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeToggleConfig {
    pub mount_selector: String,
    pub storage_key: String,
    pub button_id: String,
    pub marker_class: String,
    /// Shown while light mode is active.
    pub dark_label: String,
    /// Shown while dark mode is active.
    pub light_label: String,
    pub button_style: String,
}

impl Default for ThemeToggleConfig {
    fn default() -> Self {
        Self {
            mount_selector: DEFAULT_MOUNT_SELECTOR.to_string(),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            button_id: DEFAULT_BUTTON_ID.to_string(),
            marker_class: DEFAULT_MARKER_CLASS.to_string(),
            dark_label: "Dark Mode".to_string(),
            light_label: "Light Mode".to_string(),
            button_style: DEFAULT_BUTTON_STYLE.to_string(),
        }
    }
}

impl ThemeToggleConfig {
    /// Parses a JSON object of overrides. An empty or blank string means defaults.
    pub fn from_json(raw: &str) -> Result<Self, ThemeError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ThemeError> {
        let required = [
            ("mount_selector", &self.mount_selector),
            ("storage_key", &self.storage_key),
            ("button_id", &self.button_id),
            ("marker_class", &self.marker_class),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(ThemeError::Config(format!("{} must not be empty", name)));
            }
        }
        if self.marker_class.chars().any(char::is_whitespace) {
            return Err(
                ThemeError::Config(format!("marker_class '{}' must be a single class name", self.marker_class))
            );
        }
        Ok(())
    }

    /// Label for the button while `state` is active; it names the mode a click switches to.
    pub fn label_for(&self, state: ThemeState) -> &str {
        match state {
            ThemeState::Dark => &self.light_label,
            ThemeState::Light => &self.dark_label,
        }
    }
}
