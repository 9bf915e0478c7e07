pub mod views;
pub mod utils;
pub mod configs;
pub mod dom;
pub mod storage;
mod error;

use wasm_bindgen::prelude::*;

pub use crate::configs::ThemeToggleConfig;
pub use crate::dom::{ BrowserDocument, DocumentPort };
pub use crate::error::ThemeError;
pub use crate::storage::{ open_preference_store, LocalStorageStore, MemoryStore, PreferenceStore };
pub use crate::utils::ThemeState;
pub use crate::views::{ InitOutcome, ThemeToggleWidget };

/// Mounts the toggle into the live page right away.
pub fn mount_theme_toggle(config: ThemeToggleConfig) -> Result<InitOutcome, ThemeError> {
    let document = BrowserDocument::current()?;
    let store = open_preference_store();
    let mut widget = ThemeToggleWidget::new(document, store, config);
    widget.initialize()
}

/// Installs the toggle with the stock Swagger UI settings once the page has loaded.
#[wasm_bindgen]
pub fn install_theme_toggle() {
    utils::logging::init_logging(log::Level::Info);
    install(ThemeToggleConfig::default());
}

/// Like `install_theme_toggle`, with a JSON object of setting overrides.
/// Invalid settings are logged and the defaults used instead.
#[wasm_bindgen]
pub fn install_theme_toggle_with_config(config_json: &str) {
    utils::logging::init_logging(log::Level::Info);
    let config = ThemeToggleConfig::from_json(config_json).unwrap_or_else(|e| {
        log::error!("{}; falling back to default theme toggle settings", e);
        ThemeToggleConfig::default()
    });
    install(config);
}

fn install(config: ThemeToggleConfig) {
    let scheduled = utils::page_load::when_page_loaded(move || {
        if let Err(e) = mount_theme_toggle(config) {
            log::error!("Theme toggle failed: {}", e);
        }
    });
    if let Err(e) = scheduled {
        log::error!("Could not schedule theme toggle: {}", e);
    }
}
