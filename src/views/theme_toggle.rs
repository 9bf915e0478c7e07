use std::rc::Rc;

use crate::configs::ThemeToggleConfig;
use crate::dom::DocumentPort;
use crate::error::ThemeError;
use crate::storage::PreferenceStore;
use crate::utils::ThemeState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InitOutcome {
    /// The button exists and reflects `state`. `mounted` is false when the
    /// page had no mount point, in which case the button is detached.
    Ready {
        mounted: bool,
        state: ThemeState,
    },
    /// A toggle button was already present; nothing was changed.
    AlreadyInitialized,
}

/// Light/dark toggle button injected into a host page.
///
/// The body marker class is the single source of truth for the active theme;
/// the button label and the stored preference follow it.
pub struct ThemeToggleWidget<D: DocumentPort, S: PreferenceStore> {
    document: Rc<D>,
    store: Rc<S>,
    config: Rc<ThemeToggleConfig>,
    button: Option<D::Element>,
}

impl<D, S> ThemeToggleWidget<D, S>
    where D: DocumentPort + 'static, D::Element: 'static, S: PreferenceStore + 'static
{
    pub fn new(document: D, store: S, config: ThemeToggleConfig) -> Self {
        Self {
            document: Rc::new(document),
            store: Rc::new(store),
            config: Rc::new(config),
            button: None,
        }
    }

    pub fn button(&self) -> Option<&D::Element> {
        self.button.as_ref()
    }

    pub fn state(&self) -> ThemeState {
        ThemeState::from_marker(self.document.has_root_marker(&self.config.marker_class))
    }

    /// Creates the button, wires up the click handler, restores the stored
    /// theme and mounts the button. Never writes to the store.
    pub fn initialize(&mut self) -> Result<InitOutcome, ThemeError> {
        let config = Rc::clone(&self.config);

        if self.button.is_some() || self.document.contains_id(&config.button_id) {
            log::debug!("Theme toggle '{}' already present, skipping", config.button_id);
            return Ok(InitOutcome::AlreadyInitialized);
        }

        let button = self.document.create_button(
            &config.button_id,
            config.label_for(ThemeState::Light),
            &config.button_style
        )?;

        // Bound before mounting so a page never holds a dead button.
        let handler = {
            let document = Rc::clone(&self.document);
            let store = Rc::clone(&self.store);
            let config = Rc::clone(&config);
            let button = button.clone();
            Box::new(move || {
                on_toggle_click(&*document, &*store, &config, &button);
            })
        };
        self.document.on_click(&button, handler)?;

        let stored = read_preference(&*self.store, &config.storage_key);
        if ThemeState::from_stored(stored.as_deref()).is_dark() {
            if let Err(e) = self.document.set_root_marker(&config.marker_class, true) {
                log::warn!("Failed to apply dark mode marker: {}", e);
            }
        }
        // The marker decides, even when applying it failed.
        let state = self.state();
        self.document.set_label(&button, config.label_for(state));

        let mounted = match self.document.find_mount_point(&config.mount_selector) {
            Some(mount) =>
                match self.document.append_child(&mount, &button) {
                    Ok(()) => true,
                    Err(e) => {
                        log::warn!("Failed to mount theme toggle: {}", e);
                        false
                    }
                }
            None => {
                log::warn!("Mount point '{}' not found, theme toggle not inserted", config.mount_selector);
                false
            }
        };

        log::info!("Theme toggle initialized (mounted: {}, theme: {})", mounted, state);
        self.button = Some(button);
        Ok(InitOutcome::Ready { mounted, state })
    }

    /// Same as a user click on the mounted button. `None` before initialization.
    pub fn toggle(&self) -> Option<ThemeState> {
        let button = self.button.as_ref()?;
        Some(on_toggle_click(&*self.document, &*self.store, &self.config, button))
    }
}

/// Click handler: flip the marker, persist the result, relabel the button.
///
/// Storage failures only cost persistence; the visual switch still happens.
pub fn on_toggle_click<D, S>(
    document: &D,
    store: &S,
    config: &ThemeToggleConfig,
    button: &D::Element
) -> ThemeState
    where D: DocumentPort + ?Sized, S: PreferenceStore + ?Sized
{
    let is_dark = match document.toggle_root_marker(&config.marker_class) {
        Ok(present) => present,
        Err(e) => {
            log::warn!("Failed to toggle '{}': {}", config.marker_class, e);
            document.has_root_marker(&config.marker_class)
        }
    };
    let state = ThemeState::from_marker(is_dark);

    if let Err(e) = store.set(&config.storage_key, state.as_str()) {
        log::warn!("Could not persist theme preference: {}", e);
    }

    document.set_label(button, config.label_for(state));
    log::debug!("Theme switched to {}", state);
    state
}

fn read_preference<S: PreferenceStore + ?Sized>(store: &S, key: &str) -> Option<String> {
    match store.get(key) {
        Ok(value) => value,
        Err(e) => {
            log::warn!("Could not read theme preference: {}", e);
            None
        }
    }
}
