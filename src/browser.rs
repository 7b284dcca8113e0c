//! DOM wiring for the theme toggle.
//!
//! SYSTEM CONTEXT
//! ==============
//! Locates the toggle control, builds the browser-backed store, target and
//! scheduler, and registers a click listener on the control plus a
//! document-wide `keydown` listener. The controller is shared between the
//! two listeners and the page through `Rc<RefCell<_>>`.
//!
//! TRADE-OFFS
//! ==========
//! Listeners are removed when [`MountedToggle`] is dropped. The Leptos
//! component holds its mount until its owner is cleaned up; only the
//! drop-in script build, which mounts once per page, calls
//! [`MountedToggle::forget`].

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{JsCast, closure::Closure};

use crate::config::ToggleConfig;
use crate::controller::ThemeToggleController;
use crate::error::MountError;
use crate::schedule::TimeoutScheduler;
use crate::shortcut::KeyChord;
use crate::store::LocalStorageStore;
use crate::target::DomTarget;

pub type BrowserController = ThemeToggleController<LocalStorageStore, DomTarget, TimeoutScheduler>;

/// A controller bound to the live page together with its event listeners.
pub struct MountedToggle {
    controller: Rc<RefCell<BrowserController>>,
    control: web_sys::Element,
    document: web_sys::Document,
    on_click: Option<Closure<dyn FnMut(web_sys::Event)>>,
    on_key_down: Option<Closure<dyn FnMut(web_sys::KeyboardEvent)>>,
}

/// Mount with the default configuration (`#theme-toggle`, key `theme`).
pub fn mount() -> Result<Option<MountedToggle>, MountError> {
    mount_with(ToggleConfig::default())
}

/// Mount against the control named by `config.control_id`.
///
/// Returns `Ok(None)` when the page has no such control: nothing is read,
/// rendered, registered, or logged.
pub fn mount_with(config: ToggleConfig) -> Result<Option<MountedToggle>, MountError> {
    let window = web_sys::window().ok_or(MountError::NoWindow)?;
    let document = window.document().ok_or(MountError::NoDocument)?;
    let Some(control) = document.get_element_by_id(&config.control_id) else {
        return Ok(None);
    };
    let root = document.document_element().ok_or(MountError::NoRootElement)?;

    let target = DomTarget::new(root, control.clone());
    let store = LocalStorageStore::from_window(&window);
    let Some(controller) = ThemeToggleController::init(store, Some(target), TimeoutScheduler, config) else {
        return Ok(None);
    };

    let mut mounted = MountedToggle {
        controller: Rc::new(RefCell::new(controller)),
        control,
        document,
        on_click: None,
        on_key_down: None,
    };
    // On failure `mounted` drops here and unregisters whatever was registered.
    mounted.listen_click()?;
    mounted.listen_key_down()?;
    log::debug!("theme toggle mounted");
    Ok(Some(mounted))
}

impl MountedToggle {
    /// Keep the listeners registered for the rest of the page's life.
    pub fn forget(mut self) {
        if let Some(on_click) = self.on_click.take() {
            on_click.forget();
        }
        if let Some(on_key_down) = self.on_key_down.take() {
            on_key_down.forget();
        }
    }

    fn listen_click(&mut self) -> Result<(), MountError> {
        let controller = Rc::clone(&self.controller);
        let on_click = Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| {
            match controller.try_borrow_mut() {
                Ok(mut controller) => {
                    controller.on_click();
                }
                Err(_) => log::warn!("theme toggle busy; click ignored"),
            }
        });
        self.control
            .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
            .map_err(|err| MountError::Listener { event: "click", reason: format!("{err:?}") })?;
        self.on_click = Some(on_click);
        Ok(())
    }

    fn listen_key_down(&mut self) -> Result<(), MountError> {
        let controller = Rc::clone(&self.controller);
        let on_key_down = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(move |ev: web_sys::KeyboardEvent| {
            let chord = KeyChord::from_event(&ev);
            // The default is suppressed only when the controller actually toggled.
            match controller.try_borrow_mut() {
                Ok(mut controller) => {
                    if controller.on_key_down(&chord).should_prevent_default() {
                        ev.prevent_default();
                    }
                }
                Err(_) => log::warn!("theme toggle busy; key press left to the browser"),
            }
        });
        self.document
            .add_event_listener_with_callback("keydown", on_key_down.as_ref().unchecked_ref())
            .map_err(|err| MountError::Listener { event: "keydown", reason: format!("{err:?}") })?;
        self.on_key_down = Some(on_key_down);
        Ok(())
    }
}

impl Drop for MountedToggle {
    fn drop(&mut self) {
        if let Some(on_click) = self.on_click.take() {
            if let Err(err) =
                self.control.remove_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
            {
                log::warn!("failed to remove click listener: {err:?}");
            }
        }
        if let Some(on_key_down) = self.on_key_down.take() {
            if let Err(err) = self
                .document
                .remove_event_listener_with_callback("keydown", on_key_down.as_ref().unchecked_ref())
            {
                log::warn!("failed to remove keydown listener: {err:?}");
            }
        }
    }
}

/// Entry point for the drop-in script build.
#[cfg(feature = "standalone")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::debug!("logger already installed");
    }

    match mount() {
        Ok(Some(mounted)) => mounted.forget(),
        Ok(None) => {}
        Err(err) => log::error!("theme toggle failed to mount: {err}"),
    }
}
