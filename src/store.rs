//! Persisted theme preference.
//!
//! SYSTEM CONTEXT
//! ==============
//! The controller only needs string get/set against one key. In the browser
//! that is `localStorage`; tests and non-browser hosts use [`MemoryStore`].
//! Writes are best-effort: a rejected write is logged and otherwise ignored.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::theme::Theme;

/// Key-value slot holding the user's theme preference.
pub trait PreferenceStore {
    /// Raw stored value for `key`, unvalidated.
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, theme: Theme);
}

#[derive(Debug, Default)]
struct MemorySlots {
    values: HashMap<String, String>,
    reads: usize,
    writes: usize,
}

/// In-memory store. Clones share the same slots, so a test can keep a handle
/// while the controller owns another.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    slots: Rc<RefCell<MemorySlots>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with an arbitrary raw value, valid theme or not.
    #[must_use]
    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.slots.borrow_mut().values.insert(key.to_owned(), value.to_owned());
        store
    }

    /// Current value without counting as a read.
    #[must_use]
    pub fn peek(&self, key: &str) -> Option<String> {
        self.slots.borrow().values.get(key).cloned()
    }

    #[must_use]
    pub fn reads(&self) -> usize {
        self.slots.borrow().reads
    }

    #[must_use]
    pub fn writes(&self) -> usize {
        self.slots.borrow().writes
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        let mut slots = self.slots.borrow_mut();
        slots.reads += 1;
        slots.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, theme: Theme) {
        let mut slots = self.slots.borrow_mut();
        slots.writes += 1;
        slots.values.insert(key.to_owned(), theme.as_str().to_owned());
    }
}

/// `window.localStorage`. Behaves as an empty store that drops writes when
/// storage is disabled.
#[cfg(feature = "hydrate")]
#[derive(Clone, Debug)]
pub struct LocalStorageStore {
    storage: Option<web_sys::Storage>,
}

#[cfg(feature = "hydrate")]
impl LocalStorageStore {
    #[must_use]
    pub fn from_window(window: &web_sys::Window) -> Self {
        let storage = match window.local_storage() {
            Ok(storage) => storage,
            Err(err) => {
                log::warn!("localStorage unavailable: {err:?}");
                None
            }
        };
        Self { storage }
    }
}

#[cfg(feature = "hydrate")]
impl PreferenceStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        let storage = self.storage.as_ref()?;
        match storage.get_item(key) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("failed to read theme preference {key:?}: {err:?}");
                None
            }
        }
    }

    fn set(&mut self, key: &str, theme: Theme) {
        let Some(storage) = self.storage.as_ref() else {
            return;
        };
        if let Err(err) = storage.set_item(key, theme.as_str()) {
            log::warn!("failed to persist theme preference {key:?}: {err:?}");
        }
    }
}
