//! Render target: the `<html>` element plus the toggle control.
//!
//! Rendering is a pure projection from the applied theme to
//! [`RenderedAttributes`], which is then written through [`ThemeTarget`].
//! Attribute and class writes are treated as infallible by the controller.

#[cfg(test)]
#[path = "target_test.rs"]
mod target_test;

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

use crate::config::ToggleConfig;
use crate::theme::AppliedTheme;

pub const DATA_THEME: &str = "data-theme";
pub const ARIA_PRESSED: &str = "aria-pressed";
pub const DATA_TOOLTIP: &str = "data-tooltip";
pub const ARIA_LABEL: &str = "aria-label";

/// Mutable attribute surface the controller renders onto.
pub trait ThemeTarget {
    fn set_root_attribute(&self, name: &str, value: &str);

    fn set_control_attribute(&self, name: &str, value: &str);

    fn add_control_class(&self, class: &str);

    /// Removing an absent class is a no-op.
    fn remove_control_class(&self, class: &str);
}

/// Attribute values implied by one applied theme.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedAttributes {
    /// Root `data-theme`.
    pub theme: String,
    /// Control `aria-pressed`.
    pub pressed: bool,
    /// Control `data-tooltip` and `aria-label`.
    pub tooltip: String,
}

impl RenderedAttributes {
    #[must_use]
    pub fn project(applied: &AppliedTheme, config: &ToggleConfig) -> Self {
        Self {
            theme: applied.as_str().to_owned(),
            pressed: applied.is_dark(),
            tooltip: config.tooltip_for(applied).to_owned(),
        }
    }

    pub fn write_to<T: ThemeTarget + ?Sized>(&self, target: &T) {
        target.set_root_attribute(DATA_THEME, &self.theme);
        target.set_control_attribute(ARIA_PRESSED, if self.pressed { "true" } else { "false" });
        target.set_control_attribute(DATA_TOOLTIP, &self.tooltip);
        target.set_control_attribute(ARIA_LABEL, &self.tooltip);
    }
}

/// Snapshot of everything a [`MemoryTarget`] has been told.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TargetState {
    pub root_attributes: BTreeMap<String, String>,
    pub control_attributes: BTreeMap<String, String>,
    pub control_classes: BTreeSet<String>,
}

/// In-memory stand-in for the DOM. Clones share state.
#[derive(Clone, Debug, Default)]
pub struct MemoryTarget {
    state: Rc<RefCell<TargetState>>,
}

impl MemoryTarget {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> TargetState {
        self.state.borrow().clone()
    }

    #[must_use]
    pub fn root_attribute(&self, name: &str) -> Option<String> {
        self.state.borrow().root_attributes.get(name).cloned()
    }

    #[must_use]
    pub fn control_attribute(&self, name: &str) -> Option<String> {
        self.state.borrow().control_attributes.get(name).cloned()
    }

    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.state.borrow().control_classes.contains(class)
    }
}

impl ThemeTarget for MemoryTarget {
    fn set_root_attribute(&self, name: &str, value: &str) {
        self.state.borrow_mut().root_attributes.insert(name.to_owned(), value.to_owned());
    }

    fn set_control_attribute(&self, name: &str, value: &str) {
        self.state.borrow_mut().control_attributes.insert(name.to_owned(), value.to_owned());
    }

    fn add_control_class(&self, class: &str) {
        self.state.borrow_mut().control_classes.insert(class.to_owned());
    }

    fn remove_control_class(&self, class: &str) {
        self.state.borrow_mut().control_classes.remove(class);
    }
}

/// Live DOM: `document.documentElement` and the toggle control.
#[cfg(feature = "hydrate")]
#[derive(Clone, Debug)]
pub struct DomTarget {
    root: web_sys::Element,
    control: web_sys::Element,
}

#[cfg(feature = "hydrate")]
impl DomTarget {
    #[must_use]
    pub fn new(root: web_sys::Element, control: web_sys::Element) -> Self {
        Self { root, control }
    }
}

#[cfg(feature = "hydrate")]
impl ThemeTarget for DomTarget {
    fn set_root_attribute(&self, name: &str, value: &str) {
        if let Err(err) = self.root.set_attribute(name, value) {
            log::warn!("failed to set root {name}: {err:?}");
        }
    }

    fn set_control_attribute(&self, name: &str, value: &str) {
        if let Err(err) = self.control.set_attribute(name, value) {
            log::warn!("failed to set control {name}: {err:?}");
        }
    }

    fn add_control_class(&self, class: &str) {
        if let Err(err) = self.control.class_list().add_1(class) {
            log::warn!("failed to add class {class}: {err:?}");
        }
    }

    fn remove_control_class(&self, class: &str) {
        if let Err(err) = self.control.class_list().remove_1(class) {
            log::warn!("failed to remove class {class}: {err:?}");
        }
    }
}
