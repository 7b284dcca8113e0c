//! Leptos components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Lets Leptos apps render the toggle control instead of shipping it in
//! server templates. The controller still drives the control once hydrated.

pub mod theme_toggle;
