//! # theme-toggle
//!
//! Light/dark theme switch for server-rendered pages. The crate is compiled to
//! WebAssembly and runs in the browser, but the controller itself only talks
//! to three small traits so it can be driven natively in tests.
//!
//! The controller owns the applied theme, renders it onto the `<html>` element
//! and the toggle control (`data-theme`, `aria-pressed`, `data-tooltip`,
//! `aria-label`), persists it under the `theme` storage key, and marks the
//! control with a transient `theme-changing` class after every switch.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`theme`] | `Theme` values, the applied (possibly unrecognized) value, toggle transition |
//! | [`config`] | Element id, storage key, class name, delay and tooltip labels |
//! | [`store`] | [`store::PreferenceStore`] and its in-memory and `localStorage` implementations |
//! | [`target`] | [`target::ThemeTarget`] and the pure attribute projection |
//! | [`schedule`] | Cancellable deferred tasks (virtual clock and browser timers) |
//! | [`shortcut`] | Keyboard chord model and the Ctrl/Cmd+Shift+D matcher |
//! | [`controller`] | [`ThemeToggleController`] tying the pieces together |
//! | `browser` | DOM wiring: listener registration and teardown (`hydrate` only) |
//! | [`components`] | Leptos component rendering the toggle control |
//! | [`error`] | Mount failures |

pub mod components;
pub mod config;
pub mod controller;
pub mod error;
pub mod schedule;
pub mod shortcut;
pub mod store;
pub mod target;
pub mod theme;

#[cfg(feature = "hydrate")]
pub mod browser;

#[cfg(test)]
#[path = "log_capture_test.rs"]
mod log_capture;

pub use config::ToggleConfig;
pub use controller::{KeyOutcome, ThemeToggleController};
pub use theme::{AppliedTheme, Theme};
