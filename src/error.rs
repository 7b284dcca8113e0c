//! Errors raised while wiring the controller into a page.
//!
//! A missing toggle control is not an error: mounting quietly does nothing.
//! These variants cover a browser environment that cannot host the toggle at all.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Debug, thiserror::Error)]
pub enum MountError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no root element")]
    NoRootElement,
    #[error("failed to register {event} listener: {reason}")]
    Listener { event: &'static str, reason: String },
}
