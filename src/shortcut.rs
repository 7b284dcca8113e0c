//! Keyboard shortcut: Ctrl+Shift+D, or Cmd+Shift+D on macOS.

#[cfg(test)]
#[path = "shortcut_test.rs"]
mod shortcut_test;

/// `KeyboardEvent.key` value that triggers the toggle. With Shift held the
/// browser reports the uppercase letter.
pub const TOGGLE_KEY: &str = "D";

/// A key press with its modifier state.
#[allow(clippy::struct_excessive_bools)]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyChord {
    /// Key name as reported by the browser (`KeyboardEvent.key`).
    pub key: String,
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
    pub alt: bool,
}

impl KeyChord {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into(), ..Self::default() }
    }

    #[must_use]
    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    #[must_use]
    pub fn with_meta(mut self) -> Self {
        self.meta = true;
        self
    }

    #[must_use]
    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    #[must_use]
    pub fn with_alt(mut self) -> Self {
        self.alt = true;
        self
    }

    #[cfg(feature = "hydrate")]
    #[must_use]
    pub fn from_event(ev: &web_sys::KeyboardEvent) -> Self {
        Self {
            key: ev.key(),
            ctrl: ev.ctrl_key(),
            meta: ev.meta_key(),
            shift: ev.shift_key(),
            alt: ev.alt_key(),
        }
    }

    /// `(Ctrl or Meta) + Shift + D`. Alt is not inspected.
    #[must_use]
    pub fn is_theme_toggle(&self) -> bool {
        (self.ctrl || self.meta) && self.shift && self.key == TOGGLE_KEY
    }
}
