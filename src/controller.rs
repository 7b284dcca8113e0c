//! Theme toggle controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the applied theme and reconciles three surfaces on every change: the
//! root `data-theme` attribute, the control's accessibility attributes, and
//! the persisted preference. The browser layer forwards clicks and key
//! presses here and acts on the returned [`KeyOutcome`].
//!
//! DESIGN
//! ======
//! State lives in the controller, not in the DOM; rendering is a projection
//! of that state. The `theme-changing` marker is removed by a scheduled task
//! that is cancelled and rescheduled on every toggle, so the class always
//! clears a fixed delay after the most recent switch.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use crate::config::ToggleConfig;
use crate::schedule::{Scheduler, TaskHandle};
use crate::shortcut::KeyChord;
use crate::store::PreferenceStore;
use crate::target::{RenderedAttributes, ThemeTarget};
use crate::theme::{AppliedTheme, Theme};

/// Whether a key press was consumed by the toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The chord toggled the theme; the browser default must be suppressed.
    Handled,
    Ignored,
}

impl KeyOutcome {
    #[must_use]
    pub fn should_prevent_default(self) -> bool {
        matches!(self, Self::Handled)
    }
}

pub struct ThemeToggleController<S, T, C: Scheduler> {
    store: S,
    target: T,
    scheduler: C,
    config: ToggleConfig,
    current: AppliedTheme,
    pending_reset: Option<C::Handle>,
}

impl<S, T, C> ThemeToggleController<S, T, C>
where
    S: PreferenceStore,
    T: ThemeTarget + Clone + 'static,
    C: Scheduler,
{
    /// Read the persisted preference and render it.
    ///
    /// Returns `None` without touching the store or logging anything when the
    /// page has no toggle control (`target` is `None`).
    pub fn init(store: S, target: Option<T>, scheduler: C, config: ToggleConfig) -> Option<Self> {
        let target = target?;
        let current = AppliedTheme::from_stored(store.get(&config.storage_key));
        let mut controller = Self {
            store,
            target,
            scheduler,
            config,
            current: AppliedTheme::default(),
            pending_reset: None,
        };
        controller.apply_theme(current);

        log::info!("🌓 Tema mejorado activo ({})", controller.current);
        log::info!("Usa Ctrl+Shift+D (o Cmd+Shift+D en Mac) para cambiar el tema rápidamente.");
        Some(controller)
    }

    /// Render `theme` onto the root element and the control. Idempotent.
    pub fn apply_theme(&mut self, theme: impl Into<AppliedTheme>) {
        let theme = theme.into();
        RenderedAttributes::project(&theme, &self.config).write_to(&self.target);
        self.current = theme;
    }

    /// Switch to the other theme, persist it, and mark the control as changing.
    ///
    /// From an unrecognized stored value this always lands on light.
    pub fn toggle_theme(&mut self) -> Theme {
        let next = self.current.toggled();
        log::debug!("theme toggle: {} -> {next}", self.current);

        self.target.add_control_class(&self.config.changing_class);
        self.apply_theme(next);
        self.store.set(&self.config.storage_key, next);
        self.schedule_changing_reset();
        next
    }

    pub fn on_click(&mut self) -> Theme {
        self.toggle_theme()
    }

    pub fn on_key_down(&mut self, chord: &KeyChord) -> KeyOutcome {
        if !chord.is_theme_toggle() {
            return KeyOutcome::Ignored;
        }
        self.toggle_theme();
        KeyOutcome::Handled
    }

    #[must_use]
    pub fn current(&self) -> &AppliedTheme {
        &self.current
    }

    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.current.is_dark()
    }

    /// Attributes the target should currently carry.
    #[must_use]
    pub fn rendered(&self) -> RenderedAttributes {
        RenderedAttributes::project(&self.current, &self.config)
    }

    fn schedule_changing_reset(&mut self) {
        if let Some(previous) = self.pending_reset.take() {
            previous.cancel();
        }
        let target = self.target.clone();
        let class = self.config.changing_class.clone();
        let handle = self
            .scheduler
            .schedule(self.config.changing_duration_ms, Box::new(move || target.remove_control_class(&class)));
        self.pending_reset = Some(handle);
    }
}
