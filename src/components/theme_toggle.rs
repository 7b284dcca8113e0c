//! Toggle control button.
//!
//! Server-renders the light-state markup; on hydrate the controller mounts
//! against the button and re-renders it from the persisted preference. The
//! mount lives only as long as the component: remounting tears down the old
//! listeners before the new ones exist.

#[cfg(test)]
#[path = "theme_toggle_test.rs"]
mod theme_toggle_test;

use leptos::prelude::*;

use crate::config::{DEFAULT_CONTROL_ID, LABEL_SWITCH_TO_DARK};

/// Slot for a value that must be dropped when the current reactive owner is
/// cleaned up. Storing a new value drops the previous one.
pub fn retain_until_cleanup<H: 'static>() -> StoredValue<Option<H>, LocalStorage> {
    let slot = StoredValue::new_local(None);
    on_cleanup(move || drop(slot.try_update_value(Option::take)));
    slot
}

/// Theme toggle button. `id` defaults to `theme-toggle`.
#[component]
pub fn ThemeToggle(#[prop(optional)] id: Option<&'static str>) -> impl IntoView {
    let id = id.unwrap_or(DEFAULT_CONTROL_ID);

    #[cfg(feature = "hydrate")]
    {
        let mounted = retain_until_cleanup::<crate::browser::MountedToggle>();
        let config = crate::config::ToggleConfig { control_id: id.to_owned(), ..Default::default() };
        Effect::new(move || match crate::browser::mount_with(config.clone()) {
            Ok(Some(toggle)) => mounted.set_value(Some(toggle)),
            Ok(None) => log::warn!("theme toggle #{} not found after render", config.control_id),
            Err(err) => log::error!("theme toggle failed to mount: {err}"),
        });
    }

    view! {
        <button
            id=id
            class="theme-toggle"
            type="button"
            aria-pressed="false"
            aria-label=LABEL_SWITCH_TO_DARK
            data-tooltip=LABEL_SWITCH_TO_DARK
        >
            <span class="theme-toggle__icon theme-toggle__icon--light" aria-hidden="true">"☀"</span>
            <span class="theme-toggle__icon theme-toggle__icon--dark" aria-hidden="true">"☾"</span>
        </button>
    }
}
