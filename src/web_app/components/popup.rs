// web_app/components/popup.rs - Single-slot toast channel
//
// A page creates one PopupHandle, renders a PopupHost for it and passes the
// handle to whichever child needs to raise a toast. Showing a popup replaces
// the current one.

use std::time::Duration;

use leptos::prelude::*;

use crate::web_app::popup::{popup_class, PopupSpec, POPUP_TIMEOUT_MS};

#[derive(Clone, Copy)]
pub struct PopupHandle {
    slot: RwSignal<Option<PopupSpec>>,
    generation: RwSignal<u64>,
}

impl Default for PopupHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl PopupHandle {
    pub fn new() -> Self {
        Self {
            slot: RwSignal::new(None),
            generation: RwSignal::new(0),
        }
    }

    /// Put `spec` in the slot and return its generation number.
    pub fn replace(&self, spec: PopupSpec) -> u64 {
        let generation = self.generation.get_untracked() + 1;
        self.generation.set(generation);
        self.slot.set(Some(spec));
        generation
    }

    /// Show a popup that clears itself unless a newer one replaced it.
    pub fn show(&self, spec: PopupSpec) {
        let generation = self.replace(spec);
        self.expire_later(generation);
    }

    /// Schedule `expire(generation)` after the popup timeout.
    pub fn expire_later(&self, generation: u64) {
        let handle = *self;
        set_timeout(
            move || handle.expire(generation),
            Duration::from_millis(POPUP_TIMEOUT_MS),
        );
    }

    /// Clear the slot if it still holds the popup from `generation`.
    pub fn expire(&self, generation: u64) {
        if self.generation.get_untracked() == generation {
            self.slot.set(None);
        }
    }

    pub fn clear(&self) {
        self.slot.set(None);
    }

    pub fn current(&self) -> Option<PopupSpec> {
        self.slot.get()
    }
}

/// Renders the handle's current popup, if any. Clicking dismisses it.
#[component]
pub fn PopupHost(popup: PopupHandle) -> impl IntoView {
    move || {
        popup.current().map(|spec| {
            view! {
                <div
                    class=popup_class(spec.kind)
                    role="status"
                    on:click=move |_| popup.clear()
                >
                    {spec.message}
                </div>
            }
        })
    }
}
