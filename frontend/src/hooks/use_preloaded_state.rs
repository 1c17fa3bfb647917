use gloo_events::EventListener;
use shared::constants::{SESSION_STORAGE_KEY, SESSION_UPDATE_EVENT};
use web_sys::window;
use yew::prelude::*;

use crate::models::PreloadedState;

fn read_preloaded_state() -> PreloadedState {
    let raw = window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(SESSION_STORAGE_KEY).ok().flatten());

    match raw {
        Some(raw) => PreloadedState::from_json(&raw).unwrap_or_else(|e| {
            log::error!("Failed to parse {}: {}", SESSION_STORAGE_KEY, e);
            PreloadedState::default()
        }),
        None => PreloadedState::default(),
    }
}

/// Session and challenge data left in local storage by the host page,
/// re-read whenever it fires a session update event.
#[hook]
pub fn use_preloaded_state() -> UseStateHandle<PreloadedState> {
    let state = use_state(read_preloaded_state);

    {
        let state = state.clone();
        use_effect_with((), move |_| {
            let listener = window().map(|w| {
                EventListener::new(&w, SESSION_UPDATE_EVENT, move |_| {
                    log::debug!("Challenge session updated");
                    state.set(read_preloaded_state());
                })
            });

            move || drop(listener)
        });
    }

    state
}
