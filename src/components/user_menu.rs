//! User Menu Component
//!
//! Dropdown under the account button. Trigger clicks toggle, clicks
//! outside the region close, aria-expanded mirrors the state.

use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::menu::{self, MenuEvent, MenuState};

#[component]
pub fn UserMenu() -> impl IntoView {
    let (state, set_state) = signal(MenuState::Closed);
    let region_ref = NodeRef::<html::Div>::new();

    // Document-level close; the handle drops with the component
    let outside_click = dom_listen::listen_document("click", move |ev| {
        let inside = region_ref
            .get_untracked()
            .zip(ev.target())
            .map(|(region, target)| {
                target
                    .dyn_ref::<web_sys::Node>()
                    .map(|node| region.contains(Some(node)))
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !inside {
            set_state.update(|s| *s = menu::transition(*s, MenuEvent::OutsidePressed));
        }
    });
    let _outside_click = StoredValue::new_local(outside_click);

    view! {
        <div class="user-menu" node_ref=region_ref>
            <button
                class="user-menu-trigger"
                aria-haspopup="menu"
                aria-expanded=move || if state.get().is_open() { "true" } else { "false" }
                on:click=move |_| {
                    set_state.update(|s| *s = menu::transition(*s, MenuEvent::TriggerPressed))
                }
            >
                "☰"
            </button>
            <Show when=move || state.get().is_open()>
                <nav class="user-menu-panel">
                    <a href="/diary">"Diary"</a>
                    <a href="/import">"Import from Letterboxd"</a>
                    <a href="/logout">"Log out"</a>
                </nav>
            </Show>
        </div>
    }
}
