//! Search Box Component
//!
//! Nav and bottom variants of the same input, kept mirrored through the
//! shared SearchContext query. Submitting navigates to the search page.

use leptos::prelude::*;

use crate::context::{SearchContext, SearchSlot};
use crate::search;

#[component]
pub fn SearchBox(slot: SearchSlot) -> impl IntoView {
    let ctx = use_context::<SearchContext>().expect("SearchContext should be provided");
    let query = ctx.query;

    let on_input = move |ev: web_sys::Event| {
        let typed = event_target_value(&ev);
        // Skip the write a mirrored box echoes back
        if let Some(next) = search::mirror_update(&query.get_untracked(), &typed) {
            query.set(next);
        }
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(url) = search::search_url(&query.get_untracked()) else {
            return;
        };
        if let Some(win) = web_sys::window() {
            let _ = win.location().set_href(&url);
        }
    };

    let class = match slot {
        SearchSlot::Nav => "search-box nav",
        SearchSlot::Bottom => "search-box bottom",
    };

    view! {
        <form class=class on:submit=on_submit>
            <input
                type="search"
                placeholder="Search movies & series..."
                autocomplete="off"
                node_ref=ctx.slot_ref(slot)
                prop:value=move || query.get()
                on:input=on_input
            />
        </form>
    }
}
