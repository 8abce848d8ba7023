//! Reeldiary Frontend App
//!
//! Application shell: nav chrome, add form, grouped diary, detail rail.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use wasm_bindgen::JsCast;

use crate::api;
use crate::components::{AddEntryForm, DiaryList, EntryDetail, NavBar, SearchBox};
use crate::context::{AppContext, SearchContext, SearchSlot};
use crate::search;
use crate::store::{DiaryState, DiaryStateStoreFields, DiaryStore};

#[component]
pub fn App() -> impl IntoView {
    // State
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let (selected_entry, set_selected_entry) = signal::<Option<u32>>(None);
    let store: DiaryStore = Store::new(DiaryState::default());

    // Provide context to all children
    provide_context(store);
    provide_context(AppContext::new(
        (reload_trigger, set_reload_trigger),
        (selected_entry, set_selected_entry),
    ));
    let search_ctx = SearchContext::new();
    provide_context(search_ctx);

    // Load the diary on mount and whenever the trigger changes
    Effect::new(move |_| {
        let _ = reload_trigger.get();
        spawn_local(async move {
            match api::list_entries().await {
                Ok(entries) => store.entries().set(entries),
                Err(err) => {
                    web_sys::console::error_1(&format!("[APP] diary load failed: {err}").into());
                }
            }
        });
    });

    // `/` jumps to the visible search box
    let slash = dom_listen::listen_document("keydown", move |ev| {
        let Some(key_ev) = ev.dyn_ref::<web_sys::KeyboardEvent>() else { return };
        let has_modifier = key_ev.ctrl_key() || key_ev.alt_key() || key_ev.meta_key();
        if search::slash_intercepts(&key_ev.key(), has_modifier, focus_in_text_entry()) {
            ev.prevent_default();
            search_ctx.focus_search();
        }
    });
    let _slash = StoredValue::new_local(slash);

    view! {
        <div class="app-layout">
            <NavBar />

            <main class="main-content">
                <h1>"Reeldiary"</h1>

                <AddEntryForm />

                <DiaryList />

                <p class="entry-count">
                    {move || format!("{} entries", store.entries().get().len())}
                </p>
            </main>

            // Right: detail rail (shown when an entry is selected)
            <EntryDetail />

            <footer class="page-footer">
                <SearchBox slot=SearchSlot::Bottom />
            </footer>
        </div>
    }
}

/// Whether keyboard focus currently sits in a text-entry element
fn focus_in_text_entry() -> bool {
    let active = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.active_element());
    let Some(active) = active else { return false };
    let editable = active
        .dyn_ref::<web_sys::HtmlElement>()
        .map(|el| el.is_content_editable())
        .unwrap_or(false);
    search::is_text_entry(&active.tag_name(), editable)
}
