//! Diary List Component
//!
//! Entries grouped by watch date, newest day first. A card click
//! selects the entry for the detail rail; the remove control confirms,
//! deletes, and reloads the page.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::AppContext;
use crate::models::DiaryEntry;
use crate::rating;
use crate::store::{diary_groups, use_diary_store, DiaryStateStoreFields};

#[component]
pub fn DiaryList() -> impl IntoView {
    let store = use_diary_store();

    view! {
        <section class="diary">
            <For
                each=move || diary_groups(&store.entries().get())
                key=|group| group.date.clone()
                children=move |group| {
                    let heading = group.date.clone().unwrap_or_else(|| "Sometime".to_string());
                    view! {
                        <div class="diary-day">
                            <h2 class="diary-date">{heading}</h2>
                            <div class="diary-cards">
                                {group.entries.into_iter().map(|entry| {
                                    view! { <EntryCard entry=entry /> }
                                }).collect_view()}
                            </div>
                        </div>
                    }
                }
            />
        </section>
    }
}

#[component]
fn EntryCard(entry: DiaryEntry) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let (remove_error, set_remove_error) = signal(String::new());

    let id = entry.id;
    let stars = rating::stars_for_value(entry.rating);

    let on_remove = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        let Some(win) = web_sys::window() else { return };
        let confirmed = win
            .confirm_with_message("Remove this diary entry?")
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match api::delete_entry(id).await {
                Ok(()) => {
                    if let Some(win) = web_sys::window() {
                        let _ = win.location().reload();
                    }
                }
                Err(err) => set_remove_error.set(format!("Error: {err}")),
            }
        });
    };

    view! {
        <article class="entry-card" on:click=move |_| ctx.select_entry(Some(id))>
            {entry.poster_url.clone().map(|src| view! {
                <img class="entry-poster" src=src alt="" />
            })}
            <div class="entry-body">
                <h3 class="entry-title">{entry.title.clone()}</h3>
                <span class="entry-kind">{entry.kind.clone()}</span>
                <Show when=move || (stars > 0)>
                    <span class="entry-stars">{"★".repeat(stars as usize)}</span>
                </Show>
                {entry.review.clone().map(|text| view! { <p class="entry-review">{text}</p> })}
            </div>
            <button class="remove-btn" title="Remove" on:click=on_remove>"×"</button>
            <Show when=move || !remove_error.get().is_empty()>
                <span class="remove-error">{move || remove_error.get()}</span>
            </Show>
        </article>
    }
}
