//! Add Entry Form Component
//!
//! Form for logging a watched movie or series. Field values pass
//! through to the backend as typed; validation happens server-side.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::StarRating;
use crate::models::NewEntry;

/// Entry kind options
const ENTRY_KINDS: &[(&str, &str)] = &[("movie", "Movie"), ("series", "Series")];

/// Where the post-add redirect lands
const DIARY_PAGE: &str = "/diary";

/// How long the confirmation message stays up before redirecting (ms)
const REDIRECT_DELAY_MS: u32 = 400;

#[component]
pub fn AddEntryForm() -> impl IntoView {
    let (title, set_title) = signal(String::new());
    let (kind, set_kind) = signal(String::from("movie"));
    let (external_id, set_external_id) = signal(String::new());
    let (poster_url, set_poster_url) = signal(String::new());
    let (date_watched, set_date_watched) = signal(String::new());
    let (review, set_review) = signal(String::new());
    let rating_value = RwSignal::new(None::<u8>);
    let (status, set_status) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let payload = NewEntry {
            external_id: external_id.get(),
            kind: kind.get(),
            title: title.get(),
            poster_url: poster_url.get(),
            date_watched: date_watched.get(),
            rating: rating_value.get(),
            review: review.get(),
        };
        // Feedback goes up before the request resolves
        set_status.set("Saving…".to_string());
        spawn_local(async move {
            match api::add_entry(&payload).await {
                Ok(_) => {
                    set_status.set("Added ✓".to_string());
                    TimeoutFuture::new(REDIRECT_DELAY_MS).await;
                    if let Some(win) = web_sys::window() {
                        let _ = win.location().set_href(DIARY_PAGE);
                    }
                }
                Err(err) => set_status.set(format!("Error: {err}")),
            }
        });
    };

    view! {
        <form class="add-entry-form" on:submit=on_submit>
            <div class="field-row">
                <input
                    type="text"
                    placeholder="Title..."
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                />
                <div class="kind-selector-row">
                    {ENTRY_KINDS.iter().map(|(value, label)| {
                        let val = value.to_string();
                        let val_clone = val.clone();
                        let is_selected = move || kind.get() == val;
                        view! {
                            <button
                                type="button"
                                class=move || if is_selected() { "kind-btn active" } else { "kind-btn" }
                                on:click=move |_| set_kind.set(val_clone.clone())
                            >
                                {*label}
                            </button>
                        }
                    }).collect_view()}
                </div>
            </div>

            <div class="field-row">
                <input
                    type="text"
                    placeholder="TMDb / Letterboxd id..."
                    prop:value=move || external_id.get()
                    on:input=move |ev| set_external_id.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Poster URL..."
                    prop:value=move || poster_url.get()
                    on:input=move |ev| set_poster_url.set(event_target_value(&ev))
                />
            </div>

            <div class="field-row">
                <input
                    type="date"
                    prop:value=move || date_watched.get()
                    on:input=move |ev| set_date_watched.set(event_target_value(&ev))
                />
                <StarRating value=rating_value />
            </div>

            <textarea
                placeholder="Review..."
                prop:value=move || review.get()
                on:input=move |ev| set_review.set(event_target_value(&ev))
            ></textarea>

            <div class="submit-row">
                <button type="submit">"Add to diary"</button>
                <p class="add-result">{move || status.get()}</p>
            </div>
        </form>
    }
}
