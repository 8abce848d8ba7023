//! Entry Detail Rail
//!
//! Side panel for the selected entry: a poster figure plus a metadata
//! rail whose height follows the poster's rendered height. The rating
//! row edits in place through the PATCH endpoint.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use dom_listen::FrameScheduler;

use crate::api;
use crate::components::StarRating;
use crate::context::AppContext;
use crate::layout;
use crate::models::{DiaryEntry, EntryPatch};
use crate::store::{store_update_entry, use_diary_store, DiaryStateStoreFields};

#[component]
pub fn EntryDetail() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_diary_store();

    let entry = Memo::new(move |_| {
        ctx.selected_entry
            .get()
            .and_then(|id| store.entries().get().into_iter().find(|e| e.id == id))
    });

    view! {
        {move || entry.get().map(|e| view! { <DetailPanel entry=e /> })}
    }
}

#[component]
fn DetailPanel(entry: DiaryEntry) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_diary_store();
    let id = entry.id;

    let poster_ref = NodeRef::<html::Img>::new();
    let (rail_px, set_rail_px) = signal(None::<i32>);

    let measure = move || {
        let Some(img) = poster_ref.get_untracked() else { return };
        if let Some(px) = layout::rail_height_px(img.get_bounding_client_rect().height()) {
            if rail_px.get_untracked() != Some(px) {
                set_rail_px.set(Some(px));
            }
        }
    };

    // First measurement; an image still loading reports height 0 and is
    // picked up by its load event instead
    Effect::new(move |_| {
        if let Some(img) = poster_ref.get() {
            if img.complete() {
                measure();
            }
        }
    });

    // Window resizes batch onto the next animation frame. No poster,
    // no listeners: the rail then sizes itself.
    let has_poster = entry.poster_url.is_some();
    let frames = FrameScheduler::new();
    let resize = has_poster
        .then(|| dom_listen::listen_window("resize", move |_| frames.schedule(measure)))
        .flatten();
    let _resize = StoredValue::new_local(resize);

    // Size mutations of the poster itself re-measure directly
    let observer = StoredValue::new_local(None::<dom_listen::ResizeObserved>);
    Effect::new(move |_| {
        if let Some(img) = poster_ref.get() {
            observer.set_value(dom_listen::observe_resize(&img, measure));
        }
    });

    // Inline rating edit, persisted per change
    let detail_rating = RwSignal::new(entry.rating);
    Effect::watch(
        move || detail_rating.get(),
        move |value, _, _| {
            let value = *value;
            let current = store
                .entries()
                .get_untracked()
                .iter()
                .find(|e| e.id == id)
                .and_then(|e| e.rating);
            if value == current {
                return;
            }
            spawn_local(async move {
                match api::update_entry(id, &EntryPatch { rating: value }).await {
                    Ok(Some(updated)) => store_update_entry(&store, updated),
                    Ok(None) => {}
                    Err(err) => {
                        web_sys::console::error_1(
                            &format!("[DETAIL] rating update failed: {err}").into(),
                        );
                    }
                }
            });
        },
        false,
    );

    view! {
        <aside class="entry-detail">
            <button class="detail-close" title="Close" on:click=move |_| ctx.select_entry(None)>
                "×"
            </button>
            <div class="detail-columns">
                {entry.poster_url.clone().map(|src| view! {
                    <figure class="detail-poster">
                        <img
                            node_ref=poster_ref
                            src=src
                            alt=entry.title.clone()
                            on:load=move |_| measure()
                        />
                    </figure>
                })}
                <div
                    class="detail-rail"
                    style=move || rail_px.get().map(layout::rail_style).unwrap_or_default()
                >
                    <h2 class="detail-title">{entry.title.clone()}</h2>
                    <p class="detail-kind">{entry.kind.clone()}</p>
                    {entry.date_watched.clone().map(|date| view! {
                        <p class="detail-date">"Watched " {date}</p>
                    })}
                    <StarRating value=detail_rating />
                    {entry.review.clone().map(|text| view! {
                        <p class="detail-review">{text}</p>
                    })}
                </div>
            </div>
        </aside>
    }
}
