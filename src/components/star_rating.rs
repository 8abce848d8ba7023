//! Star Rating Widget
//!
//! Five-star control writing a 1..10 value into the signal the owning
//! form passes in. Each instance owns its output signal, so several
//! widgets coexist on one page without interfering.

use leptos::prelude::*;

use crate::rating;

#[component]
pub fn StarRating(value: RwSignal<Option<u8>>) -> impl IntoView {
    view! {
        <div class="star-rating" role="radiogroup" aria-label="Rating">
            {(1..=rating::MAX_STARS).map(|star| {
                view! {
                    <button
                        type="button"
                        class=move || {
                            if rating::star_is_filled(star, value.get()) {
                                "star active"
                            } else {
                                "star"
                            }
                        }
                        aria-label=format!("Rate {} of {}", star, rating::MAX_STARS)
                        on:click=move |_| value.set(Some(rating::value_for_star(star)))
                    >
                        "★"
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
