//! Navigation Bar Component
//!
//! Top chrome: brand link, nav search box, user menu.

use leptos::prelude::*;

use crate::components::{SearchBox, UserMenu};
use crate::context::SearchSlot;

#[component]
pub fn NavBar() -> impl IntoView {
    view! {
        <header class="nav-bar">
            <a class="brand" href="/">"Reeldiary"</a>
            <SearchBox slot=SearchSlot::Nav />
            <UserMenu />
        </header>
    }
}
