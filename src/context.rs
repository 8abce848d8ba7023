//! Application Context
//!
//! Shared state provided via the Leptos Context API.

use leptos::html;
use leptos::prelude::*;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to reload entries from the backend - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload entries from the backend - write
    set_reload_trigger: WriteSignal<u32>,
    /// Entry shown in the detail rail (None = closed) - read
    pub selected_entry: ReadSignal<Option<u32>>,
    /// Entry shown in the detail rail - write
    set_selected_entry: WriteSignal<Option<u32>>,
}

impl AppContext {
    pub fn new(
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        selected_entry: (ReadSignal<Option<u32>>, WriteSignal<Option<u32>>),
    ) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            selected_entry: selected_entry.0,
            set_selected_entry: selected_entry.1,
        }
    }

    /// Trigger a reload of the entry list
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Select the entry for the detail rail
    pub fn select_entry(&self, id: Option<u32>) {
        self.set_selected_entry.set(id);
    }
}

/// Which of the duplicate search boxes an input is
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchSlot {
    Nav,
    Bottom,
}

/// Shared query value plus element handles for the `/` shortcut.
/// Both boxes read and write the same signal, which is what keeps
/// them mirrored.
#[derive(Clone, Copy)]
pub struct SearchContext {
    pub query: RwSignal<String>,
    nav_box: NodeRef<html::Input>,
    bottom_box: NodeRef<html::Input>,
}

impl SearchContext {
    pub fn new() -> Self {
        Self {
            query: RwSignal::new(String::new()),
            nav_box: NodeRef::new(),
            bottom_box: NodeRef::new(),
        }
    }

    pub fn slot_ref(&self, slot: SearchSlot) -> NodeRef<html::Input> {
        match slot {
            SearchSlot::Nav => self.nav_box,
            SearchSlot::Bottom => self.bottom_box,
        }
    }

    /// Focus the visible search box, nav first. A no-op when neither
    /// box is on the page.
    pub fn focus_search(&self) {
        let present: Vec<web_sys::HtmlInputElement> = [
            self.nav_box.get_untracked(),
            self.bottom_box.get_untracked(),
        ]
        .into_iter()
        .flatten()
        .collect();

        let visible = present.iter().find(|input| input.offset_width() > 0);
        if let Some(input) = visible.or_else(|| present.first()) {
            let _ = input.focus();
        }
    }
}
