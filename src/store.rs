//! Diary State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use std::cmp::Ordering;

use crate::models::DiaryEntry;

/// Client-side diary state
#[derive(Clone, Debug, Default, Store)]
pub struct DiaryState {
    /// All diary entries, as last fetched
    pub entries: Vec<DiaryEntry>,
}

/// Type alias for the store
pub type DiaryStore = Store<DiaryState>;

/// Get the diary store from context
pub fn use_diary_store() -> DiaryStore {
    expect_context::<DiaryStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Update an entry in the store by ID
pub fn store_update_entry(store: &DiaryStore, updated: DiaryEntry) {
    store
        .entries()
        .write()
        .iter_mut()
        .find(|entry| entry.id == updated.id)
        .map(|entry| *entry = updated);
}

/// Remove an entry from the store by ID
pub fn store_remove_entry(store: &DiaryStore, entry_id: u32) {
    store.entries().write().retain(|entry| entry.id != entry_id);
}

// ========================
// Diary Page Grouping
// ========================

/// One diary day: a watch date (None = undated) and its entries
#[derive(Clone, Debug, PartialEq)]
pub struct DayGroup {
    pub date: Option<String>,
    pub entries: Vec<DiaryEntry>,
}

/// Order entries the way the diary page does (watch date descending,
/// undated entries last, newest creation first within a day) and group
/// consecutive same-date runs.
pub fn diary_groups(entries: &[DiaryEntry]) -> Vec<DayGroup> {
    // ISO date/datetime strings order lexicographically
    let mut sorted = entries.to_vec();
    sorted.sort_by(|a, b| match (&a.date_watched, &b.date_watched) {
        (Some(x), Some(y)) => y.cmp(x).then_with(|| b.created_at.cmp(&a.created_at)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => b.created_at.cmp(&a.created_at),
    });

    let mut groups: Vec<DayGroup> = Vec::new();
    for entry in sorted {
        match groups.last_mut() {
            Some(group) if group.date == entry.date_watched => group.entries.push(entry),
            _ => groups.push(DayGroup {
                date: entry.date_watched.clone(),
                entries: vec![entry],
            }),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DiaryEntry;

    fn make_entry(id: u32, date_watched: Option<&str>, created_at: &str) -> DiaryEntry {
        DiaryEntry {
            id,
            external_id: format!("tmdb:{}", id),
            kind: "movie".to_string(),
            title: format!("Entry {}", id),
            poster_url: None,
            date_watched: date_watched.map(str::to_string),
            rating: None,
            review: None,
            created_at: created_at.to_string(),
        }
    }

    #[test]
    fn test_groups_by_day_newest_first() {
        let entries = vec![
            make_entry(1, Some("2024-03-01"), "2024-03-01T10:00:00"),
            make_entry(2, Some("2024-03-05"), "2024-03-05T09:00:00"),
            make_entry(3, Some("2024-03-05"), "2024-03-05T21:00:00"),
        ];

        let groups = diary_groups(&entries);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].date.as_deref(), Some("2024-03-05"));
        // Same day: later creation first
        assert_eq!(groups[0].entries[0].id, 3);
        assert_eq!(groups[0].entries[1].id, 2);
        assert_eq!(groups[1].date.as_deref(), Some("2024-03-01"));
    }

    #[test]
    fn test_undated_entries_sort_last() {
        let entries = vec![
            make_entry(1, None, "2024-04-01T12:00:00"),
            make_entry(2, Some("2020-01-01"), "2024-01-01T12:00:00"),
        ];

        let groups = diary_groups(&entries);

        assert_eq!(groups[0].date.as_deref(), Some("2020-01-01"));
        assert_eq!(groups[1].date, None);
    }

    #[test]
    fn test_same_date_runs_merge_into_one_group() {
        let entries = vec![
            make_entry(1, Some("2024-03-05"), "2024-03-05T08:00:00"),
            make_entry(2, Some("2024-03-04"), "2024-03-04T08:00:00"),
            make_entry(3, Some("2024-03-05"), "2024-03-05T09:00:00"),
        ];

        let groups = diary_groups(&entries);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].entries.len(), 2);
    }
}
