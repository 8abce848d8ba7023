//! Frontend Models
//!
//! Data structures matching backend diary records.

use serde::{Deserialize, Serialize};

/// Diary entry as the backend serializes it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiaryEntry {
    pub id: u32,
    pub external_id: String,
    /// "movie" or "series"
    pub kind: String,
    pub title: String,
    pub poster_url: Option<String>,
    /// ISO date (YYYY-MM-DD)
    pub date_watched: Option<String>,
    /// 1..10, stored as 2x the star selection
    pub rating: Option<u8>,
    pub review: Option<String>,
    pub created_at: String,
}

/// Payload for creating an entry. Field values are passed through as
/// typed by the user; the backend owns validation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewEntry {
    pub external_id: String,
    pub kind: String,
    pub title: String,
    pub poster_url: String,
    pub date_watched: String,
    pub rating: Option<u8>,
    pub review: String,
}

/// Partial update payload. Only the fields present are touched.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntryPatch {
    pub rating: Option<u8>,
}
