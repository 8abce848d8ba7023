//! Search Box Logic
//!
//! Pure helpers behind the mirrored search inputs and the `/` shortcut.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Escape set for the q= query value
const QUERY: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'?');

/// New value for the shared query when one box reports `typed`.
/// None when the boxes already agree, so a mirrored write never
/// re-triggers its own input handler.
pub fn mirror_update(current: &str, typed: &str) -> Option<String> {
    if current == typed {
        None
    } else {
        Some(typed.to_string())
    }
}

/// Whether the focused element swallows plain keystrokes
pub fn is_text_entry(tag_name: &str, content_editable: bool) -> bool {
    content_editable
        || matches!(
            tag_name.to_ascii_uppercase().as_str(),
            "INPUT" | "TEXTAREA" | "SELECT"
        )
}

/// Whether a keydown should be captured to focus the search box
pub fn slash_intercepts(key: &str, has_modifier: bool, in_text_entry: bool) -> bool {
    key == "/" && !has_modifier && !in_text_entry
}

/// Search page URL for a submitted query; None for blank input
pub fn search_url(query: &str) -> Option<String> {
    let q = query.trim();
    if q.is_empty() {
        return None;
    }
    Some(format!("/search?q={}", utf8_percent_encode(q, QUERY)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mirror_copies_new_text() {
        assert_eq!(mirror_update("", "blade"), Some("blade".to_string()));
        assert_eq!(mirror_update("blade", "blade r"), Some("blade r".to_string()));
    }

    #[test]
    fn test_mirror_skips_equal_values() {
        // The write a mirrored box echoes back must not loop
        assert_eq!(mirror_update("blade", "blade"), None);
        assert_eq!(mirror_update("", ""), None);
    }

    #[test]
    fn test_slash_captured_outside_text_entry() {
        assert!(slash_intercepts("/", false, false));
    }

    #[test]
    fn test_slash_ignored_in_text_entry_or_with_modifier() {
        assert!(!slash_intercepts("/", false, true));
        assert!(!slash_intercepts("/", true, false));
        assert!(!slash_intercepts("a", false, false));
    }

    #[test]
    fn test_text_entry_detection() {
        assert!(is_text_entry("INPUT", false));
        assert!(is_text_entry("textarea", false));
        assert!(is_text_entry("div", true));
        assert!(!is_text_entry("BODY", false));
        assert!(!is_text_entry("A", false));
    }

    #[test]
    fn test_search_url_encodes_query() {
        assert_eq!(
            search_url("blade runner").as_deref(),
            Some("/search?q=blade%20runner")
        );
        assert_eq!(
            search_url(" m*a*s*h ").as_deref(),
            Some("/search?q=m*a*s*h")
        );
    }

    #[test]
    fn test_search_url_blank_is_none() {
        assert_eq!(search_url(""), None);
        assert_eq!(search_url("   "), None);
    }
}
