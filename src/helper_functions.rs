//! Common utility functions used throughout the application

use once_cell::sync::Lazy;

use crate::config::EMBED_BASE_URL;

// Generated once per process so every view of the key agrees
static SESSION_KEY: Lazy<String> = Lazy::new(|| {
    let nanos = chrono::Local::now().timestamp_nanos_opt().unwrap_or(0);
    format!("MODSTATUS-{:08X}", (nanos as u64) & 0xFFFF_FFFF)
});

/// Common utility functions used throughout the application
pub struct Utils;

impl Utils {
    /// Truncate a string to a maximum length, adding ellipsis if needed
    pub fn truncate_string(s: &str, max_len: usize) -> String {
        if s.chars().count() <= max_len {
            s.to_string()
        } else {
            let cut: String = s.chars().take(max_len.saturating_sub(3)).collect();
            format!("{}...", cut)
        }
    }

    /// Build the embed address for a stored video identifier.
    ///
    /// Identifiers may carry an inline query suffix (`"<id>?<query>"`); the
    /// part before the first `?` becomes the path segment and the remainder is
    /// re-appended as query parameters. Malformed identifiers are passed
    /// through unguarded and surface as a dead embed link.
    pub fn embed_url(video_id: &str) -> String {
        match video_id.split_once('?') {
            Some((id, query)) => format!("{}/{}?{}", EMBED_BASE_URL, id, query),
            None => format!("{}/{}", EMBED_BASE_URL, video_id),
        }
    }

    /// Per-session trial key derived from the startup clock. Only used when
    /// no static key is configured.
    pub fn session_trial_key() -> String {
        SESSION_KEY.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embed_url_splits_inline_query() {
        assert_eq!(
            Utils::embed_url("abc123?start=69"),
            "https://www.youtube.com/embed/abc123?start=69"
        );
    }

    #[test]
    fn embed_url_without_query_has_no_trailing_question_mark() {
        let url = Utils::embed_url("abc123");
        assert_eq!(url, "https://www.youtube.com/embed/abc123");
        assert!(!url.contains('?'));
    }

    #[test]
    fn embed_url_splits_on_first_question_mark_only() {
        assert_eq!(
            Utils::embed_url("abc?start=1?loop=1"),
            "https://www.youtube.com/embed/abc?start=1?loop=1"
        );
    }

    #[test]
    fn embed_url_passes_malformed_ids_through() {
        // An empty id segment is left as-is rather than rejected
        assert_eq!(
            Utils::embed_url("?start=69"),
            "https://www.youtube.com/embed/?start=69"
        );
    }

    #[test]
    fn session_trial_key_is_stable_within_a_session() {
        let first = Utils::session_trial_key();
        let second = Utils::session_trial_key();
        assert_eq!(first, second);
        assert!(first.starts_with("MODSTATUS-"));
    }

    #[test]
    fn truncate_string_keeps_short_strings() {
        assert_eq!(Utils::truncate_string("short", 10), "short");
    }

    #[test]
    fn truncate_string_adds_ellipsis() {
        assert_eq!(Utils::truncate_string("a very long string", 10), "a very ...");
    }
}
