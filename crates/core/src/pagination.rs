use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::timestamp::format_cursor;

/// Page size used when the caller omits one or asks for an out-of-range value.
pub const DEFAULT_PAGE_SIZE: u64 = 100;

/// Largest page size a caller may request.
pub const MAX_PAGE_SIZE: u64 = 100;

/// Normalized pagination parameters for one list request.
///
/// `token` is opaque to the gateway. An empty token addresses the start of the
/// collection; otherwise it is the cursor returned with the previous page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    size: u64,
    token: String,
}

impl PageRequest {
    /// Creates a page request, collapsing an out-of-range size to the default.
    #[must_use]
    pub fn new(size: u64, token: impl Into<String>) -> Self {
        Self {
            size: normalize_size(Some(size)),
            token: token.into(),
        }
    }

    /// Parses raw query values. Never fails: a missing, zero, negative,
    /// non-numeric or oversized `raw_size` becomes [`DEFAULT_PAGE_SIZE`], and
    /// `raw_token` is passed through verbatim.
    #[must_use]
    pub fn parse(raw_size: Option<&str>, raw_token: Option<&str>) -> Self {
        let requested = raw_size.and_then(|value| value.parse::<u64>().ok());
        let size = normalize_size(requested);

        if raw_size.is_some() && requested != Some(size) {
            tracing::debug!(
                requested = raw_size.unwrap_or_default(),
                page_size = size,
                "invalid requested page size, using default"
            );
        }

        Self {
            size,
            token: raw_token.unwrap_or_default().to_owned(),
        }
    }

    /// Returns the number of items requested.
    #[must_use]
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Returns the continuation cursor, empty for the first page.
    #[must_use]
    pub fn token(&self) -> &str {
        self.token.as_str()
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            size: DEFAULT_PAGE_SIZE,
            token: String::new(),
        }
    }
}

fn normalize_size(size: Option<u64>) -> u64 {
    match size {
        Some(size) if (1..=MAX_PAGE_SIZE).contains(&size) => size,
        _ => DEFAULT_PAGE_SIZE,
    }
}

/// Resources that carry a creation timestamp usable as a pagination cursor.
pub trait Timestamped {
    /// Returns when the resource was created, if known.
    fn created_at(&self) -> Option<DateTime<Utc>>;
}

/// List response: the backend's items plus the cursor for the next page.
///
/// The cursor is derived from the last item's creation timestamp and is
/// never taken from the backend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListEnvelope<T> {
    result: Vec<T>,
    next_page_token: String,
}

impl<T: Timestamped> ListEnvelope<T> {
    /// Wraps `items` (kept in backend order) and computes `next_page_token`.
    #[must_use]
    pub fn build(items: Vec<T>) -> Self {
        let next_page_token = items
            .last()
            .and_then(Timestamped::created_at)
            .map(|created_at| format_cursor(&created_at))
            .unwrap_or_default();

        Self {
            result: items,
            next_page_token,
        }
    }
}

impl<T> ListEnvelope<T> {
    /// Returns the wrapped items.
    #[must_use]
    pub fn result(&self) -> &[T] {
        self.result.as_slice()
    }

    /// Returns the continuation cursor, empty when there is nothing to continue from.
    #[must_use]
    pub fn next_page_token(&self) -> &str {
        self.next_page_token.as_str()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Utc};

    use super::{DEFAULT_PAGE_SIZE, ListEnvelope, PageRequest, Timestamped};
    use crate::timestamp::parse_timestamp;

    #[derive(Debug, Clone, PartialEq, serde::Serialize)]
    struct Item {
        name: &'static str,
        created_at: Option<DateTime<Utc>>,
    }

    impl Timestamped for Item {
        fn created_at(&self) -> Option<DateTime<Utc>> {
            self.created_at
        }
    }

    fn item(name: &'static str, created_at: &str) -> Item {
        Item {
            name,
            created_at: parse_timestamp(created_at),
        }
    }

    #[test]
    fn keeps_sizes_within_bounds() {
        for size in 1..=100_u64 {
            let raw = size.to_string();
            assert_eq!(PageRequest::parse(Some(raw.as_str()), None).size(), size);
        }
    }

    #[test]
    fn collapses_invalid_sizes_to_default() {
        for raw in [None, Some("0"), Some("-3"), Some("101"), Some("1000"), Some("ten"), Some("")] {
            assert_eq!(PageRequest::parse(raw, None).size(), DEFAULT_PAGE_SIZE);
        }
    }

    #[test]
    fn passes_token_through_verbatim() {
        let page = PageRequest::parse(Some("10"), Some("2020-09-20 03:23:20.995000"));
        assert_eq!(page.token(), "2020-09-20 03:23:20.995000");
        assert_eq!(PageRequest::parse(None, None).token(), "");
    }

    #[test]
    fn new_normalizes_size() {
        assert_eq!(PageRequest::new(0, "").size(), DEFAULT_PAGE_SIZE);
        assert_eq!(PageRequest::new(7, "").size(), 7);
        assert_eq!(PageRequest::default(), PageRequest::new(100, ""));
    }

    #[test]
    fn empty_list_has_empty_cursor() {
        let envelope = ListEnvelope::<Item>::build(Vec::new());
        assert_eq!(envelope.next_page_token(), "");
        assert!(envelope.result().is_empty());
    }

    #[test]
    fn cursor_comes_from_last_item() {
        let envelope = ListEnvelope::build(vec![
            item("first", "2020-09-20T03:23:21.995Z"),
            item("second", "2020-09-20T03:23:22.995Z"),
            item("third", "2020-09-20T03:23:23.995Z"),
        ]);

        assert_eq!(envelope.next_page_token(), "2020-09-20T03:23:23.995000Z");
        let names: Vec<_> = envelope.result().iter().map(|item| item.name).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn missing_timestamp_on_last_item_yields_empty_cursor() {
        let envelope = ListEnvelope::build(vec![
            item("first", "2020-09-20T03:23:21.995Z"),
            Item {
                name: "second",
                created_at: None,
            },
        ]);

        assert_eq!(envelope.next_page_token(), "");
    }

    #[test]
    fn serializes_result_then_cursor() -> Result<(), serde_json::Error> {
        let envelope = ListEnvelope::build(vec![item("only", "2020-09-20T03:23:21.995Z")]);
        let json = serde_json::to_value(&envelope)?;

        assert_eq!(json["next_page_token"], "2020-09-20T03:23:21.995000Z");
        assert_eq!(json["result"][0]["name"], "only");
        Ok(())
    }
}
