use chrono::{DateTime, NaiveDateTime, Utc};

/// Format of pagination cursors: microsecond precision, UTC, literal `Z`.
pub const CURSOR_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6fZ";

/// Format of timestamps rendered inside resource bodies: millisecond precision.
pub const DISPLAY_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Space separated layout some backends still emit (`2020-09-20 03:23:21.995000`).
const BACKEND_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

/// Formats a creation timestamp as a pagination cursor.
#[must_use]
pub fn format_cursor(value: &DateTime<Utc>) -> String {
    value.format(CURSOR_TIMESTAMP_FORMAT).to_string()
}

/// Formats a timestamp for display inside a resource body.
#[must_use]
pub fn format_display(value: &DateTime<Utc>) -> String {
    value.format(DISPLAY_TIMESTAMP_FORMAT).to_string()
}

/// Parses an RFC 3339 or backend-layout timestamp. Blank or unparsable input yields `None`.
#[must_use]
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(value, BACKEND_TIMESTAMP_FORMAT)
        .ok()
        .map(|naive| naive.and_utc())
}

/// Serde adapter for optional timestamps rendered in display format.
///
/// Serializes `None` as `null` (pair with `skip_serializing_if` to omit the
/// field) and accepts anything [`parse_timestamp`] understands. Empty or
/// unparsable values decode as absent.
pub mod display {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    use super::{format_display, parse_timestamp};

    /// Serializes an optional timestamp.
    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(value) => serializer.serialize_str(format_display(value).as_str()),
            None => serializer.serialize_none(),
        }
    }

    /// Deserializes an optional timestamp.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let Some(raw) = Option::<String>::deserialize(deserializer)? else {
            return Ok(None);
        };

        let parsed = parse_timestamp(raw.as_str());
        if parsed.is_none() && !raw.trim().is_empty() {
            tracing::debug!(value = raw.as_str(), "unparsable timestamp treated as absent");
        }

        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeZone, Utc};
    use serde::{Deserialize, Serialize};

    use super::{display, format_cursor, format_display, parse_timestamp};

    #[derive(Debug, Default, Deserialize, Serialize)]
    #[serde(default)]
    struct Stamped {
        #[serde(with = "display", skip_serializing_if = "Option::is_none")]
        tm_update: Option<DateTime<Utc>>,
    }

    #[test]
    fn cursor_keeps_six_fraction_digits() {
        let parsed = parse_timestamp("2020-09-20T03:23:21.995Z");
        assert_eq!(
            parsed.map(|value| format_cursor(&value)).as_deref(),
            Some("2020-09-20T03:23:21.995000Z")
        );
    }

    #[test]
    fn cursor_pads_whole_seconds() {
        let value = Utc.with_ymd_and_hms(2021, 1, 2, 3, 4, 5).single();
        assert_eq!(
            value.map(|value| format_cursor(&value)).as_deref(),
            Some("2021-01-02T03:04:05.000000Z")
        );
    }

    #[test]
    fn display_uses_millisecond_precision() {
        let parsed = parse_timestamp("2020-09-20T03:23:21.995123Z");
        assert_eq!(
            parsed.map(|value| format_display(&value)).as_deref(),
            Some("2020-09-20T03:23:21.995Z")
        );
    }

    #[test]
    fn parses_backend_layout() {
        let parsed = parse_timestamp("2020-09-20 03:23:21.995000");
        assert_eq!(
            parsed.map(|value| format_cursor(&value)).as_deref(),
            Some("2020-09-20T03:23:21.995000Z")
        );
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_timestamp("yesterday").is_none());
        assert!(parse_timestamp("   ").is_none());
    }

    #[test]
    fn display_adapter_degrades_bad_values_to_absent() -> Result<(), serde_json::Error> {
        for raw in [r#"{"tm_update":"garbage"}"#, r#"{"tm_update":""}"#, r#"{"tm_update":null}"#] {
            let stamped: Stamped = serde_json::from_str(raw)?;
            assert!(stamped.tm_update.is_none());
            assert_eq!(serde_json::to_string(&stamped)?, "{}");
        }

        let stamped: Stamped = serde_json::from_str(r#"{"tm_update":"2020-09-20 03:23:21.995000"}"#)?;
        assert_eq!(
            serde_json::to_string(&stamped)?,
            r#"{"tm_update":"2020-09-20T03:23:21.995Z"}"#
        );
        Ok(())
    }
}
