//! Typed accessors over the key-value settings contract.
//!
//! Every field is independently persisted as a primitive string. Reads never
//! fail: a missing or malformed value falls back to its documented default.
//! Writes validate at the boundary and keep the prior value on rejection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::storage::SettingsStore;

/// Persisted key namespace. Versionless and fixed.
pub mod keys {
    pub const TARGET_DATE: &str = "target-date";
    pub const COLOR: &str = "color";
    pub const NUMBERS_ANIMATED: &str = "isNumbersAnimated";
    pub const COLOR_ANIMATED: &str = "isColorAnimated";
    pub const SHOW_QUOTE: &str = "showQuote";
    pub const SHOW_MILLISECONDS: &str = "showMilliseconds";
    pub const MESSAGE: &str = "message";
    pub const TIMER_MODE: &str = "timerMode";
    pub const FOCUS_DURATION: &str = "focusDuration";
    pub const FOCUS_REMAINING: &str = "focusRemaining";
    pub const FOCUS_STATUS: &str = "focusStatus";
    pub const FOCUS_END_TIME: &str = "focusEndTime";
    pub const FOCUS_LABEL: &str = "focusLabel";
    pub const QUOTE_INDEX: &str = "quoteIndex";
}

pub const DEFAULT_COLOR: &str = "#ff7700";
pub const DEFAULT_FOCUS_DURATION_MIN: u64 = 25;
pub const DEFAULT_FOCUS_LABEL: &str = "Focus";
pub const MESSAGE_MAX_LEN: usize = 300;

/// Read a JSON boolean, falling back to `default` when absent or malformed.
pub(crate) fn read_bool<S: SettingsStore>(store: &S, key: &str, default: bool) -> bool {
    store
        .get(key)
        .ok()
        .flatten()
        .and_then(|v| serde_json::from_str::<bool>(&v).ok())
        .unwrap_or(default)
}

pub(crate) fn write_bool<S: SettingsStore>(
    store: &S,
    key: &str,
    value: bool,
) -> Result<(), crate::error::StoreError> {
    store.set(key, if value { "true" } else { "false" })
}

/// Read an integer, falling back to `default` when absent or malformed.
pub(crate) fn read_i64<S: SettingsStore>(store: &S, key: &str, default: i64) -> i64 {
    store
        .get(key)
        .ok()
        .flatten()
        .and_then(|v| v.trim().parse::<i64>().ok())
        .unwrap_or(default)
}

pub(crate) fn read_string<S: SettingsStore>(store: &S, key: &str, default: &str) -> String {
    store
        .get(key)
        .ok()
        .flatten()
        .unwrap_or_else(|| default.to_string())
}

/// Read an ISO-8601 instant. Absent or unparsable values read as `None`.
pub(crate) fn read_instant<S: SettingsStore>(store: &S, key: &str) -> Option<DateTime<Utc>> {
    store
        .get(key)
        .ok()
        .flatten()
        .and_then(|v| DateTime::parse_from_rfc3339(&v).ok())
        .map(|d| d.with_timezone(&Utc))
}

pub(crate) fn write_instant<S: SettingsStore>(
    store: &S,
    key: &str,
    value: DateTime<Utc>,
) -> Result<(), crate::error::StoreError> {
    store.set(key, &value.to_rfc3339())
}

/// Display preferences, loaded as a unit for the consumer read surface.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Preferences {
    pub color: String,
    pub is_numbers_animated: bool,
    pub is_color_animated: bool,
    pub show_quote: bool,
    pub show_milliseconds: bool,
    pub message: String,
    pub quote_index: i64,
}

impl Preferences {
    pub fn load<S: SettingsStore>(store: &S) -> Self {
        Self {
            color: read_string(store, keys::COLOR, DEFAULT_COLOR),
            is_numbers_animated: read_bool(store, keys::NUMBERS_ANIMATED, true),
            is_color_animated: read_bool(store, keys::COLOR_ANIMATED, true),
            show_quote: read_bool(store, keys::SHOW_QUOTE, true),
            show_milliseconds: read_bool(store, keys::SHOW_MILLISECONDS, true),
            message: read_string(store, keys::MESSAGE, ""),
            quote_index: read_i64(store, keys::QUOTE_INDEX, -1),
        }
    }
}

/// Validate an accent color at the write boundary.
pub(crate) fn validate_color(value: &str) -> Result<(), ValidationError> {
    let ok = value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit());
    if ok {
        Ok(())
    } else {
        Err(ValidationError::InvalidColor(value.to_string()))
    }
}

/// Validate the custom message at the write boundary.
pub(crate) fn validate_message(value: &str) -> Result<(), ValidationError> {
    let len = value.chars().count();
    if len <= MESSAGE_MAX_LEN {
        Ok(())
    } else {
        Err(ValidationError::MessageTooLong {
            len,
            max: MESSAGE_MAX_LEN,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn defaults_when_store_is_empty() {
        let store = MemoryStore::new();
        let prefs = Preferences::load(&store);
        assert_eq!(prefs.color, "#ff7700");
        assert!(prefs.is_numbers_animated);
        assert!(prefs.is_color_animated);
        assert!(prefs.show_quote);
        assert!(prefs.show_milliseconds);
        assert_eq!(prefs.message, "");
        assert_eq!(prefs.quote_index, -1);
    }

    #[test]
    fn malformed_values_fall_back_to_defaults() {
        let store = MemoryStore::new();
        store.set(keys::SHOW_QUOTE, "not-a-bool").unwrap();
        store.set(keys::QUOTE_INDEX, "NaN").unwrap();
        store.set(keys::TARGET_DATE, "tomorrow-ish").unwrap();

        let prefs = Preferences::load(&store);
        assert!(prefs.show_quote);
        assert_eq!(prefs.quote_index, -1);
        assert!(read_instant(&store, keys::TARGET_DATE).is_none());
    }

    #[test]
    fn bool_and_instant_roundtrip() {
        let store = MemoryStore::new();
        write_bool(&store, keys::SHOW_MILLISECONDS, false).unwrap();
        assert!(!read_bool(&store, keys::SHOW_MILLISECONDS, true));

        let t = DateTime::parse_from_rfc3339("2030-06-15T00:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        write_instant(&store, keys::TARGET_DATE, t).unwrap();
        assert_eq!(read_instant(&store, keys::TARGET_DATE), Some(t));
    }

    #[test]
    fn color_validation() {
        assert!(validate_color("#ff7700").is_ok());
        assert!(validate_color("#FF7700").is_ok());
        assert!(validate_color("ff7700").is_err());
        assert!(validate_color("#ff770").is_err());
        assert!(validate_color("#ff770g").is_err());
    }

    #[test]
    fn message_length_boundary() {
        assert!(validate_message(&"x".repeat(MESSAGE_MAX_LEN)).is_ok());
        assert!(validate_message(&"x".repeat(MESSAGE_MAX_LEN + 1)).is_err());
    }
}
