//! Date/time utilities for corkboard.

use chrono::{SecondsFormat, Utc};

/// Current UTC time as an RFC3339 string with millisecond precision.
///
/// Stored timestamps use this format so that string comparison matches
/// chronological order.
pub fn now_utc() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
