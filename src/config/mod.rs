#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

/// Reference-day defaults, matching the original deployment's fallback window.
pub const DEFAULT_WINDOW_START: &str = "2024-01-01T09:00:00Z";
pub const DEFAULT_WINDOW_END: &str = "2024-01-01T17:00:00Z";
pub const DEFAULT_GRANULARITY_MINUTES: u32 = 15;

use crate::utils::error::{BookingError, Result};
use chrono::{DateTime, Utc};

pub(crate) fn parse_timestamp(field: &str, value: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| BookingError::Config {
            field: field.to_string(),
            message: format!("expected an RFC 3339 timestamp, got {:?}: {}", value, e),
        })
}
