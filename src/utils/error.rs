use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("missing required field: {field}")]
    MissingField { field: String },

    #[error(
        "invalid year: {value}. Must be one of: {}",
        crate::domain::model::Year::ACCEPTED.join(", ")
    )]
    InvalidYear { value: String },

    #[error("invalid {field}: {value} ({reason})")]
    InvalidField {
        field: String,
        value: String,
        reason: String,
    },

    #[error(
        "requested time {requested} is outside the interview schedule [{start}, {end})"
    )]
    OutOfWindow {
        requested: DateTime<Utc>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    #[error("requested time {requested} does not align with {granularity_minutes}-minute slots")]
    MisalignedSlot {
        requested: DateTime<Utc>,
        granularity_minutes: u32,
    },

    #[error("a booking with email {email} already exists")]
    DuplicateEmail { email: String },

    #[error("slot {slot} is already booked")]
    SlotTaken { slot: DateTime<Utc> },

    #[error("storage failure: {message}")]
    Storage { message: String },

    #[error("notification failed: {message}")]
    Notifier { message: String },

    #[error("configuration error in {field}: {message}")]
    Config { field: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Coarse classification for callers that only care whether to blame the
/// request, the existing state, or the infrastructure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidRequest,
    Conflict,
    Infrastructure,
}

impl BookingError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BookingError::MissingField { .. }
            | BookingError::InvalidYear { .. }
            | BookingError::InvalidField { .. }
            | BookingError::OutOfWindow { .. }
            | BookingError::MisalignedSlot { .. } => ErrorKind::InvalidRequest,
            BookingError::DuplicateEmail { .. } | BookingError::SlotTaken { .. } => {
                ErrorKind::Conflict
            }
            BookingError::Storage { .. }
            | BookingError::Notifier { .. }
            | BookingError::Config { .. }
            | BookingError::Io(_) => ErrorKind::Infrastructure,
        }
    }
}

pub type Result<T> = std::result::Result<T, BookingError>;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_error_kinds() {
        let e = BookingError::MissingField {
            field: "email".to_string(),
        };
        assert_eq!(e.kind(), ErrorKind::InvalidRequest);

        let e = BookingError::SlotTaken {
            slot: Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap(),
        };
        assert_eq!(e.kind(), ErrorKind::Conflict);

        let e = BookingError::Storage {
            message: "down".to_string(),
        };
        assert_eq!(e.kind(), ErrorKind::Infrastructure);
    }

    #[test]
    fn test_invalid_year_lists_accepted_values() {
        let e = BookingError::InvalidYear {
            value: "5th Year".to_string(),
        };
        let msg = e.to_string();
        assert!(msg.contains("5th Year"));
        for accepted in crate::domain::model::Year::ACCEPTED {
            assert!(msg.contains(accepted));
        }
    }

    #[test]
    fn test_out_of_window_reports_bounds() {
        let e = BookingError::OutOfWindow {
            requested: Utc.with_ymd_and_hms(2024, 1, 1, 18, 0, 0).unwrap(),
            start: Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap(),
            end: Utc.with_ymd_and_hms(2024, 1, 1, 17, 0, 0).unwrap(),
        };
        let msg = e.to_string();
        assert!(msg.contains("2024-01-01 18:00:00 UTC"));
        assert!(msg.contains("2024-01-01 09:00:00 UTC"));
        assert!(msg.contains("2024-01-01 17:00:00 UTC"));
    }
}
