use crate::utils::error::{BookingError, Result};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Academic year of the candidate. The wire representation matches the
/// original form values ("1st Year" .. "4th Year").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Year {
    #[serde(rename = "1st Year")]
    First,
    #[serde(rename = "2nd Year")]
    Second,
    #[serde(rename = "3rd Year")]
    Third,
    #[serde(rename = "4th Year")]
    Fourth,
}

impl Year {
    pub const ACCEPTED: [&'static str; 4] = ["1st Year", "2nd Year", "3rd Year", "4th Year"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Year::First => "1st Year",
            Year::Second => "2nd Year",
            Year::Third => "3rd Year",
            Year::Fourth => "4th Year",
        }
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Year {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "1st Year" => Ok(Year::First),
            "2nd Year" => Ok(Year::Second),
            "3rd Year" => Ok(Year::Third),
            "4th Year" => Ok(Year::Fourth),
            other => Err(BookingError::InvalidYear {
                value: other.to_string(),
            }),
        }
    }
}

/// The configured booking window. Built once at startup and injected into the
/// grid and the service; both derive slot alignment from the same granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    granularity_minutes: u32,
}

impl SlotWindow {
    /// Granularity must be non-zero and divide a whole hour, otherwise the
    /// minute-offset alignment check below would be meaningless.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>, granularity_minutes: u32) -> Result<Self> {
        if granularity_minutes == 0 || 60 % granularity_minutes != 0 {
            return Err(BookingError::Config {
                field: "granularity_minutes".to_string(),
                message: format!(
                    "granularity must be a non-zero divisor of 60, got {}",
                    granularity_minutes
                ),
            });
        }
        if start >= end {
            return Err(BookingError::Config {
                field: "window".to_string(),
                message: format!("window start {} must precede window end {}", start, end),
            });
        }
        Ok(Self {
            start,
            end,
            granularity_minutes,
        })
    }

    pub fn granularity_minutes(&self) -> u32 {
        self.granularity_minutes
    }

    pub fn granularity(&self) -> Duration {
        Duration::minutes(i64::from(self.granularity_minutes))
    }

    /// Half-open membership: [start, end).
    pub fn contains(&self, t: DateTime<Utc>) -> bool {
        t >= self.start && t < self.end
    }

    /// A timestamp is slot-aligned when it is a whole number of granularity
    /// steps away from the window start, i.e. a member of the grid sequence
    /// start + k*g. Anchoring to the window start keeps alignment consistent
    /// with `generate_slots` for windows that do not begin on the hour.
    pub fn is_aligned(&self, t: DateTime<Utc>) -> bool {
        let delta = t - self.start;
        let step = i64::from(self.granularity_minutes) * 60;
        delta.subsec_nanos() == 0 && delta.num_seconds().rem_euclid(step) == 0
    }

    /// Floors a timestamp to the start of the slot containing it, relative to
    /// the window start. Used as the uniqueness key at the storage boundary.
    pub fn slot_key(&self, t: DateTime<Utc>) -> i64 {
        let step = i64::from(self.granularity_minutes) * 60;
        let offset = (t.timestamp() - self.start.timestamp()).rem_euclid(step);
        t.timestamp() - offset
    }
}

/// Raw inbound booking request, before any validation. Text fields arrive as
/// free-form strings; empty-after-trim counts as missing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub name: String,
    pub email: String,
    pub phone_no: String,
    pub year: String,
    pub branch: String,
    pub preferred_time: DateTime<Utc>,
    pub resume_url: String,
}

/// Validated and normalized booking input, ready for the repository.
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub name: String,
    pub email: String,
    pub phone_no: String,
    pub year: Year,
    pub branch: String,
    pub preferred_time: DateTime<Utc>,
    pub resume_url: String,
}

/// Persisted booking. The id is opaque and assigned by the repository.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone_no: String,
    pub year: Year,
    pub branch: String,
    pub preferred_time: DateTime<Utc>,
    pub resume_url: String,
    pub created_at: DateTime<Utc>,
}

/// External shape of a booking, as handed to whatever transport wraps the
/// service. preferredTime serializes as RFC 3339.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone_no: String,
    pub year: Year,
    pub branch: String,
    pub preferred_time: DateTime<Utc>,
    pub formatted_time: String,
    pub resume_url: String,
}

impl From<&Booking> for BookingRecord {
    fn from(b: &Booking) -> Self {
        Self {
            id: b.id.clone(),
            name: b.name.clone(),
            email: b.email.clone(),
            phone_no: b.phone_no.clone(),
            year: b.year,
            branch: b.branch.clone(),
            preferred_time: b.preferred_time,
            formatted_time: format_slot_time(b.preferred_time),
            resume_url: b.resume_url.clone(),
        }
    }
}

/// Long human-readable rendering of a slot timestamp. Presentation only, kept
/// out of the validation path so transport wrappers can reuse it.
pub fn format_slot_time(t: DateTime<Utc>) -> String {
    t.format("%A, %B %-d, %Y, %I:%M %p %Z").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn window() -> SlotWindow {
        SlotWindow::new(
            Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 1, 1, 17, 0, 0).unwrap(),
            15,
        )
        .unwrap()
    }

    #[test]
    fn test_year_parsing() {
        assert_eq!("1st Year".parse::<Year>().unwrap(), Year::First);
        assert_eq!("4th Year".parse::<Year>().unwrap(), Year::Fourth);
        assert!("5th Year".parse::<Year>().is_err());
        assert!("".parse::<Year>().is_err());
    }

    #[test]
    fn test_year_serde_roundtrip() {
        let json = serde_json::to_string(&Year::Second).unwrap();
        assert_eq!(json, "\"2nd Year\"");
        let back: Year = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Year::Second);
    }

    #[test]
    fn test_window_rejects_bad_granularity() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 1, 1, 17, 0, 0).unwrap();
        assert!(SlotWindow::new(start, end, 0).is_err());
        assert!(SlotWindow::new(start, end, 7).is_err());
        assert!(SlotWindow::new(end, start, 15).is_err());
        assert!(SlotWindow::new(start, end, 30).is_ok());
    }

    #[test]
    fn test_window_contains_half_open() {
        let w = window();
        assert!(w.contains(w.start));
        assert!(w.contains(Utc.with_ymd_and_hms(2024, 1, 1, 16, 45, 0).unwrap()));
        assert!(!w.contains(w.end));
        assert!(!w.contains(Utc.with_ymd_and_hms(2024, 1, 1, 8, 45, 0).unwrap()));
    }

    #[test]
    fn test_alignment() {
        let w = window();
        assert!(w.is_aligned(Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap()));
        assert!(w.is_aligned(Utc.with_ymd_and_hms(2024, 1, 1, 9, 45, 0).unwrap()));
        assert!(!w.is_aligned(Utc.with_ymd_and_hms(2024, 1, 1, 9, 10, 0).unwrap()));
        // Seconds within an aligned minute still miss the slot start.
        assert!(!w.is_aligned(Utc.with_ymd_and_hms(2024, 1, 1, 9, 15, 30).unwrap()));
    }

    #[test]
    fn test_alignment_anchors_to_window_start() {
        // A window starting at 09:05 has slots 09:05/09:20/09:35/09:50;
        // quarter-hour marks are not on this grid.
        let w = SlotWindow::new(
            Utc.with_ymd_and_hms(2024, 1, 1, 9, 5, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap(),
            15,
        )
        .unwrap();
        assert!(w.is_aligned(Utc.with_ymd_and_hms(2024, 1, 1, 9, 5, 0).unwrap()));
        assert!(w.is_aligned(Utc.with_ymd_and_hms(2024, 1, 1, 9, 20, 0).unwrap()));
        assert!(w.is_aligned(Utc.with_ymd_and_hms(2024, 1, 1, 9, 50, 0).unwrap()));
        assert!(!w.is_aligned(Utc.with_ymd_and_hms(2024, 1, 1, 9, 15, 0).unwrap()));
        assert!(!w.is_aligned(Utc.with_ymd_and_hms(2024, 1, 1, 9, 30, 0).unwrap()));
    }

    #[test]
    fn test_slot_key_anchors_to_window_start() {
        let w = SlotWindow::new(
            Utc.with_ymd_and_hms(2024, 1, 1, 9, 5, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap(),
            15,
        )
        .unwrap();
        let slot = Utc.with_ymd_and_hms(2024, 1, 1, 9, 5, 0).unwrap();
        let inside = Utc.with_ymd_and_hms(2024, 1, 1, 9, 15, 0).unwrap();
        let next = Utc.with_ymd_and_hms(2024, 1, 1, 9, 20, 0).unwrap();
        assert_eq!(w.slot_key(slot), w.slot_key(inside));
        assert_ne!(w.slot_key(slot), w.slot_key(next));
    }

    #[test]
    fn test_slot_key_floors_to_slot_start() {
        let w = window();
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 9, 15, 0).unwrap();
        let inside = Utc.with_ymd_and_hms(2024, 1, 1, 9, 22, 30).unwrap();
        assert_eq!(w.slot_key(start), w.slot_key(inside));
        let next = Utc.with_ymd_and_hms(2024, 1, 1, 9, 30, 0).unwrap();
        assert_ne!(w.slot_key(start), w.slot_key(next));
    }

    #[test]
    fn test_format_slot_time() {
        let t = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();
        assert_eq!(format_slot_time(t), "Monday, January 1, 2024, 09:00 AM UTC");
    }

    #[test]
    fn test_booking_record_external_shape() {
        let booking = Booking {
            id: "1".to_string(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            phone_no: "5551234".to_string(),
            year: Year::Third,
            branch: "CSE".to_string(),
            preferred_time: Utc.with_ymd_and_hms(2024, 1, 1, 9, 15, 0).unwrap(),
            resume_url: "https://example.com/ada.pdf".to_string(),
            created_at: Utc::now(),
        };
        let record = BookingRecord::from(&booking);
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["phoneNo"], "5551234");
        assert_eq!(value["year"], "3rd Year");
        assert_eq!(value["preferredTime"], "2024-01-01T09:15:00Z");
        assert_eq!(value["formattedTime"], "Monday, January 1, 2024, 09:15 AM UTC");
        assert_eq!(value["resumeUrl"], "https://example.com/ada.pdf");
    }
}
