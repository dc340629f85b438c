use crate::domain::model::{Booking, NewBooking, SlotWindow};
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Persistence boundary for bookings. Implementations must enforce two unique
/// constraints atomically inside `create`: one booking per email, one booking
/// per slot (timestamp floored to the window granularity). Violations surface
/// as `DuplicateEmail` / `SlotTaken`, which turns the check-then-write race
/// between concurrent bookings into a deterministic last-writer-fails outcome.
#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn create(&self, booking: NewBooking) -> Result<Booking>;

    async fn find_by_email(&self, email: &str) -> Result<Option<Booking>>;

    /// Bookings whose preferred time falls in the half-open interval [start, end).
    async fn find_in_range(&self, start: DateTime<Utc>, end: DateTime<Utc>)
        -> Result<Vec<Booking>>;

    async fn list_all_sorted_by_time(&self) -> Result<Vec<Booking>>;
}

/// Outbound notification on a successful booking. Best effort: the service
/// fires it without awaiting and logs failures instead of propagating them.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, subject: &str, booking: &Booking) -> Result<()>;
}

/// Configuration source for the booking schedule. Both the CLI and the TOML
/// provider resolve to one immutable `SlotWindow` at startup.
pub trait ScheduleConfigProvider {
    fn window(&self) -> Result<SlotWindow>;

    fn notify_endpoint(&self) -> Option<&str>;
}
