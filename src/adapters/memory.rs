use crate::domain::model::{Booking, NewBooking, SlotWindow};
use crate::domain::ports::BookingRepository;
use crate::utils::error::{BookingError, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::Mutex;

struct MemoryState {
    bookings: Vec<Booking>,
    next_id: u64,
}

/// In-memory `BookingRepository`. All writes go through one mutex, so the two
/// unique constraints (email; slot key floored to granularity) are checked and
/// committed atomically. Two concurrent `create` calls for the same slot or
/// email therefore resolve to exactly one success and one `Conflict`, no
/// matter what the callers' pre-checks saw.
pub struct MemoryRepository {
    state: Mutex<MemoryState>,
    window: SlotWindow,
}

impl MemoryRepository {
    pub fn new(window: SlotWindow) -> Self {
        Self {
            state: Mutex::new(MemoryState {
                bookings: Vec::new(),
                next_id: 1,
            }),
            window,
        }
    }
}

#[async_trait]
impl BookingRepository for MemoryRepository {
    async fn create(&self, booking: NewBooking) -> Result<Booking> {
        let mut state = self.state.lock().await;

        if state
            .bookings
            .iter()
            .any(|b| b.email == booking.email)
        {
            return Err(BookingError::DuplicateEmail {
                email: booking.email,
            });
        }

        let slot_key = self.window.slot_key(booking.preferred_time);
        if state
            .bookings
            .iter()
            .any(|b| self.window.slot_key(b.preferred_time) == slot_key)
        {
            return Err(BookingError::SlotTaken {
                slot: booking.preferred_time,
            });
        }

        let id = state.next_id;
        state.next_id += 1;

        let persisted = Booking {
            id: id.to_string(),
            name: booking.name,
            email: booking.email,
            phone_no: booking.phone_no,
            year: booking.year,
            branch: booking.branch,
            preferred_time: booking.preferred_time,
            resume_url: booking.resume_url,
            created_at: Utc::now(),
        };
        state.bookings.push(persisted.clone());
        Ok(persisted)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Booking>> {
        let state = self.state.lock().await;
        Ok(state.bookings.iter().find(|b| b.email == email).cloned())
    }

    async fn find_in_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Booking>> {
        let state = self.state.lock().await;
        Ok(state
            .bookings
            .iter()
            .filter(|b| b.preferred_time >= start && b.preferred_time < end)
            .cloned()
            .collect())
    }

    async fn list_all_sorted_by_time(&self) -> Result<Vec<Booking>> {
        let state = self.state.lock().await;
        let mut all = state.bookings.clone();
        all.sort_by_key(|b| b.preferred_time);
        Ok(all)
    }
}
