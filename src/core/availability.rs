use crate::core::grid::generate_slots;
use crate::domain::model::SlotWindow;
use crate::domain::ports::BookingRepository;
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Read-only occupancy queries over the repository. These are snapshot reads:
/// a slot reported free here can still be claimed by a concurrent writer
/// before a dependent booking commits; the repository's unique constraints
/// settle that race.
pub struct AvailabilityChecker<R: BookingRepository> {
    repo: Arc<R>,
    window: SlotWindow,
}

impl<R: BookingRepository> AvailabilityChecker<R> {
    pub fn new(repo: Arc<R>, window: SlotWindow) -> Self {
        Self { repo, window }
    }

    /// True iff some persisted booking falls in [slot_time, slot_time + g).
    pub async fn is_occupied(&self, slot_time: DateTime<Utc>) -> Result<bool> {
        let slot_end = slot_time + self.window.granularity();
        let overlapping = self.repo.find_in_range(slot_time, slot_end).await?;
        Ok(!overlapping.is_empty())
    }

    /// The slot grid filtered down to unoccupied slots.
    pub async fn list_available(&self) -> Result<Vec<DateTime<Utc>>> {
        let mut available = Vec::new();
        for slot in generate_slots(&self.window) {
            if !self.is_occupied(slot).await? {
                available.push(slot);
            }
        }
        Ok(available)
    }
}
