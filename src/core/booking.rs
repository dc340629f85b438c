use crate::core::availability::AvailabilityChecker;
use crate::domain::model::{BookingRecord, BookingRequest, NewBooking, SlotWindow, Year};
use crate::domain::ports::{BookingRepository, Notifier};
use crate::utils::error::{BookingError, Result};
use crate::utils::validation::{require_non_empty, validate_url};
use chrono::{DateTime, Utc};
use std::sync::Arc;

const NOTIFY_SUBJECT: &str = "new entry";

/// Validate-then-commit pipeline for booking requests. Each call is processed
/// independently; there is no cross-request state beyond the repository.
pub struct BookingService<R: BookingRepository, N: Notifier + 'static> {
    repo: Arc<R>,
    notifier: Arc<N>,
    window: SlotWindow,
    checker: AvailabilityChecker<R>,
}

impl<R: BookingRepository, N: Notifier + 'static> BookingService<R, N> {
    pub fn new(repo: Arc<R>, notifier: Arc<N>, window: SlotWindow) -> Self {
        let checker = AvailabilityChecker::new(Arc::clone(&repo), window);
        Self {
            repo,
            notifier,
            window,
            checker,
        }
    }

    pub fn window(&self) -> SlotWindow {
        self.window
    }

    /// Books a slot. Checks run in a fixed order and the first failure wins:
    /// field presence, year enum, duplicate email, window membership, slot
    /// alignment, slot occupancy. The occupancy pre-check is advisory only;
    /// the repository's unique constraints decide races at commit time.
    pub async fn book(&self, request: &BookingRequest) -> Result<BookingRecord> {
        let candidate = self.validate_shape(request)?;

        if let Some(existing) = self.repo.find_by_email(&candidate.email).await? {
            tracing::debug!(email = %existing.email, "rejecting duplicate email");
            return Err(BookingError::DuplicateEmail {
                email: candidate.email,
            });
        }

        self.validate_slot(candidate.preferred_time)?;

        if self.checker.is_occupied(candidate.preferred_time).await? {
            return Err(BookingError::SlotTaken {
                slot: candidate.preferred_time,
            });
        }

        let booking = self.repo.create(candidate).await?;
        tracing::info!(id = %booking.id, slot = %booking.preferred_time, "slot booked");

        // Fire and forget: the caller never waits on the notifier, and a
        // notification failure must not turn a committed booking into an error.
        let notifier = Arc::clone(&self.notifier);
        let notified = booking.clone();
        tokio::spawn(async move {
            if let Err(e) = notifier.notify(NOTIFY_SUBJECT, &notified).await {
                tracing::warn!(id = %notified.id, error = %e, "booking notification failed");
            }
        });

        Ok(BookingRecord::from(&booking))
    }

    /// All bookings, ascending by preferred time.
    pub async fn list_bookings(&self) -> Result<Vec<BookingRecord>> {
        let bookings = self.repo.list_all_sorted_by_time().await?;
        Ok(bookings.iter().map(BookingRecord::from).collect())
    }

    /// Unoccupied slots in the configured window.
    pub async fn list_available(&self) -> Result<Vec<DateTime<Utc>>> {
        self.checker.list_available().await
    }

    fn validate_shape(&self, request: &BookingRequest) -> Result<NewBooking> {
        let name = require_non_empty("name", &request.name)?;
        let email = require_non_empty("email", &request.email)?;
        let phone_no = require_non_empty("phoneNo", &request.phone_no)?;
        let year_raw = require_non_empty("year", &request.year)?;
        let branch = require_non_empty("branch", &request.branch)?;
        let resume_url = require_non_empty("resumeUrl", &request.resume_url)?;

        let year: Year = year_raw.parse()?;
        validate_url("resumeUrl", resume_url)?;

        Ok(NewBooking {
            name: name.to_string(),
            email: email.to_lowercase(),
            phone_no: phone_no.to_string(),
            year,
            branch: branch.to_string(),
            preferred_time: request.preferred_time,
            resume_url: resume_url.to_string(),
        })
    }

    fn validate_slot(&self, requested: DateTime<Utc>) -> Result<()> {
        if !self.window.contains(requested) {
            return Err(BookingError::OutOfWindow {
                requested,
                start: self.window.start,
                end: self.window.end,
            });
        }
        if !self.window.is_aligned(requested) {
            return Err(BookingError::MisalignedSlot {
                requested,
                granularity_minutes: self.window.granularity_minutes(),
            });
        }
        Ok(())
    }
}
