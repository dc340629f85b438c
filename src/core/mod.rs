pub mod availability;
pub mod booking;
pub mod grid;

pub use crate::domain::model::{Booking, BookingRecord, BookingRequest, NewBooking, SlotWindow};
pub use crate::domain::ports::{BookingRepository, Notifier, ScheduleConfigProvider};
pub use crate::utils::error::Result;
