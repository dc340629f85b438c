pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;
pub use crate::config::toml_config::TomlConfig;

pub use crate::adapters::memory::MemoryRepository;
pub use crate::adapters::notify::{LogNotifier, WebhookNotifier};
pub use crate::core::availability::AvailabilityChecker;
pub use crate::core::booking::BookingService;
pub use crate::core::grid::generate_slots;
pub use crate::domain::model::{
    format_slot_time, Booking, BookingRecord, BookingRequest, NewBooking, SlotWindow, Year,
};
pub use crate::domain::ports::{BookingRepository, Notifier, ScheduleConfigProvider};
pub use crate::utils::error::{BookingError, ErrorKind, Result};
