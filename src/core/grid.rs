use crate::domain::model::SlotWindow;
use chrono::{DateTime, Utc};

/// Generates the ordered sequence of slot start times for a window: the
/// arithmetic sequence start, start + g, ... strictly below end. Pure and
/// deterministic; identical input yields identical output.
pub fn generate_slots(window: &SlotWindow) -> Vec<DateTime<Utc>> {
    let step = window.granularity();
    let mut slots = Vec::new();
    let mut current = window.start;
    while current < window.end {
        slots.push(current);
        current += step;
    }
    slots
}
