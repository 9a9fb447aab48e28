// libs/appointment-cell/src/services/slots.rs
use chrono::{NaiveDate, NaiveDateTime};

use crate::models::{SlotConfig, TimeSlot};

/// Decides whether a generated slot should be hidden from patients, e.g.
/// because it is already taken.
pub trait SlotExclusion {
    fn is_excluded(&self, slot: &TimeSlot) -> bool;
}

/// Hides nothing; plain [`generate_slots`] behaviour.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoExclusion;

impl SlotExclusion for NoExclusion {
    fn is_excluded(&self, _slot: &TimeSlot) -> bool {
        false
    }
}

/// Every slot on `day` from `open_hour` up to but excluding `close_hour`,
/// stepping `interval_minutes` inside each hour, in ascending order.
///
/// An unusable window (close not after open, close past midnight or a zero
/// interval) gives an empty list rather than an error.
pub fn generate_slots(day: NaiveDate, config: &SlotConfig) -> Vec<TimeSlot> {
    if !config.is_valid() {
        return Vec::new();
    }

    let mut slots = Vec::new();
    for hour in config.open_hour..config.close_hour {
        for minute in (0..60).step_by(config.interval_minutes as usize) {
            if let Some(start) = day.and_hms_opt(hour, minute, 0) {
                slots.push(TimeSlot { start });
            }
        }
    }
    slots
}

/// Same as [`generate_slots`] for the calendar day of `instant`; its time of
/// day plays no part.
pub fn generate_slots_for(instant: NaiveDateTime, config: &SlotConfig) -> Vec<TimeSlot> {
    generate_slots(instant.date(), config)
}

pub fn generate_available_slots(
    day: NaiveDate,
    config: &SlotConfig,
    exclusion: &dyn SlotExclusion,
) -> Vec<TimeSlot> {
    generate_slots(day, config)
        .into_iter()
        .filter(|slot| !exclusion.is_excluded(slot))
        .collect()
}
