pub mod booking;
pub mod calendar;
pub mod slots;

pub use booking::{AppointmentBook, BookedSlots};
pub use slots::{generate_available_slots, generate_slots, generate_slots_for, NoExclusion, SlotExclusion};
