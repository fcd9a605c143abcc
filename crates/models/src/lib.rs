pub mod booking;
pub mod ids;
pub mod room;
pub mod time_slot;
