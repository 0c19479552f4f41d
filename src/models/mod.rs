pub mod booking;
pub mod nav_state;

pub use booking::{BookingRecord, BookingStatus, NO_SLOT};
pub use nav_state::NavState;
