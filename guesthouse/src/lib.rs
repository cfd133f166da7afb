pub mod booking;
pub mod calendar;
pub mod config;
pub mod reservation;
pub mod room;
pub mod store;

// Re-export store types for convenience
pub use store::{MemStore, ReservationStore, Snapshot};

// Re-export domain types
pub use reservation::{Reservation, ReservationKey, MAX_STAY_DAYS};
pub use room::{Room, Rooms};

pub use booking::{parse_stay_length, BookingDraft, StayLengthError};
pub use calendar::{list_days_in_month, MonthCursor};
pub use config::{CalendarConfig, ConfigError};
