//! Reservation records and their slot keys
//!
//! A stay of N days is never stored as one record. It is expanded into N
//! `Reservation`s, one per occupied day, which differ only in `date`.

use chrono::NaiveDate;
use std::fmt;

use crate::calendar::format_full;

/// Longest stay a single booking may request, in days
pub const MAX_STAY_DAYS: u32 = 365;

/// One occupied (room, day) slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    pub guest_name: String,
    /// Length of the requested stay, not the number of days actually booked
    pub stay_length: u32,
    pub room: String,
    pub date: NaiveDate,
}

impl Reservation {
    #[must_use]
    pub fn key(&self) -> ReservationKey {
        ReservationKey::new(&self.room, self.date)
    }

    /// Stay length as shown in the calendar, e.g. `5 zile`
    #[must_use]
    pub fn length_label(&self) -> String {
        format!("{} zile", self.stay_length)
    }
}

/// Search result line: `Ana Popescu – Camera 1 (10 Jun 2024)`
impl fmt::Display for Reservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} – {} ({})",
            self.guest_name,
            self.room,
            format_full(self.date)
        )
    }
}

/// Identity of a (room, day) slot: `<room name>-<yyyy-MM-dd>`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ReservationKey(String);

impl ReservationKey {
    #[must_use]
    pub fn new(room_name: &str, date: NaiveDate) -> Self {
        Self(format!("{room_name}-{}", date.format("%Y-%m-%d")))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReservationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_key_format() {
        let key = ReservationKey::new("Camera 1", date(2024, 6, 1));
        assert_eq!(key.as_str(), "Camera 1-2024-06-01");
    }

    #[test]
    fn test_record_key_matches_slot_key() {
        let r = Reservation {
            guest_name: "Ana".to_string(),
            stay_length: 3,
            room: "Apartament".to_string(),
            date: date(2024, 12, 31),
        };
        assert_eq!(r.key(), ReservationKey::new("Apartament", date(2024, 12, 31)));
        assert_eq!(r.length_label(), "3 zile");
    }

    #[test]
    fn test_search_line() {
        let r = Reservation {
            guest_name: "Ana Popescu".to_string(),
            stay_length: 2,
            room: "Camera 1".to_string(),
            date: date(2024, 6, 10),
        };
        assert_eq!(r.to_string(), "Ana Popescu – Camera 1 (10 Jun 2024)");
    }
}
