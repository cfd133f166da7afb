//! Booking dialog state
//!
//! Clicking a day opens the dialog. The user then picks a room, types a guest
//! name and a number of days, and saves. Saving an incomplete form does
//! nothing and leaves the dialog open.

use chrono::NaiveDate;
use std::fmt;
use tracing::debug;

use crate::reservation::MAX_STAY_DAYS;
use crate::room::{Room, Rooms};
use crate::store::ReservationStore;

/// Errors from reading the stay length text field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StayLengthError {
    /// No leading integer in the input
    NotANumber(String),
    /// Zero or negative
    NotPositive(String),
    /// Longer than `MAX_STAY_DAYS`
    TooLarge(String),
}

impl fmt::Display for StayLengthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotANumber(s) => write!(f, "Stay length is not a number: '{s}'"),
            Self::NotPositive(s) => write!(f, "Stay length must be at least 1: '{s}'"),
            Self::TooLarge(s) => write!(f, "Stay length is too large: '{s}'"),
        }
    }
}

impl std::error::Error for StayLengthError {}

/// Read a stay length from the number field.
///
/// Leading whitespace and an optional sign are accepted, then the leading run
/// of digits is used and anything after it is ignored (`"3 zile"` is 3).
///
/// # Errors
///
/// Fails if there are no leading digits, the value is below 1, or it is above
/// `MAX_STAY_DAYS`.
pub fn parse_stay_length(input: &str) -> Result<u32, StayLengthError> {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..end];

    if digits.is_empty() {
        return Err(StayLengthError::NotANumber(input.to_string()));
    }
    if negative {
        return Err(StayLengthError::NotPositive(input.to_string()));
    }
    let value: u32 = digits
        .parse()
        .map_err(|_| StayLengthError::TooLarge(input.to_string()))?;
    if value == 0 {
        return Err(StayLengthError::NotPositive(input.to_string()));
    }
    if value > MAX_STAY_DAYS {
        return Err(StayLengthError::TooLarge(input.to_string()));
    }
    Ok(value)
}

/// In-progress booking form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingDraft {
    selected_date: Option<NaiveDate>,
    active_room: Option<Room>,
    guest_name: String,
    /// `None` when the field holds something that is not a valid length
    stay_length: Option<u32>,
}

impl BookingDraft {
    #[must_use]
    pub fn new() -> Self {
        Self {
            selected_date: None,
            active_room: None,
            guest_name: String::new(),
            stay_length: Some(1),
        }
    }

    /// Select a day, which opens the dialog
    pub fn open(&mut self, date: NaiveDate) {
        self.selected_date = Some(date);
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.selected_date.is_some()
    }

    /// Pick a room by name; unknown names clear the selection
    pub fn select_room(&mut self, rooms: &Rooms, name: &str) {
        self.active_room = rooms.find(name).cloned();
    }

    pub fn set_guest_name(&mut self, name: impl Into<String>) {
        self.guest_name = name.into();
    }

    /// Store the raw text of the days field.
    ///
    /// Unparseable text is kept as "no valid length", which blocks saving.
    pub fn set_stay_length_input(&mut self, input: &str) {
        self.stay_length = match parse_stay_length(input) {
            Ok(n) => Some(n),
            Err(e) => {
                debug!(error = %e, "invalid stay length");
                None
            }
        };
    }

    #[must_use]
    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.selected_date
    }

    #[must_use]
    pub fn active_room(&self) -> Option<&Room> {
        self.active_room.as_ref()
    }

    #[must_use]
    pub fn guest_name(&self) -> &str {
        &self.guest_name
    }

    #[must_use]
    pub fn stay_length(&self) -> Option<u32> {
        self.stay_length
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.selected_date.is_some()
            && self.active_room.is_some()
            && !self.guest_name.is_empty()
            && self.stay_length.is_some_and(|n| n >= 1)
    }

    /// Save the booking into `store` and reset the dialog.
    ///
    /// Returns `false` without touching the store or the dialog when the form
    /// is incomplete.
    pub fn submit<S: ReservationStore + ?Sized>(&mut self, store: &S) -> bool {
        let Some(stay_length) = self.stay_length.filter(|_| self.is_complete()) else {
            return false;
        };
        store.book_stay(
            self.active_room.as_ref(),
            self.selected_date,
            &self.guest_name,
            stay_length,
        );
        self.reset();
        true
    }

    /// Clear every field and close the dialog
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Discard the dialog without booking
    pub fn close(&mut self) {
        debug!("booking dialog closed");
        self.reset();
    }
}

impl Default for BookingDraft {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_numbers() {
        assert_eq!(parse_stay_length("3"), Ok(3));
        assert_eq!(parse_stay_length("  12"), Ok(12));
        assert_eq!(parse_stay_length("+2"), Ok(2));
    }

    #[test]
    fn test_parse_ignores_trailing_text() {
        assert_eq!(parse_stay_length("3 zile"), Ok(3));
        assert_eq!(parse_stay_length("2.5"), Ok(2));
    }

    #[test]
    fn test_parse_rejects() {
        assert!(matches!(parse_stay_length(""), Err(StayLengthError::NotANumber(_))));
        assert!(matches!(parse_stay_length("abc"), Err(StayLengthError::NotANumber(_))));
        assert!(matches!(parse_stay_length("-"), Err(StayLengthError::NotANumber(_))));
        assert!(matches!(parse_stay_length("0"), Err(StayLengthError::NotPositive(_))));
        assert!(matches!(parse_stay_length("-4"), Err(StayLengthError::NotPositive(_))));
        assert!(matches!(
            parse_stay_length("99999999999"),
            Err(StayLengthError::TooLarge(_))
        ));
    }

    #[test]
    fn test_parse_caps_stay_length() {
        assert_eq!(parse_stay_length("365"), Ok(MAX_STAY_DAYS));
        assert_eq!(
            parse_stay_length("366"),
            Err(StayLengthError::TooLarge("366".to_string()))
        );
        assert!(matches!(
            parse_stay_length("4294967295"),
            Err(StayLengthError::TooLarge(_))
        ));
    }

    #[test]
    fn test_close_discards_fields() {
        let rooms = Rooms::reference();
        let mut draft = BookingDraft::new();
        draft.open(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        draft.select_room(&rooms, "Camera 1");
        draft.set_stay_length_input("3");

        draft.close();

        assert_eq!(draft, BookingDraft::new());
    }

    #[test]
    fn test_new_draft_defaults() {
        let draft = BookingDraft::new();
        assert!(!draft.is_open());
        assert_eq!(draft.stay_length(), Some(1));
        assert!(!draft.is_complete());
    }

    #[test]
    fn test_select_unknown_room_clears() {
        let rooms = Rooms::reference();
        let mut draft = BookingDraft::new();
        draft.select_room(&rooms, "Camera 2");
        assert_eq!(draft.active_room().map(|r| r.name.as_str()), Some("Camera 2"));
        draft.select_room(&rooms, "");
        assert!(draft.active_room().is_none());
    }
}
