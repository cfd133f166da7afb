//! Reservation store trait and read-only snapshots

use chrono::NaiveDate;
use linked_hash_map::LinkedHashMap;
use std::sync::Arc;

use crate::reservation::{Reservation, ReservationKey};
use crate::room::{Room, Rooms};

/// Slot mapping, iterated in insertion order
pub type Slots = LinkedHashMap<ReservationKey, Reservation>;

/// Immutable view of the store at one instant
///
/// Cloning is cheap: all clones share the same mapping. Later bookings or
/// cancellations publish a new mapping and never touch an existing snapshot.
#[derive(Debug, Clone)]
pub struct Snapshot(Arc<Slots>);

impl Snapshot {
    #[must_use]
    pub fn new(slots: Arc<Slots>) -> Self {
        Self(slots)
    }

    /// Reservation occupying the (room, day) slot, if any
    #[must_use]
    pub fn get(&self, room_name: &str, date: NaiveDate) -> Option<&Reservation> {
        self.0.get(&ReservationKey::new(room_name, date))
    }

    /// Reservations whose guest name contains `needle`, ignoring case.
    ///
    /// An empty needle matches everything.
    #[must_use]
    pub fn search(&self, needle: &str) -> Vec<Reservation> {
        let needle = needle.to_lowercase();
        self.iter()
            .filter(|r| r.guest_name.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Reservation> {
        self.0.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Trait for reservation storage backends
///
/// All mutation goes through `book_stay` and `cancel_reservation`, so the
/// one-occupant-per-slot rule is enforced in one place. Neither operation
/// reports failure: incomplete bookings and cancellations of free slots are
/// silently ignored.
pub trait ReservationStore {
    /// The fixed room list bookings are checked against
    fn rooms(&self) -> &Rooms;

    /// Book `room` for `stay_length` consecutive days from `start_date`.
    ///
    /// No-op unless `room` and `start_date` are set, the room is known,
    /// `guest_name` is non-empty and `stay_length` is in `1..=MAX_STAY_DAYS`.
    /// Days that are already occupied are skipped; every inserted record
    /// still carries the full requested `stay_length`.
    fn book_stay(
        &self,
        room: Option<&Room>,
        start_date: Option<NaiveDate>,
        guest_name: &str,
        stay_length: u32,
    );

    /// Free the (room, day) slot. No-op if it is not booked.
    fn cancel_reservation(&self, room_name: &str, date: NaiveDate);

    /// Current mapping, for rendering
    fn snapshot(&self) -> Snapshot;

    fn lookup(&self, room_name: &str, date: NaiveDate) -> Option<Reservation> {
        self.snapshot().get(room_name, date).cloned()
    }

    fn search(&self, substring: &str) -> Vec<Reservation> {
        self.snapshot().search(substring)
    }
}
