//! In-memory implementation of ReservationStore

use chrono::{Days, NaiveDate};
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::types::{ReservationStore, Slots, Snapshot};
use crate::reservation::{Reservation, ReservationKey, MAX_STAY_DAYS};
use crate::room::{Room, Rooms};

/// In-memory implementation of ReservationStore
///
/// Updates are copy-on-write: each mutation builds a fresh mapping and then
/// swaps it in, so a `Snapshot` never observes a half-applied stay.
pub struct MemStore {
    rooms: Rooms,
    slots: Mutex<Arc<Slots>>,
}

impl MemStore {
    /// Create an empty store over the given rooms
    #[must_use]
    pub fn new(rooms: Rooms) -> Self {
        Self {
            rooms,
            slots: Mutex::new(Arc::new(Slots::new())),
        }
    }
}

impl Default for MemStore {
    fn default() -> Self {
        Self::new(Rooms::reference())
    }
}

impl ReservationStore for MemStore {
    fn rooms(&self) -> &Rooms {
        &self.rooms
    }

    fn book_stay(
        &self,
        room: Option<&Room>,
        start_date: Option<NaiveDate>,
        guest_name: &str,
        stay_length: u32,
    ) {
        let (Some(room), Some(start_date)) = (room, start_date) else {
            debug!("booking without room or start date ignored");
            return;
        };
        if guest_name.is_empty() || stay_length < 1 {
            debug!(room = %room.name, stay_length, "booking without guest or days ignored");
            return;
        }
        if stay_length > MAX_STAY_DAYS {
            warn!(
                room = %room.name,
                stay_length,
                max = MAX_STAY_DAYS,
                "stay too long, booking ignored"
            );
            return;
        }
        if !self.rooms.contains(&room.name) {
            warn!(room = %room.name, "booking for unknown room ignored");
            return;
        }

        let mut current = self.slots.lock();
        let mut next: Slots = (**current).clone();
        let mut booked = 0u32;

        for offset in 0..stay_length {
            let Some(date) = start_date.checked_add_days(Days::new(u64::from(offset))) else {
                warn!(%start_date, offset, "stay runs past the last representable date");
                break;
            };
            let key = ReservationKey::new(&room.name, date);
            if next.contains_key(&key) {
                debug!(%key, "day already booked, skipped");
                continue;
            }
            next.insert(
                key,
                Reservation {
                    guest_name: guest_name.to_string(),
                    stay_length,
                    room: room.name.clone(),
                    date,
                },
            );
            booked += 1;
        }

        *current = Arc::new(next);
        info!(
            room = %room.name,
            guest = guest_name,
            %start_date,
            requested = stay_length,
            booked,
            "stay booked"
        );
    }

    fn cancel_reservation(&self, room_name: &str, date: NaiveDate) {
        let key = ReservationKey::new(room_name, date);
        let mut current = self.slots.lock();
        if !current.contains_key(&key) {
            debug!(%key, "nothing to cancel");
            return;
        }
        let mut next: Slots = (**current).clone();
        next.remove(&key);
        *current = Arc::new(next);
        info!(%key, "reservation cancelled");
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot::new(Arc::clone(&self.slots.lock()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn camera1() -> Room {
        Room::new("Camera 1", 2)
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = MemStore::default();
        assert!(store.snapshot().is_empty());
        assert_eq!(store.rooms().len(), 9);
    }

    #[test]
    fn test_preconditions_make_booking_noop() {
        let store = MemStore::default();
        let room = camera1();
        let start = Some(date(2024, 6, 1));

        store.book_stay(None, start, "Ana", 2);
        store.book_stay(Some(&room), None, "Ana", 2);
        store.book_stay(Some(&room), start, "", 2);
        store.book_stay(Some(&room), start, "Ana", 0);

        assert!(store.snapshot().is_empty());
    }

    #[test]
    fn test_unknown_room_is_noop() {
        let store = MemStore::default();
        let ghost = Room::new("Camera 99", 2);
        store.book_stay(Some(&ghost), Some(date(2024, 6, 1)), "Ana", 2);
        assert!(store.snapshot().is_empty());
    }

    #[test]
    fn test_stay_crosses_month_and_year() {
        let store = MemStore::default();
        store.book_stay(Some(&camera1()), Some(date(2024, 12, 30)), "Ana", 4);

        let snapshot = store.snapshot();
        assert_eq!(snapshot.len(), 4);
        assert!(snapshot.get("Camera 1", date(2024, 12, 31)).is_some());
        assert!(snapshot.get("Camera 1", date(2025, 1, 2)).is_some());
        assert!(snapshot.get("Camera 1", date(2025, 1, 3)).is_none());
    }

    #[test]
    fn test_stay_above_cap_is_noop() {
        let store = MemStore::default();
        store.book_stay(Some(&camera1()), Some(date(2024, 6, 1)), "Ana", u32::MAX);
        assert!(store.snapshot().is_empty());
    }

    #[test]
    fn test_stay_stops_at_last_date() {
        let store = MemStore::default();
        let last = NaiveDate::MAX;
        store.book_stay(Some(&camera1()), Some(last), "Ana", 3);
        assert_eq!(store.snapshot().len(), 1);
    }

    #[test]
    fn test_snapshot_is_isolated_from_later_writes() {
        let store = MemStore::default();
        let before = store.snapshot();

        store.book_stay(Some(&camera1()), Some(date(2024, 6, 1)), "Ana", 2);
        let booked = store.snapshot();
        store.cancel_reservation("Camera 1", date(2024, 6, 1));

        assert!(before.is_empty());
        assert_eq!(booked.len(), 2);
        assert_eq!(store.snapshot().len(), 1);
    }

    #[test]
    fn test_search_follows_insertion_order() {
        let store = MemStore::default();
        let rooms = store.rooms().clone();
        let day = date(2024, 6, 1);
        store.book_stay(rooms.find("Camera 7"), Some(day), "Zoe", 1);
        store.book_stay(rooms.find("Camera 1"), Some(day), "Ana", 1);

        let names: Vec<String> = store.search("").into_iter().map(|r| r.guest_name).collect();
        assert_eq!(names, vec!["Zoe", "Ana"]);
    }
}
