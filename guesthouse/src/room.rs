//! Bookable rooms
//!
//! The room list is fixed at startup and never edited afterwards. Capacity is
//! shown to the user but never checked against a booking.

use serde::Deserialize;
use std::collections::HashSet;
use std::fmt;

use crate::config::ConfigError;

/// A named bookable unit
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Room {
    pub name: String,
    pub capacity: u32,
}

impl Room {
    #[must_use]
    pub fn new(name: impl Into<String>, capacity: u32) -> Self {
        Self {
            name: name.into(),
            capacity,
        }
    }
}

/// Label used by the room picker, e.g. `Camera 5 (3 pers)`
impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} pers)", self.name, self.capacity)
    }
}

/// Ordered list of rooms with unique names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rooms {
    rooms: Vec<Room>,
}

impl Rooms {
    /// Build a room list, validating it.
    ///
    /// # Errors
    ///
    /// Returns an error if the list is empty, a name is empty, or two rooms
    /// share a name.
    pub fn new(rooms: Vec<Room>) -> Result<Self, ConfigError> {
        if rooms.is_empty() {
            return Err(ConfigError::NoRooms);
        }
        let mut seen = HashSet::new();
        for room in &rooms {
            if room.name.is_empty() {
                return Err(ConfigError::EmptyRoomName);
            }
            if !seen.insert(room.name.as_str()) {
                return Err(ConfigError::DuplicateRoom(room.name.clone()));
            }
        }
        Ok(Self { rooms })
    }

    /// The guesthouse layout the calendar ships with
    #[must_use]
    pub fn reference() -> Self {
        Self {
            rooms: vec![
                Room::new("Camera 1", 2),
                Room::new("Camera 2", 2),
                Room::new("Camera 3", 2),
                Room::new("Camera 4", 2),
                Room::new("Camera 5", 3),
                Room::new("Camera 6", 3),
                Room::new("Camera 7", 2),
                Room::new("Apartament", 4),
                Room::new("Toată pensiunea", 20),
            ],
        }
    }

    /// Exact-name lookup. Empty or unknown names give `None`.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Room> {
        self.rooms.iter().find(|r| r.name == name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Room> {
        self.rooms.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}

impl Default for Rooms {
    fn default() -> Self {
        Self::reference()
    }
}

impl<'a> IntoIterator for &'a Rooms {
    type Item = &'a Room;
    type IntoIter = std::slice::Iter<'a, Room>;

    fn into_iter(self) -> Self::IntoIter {
        self.rooms.iter()
    }
}
