//! Calendar configuration
//!
//! Read once at startup from JSON. Every field is optional:
//!
//! ```json
//! {
//!   "title": "Calendar Rezervări - Vila Misu",
//!   "rooms": [ { "name": "Camera 1", "capacity": 2 } ]
//! }
//! ```

use serde::Deserialize;
use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::room::{Room, Rooms};

pub const DEFAULT_TITLE: &str = "Calendar Rezervări - Vila Misu";

/// Errors that can occur while loading the configuration
#[derive(Debug)]
pub enum ConfigError {
    /// Config file could not be read
    Io(std::io::Error),
    /// Config file is not valid JSON or has the wrong shape
    Parse(serde_json::Error),
    /// The room list is empty
    NoRooms,
    /// A room has an empty name
    EmptyRoomName,
    /// Two rooms share a name
    DuplicateRoom(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Failed to read config: {e}"),
            Self::Parse(e) => write!(f, "Failed to parse config JSON: {e}"),
            Self::NoRooms => write!(f, "Config defines no rooms"),
            Self::EmptyRoomName => write!(f, "Room name must not be empty"),
            Self::DuplicateRoom(name) => write!(f, "Duplicate room name: {name}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e)
    }
}

#[derive(Deserialize, Debug)]
struct RawConfig {
    title: Option<String>,
    rooms: Option<Vec<Room>>,
}

/// Validated calendar configuration
#[derive(Debug, Clone)]
pub struct CalendarConfig {
    pub title: String,
    pub rooms: Rooms,
}

impl CalendarConfig {
    /// Read configuration JSON from a reader.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the room list is invalid.
    pub fn from_reader(reader: impl std::io::Read) -> Result<Self, ConfigError> {
        let raw: RawConfig = serde_json::from_reader(reader)?;
        let rooms = match raw.rooms {
            Some(rooms) => Rooms::new(rooms)?,
            None => Rooms::reference(),
        };
        Ok(Self {
            title: raw.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            rooms,
        })
    }

    /// Read configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or its content is invalid.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            rooms: Rooms::reference(),
        }
    }
}
