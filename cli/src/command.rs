//! Line commands understood by the terminal calendar

use chrono::NaiveDate;
use guesthouse::MonthCursor;
use std::fmt;
use std::str::FromStr;

pub const HELP: &str = "\
show                          month grid
next | prev                   change month
open <yyyy-mm-dd>             start a booking on that day
room <name>                   pick the room
guest <name>                  set the guest name
days <n>                      set the number of days
save | close                  save or discard the booking
cancel <yyyy-mm-dd> <room>    cancel one day of one room
search [text]                 filter reservations by guest name
rooms                         list rooms
help | quit";

/// Errors from reading a command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Blank line
    Empty,
    /// First word is not a command
    Unknown(String),
    /// Command needs an argument that was not given
    MissingArgument(&'static str),
    /// Date is not `yyyy-mm-dd`
    BadDate(String),
    /// Month is not `yyyy-mm`
    BadMonth(String),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Empty command"),
            Self::Unknown(word) => write!(f, "Unknown command: {word}"),
            Self::MissingArgument(what) => write!(f, "Missing argument: {what}"),
            Self::BadDate(s) => write!(f, "Expected a date as yyyy-mm-dd, got '{s}'"),
            Self::BadMonth(s) => write!(f, "Expected a month as yyyy-mm, got '{s}'"),
        }
    }
}

impl std::error::Error for CommandError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Show,
    Next,
    Prev,
    Open(NaiveDate),
    Room(String),
    Guest(String),
    /// Raw text of the days field
    Days(String),
    Save,
    Close,
    Cancel { date: NaiveDate, room: String },
    Search(String),
    Rooms,
    Help,
    Quit,
}

fn parse_date(s: &str) -> Result<NaiveDate, CommandError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| CommandError::BadDate(s.to_string()))
}

/// Read a `yyyy-mm` month (one-based month number)
///
/// # Errors
///
/// Returns `BadMonth` if the text is not a valid month.
pub fn parse_month(s: &str) -> Result<MonthCursor, CommandError> {
    let first = NaiveDate::parse_from_str(&format!("{}-01", s.trim()), "%Y-%m-%d")
        .map_err(|_| CommandError::BadMonth(s.to_string()))?;
    Ok(MonthCursor::containing(first))
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };
        let required = |what: &'static str| {
            if rest.is_empty() {
                Err(CommandError::MissingArgument(what))
            } else {
                Ok(rest.to_string())
            }
        };

        match word {
            "" => Err(CommandError::Empty),
            "show" => Ok(Self::Show),
            "next" => Ok(Self::Next),
            "prev" => Ok(Self::Prev),
            "open" => Ok(Self::Open(parse_date(&required("date")?)?)),
            // An empty room or guest is a valid form state, like clearing the field
            "room" => Ok(Self::Room(rest.to_string())),
            "guest" => Ok(Self::Guest(rest.to_string())),
            "days" => Ok(Self::Days(rest.to_string())),
            "save" => Ok(Self::Save),
            "close" => Ok(Self::Close),
            "cancel" => {
                let args = required("date and room")?;
                let (date, room) = args
                    .split_once(char::is_whitespace)
                    .ok_or(CommandError::MissingArgument("room"))?;
                Ok(Self::Cancel {
                    date: parse_date(date)?,
                    room: room.trim().to_string(),
                })
            }
            "search" => Ok(Self::Search(rest.to_string())),
            "rooms" => Ok(Self::Rooms),
            "help" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}
