//! Terminal rendition of the reservation calendar
//!
//! The view owns the UI state (visible month, booking dialog, search text)
//! and borrows the store. It reads the store only through snapshots and
//! changes it only through `book_stay` / `cancel_reservation`.

use guesthouse::calendar::{format_day, format_full};
use guesthouse::{BookingDraft, MonthCursor, ReservationStore};
use tracing::debug;

use crate::command::{Command, HELP};

/// Result of handling one command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Output(String),
    Quit,
}

pub struct CalendarView<'a, S: ReservationStore> {
    title: String,
    store: &'a S,
    cursor: MonthCursor,
    draft: BookingDraft,
    search: String,
}

impl<'a, S: ReservationStore> CalendarView<'a, S> {
    pub fn new(title: impl Into<String>, store: &'a S, cursor: MonthCursor) -> Self {
        Self {
            title: title.into(),
            store,
            cursor,
            draft: BookingDraft::new(),
            search: String::new(),
        }
    }

    #[must_use]
    pub fn cursor(&self) -> MonthCursor {
        self.cursor
    }

    #[must_use]
    pub fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    pub fn handle(&mut self, command: Command) -> Outcome {
        debug!(?command, "handling command");
        let output = match command {
            Command::Show => self.render_page(),
            Command::Next => {
                self.cursor = self.cursor.next();
                self.render_month()
            }
            Command::Prev => {
                self.cursor = self.cursor.prev();
                self.render_month()
            }
            Command::Open(date) => {
                self.draft.open(date);
                self.render_dialog()
            }
            Command::Room(name) => {
                self.draft.select_room(self.store.rooms(), &name);
                self.render_dialog()
            }
            Command::Guest(name) => {
                self.draft.set_guest_name(name);
                self.render_dialog()
            }
            Command::Days(text) => {
                self.draft.set_stay_length_input(&text);
                self.render_dialog()
            }
            Command::Save => {
                if !self.draft.is_open() {
                    "Nicio rezervare deschisă.".to_string()
                } else if self.draft.submit(self.store) {
                    self.render_month()
                } else {
                    format!("Rezervare incompletă.\n{}", self.render_dialog())
                }
            }
            Command::Close => {
                self.draft.close();
                "Închis.".to_string()
            }
            Command::Cancel { date, room } => {
                self.store.cancel_reservation(&room, date);
                self.render_month()
            }
            Command::Search(text) => {
                self.search = text;
                self.render_search()
            }
            Command::Rooms => self.render_rooms(),
            Command::Help => HELP.to_string(),
            Command::Quit => return Outcome::Quit,
        };
        Outcome::Output(output)
    }

    /// Title, month grid and search results
    #[must_use]
    pub fn render_page(&self) -> String {
        let mut out = format!("{}\n{}", self.title, self.render_month());
        let results = self.render_search();
        if !results.is_empty() {
            out.push('\n');
            out.push_str(&results);
        }
        out
    }

    /// One block per day; each occupied room on its own line, in room order
    #[must_use]
    pub fn render_month(&self) -> String {
        let snapshot = self.store.snapshot();
        let mut lines = vec![self.cursor.title()];
        for day in self.cursor.days() {
            lines.push(format_day(day));
            for room in self.store.rooms() {
                if let Some(r) = snapshot.get(&room.name, day) {
                    lines.push(format!("  {}: {}", room.name, r.guest_name));
                }
            }
        }
        lines.join("\n")
    }

    #[must_use]
    pub fn render_dialog(&self) -> String {
        let Some(date) = self.draft.selected_date() else {
            return "Nicio rezervare deschisă.".to_string();
        };
        let room = self
            .draft
            .active_room()
            .map_or_else(|| "Alege camera".to_string(), ToString::to_string);
        let days = self
            .draft
            .stay_length()
            .map_or_else(|| "?".to_string(), |n| n.to_string());
        format!(
            "Rezervare pentru {}\n  camera: {room}\n  nume: {}\n  zile: {days}",
            format_full(date),
            self.draft.guest_name()
        )
    }

    /// Matching reservations; empty while the search box is empty
    #[must_use]
    pub fn render_search(&self) -> String {
        if self.search.is_empty() {
            return String::new();
        }
        let mut lines = vec!["Rezultate căutare:".to_string()];
        lines.extend(self.store.search(&self.search).iter().map(ToString::to_string));
        lines.join("\n")
    }

    #[must_use]
    pub fn render_rooms(&self) -> String {
        self.store
            .rooms()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
