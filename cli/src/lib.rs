pub mod command;
pub mod view;

pub use command::{parse_month, Command, CommandError};
pub use view::{CalendarView, Outcome};
