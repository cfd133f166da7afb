use chrono::Local;
use clap::Parser;
use cli::{parse_month, CalendarView, Command, Outcome};
use guesthouse::{CalendarConfig, MemStore, MonthCursor};
use std::io::{self, BufRead};
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(author, version, about = "Guesthouse reservation calendar", long_about = None)]
struct Args {
    /// JSON file with the calendar title and room list
    #[arg(long)]
    config: Option<PathBuf>,

    /// Month to show first, as yyyy-mm (defaults to the current month)
    #[arg(long)]
    month: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr, the calendar to stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => CalendarConfig::from_path(path)?,
        None => CalendarConfig::default(),
    };
    let cursor = match &args.month {
        Some(month) => parse_month(month)?,
        None => MonthCursor::containing(Local::now().date_naive()),
    };
    info!(rooms = config.rooms.len(), month = %cursor.title(), "calendar ready");

    let store = MemStore::new(config.rooms);
    let mut view = CalendarView::new(config.title, &store, cursor);
    println!("{}", view.render_page());

    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match line.parse::<Command>() {
            Ok(command) => match view.handle(command) {
                Outcome::Output(text) => println!("{text}"),
                Outcome::Quit => break,
            },
            Err(e) => {
                warn!(error = %e, "bad command");
                println!("{e}. Try 'help'.");
            }
        }
    }

    Ok(())
}
