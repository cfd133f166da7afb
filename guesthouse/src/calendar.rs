//! Month arithmetic and display formats for the calendar grid

use chrono::{Datelike, NaiveDate};

/// Normalise a (year, zero-based month) pair with carry.
///
/// `(2024, 12)` becomes `(2025, 0)`, `(2024, -1)` becomes `(2023, 11)`.
fn normalize(year: i32, month_index: i32) -> Option<(i32, u32)> {
    let total = i64::from(year) * 12 + i64::from(month_index);
    let year = i32::try_from(total.div_euclid(12)).ok()?;
    let month_index = u32::try_from(total.rem_euclid(12)).ok()?;
    Some((year, month_index))
}

/// All days of a month, first to last, ascending.
///
/// `month_index` is zero-based (0 = January) and may fall outside `0..12`;
/// it carries into the year. Months outside chrono's date range yield an
/// empty list.
#[must_use]
pub fn list_days_in_month(year: i32, month_index: i32) -> Vec<NaiveDate> {
    let Some((year, month_index)) = normalize(year, month_index) else {
        return Vec::new();
    };
    let Some(first) = NaiveDate::from_ymd_opt(year, month_index + 1, 1) else {
        return Vec::new();
    };
    first
        .iter_days()
        .take_while(|day| day.month() == first.month())
        .collect()
}

/// Month shown by the calendar view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCursor {
    year: i32,
    month_index: u32,
}

impl MonthCursor {
    /// Cursor at the given month, normalised with carry.
    ///
    /// Falls back to the month of `NaiveDate::MIN`/`MAX` when the carry
    /// leaves the supported range.
    #[must_use]
    pub fn new(year: i32, month_index: i32) -> Self {
        match normalize(year, month_index) {
            Some((year, month_index)) => Self { year, month_index },
            None if year < 0 => Self::containing(NaiveDate::MIN),
            None => Self::containing(NaiveDate::MAX),
        }
    }

    #[must_use]
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month_index: date.month0(),
        }
    }

    #[must_use]
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Zero-based month (0 = January)
    #[must_use]
    pub fn month_index(&self) -> u32 {
        self.month_index
    }

    #[must_use]
    pub fn next(&self) -> Self {
        Self::new(self.year, self.signed_month() + 1)
    }

    #[must_use]
    pub fn prev(&self) -> Self {
        Self::new(self.year, self.signed_month() - 1)
    }

    #[must_use]
    pub fn days(&self) -> Vec<NaiveDate> {
        list_days_in_month(self.year, self.signed_month())
    }

    /// Month heading, e.g. `June 2024`
    #[must_use]
    pub fn title(&self) -> String {
        match NaiveDate::from_ymd_opt(self.year, self.month_index + 1, 1) {
            Some(first) => format_month(first),
            None => format!("{}-{:02}", self.year, self.month_index + 1),
        }
    }

    fn signed_month(&self) -> i32 {
        // month_index is always in 0..12
        i32::try_from(self.month_index).unwrap_or(0)
    }
}

/// Grid cell heading: `dd MMM`
#[must_use]
pub fn format_day(date: NaiveDate) -> String {
    date.format("%d %b").to_string()
}

/// Dialog and search heading: `dd MMM yyyy`
#[must_use]
pub fn format_full(date: NaiveDate) -> String {
    date.format("%d %b %Y").to_string()
}

/// Month heading: `MMMM yyyy`
#[must_use]
pub fn format_month(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_normalize_carry() {
        assert_eq!(normalize(2024, 0), Some((2024, 0)));
        assert_eq!(normalize(2024, 12), Some((2025, 0)));
        assert_eq!(normalize(2024, 25), Some((2026, 1)));
        assert_eq!(normalize(2024, -1), Some((2023, 11)));
        assert_eq!(normalize(2024, -13), Some((2022, 11)));
    }

    #[test]
    fn test_month_lengths() {
        assert_eq!(list_days_in_month(2023, 1).len(), 28);
        assert_eq!(list_days_in_month(2024, 1).len(), 29);
        assert_eq!(list_days_in_month(2024, 3).len(), 30);
        assert_eq!(list_days_in_month(2024, 11).len(), 31);
    }

    #[test]
    fn test_out_of_range_is_empty() {
        assert!(list_days_in_month(i32::MAX, 0).is_empty());
    }

    #[test]
    fn test_cursor_wraps_year() {
        let december = MonthCursor::new(2024, 11);
        let january = december.next();
        assert_eq!((january.year(), january.month_index()), (2025, 0));
        assert_eq!(january.prev(), december);
    }

    #[test]
    fn test_formats() {
        let d = date(2024, 6, 1);
        assert_eq!(format_day(d), "01 Jun");
        assert_eq!(format_full(d), "01 Jun 2024");
        assert_eq!(MonthCursor::containing(d).title(), "June 2024");
    }
}
