//! The month currently on screen.

use chrono::{Datelike, Months, NaiveDate};

use crate::clock::Clock;
use crate::grid::{self, CalendarCell};

/// Points at the first day of a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCursor {
    first_day: NaiveDate,
}

impl MonthCursor {
    /// Cursor on the month containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        MonthCursor {
            first_day: date.with_day(1).unwrap_or(date),
        }
    }

    pub fn today(clock: &impl Clock) -> Self {
        Self::containing(clock.today())
    }

    /// Cursor for a one-based month number, rolling over out-of-range
    /// months the same way the grid does. `None` if the month cannot be
    /// represented.
    pub fn from_year_month(year: i32, month1: i32) -> Option<Self> {
        let (year, month0) = grid::normalize_month(year, month1.checked_sub(1)?)?;
        NaiveDate::from_ymd_opt(year, month0 + 1, 1).map(Self::containing)
    }

    /// One month back. Stays put at the start of the representable range.
    pub fn previous(self) -> Self {
        self.first_day
            .checked_sub_months(Months::new(1))
            .map(Self::containing)
            .unwrap_or(self)
    }

    /// One month forward. Stays put at the end of the representable range.
    pub fn next(self) -> Self {
        self.first_day
            .checked_add_months(Months::new(1))
            .map(Self::containing)
            .unwrap_or(self)
    }

    /// Move by `months`, negative for backwards.
    pub fn shift(self, months: i32) -> Self {
        let step = Months::new(months.unsigned_abs());
        let moved = if months < 0 {
            self.first_day.checked_sub_months(step)
        } else {
            self.first_day.checked_add_months(step)
        };
        moved.map(Self::containing).unwrap_or(self)
    }

    pub fn year(&self) -> i32 {
        self.first_day.year()
    }

    /// Zero-based month, as [`grid::build`] expects.
    pub fn month0(&self) -> i32 {
        self.first_day.month0() as i32
    }

    /// The selected date after navigating here.
    pub fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    /// `2024/1` style heading.
    pub fn label(&self) -> String {
        format!("{}/{}", self.first_day.year(), self.first_day.month())
    }

    pub fn grid(&self, clock: &impl Clock) -> Vec<CalendarCell> {
        grid::build(self.year(), self.month0(), clock)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_containing_snaps_to_first_of_month() {
        let cursor = MonthCursor::containing(date(2024, 3, 17));
        assert_eq!(cursor.first_day(), date(2024, 3, 1));
        assert_eq!(cursor.month0(), 2);
        assert_eq!(cursor.label(), "2024/3");
    }

    #[test]
    fn test_navigation_crosses_year_boundaries() {
        let jan = MonthCursor::containing(date(2024, 1, 31));
        assert_eq!(jan.previous().first_day(), date(2023, 12, 1));
        assert_eq!(jan.previous().next(), jan);

        let dec = MonthCursor::containing(date(2023, 12, 2));
        assert_eq!(dec.next().label(), "2024/1");
        assert_eq!(dec.shift(-12).label(), "2022/12");
        assert_eq!(dec.shift(14).label(), "2025/2");
    }

    #[test]
    fn test_from_year_month_rolls_over() {
        assert_eq!(
            MonthCursor::from_year_month(2024, 0).unwrap().first_day(),
            date(2023, 12, 1)
        );
        assert_eq!(
            MonthCursor::from_year_month(2024, 13).unwrap().first_day(),
            date(2025, 1, 1)
        );
        assert!(MonthCursor::from_year_month(i32::MAX, 1).is_none());
    }

    #[test]
    fn test_grid_matches_builder() {
        let clock = FixedClock::on(date(2024, 2, 10));
        let cursor = MonthCursor::today(&clock);

        assert_eq!(cursor.grid(&clock), grid::build(2024, 1, &clock));
        assert_eq!(cursor.grid(&clock).iter().filter(|c| c.is_today).count(), 1);
    }
}
