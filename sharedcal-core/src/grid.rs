//! Month grid construction.
//!
//! A grid is the month's days laid out in Sunday-first week rows. Rows are
//! completed with padding cells that carry no date, so the grid always
//! starts on a Sunday and ends on a Saturday.

use chrono::{Datelike, Months, NaiveDate};
use serde::Serialize;

use crate::clock::Clock;
use crate::iso_date::to_iso_date;

pub const DAYS_PER_WEEK: usize = 7;

/// One slot of a month grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarCell {
    pub id: String,
    /// `None` for padding cells.
    pub date: Option<NaiveDate>,
    /// `None` for padding cells.
    pub iso_date: Option<String>,
    pub is_today: bool,
    pub is_current_month: bool,
}

impl CalendarCell {
    fn padding(id: String) -> Self {
        CalendarCell {
            id,
            date: None,
            iso_date: None,
            is_today: false,
            is_current_month: false,
        }
    }

    pub fn is_padding(&self) -> bool {
        self.date.is_none()
    }

    /// Day of month, for labelling the cell.
    pub fn day(&self) -> Option<u32> {
        self.date.map(|d| d.day())
    }
}

/// Build the grid for `month` (zero-based) of `year`.
///
/// Months outside 0..=11 roll over into neighbouring years, so a cursor can
/// step past December or before January. A month the date library cannot
/// represent yields an empty grid.
pub fn build(year: i32, month: i32, clock: &impl Clock) -> Vec<CalendarCell> {
    let Some((first, last)) = month_bounds(year, month) else {
        tracing::debug!(year, month, "month outside supported date range");
        return Vec::new();
    };

    let total_days = last.day();
    let start_weekday = first.weekday().num_days_from_sunday() as usize;
    let today_iso = to_iso_date(clock.today());

    let mut cells = Vec::with_capacity(6 * DAYS_PER_WEEK);

    for i in 0..start_weekday {
        cells.push(CalendarCell::padding(format!("prev-{i}")));
    }

    for date in (1..=total_days).filter_map(|day| first.with_day(day)) {
        let iso = to_iso_date(date);
        cells.push(CalendarCell {
            id: format!("current-{}", date.day()),
            date: Some(date),
            is_today: iso == today_iso,
            iso_date: Some(iso),
            is_current_month: true,
        });
    }

    let trailing = (DAYS_PER_WEEK - cells.len() % DAYS_PER_WEEK) % DAYS_PER_WEEK;
    for i in 0..trailing {
        cells.push(CalendarCell::padding(format!("next-{i}")));
    }

    tracing::debug!(year, month, cells = cells.len(), "built month grid");
    cells
}

/// Split a grid into week rows.
pub fn weeks(cells: &[CalendarCell]) -> impl Iterator<Item = &[CalendarCell]> {
    cells.chunks(DAYS_PER_WEEK)
}

/// Fold an arbitrary (year, zero-based month) pair into a real month.
pub(crate) fn normalize_month(year: i32, month: i32) -> Option<(i32, u32)> {
    let total = i64::from(year) * 12 + i64::from(month);
    let year = i32::try_from(total.div_euclid(12)).ok()?;
    let month0 = u32::try_from(total.rem_euclid(12)).ok()?;
    Some((year, month0))
}

/// First and last day of the month. The last day is "day zero" of the next
/// month, i.e. the day before its first, so month lengths and leap years
/// fall out of the date arithmetic. The last representable month has no
/// next month and ends on `NaiveDate::MAX`.
fn month_bounds(year: i32, month: i32) -> Option<(NaiveDate, NaiveDate)> {
    let (year, month0) = normalize_month(year, month)?;
    let first = NaiveDate::from_ymd_opt(year, month0 + 1, 1)?;
    let last = match first.checked_add_months(Months::new(1)) {
        Some(next_first) => next_first.pred_opt()?,
        None => NaiveDate::MAX,
    };
    Some((first, last))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::Weekday;

    fn clock_on(year: i32, month: u32, day: u32) -> FixedClock {
        FixedClock::on(NaiveDate::from_ymd_opt(year, month, day).unwrap())
    }

    fn current_month_cells(cells: &[CalendarCell]) -> Vec<&CalendarCell> {
        cells.iter().filter(|c| c.is_current_month).collect()
    }

    #[test]
    fn test_january_2024_layout() {
        let cells = build(2024, 0, &clock_on(2030, 6, 1));

        assert_eq!(cells.len(), 35);
        assert!(cells[0].is_padding());
        assert_eq!(cells[0].id, "prev-0");
        assert_eq!(cells[1].id, "current-1");
        assert_eq!(cells[1].iso_date.as_deref(), Some("2024-01-01"));

        let days = current_month_cells(&cells);
        assert_eq!(days.len(), 31);
        assert_eq!(days.last().unwrap().day(), Some(31));
        assert_eq!(cells[32].id, "next-0");
        assert!(cells[32..].iter().all(CalendarCell::is_padding));
    }

    #[test]
    fn test_month_lengths_follow_leap_years() {
        let clock = clock_on(2030, 6, 1);
        assert_eq!(current_month_cells(&build(2024, 1, &clock)).len(), 29);
        assert_eq!(current_month_cells(&build(2023, 1, &clock)).len(), 28);
        assert_eq!(current_month_cells(&build(1900, 1, &clock)).len(), 28);
        assert_eq!(current_month_cells(&build(2000, 1, &clock)).len(), 29);
        assert_eq!(current_month_cells(&build(2024, 3, &clock)).len(), 30);
        assert_eq!(current_month_cells(&build(2024, 11, &clock)).len(), 31);
    }

    #[test]
    fn test_grids_are_whole_weeks_and_padding_is_dateless() {
        let clock = clock_on(2030, 6, 1);

        for year in 1895..=2105 {
            for month in -13..=13 {
                let cells = build(year, month, &clock);
                assert_eq!(cells.len() % DAYS_PER_WEEK, 0, "{year}/{month}");

                let first = cells.iter().position(|c| c.is_current_month).unwrap();
                let last = cells.iter().rposition(|c| c.is_current_month).unwrap();

                let first_date = cells[first].date.unwrap();
                assert_eq!(first_date.day(), 1);
                assert_eq!(first, first_date.weekday().num_days_from_sunday() as usize);

                let last_date = cells[last].date.unwrap();
                assert_ne!(last_date.succ_opt().unwrap().month(), last_date.month());
                assert!(cells.len() - last - 1 < DAYS_PER_WEEK);

                for (i, cell) in cells.iter().enumerate() {
                    let inside = i >= first && i <= last;
                    assert_eq!(cell.is_current_month, inside);
                    assert_eq!(cell.date.is_some(), inside);
                    assert_eq!(cell.iso_date.is_some(), inside);
                }
            }
        }
    }

    #[test]
    fn test_rows_run_sunday_to_saturday() {
        let cells = build(2025, 7, &clock_on(2030, 6, 1));

        for row in weeks(&cells) {
            assert_eq!(row.len(), DAYS_PER_WEEK);
            for (column, cell) in row.iter().enumerate() {
                if let Some(date) = cell.date {
                    assert_eq!(date.weekday().num_days_from_sunday() as usize, column);
                }
            }
        }
        let first_day = cells.iter().find_map(|c| c.date).unwrap();
        assert_eq!(first_day.weekday(), Weekday::Fri);
    }

    #[test]
    fn test_out_of_range_months_roll_over() {
        let clock = clock_on(2030, 6, 1);
        assert_eq!(build(2024, -1, &clock), build(2023, 11, &clock));
        assert_eq!(build(2024, 12, &clock), build(2025, 0, &clock));
        assert_eq!(build(2024, -25, &clock), build(2021, 11, &clock));
        assert_eq!(build(2024, 30, &clock), build(2026, 6, &clock));
    }

    #[test]
    fn test_today_is_flagged_once_in_its_month() {
        let clock = clock_on(2024, 2, 29);

        let feb = build(2024, 1, &clock);
        let flagged: Vec<_> = feb.iter().filter(|c| c.is_today).collect();
        assert_eq!(flagged.len(), 1);
        assert_eq!(flagged[0].iso_date.as_deref(), Some("2024-02-29"));

        for month in [0, 2, 13] {
            assert!(build(2024, month, &clock).iter().all(|c| !c.is_today));
        }
        assert!(build(2023, 1, &clock).iter().all(|c| !c.is_today));
    }

    #[test]
    fn test_unrepresentable_year_gives_empty_grid() {
        let clock = clock_on(2024, 1, 1);
        assert!(build(i32::MAX, 0, &clock).is_empty());
        assert!(build(i32::MIN, -1, &clock).is_empty());
    }

    #[test]
    fn test_last_representable_month_is_built() {
        let clock = clock_on(2024, 1, 1);
        let max = NaiveDate::MAX;
        let cells = build(max.year(), max.month0() as i32, &clock);

        assert_eq!(cells.len() % DAYS_PER_WEEK, 0);
        let days = current_month_cells(&cells);
        assert_eq!(days.len(), max.day() as usize);
        assert_eq!(days.last().unwrap().date, Some(max));

        assert!(build(max.year(), max.month0() as i32 + 1, &clock).is_empty());
    }

    #[test]
    fn test_normalize_month() {
        assert_eq!(normalize_month(2024, -1), Some((2023, 11)));
        assert_eq!(normalize_month(2024, 0), Some((2024, 0)));
        assert_eq!(normalize_month(2024, 12), Some((2025, 0)));
        assert_eq!(normalize_month(2024, -12), Some((2023, 0)));
        assert_eq!(normalize_month(i32::MAX, 12), None);
    }
}
