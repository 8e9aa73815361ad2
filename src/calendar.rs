// Attendance calendar grid
//
// Builds the month view for the attendance screen: a fixed 6x7 grid starting
// on Monday, padded with trailing days of the previous month and leading days
// of the next one. Days that have attendance records are flagged so the
// console can mark them.

use std::collections::HashSet;

use chrono::{Datelike, Days, Months, NaiveDate};

pub const GRID_CELLS: usize = 42; // 6 weeks * 7 days

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub day_number: u32,
    /// Belongs to the previous or next month
    pub other_month: bool,
    pub has_attendance: bool,
    pub is_today: bool,
}

/// Build the 42-cell grid for the month containing `month_anchor`.
pub fn month_grid(
    month_anchor: NaiveDate,
    available_dates: &HashSet<NaiveDate>,
    today: NaiveDate,
) -> Vec<CalendarDay> {
    let first_of_month = month_anchor.with_day(1).expect("day 1 always exists");

    // Walk back to the Monday on or before the 1st
    let lead_days = first_of_month.weekday().num_days_from_monday() as u64;
    let grid_start = first_of_month - Days::new(lead_days);

    let mut days = Vec::with_capacity(GRID_CELLS);
    let mut date = grid_start;
    for _ in 0..GRID_CELLS {
        days.push(CalendarDay {
            date,
            day_number: date.day(),
            other_month: date.month() != first_of_month.month()
                || date.year() != first_of_month.year(),
            has_attendance: available_dates.contains(&date),
            is_today: date == today,
        });
        date = date + Days::new(1);
    }
    days
}

/// Anchor for the previous month's grid
pub fn prev_month(month_anchor: NaiveDate) -> NaiveDate {
    month_anchor.with_day(1).expect("day 1 always exists") - Months::new(1)
}

/// Anchor for the next month's grid
pub fn next_month(month_anchor: NaiveDate) -> NaiveDate {
    month_anchor.with_day(1).expect("day 1 always exists") + Months::new(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_grid_is_42_cells_starting_monday() {
        // March 2024: the 1st is a Friday
        let grid = month_grid(d(2024, 3, 10), &HashSet::new(), d(2024, 3, 10));
        assert_eq!(grid.len(), GRID_CELLS);
        assert_eq!(grid[0].date.weekday(), Weekday::Mon);
        assert_eq!(grid[0].date, d(2024, 2, 26));
        assert!(grid[0].other_month);
    }

    #[test]
    fn test_current_month_days_flagged() {
        let grid = month_grid(d(2024, 3, 1), &HashSet::new(), d(2024, 3, 15));
        let in_month: Vec<_> = grid.iter().filter(|c| !c.other_month).collect();
        assert_eq!(in_month.len(), 31);
        assert_eq!(in_month.first().unwrap().day_number, 1);
        assert_eq!(in_month.last().unwrap().day_number, 31);

        let today: Vec<_> = grid.iter().filter(|c| c.is_today).collect();
        assert_eq!(today.len(), 1);
        assert_eq!(today[0].date, d(2024, 3, 15));
    }

    #[test]
    fn test_attendance_days_marked() {
        let mut available = HashSet::new();
        available.insert(d(2024, 3, 5));
        available.insert(d(2024, 3, 12));

        let grid = month_grid(d(2024, 3, 1), &available, d(2024, 3, 1));
        let marked: Vec<_> = grid.iter().filter(|c| c.has_attendance).collect();
        assert_eq!(marked.len(), 2);
        assert!(marked.iter().all(|c| !c.other_month));
    }

    #[test]
    fn test_month_starting_on_monday_has_no_lead_days() {
        // April 2024 starts on a Monday
        let grid = month_grid(d(2024, 4, 20), &HashSet::new(), d(2024, 4, 20));
        assert_eq!(grid[0].date, d(2024, 4, 1));
        assert!(!grid[0].other_month);
    }

    #[test]
    fn test_prev_next_navigation() {
        assert_eq!(prev_month(d(2024, 3, 31)), d(2024, 2, 1));
        assert_eq!(next_month(d(2024, 12, 15)), d(2025, 1, 1));
        assert_eq!(prev_month(d(2024, 1, 10)), d(2023, 12, 1));
    }
}
