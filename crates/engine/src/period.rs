//! Calendar periods used to slice transactions.
//!
//! All ranges are half-open: `[start, end)`, where `end` is the first day of
//! the following period.

use chrono::{Datelike, NaiveDate};

use crate::{EngineError, ResultEngine};

/// A calendar month of a given year.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MonthPeriod {
    year: i32,
    month: u32,
}

impl MonthPeriod {
    pub fn new(year: i32, month: u32) -> ResultEngine<Self> {
        if !(1..=12).contains(&month) {
            return Err(EngineError::InvalidPeriod(format!(
                "month must be between 1 and 12, got {month}"
            )));
        }
        let period = Self { year, month };
        // Both bounds must exist, December included.
        period.bounds()?;
        Ok(period)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Returns `(first day of the month, first day of the next month)`.
    pub fn bounds(&self) -> ResultEngine<(NaiveDate, NaiveDate)> {
        let (next_year, next_month) = if self.month == 12 {
            let next = self.year.checked_add(1).ok_or_else(|| {
                EngineError::InvalidPeriod(format!("year out of range: {}", self.year))
            })?;
            (next, 1)
        } else {
            (self.year, self.month + 1)
        };
        let start = first_day(self.year, self.month)?;
        let end = first_day(next_year, next_month)?;
        Ok((start, end))
    }

    /// Whether `date` falls within this month.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

/// Returns `(January 1st of year, January 1st of year + 1)`.
pub fn year_bounds(year: i32) -> ResultEngine<(NaiveDate, NaiveDate)> {
    let start = MonthPeriod::new(year, 1)?.bounds()?.0;
    let end = MonthPeriod::new(year, 12)?.bounds()?.1;
    Ok((start, end))
}

fn first_day(year: i32, month: u32) -> ResultEngine<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| EngineError::InvalidPeriod(format!("year out of range: {year}")))
}
