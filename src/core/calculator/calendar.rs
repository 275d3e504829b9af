//! Month grid for the attendance calendar.

use chrono::{Datelike, NaiveDate, Weekday};
use std::collections::HashMap;

use super::status::StatusContext;
use crate::models::date_status::DateStatus;
use crate::utils::date::{all_days_of_month, week_from};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub status: DateStatus,
}

#[derive(Debug, Clone)]
pub struct MonthCalendar {
    pub year: i32,
    pub month: u32,
    pub week_start: Weekday,
    /// Leading `None` cells align day 1 under its weekday column.
    pub cells: Vec<Option<DayCell>>,
}

impl MonthCalendar {
    pub fn days(&self) -> impl Iterator<Item = &DayCell> {
        self.cells.iter().flatten()
    }

    /// Rows of 7 cells, the last one padded with `None`.
    pub fn weeks(&self) -> Vec<Vec<Option<DayCell>>> {
        self.cells
            .chunks(7)
            .map(|chunk| {
                let mut row = chunk.to_vec();
                row.resize(7, None);
                row
            })
            .collect()
    }

    pub fn counts(&self) -> HashMap<DateStatus, usize> {
        let mut out = HashMap::new();
        for cell in self.days() {
            *out.entry(cell.status).or_insert(0) += 1;
        }
        out
    }
}

pub fn month_calendar(
    year: i32,
    month: u32,
    week_start: Weekday,
    ctx: &StatusContext<'_>,
) -> MonthCalendar {
    let days = all_days_of_month(year, month);

    let leading = days
        .first()
        .map(|first| {
            week_from(week_start)
                .iter()
                .position(|wd| *wd == first.weekday())
                .unwrap_or(0)
        })
        .unwrap_or(0);

    let mut cells: Vec<Option<DayCell>> = vec![None; leading];
    cells.extend(days.into_iter().map(|date| {
        Some(DayCell {
            date,
            status: ctx.resolve(date),
        })
    }));

    MonthCalendar {
        year,
        month,
        week_start,
        cells,
    }
}
