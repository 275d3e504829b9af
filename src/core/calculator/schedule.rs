//! Lookups over a class routine: active days, period slots and today's classes.

use chrono::Weekday;

use crate::models::routine::{Routine, RoutineDetail};
use crate::utils::date::week_from;

/// Placeholder shown when a period has no known time.
pub const NO_TIME: &str = "-";

/// Result of asking for a given weekday's classes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodaySchedule<'a> {
    /// The weekday is one of the routine's off days.
    OffDay,
    /// Classes ordered by period number; may be empty on an active day.
    Classes(Vec<&'a RoutineDetail>),
}

/// Weekdays with classes, in display order starting at `week_start`.
/// Without a routine every day is active.
pub fn active_days(routine: Option<&Routine>, week_start: Weekday) -> Vec<Weekday> {
    week_from(week_start)
        .into_iter()
        .filter(|wd| routine.is_none_or(|r| !r.off_days.contains(*wd)))
        .collect()
}

/// Slot for (day, period). Duplicates resolve to the first entry.
pub fn period_detail(routine: &Routine, day: Weekday, period: u32) -> Option<&RoutineDetail> {
    routine
        .details
        .iter()
        .find(|d| d.day == Some(day) && d.period_number == Some(period))
}

/// Time of a period, taken from any day carrying it.
/// Periods share the same timing on every day.
pub fn period_time(routine: &Routine, period: u32) -> &str {
    routine
        .details
        .iter()
        .find(|d| d.period_number == Some(period))
        .and_then(|d| d.time.as_deref())
        .filter(|t| !t.trim().is_empty())
        .unwrap_or(NO_TIME)
}

pub fn todays_schedule(routine: &Routine, weekday: Weekday) -> TodaySchedule<'_> {
    if routine.off_days.contains(weekday) {
        return TodaySchedule::OffDay;
    }

    let mut classes: Vec<&RoutineDetail> = routine
        .details
        .iter()
        .filter(|d| d.day == Some(weekday))
        .collect();

    // stable: equal periods keep input order
    classes.sort_by_key(|d| d.period_number.unwrap_or(u32::MAX));

    TodaySchedule::Classes(classes)
}

/// Pick the routine of a class/section. Without both ids the first routine is used.
pub fn select_routine(
    routines: &[Routine],
    class_id: Option<i64>,
    section_id: Option<i64>,
) -> Option<&Routine> {
    match (class_id, section_id) {
        (Some(c), Some(s)) => routines
            .iter()
            .find(|r| r.class_id == Some(c) && r.section_id == Some(s)),
        _ => routines.first(),
    }
}

/// One row of the weekly grid.
#[derive(Debug, Clone)]
pub struct GridRow<'a> {
    pub day: Weekday,
    pub slots: Vec<Option<&'a RoutineDetail>>,
}

/// Active days × periods `1..=number_of_periods`.
pub fn routine_grid(routine: &Routine, week_start: Weekday) -> Vec<GridRow<'_>> {
    active_days(Some(routine), week_start)
        .into_iter()
        .map(|day| GridRow {
            day,
            slots: (1..=routine.number_of_periods)
                .map(|p| period_detail(routine, day, p))
                .collect(),
        })
        .collect()
}
