//! Attendance status of a single calendar day.

use chrono::{Datelike, NaiveDate};

use crate::models::attendance::{AttendanceRecord, AttendanceStatus};
use crate::models::date_status::DateStatus;
use crate::models::routine::OffDays;

/// Classify `date` for the attendance calendar.
///
/// Rules apply in this order and the first match wins:
/// 1. after `today` → Future (today itself is resolvable)
/// 2. before the admission date → Inapplicable
/// 3. weekday is an off day → Off, even when a record exists for that day
/// 4. first record on that day: Present / Late / Leave; any other status,
///    or no record at all, counts as Absent
pub fn resolve_date_status(
    date: NaiveDate,
    today: NaiveDate,
    admission_date: Option<NaiveDate>,
    off_days: &OffDays,
    records: &[AttendanceRecord],
) -> DateStatus {
    if date > today {
        return DateStatus::Future;
    }

    if let Some(admission) = admission_date
        && date < admission
    {
        return DateStatus::Inapplicable;
    }

    if off_days.contains(date.weekday()) {
        return DateStatus::Off;
    }

    match records.iter().find(|r| r.is_on(date)).map(|r| &r.status) {
        Some(AttendanceStatus::Present) => DateStatus::Present,
        Some(AttendanceStatus::Late) => DateStatus::Late,
        Some(AttendanceStatus::Leave) => DateStatus::Leave,
        _ => DateStatus::Absent,
    }
}

/// Everything the resolver needs for one student, borrowed from a snapshot.
#[derive(Debug, Clone, Copy)]
pub struct StatusContext<'a> {
    pub today: NaiveDate,
    pub admission_date: Option<NaiveDate>,
    pub off_days: &'a OffDays,
    pub records: &'a [AttendanceRecord],
}

impl StatusContext<'_> {
    pub fn resolve(&self, date: NaiveDate) -> DateStatus {
        resolve_date_status(
            date,
            self.today,
            self.admission_date,
            self.off_days,
            self.records,
        )
    }

    /// The record backing `date`, if any (first match).
    pub fn record_on(&self, date: NaiveDate) -> Option<&AttendanceRecord> {
        self.records.iter().find(|r| r.is_on(date))
    }
}
