//! Text rendering of the student views. Every function returns the text so
//! command handlers only print.

use chrono::{Datelike, Weekday};

use crate::core::calculator::calendar::MonthCalendar;
use crate::core::calculator::fees::{FeeStatus, format_amount};
use crate::core::calculator::schedule::{TodaySchedule, period_time, routine_grid};
use crate::core::calculator::subjects::AssignedSubject;
use crate::core::calculator::summary::AttendanceSummary;
use crate::core::calculator::teachers::TeacherEntry;
use crate::models::attendance::AttendanceRecord;
use crate::models::date_status::DateStatus;
use crate::models::routine::Routine;
use crate::utils::colors::{
    RED, color_for_rating, color_for_status, colorize_optional, paint,
};
use crate::utils::date::{month_label, weekday_name, week_from};
use crate::utils::formatting::{pad_left, percent};
use crate::utils::table::{Column, Table};
use crate::utils::time::display_time;

pub const NO_ROUTINE: &str = "No routine available";
pub const OFF_DAY: &str = "No classes today (Off Day)";
pub const NOTHING_SCHEDULED: &str = "No classes scheduled for today";
pub const NO_CLASS: &str = "No class assigned to this student";
pub const NO_SUBJECTS: &str = "No subjects assigned to this class";
pub const NO_TEACHERS: &str = "No teachers found";

pub fn render_summary(s: &AttendanceSummary, threshold: u32) -> String {
    let rating = s.rating(threshold);
    let mut out = format!(
        "Overall attendance: {} ({}/{} days) {}\n",
        percent(s.percentage),
        s.present,
        s.total,
        paint(rating.as_str(), color_for_rating(rating)),
    );
    out.push_str(&format!(
        "Present: {}  Absent: {}  Late: {}  Leave: {}\n",
        s.present, s.absent, s.late, s.leave
    ));
    if s.bucketed() < s.total {
        out.push_str(&format!(
            "Unrecognised status: {}\n",
            s.total - s.bucketed()
        ));
    }
    out
}

pub fn render_calendar(cal: &MonthCalendar) -> String {
    let mut out = format!("{}\n", month_label(cal.year, cal.month));

    for wd in week_from(cal.week_start) {
        out.push_str(&pad_left(&weekday_name(wd)[..3], 6));
    }
    out.push('\n');

    for week in cal.weeks() {
        for cell in week {
            let text = match cell {
                Some(c) => {
                    let day = format!("{:>2}{}", c.date.day(), c.status.marker());
                    paint(&day, color_for_status(c.status))
                }
                None => String::new(),
            };
            out.push_str(&pad_left(&text, 6));
        }
        out.push('\n');
    }

    let counts = cal.counts();
    let legend: Vec<String> = DateStatus::ALL
        .iter()
        .filter_map(|st| counts.get(st).map(|n| format!("{} {}={n}", st.marker(), st.as_str())))
        .collect();
    out.push_str(&legend.join("  "));
    out.push('\n');
    out
}

/// Attendance history, newest first; unreadable dates last.
pub fn render_history(records: &[AttendanceRecord], time_format: &str, separator: &str) -> String {
    let mut sorted: Vec<&AttendanceRecord> = records.iter().collect();
    sorted.sort_by(|a, b| b.date.day().cmp(&a.date.day()));

    let mut table = Table::new(
        vec![
            Column::new("Date", 10),
            Column::new("Day", 3),
            Column::new("Status", 7),
            Column::new("In", 8),
            Column::new("Out", 8),
        ],
        separator,
    );

    for r in sorted {
        let (date, day) = match r.date.day() {
            Some(d) => (
                d.format("%Y-%m-%d").to_string(),
                d.format("%a").to_string(),
            ),
            None => (r.date.as_db_string(), "?".to_string()),
        };
        table.add_row(vec![
            date,
            day,
            r.status.as_str().to_string(),
            colorize_optional(&display_time(r.in_time, time_format)),
            colorize_optional(&display_time(r.out_time, time_format)),
        ]);
    }

    table.render()
}

/// Weekly grid: one row per active day, one column per period.
pub fn render_routine(routine: &Routine, week_start: Weekday, separator: &str) -> String {
    let mut columns = vec![Column::new("Day", 9)];
    for p in 1..=routine.number_of_periods {
        columns.push(Column::new(
            &format!("P{p} {}", period_time(routine, p)),
            8,
        ));
    }
    let mut table = Table::new(columns, separator);

    for row in routine_grid(routine, week_start) {
        let mut cells = vec![weekday_name(row.day).to_string()];
        for slot in row.slots {
            cells.push(match slot {
                Some(d) => {
                    let subject = d.subject.as_deref().unwrap_or("Subject");
                    match &d.teacher {
                        Some(t) => format!("{subject} ({t})"),
                        None => subject.to_string(),
                    }
                }
                None => colorize_optional("-"),
            });
        }
        table.add_row(cells);
    }

    let mut out = format!("{}\n", routine.label());
    if !routine.off_days.is_empty() {
        out.push_str(&format!("Off days: {}\n", routine.off_days.to_api_string()));
    }
    out.push_str(&table.render());
    out
}

pub fn render_today(schedule: Option<&TodaySchedule<'_>>, separator: &str) -> String {
    let classes = match schedule {
        None => return format!("{NO_ROUTINE}\n"),
        Some(TodaySchedule::OffDay) => return format!("{OFF_DAY}\n"),
        Some(TodaySchedule::Classes(c)) if c.is_empty() => {
            return format!("{NOTHING_SCHEDULED}\n");
        }
        Some(TodaySchedule::Classes(c)) => c,
    };

    let mut table = Table::new(
        vec![
            Column::new("Period", 6),
            Column::new("Time", 11),
            Column::new("Subject", 10),
            Column::new("Teacher", 10),
        ],
        separator,
    );

    for d in classes {
        table.add_row(vec![
            d.period_number
                .map(|p| format!("Period {p}"))
                .unwrap_or_else(|| "?".to_string()),
            colorize_optional(d.time.as_deref().unwrap_or("N/A")),
            d.subject.clone().unwrap_or_else(|| "Subject".to_string()),
            d.teacher.clone().unwrap_or_default(),
        ]);
    }

    table.render()
}

pub fn render_subjects(subjects: &[AssignedSubject], separator: &str) -> String {
    if subjects.is_empty() {
        return format!("{NO_SUBJECTS}\n");
    }

    let mut table = Table::new(
        vec![
            Column::new("#", 2),
            Column::new("Subject", 10),
            Column::new("Code", 6),
        ],
        separator,
    );

    for (i, s) in subjects.iter().enumerate() {
        let name = if s.active {
            s.name.clone()
        } else {
            format!("{} (inactive)", s.name)
        };
        table.add_row(vec![
            (i + 1).to_string(),
            name,
            colorize_optional(s.code.as_deref().unwrap_or("-")),
        ]);
    }

    table.render()
}

pub fn render_teachers(teachers: &[&TeacherEntry], separator: &str) -> String {
    if teachers.is_empty() {
        return format!("{NO_TEACHERS}\n");
    }

    let mut table = Table::new(
        vec![
            Column::new("Name", 10),
            Column::new("Designation", 11),
            Column::new("Phone", 8),
            Column::new("Email", 8),
        ],
        separator,
    );

    for t in teachers {
        table.add_row(vec![
            t.name.clone(),
            t.designation.clone(),
            colorize_optional(t.phone.as_deref().unwrap_or("-")),
            colorize_optional(t.email.as_deref().unwrap_or("-")),
        ]);
    }

    table.render()
}

pub fn render_fees(fees: &FeeStatus) -> String {
    let due = format_amount(fees.total_due);
    let mut out = format!(
        "Total fees: {}\nPaid:       {}\nDue:        {}\n",
        format_amount(fees.total_amount),
        format_amount(fees.total_paid),
        if fees.has_due() {
            paint(&due, RED)
        } else {
            due
        },
    );
    if let Some(reminder) = fees.reminder() {
        out.push_str(&format!("{reminder}\n"));
    }
    out
}
