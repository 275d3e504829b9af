//! Snapshot tables: every import replaces the stored copy of that resource.
//! Rows keep their payload order (`ordinal`) so first-match lookups behave
//! the same on stored data as on the fetched payload.

use crate::errors::AppResult;
use crate::models::attendance::{AttendanceRecord, AttendanceStatus, RecordDate};
use crate::models::profile::StudentProfile;
use crate::models::routine::{OffDays, Routine, RoutineDetail};
use crate::utils::date::{parse_date, weekday_from_name, weekday_name};
use crate::utils::time::parse_time;
use chrono::NaiveTime;
use rusqlite::{Connection, OptionalExtension, Row, params};

fn fmt_time(t: Option<NaiveTime>) -> Option<String> {
    t.map(|t| t.format("%H:%M").to_string())
}

// ---------------------------
// Attendance
// ---------------------------

pub fn replace_attendance(conn: &mut Connection, records: &[AttendanceRecord]) -> AppResult<usize> {
    let tx = conn.transaction()?;
    tx.execute("DELETE FROM attendance", [])?;
    {
        let mut stmt = tx.prepare(
            "INSERT INTO attendance (ordinal, date, status, in_time, out_time)
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )?;
        for (i, r) in records.iter().enumerate() {
            stmt.execute(params![
                i as i64,
                r.date.as_db_string(),
                r.status.as_str(),
                fmt_time(r.in_time),
                fmt_time(r.out_time),
            ])?;
        }
    }
    tx.commit()?;
    Ok(records.len())
}

fn map_attendance(row: &Row) -> rusqlite::Result<AttendanceRecord> {
    let date: String = row.get("date")?;
    let status: String = row.get("status")?;
    let in_time: Option<String> = row.get("in_time")?;
    let out_time: Option<String> = row.get("out_time")?;

    Ok(AttendanceRecord {
        date: RecordDate::parse(&date),
        status: AttendanceStatus::from_api_str(&status),
        in_time: in_time.as_deref().and_then(parse_time),
        out_time: out_time.as_deref().and_then(parse_time),
    })
}

pub fn load_attendance(conn: &Connection) -> AppResult<Vec<AttendanceRecord>> {
    let mut stmt = conn.prepare(
        "SELECT date, status, in_time, out_time FROM attendance ORDER BY ordinal ASC",
    )?;
    let rows = stmt.query_map([], map_attendance)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

// ---------------------------
// Routines
// ---------------------------

pub fn replace_routines(conn: &mut Connection, routines: &[Routine]) -> AppResult<usize> {
    let tx = conn.transaction()?;
    tx.execute("DELETE FROM routine_details", [])?;
    tx.execute("DELETE FROM routines", [])?;
    {
        let mut ins_routine = tx.prepare(
            "INSERT INTO routines (api_id, ordinal, class_id, section_id, class_name, section_name,
                                   number_of_periods, off_day)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        )?;
        let mut ins_detail = tx.prepare(
            "INSERT INTO routine_details (routine_id, ordinal, day_name, period_number,
                                          subject, teacher, time)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        )?;

        for (i, r) in routines.iter().enumerate() {
            ins_routine.execute(params![
                r.id,
                i as i64,
                r.class_id,
                r.section_id,
                r.class_name,
                r.section_name,
                r.number_of_periods,
                r.off_days.to_api_string(),
            ])?;
            let routine_id = tx.last_insert_rowid();

            for (j, d) in r.details.iter().enumerate() {
                ins_detail.execute(params![
                    routine_id,
                    j as i64,
                    d.day.map(weekday_name),
                    d.period_number,
                    d.subject,
                    d.teacher,
                    d.time,
                ])?;
            }
        }
    }
    tx.commit()?;
    Ok(routines.len())
}

fn map_detail(row: &Row) -> rusqlite::Result<RoutineDetail> {
    let day_name: Option<String> = row.get("day_name")?;
    Ok(RoutineDetail {
        day: day_name.as_deref().and_then(weekday_from_name),
        period_number: row.get("period_number")?,
        subject: row.get("subject")?,
        teacher: row.get("teacher")?,
        time: row.get("time")?,
    })
}

pub fn load_routines(conn: &Connection) -> AppResult<Vec<Routine>> {
    let mut stmt = conn.prepare(
        "SELECT id, api_id, class_id, section_id, class_name, section_name, number_of_periods,
                off_day
         FROM routines ORDER BY ordinal ASC",
    )?;
    let rows = stmt.query_map([], |row| {
        let rowid: i64 = row.get("id")?;
        let off_day: String = row.get("off_day")?;
        let routine = Routine {
            id: row.get("api_id")?,
            class_id: row.get("class_id")?,
            section_id: row.get("section_id")?,
            class_name: row.get("class_name")?,
            section_name: row.get("section_name")?,
            number_of_periods: row.get("number_of_periods")?,
            off_days: OffDays::parse(&off_day),
            details: Vec::new(),
        };
        Ok((rowid, routine))
    })?;

    let mut routines = Vec::new();
    for r in rows {
        routines.push(r?);
    }

    let mut detail_stmt = conn.prepare(
        "SELECT day_name, period_number, subject, teacher, time
         FROM routine_details WHERE routine_id = ?1 ORDER BY ordinal ASC",
    )?;
    for (rowid, routine) in routines.iter_mut() {
        let details = detail_stmt.query_map([*rowid], map_detail)?;
        for d in details {
            routine.details.push(d?);
        }
    }

    Ok(routines.into_iter().map(|(_, r)| r).collect())
}

// ---------------------------
// Profile
// ---------------------------

pub fn save_profile(conn: &Connection, p: &StudentProfile) -> AppResult<()> {
    conn.execute(
        "INSERT OR REPLACE INTO profile (id, student_id, name, admission_date, class_wise_student_id,
                                         class_id, section_id, class_name, section_name)
         VALUES (1, ?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            p.student_id,
            p.name,
            p.admission_date.map(|d| d.format("%Y-%m-%d").to_string()),
            p.class_wise_student_id,
            p.class_id,
            p.section_id,
            p.class_name,
            p.section_name,
        ],
    )?;
    Ok(())
}

pub fn load_profile(conn: &Connection) -> AppResult<Option<StudentProfile>> {
    let profile = conn
        .query_row(
            "SELECT student_id, name, admission_date, class_wise_student_id, class_id,
                    section_id, class_name, section_name
             FROM profile WHERE id = 1",
            [],
            |row| {
                let admission: Option<String> = row.get("admission_date")?;
                Ok(StudentProfile {
                    student_id: row.get("student_id")?,
                    name: row.get("name")?,
                    admission_date: admission.as_deref().and_then(parse_date),
                    class_wise_student_id: row.get("class_wise_student_id")?,
                    class_id: row.get("class_id")?,
                    section_id: row.get("section_id")?,
                    class_name: row.get("class_name")?,
                    section_name: row.get("section_name")?,
                })
            },
        )
        .optional()?;
    Ok(profile)
}
