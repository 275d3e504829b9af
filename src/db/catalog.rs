//! Snapshot tables of the school directory: subject catalog and
//! assignments, staff, designations and the fee summary.

use crate::errors::AppResult;
use crate::models::fee::FeeSummary;
use crate::models::staff::{Designation, StaffMember};
use crate::models::subject::{Subject, SubjectAssignment};
use rusqlite::{Connection, OptionalExtension, params};

// ---------------------------
// Subjects
// ---------------------------

pub fn replace_subjects(conn: &mut Connection, subjects: &[Subject]) -> AppResult<usize> {
    let tx = conn.transaction()?;
    tx.execute("DELETE FROM subjects", [])?;
    {
        let mut stmt = tx.prepare(
            "INSERT INTO subjects (api_id, ordinal, name, code, order_number, active)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        )?;
        for (i, s) in subjects.iter().enumerate() {
            stmt.execute(params![
                s.id,
                i as i64,
                s.name,
                s.code,
                s.order_number,
                s.active
            ])?;
        }
    }
    tx.commit()?;
    Ok(subjects.len())
}

pub fn load_subjects(conn: &Connection) -> AppResult<Vec<Subject>> {
    let mut stmt = conn.prepare(
        "SELECT api_id, name, code, order_number, active FROM subjects ORDER BY ordinal ASC",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok(Subject {
            id: row.get("api_id")?,
            name: row.get("name")?,
            code: row.get("code")?,
            order_number: row.get("order_number")?,
            active: row.get("active")?,
        })
    })?;
    Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
}

pub fn replace_subject_assignments(
    conn: &mut Connection,
    assignments: &[SubjectAssignment],
) -> AppResult<usize> {
    let tx = conn.transaction()?;
    tx.execute("DELETE FROM subject_assignments", [])?;
    {
        let mut stmt = tx.prepare(
            "INSERT INTO subject_assignments (ordinal, assign_id, class_id, section_id, subject_id)
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )?;
        for (i, a) in assignments.iter().enumerate() {
            stmt.execute(params![
                i as i64,
                a.assign_id,
                a.class_id,
                a.section_id,
                a.subject_id
            ])?;
        }
    }
    tx.commit()?;
    Ok(assignments.len())
}

pub fn load_subject_assignments(conn: &Connection) -> AppResult<Vec<SubjectAssignment>> {
    let mut stmt = conn.prepare(
        "SELECT assign_id, class_id, section_id, subject_id
         FROM subject_assignments ORDER BY ordinal ASC",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok(SubjectAssignment {
            assign_id: row.get("assign_id")?,
            class_id: row.get("class_id")?,
            section_id: row.get("section_id")?,
            subject_id: row.get("subject_id")?,
        })
    })?;
    Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
}

// ---------------------------
// Staff
// ---------------------------

pub fn replace_staff(conn: &mut Connection, staff: &[StaffMember]) -> AppResult<usize> {
    let tx = conn.transaction()?;
    tx.execute("DELETE FROM staff", [])?;
    {
        let mut stmt = tx.prepare(
            "INSERT INTO staff (api_id, ordinal, first_name, last_name, designation_id, phone,
                                email, qualification, joining_date, is_teacher)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        )?;
        for (i, s) in staff.iter().enumerate() {
            stmt.execute(params![
                s.id,
                i as i64,
                s.first_name,
                s.last_name,
                s.designation_id,
                s.phone,
                s.email,
                s.qualification,
                s.joining_date,
                s.is_teacher,
            ])?;
        }
    }
    tx.commit()?;
    Ok(staff.len())
}

pub fn load_staff(conn: &Connection) -> AppResult<Vec<StaffMember>> {
    let mut stmt = conn.prepare(
        "SELECT api_id, first_name, last_name, designation_id, phone, email, qualification,
                joining_date, is_teacher
         FROM staff ORDER BY ordinal ASC",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok(StaffMember {
            id: row.get("api_id")?,
            first_name: row.get("first_name")?,
            last_name: row.get("last_name")?,
            designation_id: row.get("designation_id")?,
            phone: row.get("phone")?,
            email: row.get("email")?,
            qualification: row.get("qualification")?,
            joining_date: row.get("joining_date")?,
            is_teacher: row.get("is_teacher")?,
        })
    })?;
    Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
}

pub fn replace_designations(conn: &mut Connection, designations: &[Designation]) -> AppResult<usize> {
    let tx = conn.transaction()?;
    tx.execute("DELETE FROM designations", [])?;
    {
        let mut stmt =
            tx.prepare("INSERT INTO designations (api_id, ordinal, name) VALUES (?1, ?2, ?3)")?;
        for (i, d) in designations.iter().enumerate() {
            stmt.execute(params![d.id, i as i64, d.name])?;
        }
    }
    tx.commit()?;
    Ok(designations.len())
}

pub fn load_designations(conn: &Connection) -> AppResult<Vec<Designation>> {
    let mut stmt =
        conn.prepare("SELECT api_id, name FROM designations ORDER BY ordinal ASC")?;
    let rows = stmt.query_map([], |row| {
        Ok(Designation {
            id: row.get("api_id")?,
            name: row.get("name")?,
        })
    })?;
    Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
}

// ---------------------------
// Fees
// ---------------------------

pub fn save_fee_summary(conn: &Connection, fees: &FeeSummary) -> AppResult<()> {
    conn.execute(
        "INSERT OR REPLACE INTO fee_summary (id, total_amount, total_paid, total_due)
         VALUES (1, ?1, ?2, ?3)",
        params![fees.total_amount, fees.total_paid, fees.total_due],
    )?;
    Ok(())
}

pub fn load_fee_summary(conn: &Connection) -> AppResult<Option<FeeSummary>> {
    let fees = conn
        .query_row(
            "SELECT total_amount, total_paid, total_due FROM fee_summary WHERE id = 1",
            [],
            |row| {
                Ok(FeeSummary {
                    total_amount: row.get("total_amount")?,
                    total_paid: row.get("total_paid")?,
                    total_due: row.get("total_due")?,
                })
            },
        )
        .optional()?;
    Ok(fees)
}
