use std::fs;
use std::path::Path;

use crate::db::catalog::{
    replace_designations, replace_staff, replace_subject_assignments, replace_subjects,
    save_fee_summary,
};
use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::db::queries::{replace_attendance, replace_routines, save_profile};
use crate::errors::AppResult;
use crate::models::attendance::{ApiAttendance, AttendanceRecord, RecordDate};
use crate::models::envelope::{parse_items, parse_single};
use crate::models::fee::{ApiFeeSummary, FeeSummary};
use crate::models::profile::{ApiProfile, StudentProfile};
use crate::models::routine::{ApiRoutine, Routine};
use crate::models::staff::{ApiDesignation, ApiStaff, Designation, StaffMember};
use crate::models::subject::{ApiCatalogSubject, ApiSubjectAssign, Subject, SubjectAssignment};
use crate::ui::messages::{success, warning};

pub struct ImportLogic;

impl ImportLogic {
    /// Replace the stored attendance with the records found in `path`.
    pub fn attendance(pool: &mut DbPool, path: &Path) -> AppResult<usize> {
        let raw = fs::read_to_string(path)?;
        let records: Vec<AttendanceRecord> = parse_items::<ApiAttendance>(&raw)?
            .into_iter()
            .map(AttendanceRecord::from)
            .collect();

        let bad_dates = records
            .iter()
            .filter(|r| matches!(r.date, RecordDate::Unparseable(_)))
            .count();
        if bad_dates > 0 {
            warning(format!(
                "{bad_dates} record(s) with an unreadable date will not show on the calendar"
            ));
        }

        let n = pool.with_conn(|conn| replace_attendance(conn, &records))?;

        ttlog_soft(
            &pool.conn,
            "import",
            "attendance",
            &format!("{n} records from {}", path.display()),
        );
        success(format!("Imported {n} attendance records."));
        Ok(n)
    }

    pub fn routines(pool: &mut DbPool, path: &Path) -> AppResult<usize> {
        let raw = fs::read_to_string(path)?;
        let routines: Vec<Routine> = parse_items::<ApiRoutine>(&raw)?
            .into_iter()
            .map(Routine::from)
            .collect();

        let n = pool.with_conn(|conn| replace_routines(conn, &routines))?;

        ttlog_soft(
            &pool.conn,
            "import",
            "routines",
            &format!("{n} routines from {}", path.display()),
        );
        success(format!("Imported {n} class routine(s)."));
        Ok(n)
    }

    pub fn profile(pool: &mut DbPool, path: &Path) -> AppResult<StudentProfile> {
        let raw = fs::read_to_string(path)?;
        let profile = StudentProfile::from(parse_single::<ApiProfile>(&raw)?);

        save_profile(&pool.conn, &profile)?;

        if profile.admission_date.is_none() {
            warning("Profile has no readable admission date: every past day will be tracked.");
        }

        ttlog_soft(
            &pool.conn,
            "import",
            "profile",
            &format!("student #{} from {}", profile.student_id, path.display()),
        );
        success(format!(
            "Imported profile of {}.",
            profile.name.as_deref().unwrap_or("student")
        ));
        Ok(profile)
    }

    /// Subject catalog (`/subjects`).
    pub fn subjects(pool: &mut DbPool, path: &Path) -> AppResult<usize> {
        let raw = fs::read_to_string(path)?;
        let subjects: Vec<Subject> = parse_items::<ApiCatalogSubject>(&raw)?
            .into_iter()
            .map(Subject::from)
            .collect();

        let n = pool.with_conn(|conn| replace_subjects(conn, &subjects))?;

        ttlog_soft(
            &pool.conn,
            "import",
            "subjects",
            &format!("{n} subjects from {}", path.display()),
        );
        success(format!("Imported {n} subject(s)."));
        Ok(n)
    }

    /// Class/section assignments (`/subject-assigns`), flattened to one row per subject.
    pub fn subject_assignments(pool: &mut DbPool, path: &Path) -> AppResult<usize> {
        let raw = fs::read_to_string(path)?;
        let assignments: Vec<SubjectAssignment> = parse_items::<ApiSubjectAssign>(&raw)?
            .into_iter()
            .flat_map(ApiSubjectAssign::into_assignments)
            .collect();

        let n = pool.with_conn(|conn| replace_subject_assignments(conn, &assignments))?;

        ttlog_soft(
            &pool.conn,
            "import",
            "subject_assigns",
            &format!("{n} assignments from {}", path.display()),
        );
        success(format!("Imported {n} subject assignment(s)."));
        Ok(n)
    }

    pub fn staff(pool: &mut DbPool, path: &Path) -> AppResult<usize> {
        let raw = fs::read_to_string(path)?;
        let staff: Vec<StaffMember> = parse_items::<ApiStaff>(&raw)?
            .into_iter()
            .map(StaffMember::from)
            .collect();

        let n = pool.with_conn(|conn| replace_staff(conn, &staff))?;
        let teachers = staff.iter().filter(|s| s.is_teacher).count();

        ttlog_soft(
            &pool.conn,
            "import",
            "staff",
            &format!("{n} staff ({teachers} teachers) from {}", path.display()),
        );
        success(format!("Imported {n} staff member(s), {teachers} teacher(s)."));
        Ok(n)
    }

    pub fn designations(pool: &mut DbPool, path: &Path) -> AppResult<usize> {
        let raw = fs::read_to_string(path)?;
        let designations: Vec<Designation> = parse_items::<ApiDesignation>(&raw)?
            .into_iter()
            .map(Designation::from)
            .collect();

        let n = pool.with_conn(|conn| replace_designations(conn, &designations))?;

        ttlog_soft(
            &pool.conn,
            "import",
            "designations",
            &format!("{n} designations from {}", path.display()),
        );
        success(format!("Imported {n} designation(s)."));
        Ok(n)
    }

    pub fn fees(pool: &mut DbPool, path: &Path) -> AppResult<FeeSummary> {
        let raw = fs::read_to_string(path)?;
        let fees = FeeSummary::from(parse_single::<ApiFeeSummary>(&raw)?);

        save_fee_summary(&pool.conn, &fees)?;

        ttlog_soft(
            &pool.conn,
            "import",
            "fees",
            &format!("due {:.2} from {}", fees.total_due, path.display()),
        );
        success("Imported fee summary.");
        Ok(fees)
    }
}
