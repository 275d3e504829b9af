//! Snapshot loading: the stored copy of the last imported payloads, ready
//! to be handed to the resolvers.

use chrono::NaiveDate;

use crate::core::calculator::schedule::select_routine;
use crate::core::calculator::status::StatusContext;
use crate::core::calculator::subjects::{AssignedSubject, assigned_subjects};
use crate::core::calculator::teachers::{TeacherEntry, teacher_directory};
use crate::db::catalog::{
    load_designations, load_fee_summary, load_staff, load_subject_assignments, load_subjects,
};
use crate::db::pool::DbPool;
use crate::db::queries::{load_attendance, load_profile, load_routines};
use crate::errors::AppResult;
use crate::models::attendance::AttendanceRecord;
use crate::models::fee::FeeSummary;
use crate::models::profile::StudentProfile;
use crate::models::routine::{OffDays, Routine};
use crate::models::staff::{Designation, StaffMember};
use crate::models::subject::{Subject, SubjectAssignment};

#[derive(Debug, Default)]
pub struct Snapshot {
    pub records: Vec<AttendanceRecord>,
    pub routines: Vec<Routine>,
    pub profile: Option<StudentProfile>,
    pub subjects: Vec<Subject>,
    pub subject_assignments: Vec<SubjectAssignment>,
    pub staff: Vec<StaffMember>,
    pub designations: Vec<Designation>,
    pub fees: Option<FeeSummary>,
}

impl Snapshot {
    pub fn load(pool: &mut DbPool) -> AppResult<Self> {
        Ok(Self {
            records: load_attendance(&pool.conn)?,
            routines: load_routines(&pool.conn)?,
            profile: load_profile(&pool.conn)?,
            subjects: load_subjects(&pool.conn)?,
            subject_assignments: load_subject_assignments(&pool.conn)?,
            staff: load_staff(&pool.conn)?,
            designations: load_designations(&pool.conn)?,
            fees: load_fee_summary(&pool.conn)?,
        })
    }

    /// The routine of the student's class/section.
    pub fn routine(&self) -> Option<&Routine> {
        let (class_id, section_id) = self
            .profile
            .as_ref()
            .map(|p| (p.class_id, p.section_id))
            .unwrap_or((None, None));
        select_routine(&self.routines, class_id, section_id)
    }

    /// Subjects of the student's class/section; `None` without an enrolment.
    pub fn assigned_subjects(&self) -> Option<Vec<AssignedSubject>> {
        let p = self.profile.as_ref()?;
        p.class_wise_student_id?;
        Some(assigned_subjects(
            &self.subjects,
            &self.subject_assignments,
            p.class_id,
            p.section_id,
        ))
    }

    pub fn teachers(&self) -> Vec<TeacherEntry> {
        teacher_directory(&self.staff, &self.designations)
    }

    pub fn admission_date(&self) -> Option<NaiveDate> {
        self.profile.as_ref().and_then(|p| p.admission_date)
    }

    /// Resolver inputs as of `today`. Without a routine no day is off.
    pub fn status_context<'a>(
        &'a self,
        today: NaiveDate,
        no_off_days: &'a OffDays,
    ) -> StatusContext<'a> {
        StatusContext {
            today,
            admission_date: self.admission_date(),
            off_days: self.routine().map(|r| &r.off_days).unwrap_or(no_off_days),
            records: &self.records,
        }
    }
}
