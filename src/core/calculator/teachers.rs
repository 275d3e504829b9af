//! Teacher directory: staff flagged as teachers, with their designation.

use serde::Serialize;

use crate::models::staff::{Designation, StaffMember};

/// Designation shown when the staff member's one is unknown.
pub const DEFAULT_DESIGNATION: &str = "Teacher";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeacherEntry {
    pub id: i64,
    pub name: String,
    pub designation: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub qualification: Option<String>,
    pub joining_date: Option<String>,
}

/// Keep teachers only, in staff order.
pub fn teacher_directory(staff: &[StaffMember], designations: &[Designation]) -> Vec<TeacherEntry> {
    staff
        .iter()
        .filter(|s| s.is_teacher)
        .map(|s| TeacherEntry {
            id: s.id,
            name: s.full_name(),
            designation: designations
                .iter()
                .find(|d| Some(d.id) == s.designation_id)
                .map(|d| d.name.as_str())
                .filter(|n| !n.is_empty())
                .unwrap_or(DEFAULT_DESIGNATION)
                .to_string(),
            phone: s.phone.clone(),
            email: s.email.clone(),
            qualification: s.qualification.clone(),
            joining_date: s.joining_date.clone(),
        })
        .collect()
}

/// Case-insensitive substring match on name, designation, email or phone.
/// An empty query matches everyone.
pub fn search_teachers<'a>(entries: &'a [TeacherEntry], query: &str) -> Vec<&'a TeacherEntry> {
    let q = query.to_lowercase();
    let hit = |field: Option<&str>| field.is_some_and(|f| f.to_lowercase().contains(&q));

    entries
        .iter()
        .filter(|t| {
            hit(Some(t.name.as_str()))
                || hit(Some(t.designation.as_str()))
                || hit(t.email.as_deref())
                || hit(t.phone.as_deref())
        })
        .collect()
}
