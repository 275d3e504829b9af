//! Subjects taught to one class/section.

use serde::Serialize;
use std::collections::HashMap;

use crate::models::subject::{Subject, SubjectAssignment};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssignedSubject {
    pub id: i64,
    pub name: String,
    pub code: Option<String>,
    pub order_number: i64,
    pub active: bool,
    pub assign_id: i64,
}

/// Subjects assigned to `(class_id, section_id)`, one per subject id,
/// ordered by `order_number`.
///
/// Assignments pointing at a subject missing from the catalog are skipped.
/// When a subject is assigned twice the later assignment replaces the
/// earlier one in place.
pub fn assigned_subjects(
    catalog: &[Subject],
    assignments: &[SubjectAssignment],
    class_id: Option<i64>,
    section_id: Option<i64>,
) -> Vec<AssignedSubject> {
    let by_id: HashMap<i64, &Subject> = catalog.iter().map(|s| (s.id, s)).collect();

    let mut out: Vec<AssignedSubject> = Vec::new();
    for a in assignments
        .iter()
        .filter(|a| a.class_id == class_id && a.section_id == section_id)
    {
        let Some(subject) = by_id.get(&a.subject_id) else {
            continue;
        };

        let entry = AssignedSubject {
            id: subject.id,
            name: subject.name.clone(),
            code: subject.code.clone(),
            order_number: subject.order_number,
            active: subject.active,
            assign_id: a.assign_id,
        };

        match out.iter_mut().find(|s| s.id == entry.id) {
            Some(slot) => *slot = entry,
            None => out.push(entry),
        }
    }

    // stable: equal order numbers keep assignment order
    out.sort_by_key(|s| s.order_number);
    out
}
