use chrono::NaiveDate;
use serde::Deserialize;

use super::envelope::null_as_default;
use super::routine::{ApiClass, ApiSection};
use crate::utils::date::parse_day_of_timestamp;

/// The parts of the student profile the views rely on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentProfile {
    pub student_id: i64,
    pub name: Option<String>,
    pub admission_date: Option<NaiveDate>,
    pub class_wise_student_id: Option<i64>,
    pub class_id: Option<i64>,
    pub section_id: Option<i64>,
    pub class_name: Option<String>,
    pub section_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiProfile {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub class_wise_data: Vec<ApiClassWise>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiClassWise {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub class: Option<ApiClass>,
    #[serde(default)]
    pub section: Option<ApiSection>,
}

impl From<ApiProfile> for StudentProfile {
    fn from(api: ApiProfile) -> Self {
        let name = api.name.filter(|n| !n.trim().is_empty()).or_else(|| {
            let full = format!(
                "{} {}",
                api.first_name.as_deref().unwrap_or(""),
                api.last_name.as_deref().unwrap_or("")
            );
            let full = full.trim();
            (!full.is_empty()).then(|| full.to_string())
        });

        // Only the current enrolment (first entry) matters.
        let current = api.class_wise_data.into_iter().next();
        let (class, section) = match &current {
            Some(cw) => (cw.class.clone(), cw.section.clone()),
            None => (None, None),
        };

        StudentProfile {
            student_id: api.id,
            name,
            admission_date: api.created_at.as_deref().and_then(parse_day_of_timestamp),
            class_wise_student_id: current.as_ref().and_then(|cw| cw.id),
            class_id: class.as_ref().and_then(|c| c.id),
            section_id: section.as_ref().and_then(|s| s.id),
            class_name: class.and_then(|c| c.class_name),
            section_name: section.and_then(|s| s.section_name),
        }
    }
}
