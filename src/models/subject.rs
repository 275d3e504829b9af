use serde::Deserialize;
use serde_json::Value;

use super::envelope::{null_as_default, value_text};

/// A subject of the school catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subject {
    pub id: i64,
    pub name: String,
    pub code: Option<String>,
    /// Display position; subjects without one sort last.
    pub order_number: i64,
    pub active: bool,
}

/// One subject assigned to a class/section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectAssignment {
    pub assign_id: i64,
    pub class_id: Option<i64>,
    pub section_id: Option<i64>,
    pub subject_id: i64,
}

/// Catalog item as served by `/subjects`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiCatalogSubject {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(default)]
    pub subject_name: Option<String>,
    #[serde(default)]
    pub subject_code: Value,
    #[serde(default)]
    pub order_number: Value,
    #[serde(default)]
    pub status: Option<String>,
}

impl From<ApiCatalogSubject> for Subject {
    fn from(api: ApiCatalogSubject) -> Self {
        Subject {
            id: api.id,
            name: api.subject_name.unwrap_or_default(),
            code: value_text(&api.subject_code),
            order_number: value_text(&api.order_number)
                .and_then(|s| s.parse::<i64>().ok())
                .unwrap_or(i64::MAX),
            active: api.status.as_deref() != Some("inactive"),
        }
    }
}

/// Assignment group as served by `/subject-assigns`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiSubjectAssign {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(default)]
    pub class_id: Option<i64>,
    #[serde(default)]
    pub section_id: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub details: Vec<ApiAssignDetail>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiAssignDetail {
    #[serde(default)]
    pub subject_id: Option<i64>,
    #[serde(default)]
    pub subject: Option<ApiSubjectRef>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiSubjectRef {
    #[serde(default)]
    pub id: Option<i64>,
}

impl ApiSubjectAssign {
    /// One assignment per detail; the nested subject id wins over `subject_id`.
    pub fn into_assignments(self) -> Vec<SubjectAssignment> {
        let (assign_id, class_id, section_id) = (self.id, self.class_id, self.section_id);
        self.details
            .into_iter()
            .filter_map(|d| {
                d.subject
                    .and_then(|s| s.id)
                    .filter(|id| *id != 0)
                    .or(d.subject_id)
            })
            .map(|subject_id| SubjectAssignment {
                assign_id,
                class_id,
                section_id,
                subject_id,
            })
            .collect()
    }
}
