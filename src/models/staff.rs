use serde::Deserialize;
use serde_json::Value;

use super::envelope::{null_as_default, value_text};

/// A member of the school staff. Only teachers show in the directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaffMember {
    pub id: i64,
    pub first_name: String,
    pub last_name: Option<String>,
    pub designation_id: Option<i64>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub qualification: Option<String>,
    pub joining_date: Option<String>,
    pub is_teacher: bool,
}

impl StaffMember {
    pub fn full_name(&self) -> String {
        format!(
            "{} {}",
            self.first_name,
            self.last_name.as_deref().unwrap_or("")
        )
        .trim()
        .to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Designation {
    pub id: i64,
    pub name: String,
}

/// Staff item as served by `/staffs`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiStaff {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub designation: Value,
    #[serde(default)]
    pub phone: Value,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub qualification: Option<String>,
    #[serde(default)]
    pub joining_date: Option<String>,
    #[serde(default)]
    pub is_teachers: Value,
}

impl From<ApiStaff> for StaffMember {
    fn from(api: ApiStaff) -> Self {
        StaffMember {
            id: api.id,
            first_name: api.first_name.unwrap_or_default(),
            last_name: api.last_name.filter(|s| !s.trim().is_empty()),
            designation_id: value_text(&api.designation).and_then(|s| s.parse().ok()),
            phone: value_text(&api.phone),
            email: api.email.filter(|s| !s.trim().is_empty()),
            qualification: api.qualification.filter(|s| !s.trim().is_empty()),
            joining_date: api.joining_date.filter(|s| !s.trim().is_empty()),
            // strictly the number 1
            is_teacher: api.is_teachers.as_i64() == Some(1),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiDesignation {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

impl From<ApiDesignation> for Designation {
    fn from(api: ApiDesignation) -> Self {
        Designation {
            id: api.id,
            name: api.name,
        }
    }
}
