use chrono::Weekday;
use serde::Deserialize;
use serde_json::Value;

use crate::models::envelope::null_as_default;
use crate::utils::date::{WEEKDAY_NAMES, weekday_from_name};

/// Weekdays without classes for a class/section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OffDays {
    days: Vec<Weekday>,
}

impl OffDays {
    /// Parse the comma-separated `off_day` field ("Friday, Saturday").
    /// Unrecognised names are dropped, duplicates collapse.
    pub fn parse(raw: &str) -> Self {
        let mut days = Vec::new();
        for name in raw.split(',') {
            if let Some(wd) = weekday_from_name(name)
                && !days.contains(&wd)
            {
                days.push(wd);
            }
        }
        Self { days }
    }

    pub fn from_days(days: &[Weekday]) -> Self {
        let mut out = Self::default();
        for wd in days {
            if !out.days.contains(wd) {
                out.days.push(*wd);
            }
        }
        out
    }

    pub fn contains(&self, wd: Weekday) -> bool {
        self.days.contains(&wd)
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Canonical comma-separated form, in Sunday..Saturday order.
    pub fn to_api_string(&self) -> String {
        WEEKDAY_NAMES
            .iter()
            .filter(|(_, wd)| self.contains(*wd))
            .map(|(n, _)| *n)
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// One period slot of the weekly routine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutineDetail {
    pub day: Option<Weekday>,
    pub period_number: Option<u32>,
    pub subject: Option<String>,
    pub teacher: Option<String>,
    pub time: Option<String>,
}

impl RoutineDetail {
    pub fn new(day_name: &str, period: u32) -> Self {
        Self {
            day: weekday_from_name(day_name),
            period_number: Some(period),
            subject: None,
            teacher: None,
            time: None,
        }
    }

    pub fn subject(mut self, subject: &str) -> Self {
        self.subject = Some(subject.to_string());
        self
    }

    pub fn teacher(mut self, teacher: &str) -> Self {
        self.teacher = Some(teacher.to_string());
        self
    }

    pub fn time(mut self, time: &str) -> Self {
        self.time = Some(time.to_string());
        self
    }
}

/// Weekly class schedule of one class/section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Routine {
    pub id: i64,
    pub class_id: Option<i64>,
    pub section_id: Option<i64>,
    pub class_name: Option<String>,
    pub section_name: Option<String>,
    pub number_of_periods: u32,
    pub off_days: OffDays,
    pub details: Vec<RoutineDetail>,
}

impl Routine {
    pub fn label(&self) -> String {
        match (&self.class_name, &self.section_name) {
            (Some(c), Some(s)) => format!("{c} - {s}"),
            (Some(c), None) => c.clone(),
            _ => format!("Routine #{}", self.id),
        }
    }
}

// ---------------------------
// API payload shapes
// ---------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct ApiRoutine {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(default)]
    pub class_id: Option<i64>,
    #[serde(default)]
    pub section_id: Option<i64>,
    #[serde(default)]
    pub number_of_periods: Value,
    #[serde(default)]
    pub off_day: Option<String>,
    #[serde(default)]
    pub class: Option<ApiClass>,
    #[serde(default)]
    pub section: Option<ApiSection>,
    #[serde(default)]
    pub details: Option<Vec<ApiRoutineDetail>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiClass {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub class_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiSection {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub section_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiRoutineDetail {
    #[serde(default, deserialize_with = "null_as_default")]
    pub day_name: String,
    #[serde(default)]
    pub period_number: Value,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub subject: Option<ApiSubject>,
    #[serde(default)]
    pub teacher: Option<ApiTeacher>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiSubject {
    #[serde(default)]
    pub subject_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiTeacher {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

impl ApiTeacher {
    /// "First Last", last name optional.
    pub fn display_name(&self) -> Option<String> {
        let full = format!(
            "{} {}",
            self.first_name.as_deref().unwrap_or(""),
            self.last_name.as_deref().unwrap_or("")
        );
        let full = full.trim();
        if full.is_empty() {
            None
        } else {
            Some(full.to_string())
        }
    }
}

/// Period numbers arrive both as JSON numbers and numeric strings.
pub fn period_from_value(v: &Value) -> Option<u32> {
    match v {
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(s) => s.trim().parse::<u32>().ok(),
        _ => None,
    }
}

fn non_empty(s: Option<String>) -> Option<String> {
    s.filter(|v| !v.trim().is_empty())
}

impl From<ApiRoutineDetail> for RoutineDetail {
    fn from(api: ApiRoutineDetail) -> Self {
        RoutineDetail {
            day: weekday_from_name(&api.day_name),
            period_number: period_from_value(&api.period_number),
            subject: non_empty(api.subject.and_then(|s| s.subject_name)),
            teacher: api.teacher.and_then(|t| t.display_name()),
            time: non_empty(api.time),
        }
    }
}

impl From<ApiRoutine> for Routine {
    fn from(api: ApiRoutine) -> Self {
        Routine {
            id: api.id,
            class_id: api.class_id.or_else(|| api.class.as_ref().and_then(|c| c.id)),
            section_id: api
                .section_id
                .or_else(|| api.section.as_ref().and_then(|s| s.id)),
            class_name: api.class.and_then(|c| c.class_name),
            section_name: api.section.and_then(|s| s.section_name),
            number_of_periods: period_from_value(&api.number_of_periods).unwrap_or(0),
            off_days: OffDays::parse(api.off_day.as_deref().unwrap_or("")),
            details: api
                .details
                .unwrap_or_default()
                .into_iter()
                .map(RoutineDetail::from)
                .collect(),
        }
    }
}
