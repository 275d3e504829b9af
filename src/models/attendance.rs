use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::models::envelope::null_as_default;
use crate::utils::date::parse_date;
use crate::utils::time::parse_time;

/// Attendance status as recorded by the school.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum AttendanceStatus {
    Present,
    Absent,
    Late,
    Leave,
    /// Any literal outside the server vocabulary, kept verbatim.
    Unknown(String),
}

impl AttendanceStatus {
    /// Convert API string → enum (case-sensitive, exact)
    pub fn from_api_str(s: &str) -> Self {
        match s {
            "Present" => Self::Present,
            "Absent" => Self::Absent,
            "Late" => Self::Late,
            "Leave" => Self::Leave,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// Convert enum → API/DB string
    pub fn as_str(&self) -> &str {
        match self {
            Self::Present => "Present",
            Self::Absent => "Absent",
            Self::Late => "Late",
            Self::Leave => "Leave",
            Self::Unknown(raw) => raw,
        }
    }
}

/// The calendar day of a record. Malformed strings never match a day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordDate {
    Day(NaiveDate),
    Unparseable(String),
}

impl RecordDate {
    pub fn parse(s: &str) -> Self {
        match parse_date(s) {
            Some(d) => Self::Day(d),
            None => Self::Unparseable(s.to_string()),
        }
    }

    pub fn day(&self) -> Option<NaiveDate> {
        match self {
            Self::Day(d) => Some(*d),
            Self::Unparseable(_) => None,
        }
    }

    pub fn as_db_string(&self) -> String {
        match self {
            Self::Day(d) => d.format("%Y-%m-%d").to_string(),
            Self::Unparseable(raw) => raw.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceRecord {
    pub date: RecordDate,
    pub status: AttendanceStatus,
    pub in_time: Option<NaiveTime>,
    pub out_time: Option<NaiveTime>,
}

impl AttendanceRecord {
    pub fn new(date: &str, status: &str) -> Self {
        Self {
            date: RecordDate::parse(date),
            status: AttendanceStatus::from_api_str(status),
            in_time: None,
            out_time: None,
        }
    }

    pub fn with_times(mut self, in_time: Option<&str>, out_time: Option<&str>) -> Self {
        self.in_time = in_time.and_then(parse_time);
        self.out_time = out_time.and_then(parse_time);
        self
    }

    pub fn is_on(&self, day: NaiveDate) -> bool {
        self.date.day() == Some(day)
    }
}

/// Attendance item as served by `/student-attendance`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiAttendance {
    #[serde(default, deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(default)]
    pub in_time: Option<String>,
    #[serde(default)]
    pub out_time: Option<String>,
}

impl From<ApiAttendance> for AttendanceRecord {
    fn from(api: ApiAttendance) -> Self {
        AttendanceRecord::new(&api.date, &api.status)
            .with_times(api.in_time.as_deref(), api.out_time.as_deref())
    }
}
