use serde::Serialize;

/// One calendar day of the attendance export.
#[derive(Debug, Clone, Serialize)]
pub struct AttendanceDayExport {
    pub date: String,
    pub weekday: String,
    pub status: String,
    pub in_time: String,
    pub out_time: String,
}

/// One scheduled period of the routine export.
#[derive(Debug, Clone, Serialize)]
pub struct RoutineSlotExport {
    pub day: String,
    pub period: u32,
    pub time: String,
    pub subject: String,
    pub teacher: String,
}
