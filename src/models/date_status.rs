use serde::Serialize;

/// Classification of one calendar day in the attendance view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DateStatus {
    Present,
    Absent,
    Late,
    Leave,
    Off,
    Future,
    /// Before the student's admission date.
    Inapplicable,
}

impl DateStatus {
    pub const ALL: [DateStatus; 7] = [
        DateStatus::Present,
        DateStatus::Absent,
        DateStatus::Late,
        DateStatus::Leave,
        DateStatus::Off,
        DateStatus::Future,
        DateStatus::Inapplicable,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DateStatus::Present => "present",
            DateStatus::Absent => "absent",
            DateStatus::Late => "late",
            DateStatus::Leave => "leave",
            DateStatus::Off => "off",
            DateStatus::Future => "future",
            DateStatus::Inapplicable => "inapplicable",
        }
    }

    /// One-letter calendar marker.
    pub fn marker(&self) -> &'static str {
        match self {
            DateStatus::Present => "P",
            DateStatus::Absent => "A",
            DateStatus::Late => "L",
            DateStatus::Leave => "V",
            DateStatus::Off => "O",
            DateStatus::Future => "·",
            DateStatus::Inapplicable => " ",
        }
    }
}
