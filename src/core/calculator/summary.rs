use serde::Serialize;

use crate::models::attendance::{AttendanceRecord, AttendanceStatus};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AttendanceSummary {
    pub total: usize,
    pub present: usize,
    pub absent: usize,
    pub late: usize,
    pub leave: usize,
    pub percentage: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rating {
    Good,
    Low,
}

impl Rating {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rating::Good => "Good",
            Rating::Low => "Low",
        }
    }
}

impl AttendanceSummary {
    /// Records that landed in one of the four buckets.
    /// Lower than `total` when unknown statuses are present.
    pub fn bucketed(&self) -> usize {
        self.present + self.absent + self.late + self.leave
    }

    pub fn rating(&self, threshold: u32) -> Rating {
        if self.percentage >= threshold {
            Rating::Good
        } else {
            Rating::Low
        }
    }
}

/// Count records per status and compute the present percentage.
/// Unknown statuses count toward `total` only.
pub fn summarize(records: &[AttendanceRecord]) -> AttendanceSummary {
    let mut s = AttendanceSummary {
        total: records.len(),
        ..Default::default()
    };

    for r in records {
        match r.status {
            AttendanceStatus::Present => s.present += 1,
            AttendanceStatus::Absent => s.absent += 1,
            AttendanceStatus::Late => s.late += 1,
            AttendanceStatus::Leave => s.leave += 1,
            AttendanceStatus::Unknown(_) => {}
        }
    }

    s.percentage = percentage(s.present, s.total);
    s
}

/// round(part / total * 100), half-up, 0 for an empty total.
fn percentage(part: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((part * 200 + total) / (2 * total)) as u32
}
