//! Fee totals and the outstanding-dues reminder.

use crate::models::fee::FeeSummary;

pub const DUE_REMINDER: &str = "Please clear your dues";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeeStatus {
    pub total_amount: f64,
    pub total_paid: f64,
    pub total_due: f64,
}

impl FeeStatus {
    pub fn has_due(&self) -> bool {
        self.total_due > 0.0
    }

    /// Reminder shown only while something is due.
    pub fn reminder(&self) -> Option<&'static str> {
        self.has_due().then_some(DUE_REMINDER)
    }
}

/// Fee status of a stored summary; without one everything is zero.
pub fn fee_status(summary: Option<&FeeSummary>) -> FeeStatus {
    let s = summary.copied().unwrap_or_default();
    FeeStatus {
        total_amount: s.total_amount,
        total_paid: s.total_paid,
        total_due: s.total_due,
    }
}

/// 12500 → "৳12,500", 1234.5 → "৳1,234.50"
pub fn format_amount(value: f64) -> String {
    let negative = value < 0.0;
    let cents = (value.abs() * 100.0).round() as u64;
    let (whole, frac) = (cents / 100, cents % 100);

    let digits = whole.to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if negative { "-" } else { "" };
    if frac == 0 {
        format!("{sign}৳{grouped}")
    } else {
        format!("{sign}৳{grouped}.{frac:02}")
    }
}
