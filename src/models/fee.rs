use serde::Deserialize;
use serde_json::Value;

/// Fee totals of the current enrolment, in taka.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FeeSummary {
    pub total_amount: f64,
    pub total_paid: f64,
    pub total_due: f64,
}

/// Payload of `/payments/student-fee-summary/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiFeeSummary {
    #[serde(default)]
    pub total_amount: Value,
    #[serde(default)]
    pub total_paid: Value,
    #[serde(default)]
    pub total_due: Value,
}

/// Amounts arrive as numbers or decimal strings ("1500.00").
fn amount(v: &Value) -> f64 {
    match v {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

impl From<ApiFeeSummary> for FeeSummary {
    fn from(api: ApiFeeSummary) -> Self {
        FeeSummary {
            total_amount: amount(&api.total_amount),
            total_paid: amount(&api.total_paid),
            total_due: amount(&api.total_due),
        }
    }
}
