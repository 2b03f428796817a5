//! Wire types exchanged with the backend.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Scored assessment returned by `POST /predict`.
///
/// Every field is defaulted: error responses only carry `error` (and
/// sometimes not even `success`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    #[serde(default)]
    pub success: bool,
    /// Risk in percent (0–100). The backend may send `null`.
    #[serde(default)]
    pub probability: Option<f64>,
    #[serde(default)]
    pub prediction: u8,
    #[serde(default)]
    pub heart_age: f64,
    #[serde(default)]
    pub chronological_age: f64,
    #[serde(default)]
    pub reboot_plan: Vec<RebootDay>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PredictionResult {
    /// Probability with `null` read as zero.
    pub fn probability(&self) -> f64 {
        self.probability.filter(|p| p.is_finite()).unwrap_or(0.0)
    }

    pub fn is_high_risk(&self) -> bool {
        self.prediction == 1
    }
}

/// One day of the reboot plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RebootDay {
    pub day: DayLabel,
    #[serde(default)]
    pub activity: String,
    #[serde(default)]
    pub diet: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vital: Option<String>,
}

/// Days arrive either numbered (`1`) or named (`"Monday"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DayLabel {
    Number(i64),
    Text(String),
}

impl fmt::Display for DayLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayLabel::Number(n) => write!(f, "{n}"),
            DayLabel::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub response: String,
}

/// Error body of a failed `/generate_report` (and of `/predict` when the
/// model is unavailable).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_numbered_plan() {
        let raw = json!({
            "success": true,
            "probability": 5,
            "prediction": 0,
            "heart_age": 40,
            "chronological_age": 45,
            "reboot_plan": [{"day": 1, "activity": "Walk", "diet": "Low salt"}]
        });
        let result: PredictionResult = serde_json::from_value(raw).unwrap();
        assert!(result.success);
        assert_eq!(result.probability(), 5.0);
        assert!(!result.is_high_risk());
        assert_eq!(result.reboot_plan.len(), 1);
        assert_eq!(result.reboot_plan[0].day, DayLabel::Number(1));
        assert_eq!(result.reboot_plan[0].day.to_string(), "1");
        assert!(result.reboot_plan[0].vital.is_none());
    }

    #[test]
    fn decodes_named_days_with_vitals() {
        let raw = json!({
            "success": true,
            "probability": 71.25,
            "prediction": 1,
            "heart_age": 58,
            "chronological_age": 51.0,
            "reboot_plan": [{
                "day": "Monday",
                "vital": "Measure BP (Resting)",
                "activity": "15-min light walk",
                "diet": "Cut salt intake by 50%"
            }]
        });
        let result: PredictionResult = serde_json::from_value(raw).unwrap();
        assert!(result.is_high_risk());
        let day = &result.reboot_plan[0];
        assert_eq!(day.day.to_string(), "Monday");
        assert_eq!(day.vital.as_deref(), Some("Measure BP (Resting)"));
    }

    #[test]
    fn bare_error_body_decodes_as_unsuccessful() {
        let raw = json!({"error": "Model not loaded. Please check server logs."});
        let result: PredictionResult = serde_json::from_value(raw).unwrap();
        assert!(!result.success);
        assert_eq!(
            result.error.as_deref(),
            Some("Model not loaded. Please check server logs.")
        );
        assert!(result.reboot_plan.is_empty());
    }

    #[test]
    fn null_probability_reads_as_zero() {
        let raw = json!({"success": true, "probability": null});
        let result: PredictionResult = serde_json::from_value(raw).unwrap();
        assert_eq!(result.probability(), 0.0);
    }
}
