//! Typed view of a prediction result, ready for rendering.

use api::PredictionResult;

use crate::core::format::format_number;
use crate::core::state::Theme;

/// Colour token of the heart-age card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeTone {
    Red,
    Green,
    Blue,
}

impl AgeTone {
    pub fn css_class(self) -> &'static str {
        match self {
            AgeTone::Red => "red",
            AgeTone::Green => "green",
            AgeTone::Blue => "blue",
        }
    }
}

/// Difference between functional heart age and chronological age.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgeGap(pub f64);

impl AgeGap {
    pub fn between(heart_age: f64, chronological_age: f64) -> Self {
        Self(heart_age - chronological_age)
    }

    pub fn tone(self) -> AgeTone {
        if self.0 > 0.0 {
            AgeTone::Red
        } else if self.0 < 0.0 {
            AgeTone::Green
        } else {
            AgeTone::Blue
        }
    }

    /// `+N` when older, `N` (already signed) when younger, `Opt` when equal.
    pub fn label(self) -> String {
        if self.0 > 0.0 {
            format!("+{}", format_number(self.0))
        } else if self.0 < 0.0 {
            format_number(self.0)
        } else {
            "Opt".to_string()
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlanRow {
    pub day: String,
    pub vital: Option<String>,
    pub activity: String,
    pub diet: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    pub prediction: u8,
    pub probability: f64,
    pub theme: Theme,
    pub heart_age: f64,
    pub chronological_age: f64,
    pub gap: AgeGap,
    pub rows: Vec<PlanRow>,
}

impl ResultView {
    pub fn from_result(result: &PredictionResult) -> Self {
        let rows = result
            .reboot_plan
            .iter()
            .map(|day| PlanRow {
                day: day.day.to_string(),
                vital: day.vital.clone().filter(|v| !v.trim().is_empty()),
                activity: day.activity.clone(),
                diet: day.diet.clone(),
            })
            .collect();

        Self {
            prediction: result.prediction,
            probability: result.probability(),
            theme: Theme::from_prediction(result.prediction),
            heart_age: result.heart_age,
            chronological_age: result.chronological_age,
            gap: AgeGap::between(result.heart_age, result.chronological_age),
            rows,
        }
    }

    pub fn is_high_risk(&self) -> bool {
        self.theme == Theme::High
    }

    /// SVG `stroke-dasharray` for the risk arc (circumference normalised to 100).
    pub fn arc_dasharray(&self) -> String {
        format!("{}, 100", format_number(self.probability.clamp(0.0, 100.0)))
    }

    pub fn heart_age_display(&self) -> String {
        format_number(self.heart_age)
    }

    pub fn status_tone(&self) -> &'static str {
        if self.is_high_risk() {
            "red"
        } else {
            "green"
        }
    }
}
