//! Prediction submission: request plus outcome resolution.

use api::{ApiError, FormPayload, PredictionResult};
use tracing::{debug, error, info};

use crate::core::config;
use crate::core::state::{InFlight, ModalState};
use crate::results::ResultView;

const TRANSPORT_ALERT: &str = "An error occurred while processing your request.";

/// What the assessment view does once the prediction request settles.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    /// Render the result and open the modal.
    Present(ResultView),
    /// Show a blocking alert; the modal stays closed.
    Alert(String),
}

pub fn resolve_prediction(result: Result<PredictionResult, ApiError>) -> SubmissionOutcome {
    match result {
        Ok(prediction) => {
            debug!(
                probability = prediction.probability(),
                prediction = prediction.prediction,
                "prediction received"
            );
            SubmissionOutcome::Present(ResultView::from_result(&prediction))
        }
        Err(ApiError::ServerRejected(message)) => {
            info!(%message, "prediction rejected by server");
            SubmissionOutcome::Alert(format!("Error: {message}"))
        }
        Err(err) => {
            error!(%err, "prediction request failed");
            SubmissionOutcome::Alert(TRANSPORT_ALERT.to_string())
        }
    }
}

pub async fn submit_prediction(payload: &FormPayload) -> SubmissionOutcome {
    let result = match config::api_client() {
        Ok(client) => client.predict(payload).await,
        Err(err) => Err(err),
    };
    resolve_prediction(result)
}

/// Applies a settled submission to the view state and releases the submit
/// guard. Returns the alert to show, if any.
pub fn settle_submission(
    outcome: SubmissionOutcome,
    modal: &mut ModalState,
    result: &mut Option<ResultView>,
    flight: &mut InFlight,
) -> Option<String> {
    flight.finish();
    match outcome {
        SubmissionOutcome::Present(view) => {
            *modal = modal.present(view.prediction);
            *result = Some(view);
            None
        }
        SubmissionOutcome::Alert(message) => Some(message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::{Tab, Theme};
    use serde_json::json;

    #[test]
    fn success_presents_result() {
        let result: PredictionResult = serde_json::from_value(json!({
            "success": true,
            "probability": 5,
            "prediction": 0,
            "heart_age": 40,
            "chronological_age": 45,
            "reboot_plan": [{"day": 1, "activity": "Walk", "diet": "Low salt"}]
        }))
        .unwrap();

        match resolve_prediction(Ok(result)) {
            SubmissionOutcome::Present(view) => {
                assert_eq!(view.theme, Theme::Low);
                assert_eq!(view.gap.label(), "-5");
                assert_eq!(view.rows.len(), 1);
                assert_eq!(view.rows[0].day, "1");
            }
            other => panic!("expected presentation, got {other:?}"),
        }
    }

    #[test]
    fn rejection_alerts_with_server_message() {
        let outcome = resolve_prediction(Err(ApiError::ServerRejected("Invalid age".into())));
        match outcome {
            SubmissionOutcome::Alert(text) => assert!(text.contains("Invalid age")),
            other => panic!("expected alert, got {other:?}"),
        }
    }

    #[test]
    fn transport_failure_alerts_generically() {
        let err: ApiError = serde_json::from_str::<serde_json::Value>("<html>")
            .unwrap_err()
            .into();
        assert_eq!(
            resolve_prediction(Err(err)),
            SubmissionOutcome::Alert(TRANSPORT_ALERT.to_string())
        );
    }

    #[test]
    fn alert_releases_guard_and_keeps_modal_closed() {
        let mut modal = ModalState::default();
        let mut result = None;
        let mut flight = InFlight::default();
        assert!(flight.try_begin());

        let alert = settle_submission(
            SubmissionOutcome::Alert("Error: Invalid age".into()),
            &mut modal,
            &mut result,
            &mut flight,
        );

        assert_eq!(alert.as_deref(), Some("Error: Invalid age"));
        assert!(!flight.is_busy());
        assert!(!modal.open);
        assert!(result.is_none());
        assert!(flight.try_begin(), "submit must be usable again");
    }

    #[test]
    fn presentation_releases_guard_and_opens_modal() {
        let high: PredictionResult = serde_json::from_value(json!({
            "success": true,
            "probability": 71.2,
            "prediction": 1,
            "heart_age": 58,
            "chronological_age": 51.0
        }))
        .unwrap();
        let view = ResultView::from_result(&high);

        let mut modal = ModalState::default().present(0).select_tab(Tab::Reboot);
        let before = modal.epoch;
        let mut result = None;
        let mut flight = InFlight::default();
        assert!(flight.try_begin());

        let alert = settle_submission(
            SubmissionOutcome::Present(view.clone()),
            &mut modal,
            &mut result,
            &mut flight,
        );

        assert!(alert.is_none());
        assert!(!flight.is_busy());
        assert!(modal.open);
        assert_eq!(modal.theme, Theme::High);
        assert_eq!(modal.active_tab, Tab::Summary);
        assert_eq!(modal.epoch, before + 1);
        assert_eq!(result, Some(view));
    }
}
