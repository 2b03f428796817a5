use reqwest::{Client, StatusCode};
use tracing::{debug, warn};
use url::Url;

use crate::error::ApiError;
use crate::form::FormPayload;
use crate::types::{ChatReply, ChatRequest, ErrorBody, PredictionResult};

const PREDICT_PATH: &str = "predict";
const REPORT_PATH: &str = "generate_report";
const CHAT_PATH: &str = "chat";

const PREDICTION_FALLBACK: &str = "Prediction failed.";
const REPORT_FALLBACK: &str = "Failed to generate report.";

/// Thin client over the three backend routes. Cheap to clone.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base: Url,
    http: Client,
}

impl ApiClient {
    /// `base` must be absolute, e.g. `http://127.0.0.1:5000`.
    pub fn new(base: &str) -> Result<Self, ApiError> {
        let mut base = Url::parse(base)?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(Self {
            base,
            http: Client::new(),
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        Ok(self.base.join(path)?)
    }

    /// Scores the submitted form.
    ///
    /// The body is read whatever the status code: the backend answers
    /// rejected input with `400 {success:false, error}`.
    pub async fn predict(&self, form: &FormPayload) -> Result<PredictionResult, ApiError> {
        let url = self.endpoint(PREDICT_PATH)?;
        debug!(%url, fields = form.len(), "submitting prediction form");
        let response = self
            .http
            .post(url)
            .multipart(form.to_multipart())
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;
        prediction_from_response(status, &body)
    }

    /// Requests the passport document; returns its raw bytes.
    pub async fn generate_report(&self, form: &FormPayload) -> Result<Vec<u8>, ApiError> {
        let url = self.endpoint(REPORT_PATH)?;
        debug!(%url, "requesting passport report");
        let response = self
            .http
            .post(url)
            .multipart(form.to_multipart())
            .send()
            .await?;
        let status = response.status();
        if status.is_success() {
            let bytes = response.bytes().await?;
            debug!(len = bytes.len(), "passport report received");
            return Ok(bytes.to_vec());
        }
        let body = response.text().await?;
        warn!(%status, "report generation failed");
        Err(report_rejection(&body)?)
    }

    pub async fn chat(&self, message: &str) -> Result<ChatReply, ApiError> {
        let url = self.endpoint(CHAT_PATH)?;
        let request = ChatRequest {
            message: message.to_string(),
        };
        let reply = self
            .http
            .post(url)
            .json(&request)
            .send()
            .await?
            .json::<ChatReply>()
            .await?;
        Ok(reply)
    }
}

/// Decodes a `/predict` answer. The status only feeds the log: rejected input
/// comes back as `400 {success:false, error}` and the message is in the body.
pub(crate) fn prediction_from_response(
    status: StatusCode,
    body: &str,
) -> Result<PredictionResult, ApiError> {
    let result: PredictionResult = serde_json::from_str(body)?;
    if !status.is_success() {
        warn!(%status, "prediction endpoint returned an error status");
    }
    accept_prediction(result)
}

/// Splits a decoded `/predict` body into success or rejection.
pub(crate) fn accept_prediction(result: PredictionResult) -> Result<PredictionResult, ApiError> {
    if result.success {
        Ok(result)
    } else {
        let message = result
            .error
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| PREDICTION_FALLBACK.to_string());
        Err(ApiError::ServerRejected(message))
    }
}

/// Builds the rejection for a non-ok `/generate_report` body. A body that is
/// not JSON at all is a decode (transport) failure.
pub(crate) fn report_rejection(body: &str) -> Result<ApiError, ApiError> {
    let parsed: ErrorBody = serde_json::from_str(body)?;
    let message = parsed
        .error
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| REPORT_FALLBACK.to_string());
    Ok(ApiError::ServerRejected(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn base_without_trailing_slash_still_joins() {
        let client = ApiClient::new("http://127.0.0.1:5000/app").unwrap();
        assert_eq!(
            client.endpoint(PREDICT_PATH).unwrap().as_str(),
            "http://127.0.0.1:5000/app/predict"
        );
        let root = ApiClient::new("http://127.0.0.1:5000").unwrap();
        assert_eq!(
            root.endpoint(CHAT_PATH).unwrap().as_str(),
            "http://127.0.0.1:5000/chat"
        );
    }

    #[test]
    fn relative_base_is_rejected() {
        let err = ApiClient::new("/predict").unwrap_err();
        assert!(matches!(err, ApiError::InvalidBase(_)));
    }

    #[test]
    fn unsuccessful_prediction_carries_server_message() {
        let body: PredictionResult =
            serde_json::from_value(json!({"success": false, "error": "Invalid age"})).unwrap();
        let err = accept_prediction(body).unwrap_err();
        assert_eq!(err.rejection(), Some("Invalid age"));
    }

    #[test]
    fn unsuccessful_prediction_without_message_uses_fallback() {
        let err = accept_prediction(PredictionResult::default()).unwrap_err();
        assert_eq!(err.rejection(), Some(PREDICTION_FALLBACK));
    }

    #[test]
    fn bad_request_body_still_yields_server_message() {
        let body = r#"{"success": false, "error": "Invalid age"}"#;
        let err = prediction_from_response(StatusCode::BAD_REQUEST, body).unwrap_err();
        assert_eq!(err.rejection(), Some("Invalid age"));
    }

    #[test]
    fn server_error_without_success_flag_is_rejected() {
        let body = r#"{"error": "Model not loaded. Please check server logs."}"#;
        let err = prediction_from_response(StatusCode::INTERNAL_SERVER_ERROR, body).unwrap_err();
        assert_eq!(
            err.rejection(),
            Some("Model not loaded. Please check server logs.")
        );
    }

    #[test]
    fn successful_response_decodes_result() {
        let body = r#"{"success": true, "probability": 5, "prediction": 0,
            "heart_age": 40, "chronological_age": 45.0, "reboot_plan": []}"#;
        let result = prediction_from_response(StatusCode::OK, body).unwrap();
        assert_eq!(result.probability(), 5.0);
    }

    #[test]
    fn html_error_page_is_transport() {
        let err = prediction_from_response(StatusCode::BAD_GATEWAY, "<html>502</html>").unwrap_err();
        assert!(err.is_transport());
    }

    #[test]
    fn report_error_body_is_surfaced() {
        let err = report_rejection(r#"{"success": false, "error": "PDF engine down"}"#).unwrap();
        assert_eq!(err.rejection(), Some("PDF engine down"));

        let fallback = report_rejection("{}").unwrap();
        assert_eq!(fallback.rejection(), Some(REPORT_FALLBACK));
    }

    #[test]
    fn non_json_report_error_is_transport() {
        let err = report_rejection("<html>502</html>").unwrap_err();
        assert!(err.is_transport());
    }
}
