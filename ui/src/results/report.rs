//! Passport report download: filename derivation and outcome handling.

use api::{ApiClient, ApiError, FormPayload};
use time::{macros::format_description, Date};
use tracing::{error, info};

use crate::core::state::InFlight;
use crate::core::{config, platform, timing};

pub const PASSPORT_MIME: &str = "application/pdf";
const PASSPORT_SUFFIX: &str = "_Heart_Passport_";
const CONNECTION_ALERT: &str = "Connection Error: Could not reach the server to generate PDF.";

/// `"  Jane   Doe  "` → `jane_doe`; blank names become `patient`.
pub fn patient_slug(name: &str) -> String {
    let slug = name
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .to_lowercase();
    if slug.is_empty() {
        "patient".to_string()
    } else {
        slug
    }
}

pub fn passport_filename(name: &str, date: Date) -> String {
    let stamp = date
        .format(&format_description!("[year][month][day]"))
        .unwrap_or_else(|_| "00000000".into());
    format!("{}{PASSPORT_SUFFIX}{stamp}.pdf", patient_slug(name))
}

/// Alert text for a failed download.
pub fn report_alert(err: &ApiError) -> String {
    match err.rejection() {
        Some(message) => format!("Server Error: {message}"),
        None => CONNECTION_ALERT.to_string(),
    }
}

/// Fetches the passport for `form` and hands it to the platform download.
///
/// Returns the alert text on failure.
pub async fn download_passport(client: &ApiClient, form: &FormPayload) -> Result<(), String> {
    let bytes = client.generate_report(form).await.map_err(|err| {
        error!(%err, "passport download failed");
        report_alert(&err)
    })?;

    let name = form.get("patient_name").unwrap_or_default();
    let filename = passport_filename(name, timing::today_utc());
    match platform::save_download(&filename, PASSPORT_MIME, &bytes) {
        Ok(Some(path)) => info!(%path, "passport saved"),
        Ok(None) => info!(%filename, "passport download started"),
        Err(err) => {
            error!(%err, "unable to hand passport to the platform");
            return Err(format!("Unable to save {filename}: {err}"));
        }
    }
    Ok(())
}

/// [`download_passport`] against the configured backend.
pub async fn request_passport(form: &FormPayload) -> Result<(), String> {
    match config::api_client() {
        Ok(client) => download_passport(&client, form).await,
        Err(err) => Err(report_alert(&err)),
    }
}

/// Releases the download guard and returns the alert to show, if any.
pub fn settle_download(flight: &mut InFlight, outcome: Result<(), String>) -> Option<String> {
    flight.finish();
    outcome.err()
}
