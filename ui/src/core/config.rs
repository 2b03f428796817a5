//! Runtime configuration: where the backend lives.
//!
//! Platforms call [`install`] once at startup (usually with
//! [`AppConfig::from_environment`]); components read it through [`get`].

use api::{ApiClient, ApiError};
use once_cell::sync::OnceCell;
use tracing::info;

use super::platform;

pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:5000";

const API_BASE_VAR: &str = "CARDIOCARE_API_BASE";
const DOCTORS_URL_VAR: &str = "CARDIOCARE_DOCTORS_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Absolute base URL the `/predict`, `/generate_report` and `/chat`
    /// routes are resolved against.
    pub api_base: String,
    /// Target of the "find a doctor" action.
    pub doctors_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::with_base(DEFAULT_API_BASE)
    }
}

impl AppConfig {
    pub fn with_base(api_base: &str) -> Self {
        let api_base = api_base.trim_end_matches('/').to_string();
        let doctors_url = format!("{api_base}/doctors");
        Self {
            api_base,
            doctors_url,
        }
    }

    /// Resolution order for the API base: runtime env var (desktop only),
    /// compile-time env var, the hosting page's origin (web only), then
    /// [`DEFAULT_API_BASE`].
    pub fn from_environment() -> Self {
        let runtime = runtime_var(API_BASE_VAR);
        let compiled = option_env!("CARDIOCARE_API_BASE").map(str::to_string);
        let base = runtime
            .or(compiled)
            .or_else(platform::page_origin)
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        let mut config = Self::with_base(&base);
        if let Some(doctors) = runtime_var(DOCTORS_URL_VAR)
            .or_else(|| option_env!("CARDIOCARE_DOCTORS_URL").map(str::to_string))
        {
            config.doctors_url = doctors;
        }
        config
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(target_arch = "wasm32")]
fn runtime_var(_name: &str) -> Option<String> {
    None
}

static CONFIG: OnceCell<AppConfig> = OnceCell::new();

/// Installs the process-wide configuration. Later calls are ignored.
pub fn install(config: AppConfig) {
    info!(api_base = %config.api_base, "configuration installed");
    let _ = CONFIG.set(config);
}

/// The installed configuration, or defaults when nothing was installed.
pub fn get() -> AppConfig {
    CONFIG.get().cloned().unwrap_or_default()
}

/// Backend client for the installed configuration.
pub fn api_client() -> Result<ApiClient, ApiError> {
    ApiClient::new(&get().api_base)
}
