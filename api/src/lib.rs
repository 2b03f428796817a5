//! HTTP client for the CardioCare backend.
//!
//! Three endpoints are consumed:
//! - `POST /predict` (multipart form) → [`PredictionResult`]
//! - `POST /generate_report` (multipart form) → PDF bytes or `{error}`
//! - `POST /chat` (JSON `{message}`) → [`ChatReply`]
//!
//! The backend itself (model scoring, PDF rendering, chat responder) lives
//! elsewhere; this crate only speaks its wire format.

mod client;
mod error;
mod form;
mod types;

pub use client::ApiClient;
pub use error::ApiError;
pub use form::FormPayload;
pub use types::{ChatReply, ChatRequest, DayLabel, ErrorBody, PredictionResult, RebootDay};
