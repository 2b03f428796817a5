use thiserror::Error;

/// Failures surfaced by backend calls.
///
/// `ServerRejected` is an application-level refusal carrying the server's own
/// message. Everything else is a transport failure from the caller's point of
/// view: the request never produced a usable answer.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    ServerRejected(String),
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("invalid API base URL: {0}")]
    InvalidBase(#[from] url::ParseError),
}

impl ApiError {
    pub fn is_transport(&self) -> bool {
        !matches!(self, ApiError::ServerRejected(_))
    }

    /// The server's message for rejections, `None` for transport failures.
    pub fn rejection(&self) -> Option<&str> {
        match self {
            ApiError::ServerRejected(message) => Some(message.as_str()),
            _ => None,
        }
    }
}
