use thiserror::Error;

#[derive(Debug, Error)]
pub enum NumenoError {
    #[error("Numeno API returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),

    #[error("Failed to parse response: {0}")]
    ParseError(String),

    #[error("Missing configuration: {0}")]
    ConfigError(String),

    #[error("Failed to deliver message to Slack: {0}")]
    DeliveryError(String),
}

impl NumenoError {
    /// HTTP status of an API-level rejection, if this error is one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            NumenoError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for NumenoError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            NumenoError::ParseError(error.to_string())
        } else {
            NumenoError::HttpError(error.to_string())
        }
    }
}

impl From<serde_json::Error> for NumenoError {
    fn from(error: serde_json::Error) -> Self {
        NumenoError::ParseError(error.to_string())
    }
}
