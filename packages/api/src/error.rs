use thiserror::Error;

/// Failure of a forum operation, as seen by a view.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (network down, CORS, DNS).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("{url} returned status {status}")]
    Status { status: u16, url: String },

    /// The response body did not match the endpoint's contract.
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// A required form field was empty. Raised before any request is sent.
    #[error("{0}")]
    Validation(String),
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Message suitable for the page's error slot.
    ///
    /// Validation errors carry their own wording; everything else is
    /// reported as `"<fallback>."` and the details go to the log.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Validation(message) => message.clone(),
            _ => format!("{fallback}."),
        }
    }
}
