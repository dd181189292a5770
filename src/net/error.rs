//! Error taxonomy for authentication and REST calls.
//!
//! ERROR HANDLING
//! ==============
//! Auth and request failures are returned as values and surfaced by the
//! caller as transient notices; they never crash the render tree.
//! Authorization denial is not an error here; route guards resolve it
//! into a silent redirect.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure of a session operation (sign-in, sign-up, federated flow).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("incorrect email or password")]
    InvalidCredentials,
    #[error("sign-in was cancelled")]
    ProviderCancelled,
    #[error("network failure: {0}")]
    NetworkFailure(String),
}

/// Failure of a REST call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    #[error("network failure: {0}")]
    Network(String),
    /// 401/403 from the secure client; callers tear the session down.
    #[error("not authorized")]
    Unauthorized,
    /// 409 on the upvote endpoint: the voter already voted or owns the product.
    #[error("you have already voted for this product")]
    AlreadyVoted,
    #[error("request failed: {status}{}", .message.as_deref().map(|m| format!(" ({m})")).unwrap_or_default())]
    Status { status: u16, message: Option<String> },
    #[error("response parse failed: {0}")]
    Decode(String),
}

impl RequestError {
    /// Classify a non-2xx response by status code and optional server message.
    pub fn from_status(status: u16, message: Option<String>) -> Self {
        match status {
            401 | 403 => Self::Unauthorized,
            409 => Self::AlreadyVoted,
            _ => Self::Status { status, message },
        }
    }

    /// Short text suitable for a user-facing notice.
    pub fn user_message(&self) -> String {
        match self {
            Self::Network(_) => "Network error. Please try again.".to_owned(),
            Self::Unauthorized => "Your session has expired. Please sign in again.".to_owned(),
            Self::AlreadyVoted => "You have already voted for this product.".to_owned(),
            Self::Status { message: Some(m), .. } => m.clone(),
            Self::Status { status, message: None } => format!("Request failed ({status})."),
            Self::Decode(_) => "Unexpected response from the server.".to_owned(),
        }
    }
}

impl From<RequestError> for AuthError {
    /// Map a sign-in/sign-up transport failure into the auth taxonomy:
    /// a 401 means the credentials were wrong, everything else is a
    /// network-level failure.
    fn from(err: RequestError) -> Self {
        match err {
            RequestError::Unauthorized => Self::InvalidCredentials,
            RequestError::Status { status: 400 | 404, .. } => Self::InvalidCredentials,
            other => Self::NetworkFailure(other.to_string()),
        }
    }
}
