use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Transport-level failures, already translated into user-facing messages.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("Connection timed out, try again")]
    Timeout,

    #[error("Data not found")]
    NotFound,

    #[error("Server error, try again later")]
    Server { status: u16 },

    #[error("{message}")]
    Rejected { status: u16, message: String },

    #[error("Could not reach the server: {0}")]
    Network(String),

    #[error("Unexpected response from the server: {0}")]
    Decode(String),
}

pub const GENERIC_FAILURE: &str = "Something went wrong";

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

impl ApiError {
    /// Translate a non-success response. `body` is the raw response text.
    pub fn from_status(status: StatusCode, body: &str) -> Self {
        if status == StatusCode::NOT_FOUND {
            return ApiError::NotFound;
        }

        if status.is_server_error() {
            return ApiError::Server {
                status: status.as_u16(),
            };
        }

        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.error)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| GENERIC_FAILURE.to_string());

        ApiError::Rejected {
            status: status.as_u16(),
            message,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::NotFound => Some(404),
            ApiError::Server { status } | ApiError::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound)
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            ApiError::Timeout
        } else if error.is_decode() {
            ApiError::Decode(error.to_string())
        } else {
            ApiError::Network(error.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(error: serde_json::Error) -> Self {
        ApiError::Decode(error.to_string())
    }
}
