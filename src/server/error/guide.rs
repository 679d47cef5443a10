use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// User-readable failure taxonomy for the guide narration client.
///
/// HTTP failures from the chat-completion endpoint are classified by status
/// code; transport failures are classified separately into timeout and
/// connectivity. These are the only errors the guide UI distinguishes.
#[derive(Error, Debug)]
pub enum GuideError {
    #[error("Guide API key is invalid or has expired")]
    InvalidApiKey,
    #[error("Guide service is rate limited, try again shortly")]
    RateLimited,
    #[error("Guide service is temporarily unavailable")]
    Unavailable,
    #[error("Guide service returned a server error")]
    ServerError,
    #[error("Guide request failed: {0}")]
    Api(String),
    #[error("Guide request timed out")]
    Timeout,
    #[error("Failed to reach the guide service")]
    Connectivity,
    #[error("Guide service returned no narration content")]
    NoContent,
}

impl GuideError {
    /// Classifies a non-2xx chat-completion response.
    ///
    /// `message` is the optional `error.message` field carried by the
    /// response body, used only for the generic category.
    pub fn from_status(status: reqwest::StatusCode, message: Option<String>) -> Self {
        match status.as_u16() {
            401 | 403 => Self::InvalidApiKey,
            429 => Self::RateLimited,
            503 => Self::Unavailable,
            500..=599 => Self::ServerError,
            code => Self::Api(
                message.unwrap_or_else(|| format!("unexpected status code {}", code)),
            ),
        }
    }

    /// Classifies a transport-level failure from the HTTP client.
    pub fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_decode() {
            Self::Api(err.to_string())
        } else {
            Self::Connectivity
        }
    }
}

impl IntoResponse for GuideError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            Self::Timeout => StatusCode::GATEWAY_TIMEOUT,
            Self::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::BAD_GATEWAY,
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
