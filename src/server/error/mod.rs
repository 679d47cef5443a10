//! Error types for the Wayfarer server application.
//!
//! This module provides specialized error types for the different domains of the
//! application (configuration, content lookups, guide narration). All errors implement
//! `IntoResponse` for Axum HTTP responses and use `thiserror` for ergonomic error
//! definitions. Database errors are deliberately not translated: a `DbErr` bubbles up
//! unmodified and surfaces as a generic 500.

pub mod config;
pub mod content;
pub mod guide;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, content::ContentError, guide::GuideError},
};

/// Main error type for the Wayfarer server application.
///
/// Aggregates all domain-specific error types and external library errors into a single
/// unified error type, with `#[from]` conversions so the `?` operator works across
/// layers. The `IntoResponse` implementation maps errors to HTTP responses.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Content lookup error (attraction or user not found).
    #[error(transparent)]
    ContentError(#[from] ContentError),
    /// Guide narration error (chat-completion API or transport failure).
    #[error(transparent)]
    GuideError(#[from] GuideError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Internal error indicating a bug in Wayfarer's code.
    #[error("Internal error with Wayfarer's code, please open a GitHub issue as this indicates a bug: {0:?}")]
    InternalError(String),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::ContentError(err) => err.into_response(),
            Self::GuideError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error
/// response.
///
/// Logs the full error message for debugging, but returns a generic error message to
/// the client to avoid exposing internal implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
