use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Lookup failures for user-addressed content rows.
///
/// Raised when a mutation targets an attraction or user that does not exist.
/// Read paths surface missing rows as `None` instead.
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Attraction ID {0} not found")]
    AttractionNotFound(i32),
    #[error("User ID {0} not found")]
    UserNotFound(i32),
}

impl IntoResponse for ContentError {
    fn into_response(self) -> Response {
        (
            StatusCode::NOT_FOUND,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
