use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    model::{
        api::ErrorDto,
        attraction::{CommentDto, CreateCommentDto},
    },
    server::{error::Error, model::app::AppState, service::comment::CommentService},
};

pub static COMMENT_TAG: &str = "comment";

/// Add a comment to an attraction and refresh its mean rating
#[utoipa::path(
    post,
    path = "/api/attractions/{id}/comments",
    tag = COMMENT_TAG,
    params(("id" = i32, Path, description = "Attraction ID")),
    request_body = CreateCommentDto,
    responses(
        (status = 201, description = "Comment created", body = CommentDto),
        (status = 404, description = "Attraction or user not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_comment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    axum::Json(body): axum::Json<CreateCommentDto>,
) -> Result<impl IntoResponse, Error> {
    let service = CommentService::new(&state.db);

    let comment = service
        .add_comment(id, body.user_id, body.content, body.rating)
        .await?;

    Ok((StatusCode::CREATED, axum::Json(comment)))
}
