use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    model::{
        api::ErrorDto,
        favorite::{FavoriteEntryDto, FavoriteStatusDto, ToggleFavoriteDto},
    },
    server::{
        error::Error,
        model::app::AppState,
        service::favorite::{FavoriteService, FavoriteStatus},
    },
};

pub static FAVORITE_TAG: &str = "favorite";

/// Toggle a favorite for a (user, attraction) pair
#[utoipa::path(
    post,
    path = "/api/favorites",
    tag = FAVORITE_TAG,
    request_body = ToggleFavoriteDto,
    responses(
        (status = 200, description = "Toggle applied", body = FavoriteStatusDto),
        (status = 404, description = "Attraction or user not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn toggle_favorite(
    State(state): State<AppState>,
    axum::Json(body): axum::Json<ToggleFavoriteDto>,
) -> Result<impl IntoResponse, Error> {
    let service = FavoriteService::new(&state.db);

    let status = service.toggle(body.user_id, body.attraction_id).await?;

    Ok((
        StatusCode::OK,
        axum::Json(FavoriteStatusDto {
            favorited: matches!(status, FavoriteStatus::Favorited),
        }),
    ))
}

/// List the attractions a user has favorited
#[utoipa::path(
    get,
    path = "/api/users/{user_id}/favorites",
    tag = FAVORITE_TAG,
    params(("user_id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "Success when listing favorites", body = Vec<FavoriteEntryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_user_favorites(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let service = FavoriteService::new(&state.db);

    let favorites = service.list_user_favorites(user_id).await?;

    Ok((StatusCode::OK, axum::Json(favorites)))
}
