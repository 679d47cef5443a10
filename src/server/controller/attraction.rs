use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    model::{
        api::ErrorDto,
        attraction::{
            AttractionDetailDto, AttractionDto, AttractionFilterDto, PopularFilterDto,
            RecommendationFilterDto,
        },
    },
    server::{
        error::Error,
        model::app::AppState,
        service::{attraction::AttractionService, comment::CommentService},
    },
};

pub static ATTRACTION_TAG: &str = "attraction";

/// List attractions with optional city/category filters
#[utoipa::path(
    get,
    path = "/api/attractions",
    tag = ATTRACTION_TAG,
    params(AttractionFilterDto),
    responses(
        (status = 200, description = "Success when listing attractions", body = Vec<AttractionDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_attractions(
    State(state): State<AppState>,
    Query(filter): Query<AttractionFilterDto>,
) -> Result<impl IntoResponse, Error> {
    let service = AttractionService::new(&state.db);

    let attractions = service.list_attractions(filter.into()).await?;

    Ok((StatusCode::OK, axum::Json(attractions)))
}

/// Get the most popular attractions
#[utoipa::path(
    get,
    path = "/api/attractions/popular",
    tag = ATTRACTION_TAG,
    params(PopularFilterDto),
    responses(
        (status = 200, description = "Success when listing popular attractions", body = Vec<AttractionDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_popular_attractions(
    State(state): State<AppState>,
    Query(filter): Query<PopularFilterDto>,
) -> Result<impl IntoResponse, Error> {
    let service = AttractionService::new(&state.db);

    let attractions = service.list_popular(filter.limit).await?;

    Ok((StatusCode::OK, axum::Json(attractions)))
}

/// Get scenario-based attraction recommendations
#[utoipa::path(
    get,
    path = "/api/attractions/recommended",
    tag = ATTRACTION_TAG,
    params(RecommendationFilterDto),
    responses(
        (status = 200, description = "Success when listing recommended attractions", body = Vec<AttractionDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_recommended_attractions(
    State(state): State<AppState>,
    Query(filter): Query<RecommendationFilterDto>,
) -> Result<impl IntoResponse, Error> {
    let service = AttractionService::new(&state.db);

    let attractions = service.list_recommended(filter.into()).await?;

    Ok((StatusCode::OK, axum::Json(attractions)))
}

/// Get one attraction with its city, media, and recent comments
#[utoipa::path(
    get,
    path = "/api/attractions/{id}",
    tag = ATTRACTION_TAG,
    params(("id" = i32, Path, description = "Attraction ID")),
    responses(
        (status = 200, description = "Success when retrieving attraction detail", body = AttractionDetailDto),
        (status = 404, description = "Attraction not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_attraction_detail(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let service = AttractionService::new(&state.db);

    let detail = if let Some(detail) = service.get_attraction_detail(id).await? {
        detail
    } else {
        return Ok((
            StatusCode::NOT_FOUND,
            axum::Json(ErrorDto {
                error: "Attraction not found".to_string(),
            }),
        )
            .into_response());
    };

    Ok((StatusCode::OK, axum::Json(detail)).into_response())
}

/// Record one view of an attraction
#[utoipa::path(
    post,
    path = "/api/attractions/{id}/view",
    tag = ATTRACTION_TAG,
    params(("id" = i32, Path, description = "Attraction ID")),
    responses(
        (status = 204, description = "View recorded"),
        (status = 404, description = "Attraction not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn record_attraction_view(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let service = CommentService::new(&state.db);

    service.increment_popularity(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
