use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::{
    model::{
        api::ErrorDto,
        guide::{GuideDto, GuideRequestDto},
    },
    server::{
        data::attraction::AttractionRepository,
        error::{content::ContentError, Error},
        model::app::AppState,
        service::guide::GuideService,
    },
};

pub static GUIDE_TAG: &str = "guide";

/// Generate an AI guide narration for an attraction
#[utoipa::path(
    post,
    path = "/api/guide",
    tag = GUIDE_TAG,
    request_body = GuideRequestDto,
    responses(
        (status = 200, description = "Narration generated", body = GuideDto),
        (status = 404, description = "Attraction not found", body = ErrorDto),
        (status = 502, description = "Guide provider failure", body = ErrorDto),
        (status = 504, description = "Guide provider timed out", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn generate_narration(
    State(state): State<AppState>,
    axum::Json(body): axum::Json<GuideRequestDto>,
) -> Result<impl IntoResponse, Error> {
    let repository = AttractionRepository::new(&state.db);

    let attraction = repository
        .get_by_id(body.attraction_id)
        .await?
        .ok_or(ContentError::AttractionNotFound(body.attraction_id))?;

    let service = GuideService::new(&state.guide_client);

    let narration = service.narrate(&attraction.name, body.language).await?;

    Ok((StatusCode::OK, axum::Json(GuideDto { narration })))
}
