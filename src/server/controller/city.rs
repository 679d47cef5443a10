use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::{
    model::{api::ErrorDto, attraction::CityDto},
    server::{data::city::CityRepository, error::Error, model::app::AppState},
};

pub static CITY_TAG: &str = "city";

/// List all cities
#[utoipa::path(
    get,
    path = "/api/cities",
    tag = CITY_TAG,
    responses(
        (status = 200, description = "Success when listing cities", body = Vec<CityDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_cities(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let city_repository = CityRepository::new(&state.db);

    let cities = city_repository.all().await?;

    let city_dtos: Vec<CityDto> = cities.into_iter().map(CityDto::from).collect();

    Ok((StatusCode::OK, axum::Json(city_dtos)))
}
