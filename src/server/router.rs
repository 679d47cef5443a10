//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// Each endpoint is annotated with OpenAPI specifications via utoipa, which are collected
/// into a unified OpenAPI document. The router includes Swagger UI at `/api/docs` for
/// interactive API exploration, with the raw specification at `/api/docs/openapi.json`.
///
/// # Registered Endpoints
/// - `GET /api/cities` - List all cities
/// - `GET /api/attractions` - List attractions with optional filters
/// - `GET /api/attractions/popular` - Top attractions by popularity
/// - `GET /api/attractions/recommended` - Scenario-based recommendations
/// - `GET /api/attractions/{id}` - Attraction detail with media and comments
/// - `POST /api/attractions/{id}/view` - Record a detail view
/// - `POST /api/attractions/{id}/comments` - Add a comment and update the rating
/// - `POST /api/favorites` - Toggle a favorite
/// - `GET /api/users/{user_id}/favorites` - List a user's favorites
/// - `POST /api/guide` - Generate an AI guide narration
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Wayfarer", description = "Wayfarer API"), tags(
        (name = controller::city::CITY_TAG, description = "City API routes"),
        (name = controller::attraction::ATTRACTION_TAG, description = "Attraction API routes"),
        (name = controller::comment::COMMENT_TAG, description = "Comment API routes"),
        (name = controller::favorite::FAVORITE_TAG, description = "Favorite API routes"),
        (name = controller::guide::GUIDE_TAG, description = "Guide narration API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::city::list_cities))
        .routes(routes!(controller::attraction::list_attractions))
        .routes(routes!(controller::attraction::list_popular_attractions))
        .routes(routes!(controller::attraction::list_recommended_attractions))
        .routes(routes!(controller::attraction::get_attraction_detail))
        .routes(routes!(controller::attraction::record_attraction_view))
        .routes(routes!(controller::comment::add_comment))
        .routes(routes!(controller::favorite::toggle_favorite))
        .routes(routes!(controller::favorite::list_user_favorites))
        .routes(routes!(controller::guide::generate_narration))
        .split_for_parts();

    let routes = routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api));

    routes
}
