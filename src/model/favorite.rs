use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::attraction::AttractionDto;

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ToggleFavoriteDto {
    pub user_id: i32,
    pub attraction_id: i32,
}

/// The state of the (user, attraction) pair after a toggle.
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct FavoriteStatusDto {
    pub favorited: bool,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct FavoriteEntryDto {
    pub favorited_at: NaiveDateTime,
    pub attraction: AttractionDto,
}
