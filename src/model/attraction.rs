use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Sentinel sent by the browse UI's dropdowns meaning "no filter".
///
/// The sentinel is translated to an absent filter at the HTTP boundary and
/// never reaches query building.
pub static FILTER_WILDCARD: &str = "全部";

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CityDto {
    pub id: i32,
    pub name: String,
    pub province: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

impl From<entity::city::Model> for CityDto {
    fn from(city: entity::city::Model) -> Self {
        Self {
            id: city.id,
            name: city.name,
            province: city.province,
            description: city.description,
            image_url: city.image_url,
        }
    }
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AttractionDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub opening_hours: Option<String>,
    pub ticket_price: Option<String>,
    pub contact: Option<String>,
    pub address: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub category: String,
    pub rating: f64,
    pub popularity: i64,
    pub city: Option<CityDto>,
}

impl AttractionDto {
    pub fn from_model(
        attraction: entity::attraction::Model,
        city: Option<entity::city::Model>,
    ) -> Self {
        Self {
            id: attraction.id,
            name: attraction.name,
            description: attraction.description,
            opening_hours: attraction.opening_hours,
            ticket_price: attraction.ticket_price,
            contact: attraction.contact,
            address: attraction.address,
            latitude: attraction.latitude,
            longitude: attraction.longitude,
            category: attraction.category,
            rating: attraction.rating,
            popularity: attraction.popularity,
            city: city.map(CityDto::from),
        }
    }
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct MediaDto {
    pub id: i32,
    pub media_type: String,
    pub url: String,
    pub thumbnail: Option<String>,
    pub title: Option<String>,
}

impl From<entity::media::Model> for MediaDto {
    fn from(media: entity::media::Model) -> Self {
        Self {
            id: media.id,
            media_type: media.media_type,
            url: media.url,
            thumbnail: media.thumbnail,
            title: media.title,
        }
    }
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CommentAuthorDto {
    pub id: i32,
    pub name: Option<String>,
    pub avatar: Option<String>,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CommentDto {
    pub id: i32,
    pub content: String,
    pub rating: i32,
    pub created_at: NaiveDateTime,
    pub author: Option<CommentAuthorDto>,
}

impl CommentDto {
    pub fn from_model(
        comment: entity::comment::Model,
        author: Option<entity::user::Model>,
    ) -> Self {
        Self {
            id: comment.id,
            content: comment.content,
            rating: comment.rating,
            created_at: comment.created_at,
            author: author.map(|user| CommentAuthorDto {
                id: user.id,
                name: user.name,
                avatar: user.avatar,
            }),
        }
    }
}

/// One attraction with everything its detail page renders.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AttractionDetailDto {
    #[serde(flatten)]
    pub attraction: AttractionDto,
    pub media: Vec<MediaDto>,
    /// The 10 most recent comments, newest first.
    pub comments: Vec<CommentDto>,
}

#[derive(Clone, Copy, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AttractionOrder {
    Rating,
    Popularity,
    Name,
}

/// Travel-intent tag mapped to a static set of seed-data categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Scenario {
    Family,
    Culture,
    Nature,
    Food,
    Shopping,
    Photography,
}

impl Scenario {
    /// Categories matching this scenario. A closed lookup table, kept in sync
    /// with the category tags used by the seed data.
    pub fn categories(self) -> &'static [&'static str] {
        match self {
            Self::Family => &["主题乐园", "动物园", "水族馆"],
            Self::Culture => &["博物馆", "历史遗迹", "寺庙"],
            Self::Nature => &["自然风光", "公园", "山岳"],
            Self::Food => &["美食街", "小吃街", "夜市"],
            Self::Shopping => &["购物中心", "商业街"],
            Self::Photography => &["自然风光", "历史遗迹", "地标建筑"],
        }
    }
}

#[derive(Deserialize, utoipa::IntoParams)]
pub struct AttractionFilterDto {
    /// City name; "全部" is treated as no filter.
    pub city: Option<String>,
    /// Category tag; "全部" is treated as no filter.
    pub category: Option<String>,
    pub limit: Option<u64>,
    pub order_by: Option<AttractionOrder>,
}

#[derive(Deserialize, utoipa::IntoParams)]
pub struct RecommendationFilterDto {
    pub scenario: Option<Scenario>,
    /// City name; "全部" is treated as no filter.
    pub city: Option<String>,
    pub limit: Option<u64>,
}

#[derive(Deserialize, utoipa::IntoParams)]
pub struct PopularFilterDto {
    pub limit: Option<u64>,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateCommentDto {
    pub user_id: i32,
    pub content: String,
    /// 1-5 by convention.
    pub rating: i32,
}
