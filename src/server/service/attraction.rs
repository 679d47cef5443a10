use sea_orm::DatabaseConnection;

use crate::{
    model::attraction::{
        AttractionDetailDto, AttractionDto, AttractionFilterDto, AttractionOrder, CommentDto,
        MediaDto, RecommendationFilterDto, Scenario, FILTER_WILDCARD,
    },
    server::{
        data::{
            attraction::{AttractionRepository, AttractionSearchFilter},
            comment::CommentRepository,
            media::MediaRepository,
        },
        error::Error,
    },
};

const DEFAULT_LIST_LIMIT: u64 = 100;
const DEFAULT_POPULAR_LIMIT: u64 = 3;
const DEFAULT_RECOMMENDED_LIMIT: u64 = 4;

/// Number of comments shown on the attraction detail page.
const DETAIL_COMMENT_LIMIT: u64 = 10;

/// Normalized list query. The HTTP boundary's "全部" wildcard has already
/// been translated to an absent filter by the time this struct exists.
pub struct AttractionListQuery {
    pub city: Option<String>,
    pub category: Option<String>,
    pub limit: Option<u64>,
    pub order_by: Option<AttractionOrder>,
}

impl From<AttractionFilterDto> for AttractionListQuery {
    fn from(dto: AttractionFilterDto) -> Self {
        Self {
            city: wildcard_to_none(dto.city),
            category: wildcard_to_none(dto.category),
            limit: dto.limit,
            order_by: dto.order_by,
        }
    }
}

pub struct RecommendationQuery {
    pub scenario: Option<Scenario>,
    pub city: Option<String>,
    pub limit: Option<u64>,
}

impl From<RecommendationFilterDto> for RecommendationQuery {
    fn from(dto: RecommendationFilterDto) -> Self {
        Self {
            scenario: dto.scenario,
            city: wildcard_to_none(dto.city),
            limit: dto.limit,
        }
    }
}

fn wildcard_to_none(value: Option<String>) -> Option<String> {
    value.filter(|v| v != FILTER_WILDCARD)
}

/// Read access to attractions with filtering and ordering. Pure reads; the
/// mutation paths live in the comment and favorite services.
pub struct AttractionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AttractionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Attractions matching the optional city/category filters, joined with
    /// their cities, ordered descending by the chosen field (popularity by
    /// default), capped at the limit (100 by default).
    pub async fn list_attractions(
        &self,
        query: AttractionListQuery,
    ) -> Result<Vec<AttractionDto>, Error> {
        let repo = AttractionRepository::new(self.db);

        let results = repo
            .search(AttractionSearchFilter {
                city: query.city,
                categories: query.category.into_iter().collect(),
                order: query.order_by.unwrap_or(AttractionOrder::Popularity),
                limit: query.limit.unwrap_or(DEFAULT_LIST_LIMIT),
            })
            .await?;

        Ok(results
            .into_iter()
            .map(|(attraction, city)| AttractionDto::from_model(attraction, city))
            .collect())
    }

    /// One attraction with its city, all media, and the 10 most recent
    /// comments with their authors. `None` when the id is unknown.
    pub async fn get_attraction_detail(
        &self,
        attraction_id: i32,
    ) -> Result<Option<AttractionDetailDto>, Error> {
        let attraction_repo = AttractionRepository::new(self.db);

        let (attraction, city) = match attraction_repo.get_with_city(attraction_id).await? {
            Some(found) => found,
            None => return Ok(None),
        };

        let media = MediaRepository::new(self.db)
            .list_for_attraction(attraction.id)
            .await?;

        let comments = CommentRepository::new(self.db)
            .list_recent_with_authors(attraction.id, DETAIL_COMMENT_LIMIT)
            .await?;

        Ok(Some(AttractionDetailDto {
            attraction: AttractionDto::from_model(attraction, city),
            media: media.into_iter().map(MediaDto::from).collect(),
            comments: comments
                .into_iter()
                .map(|(comment, author)| CommentDto::from_model(comment, author))
                .collect(),
        }))
    }

    /// The most popular attractions, unfiltered, popularity descending.
    pub async fn list_popular(&self, limit: Option<u64>) -> Result<Vec<AttractionDto>, Error> {
        let repo = AttractionRepository::new(self.db);

        let results = repo
            .search(AttractionSearchFilter {
                city: None,
                categories: Vec::new(),
                order: AttractionOrder::Popularity,
                limit: limit.unwrap_or(DEFAULT_POPULAR_LIMIT),
            })
            .await?;

        Ok(results
            .into_iter()
            .map(|(attraction, city)| AttractionDto::from_model(attraction, city))
            .collect())
    }

    /// Attractions matching the scenario's category set (plus an optional
    /// city filter), rating descending when a scenario was given, popularity
    /// descending otherwise.
    pub async fn list_recommended(
        &self,
        query: RecommendationQuery,
    ) -> Result<Vec<AttractionDto>, Error> {
        let categories = query
            .scenario
            .map(|scenario| {
                scenario
                    .categories()
                    .iter()
                    .map(|category| category.to_string())
                    .collect()
            })
            .unwrap_or_default();

        let order = if query.scenario.is_some() {
            AttractionOrder::Rating
        } else {
            AttractionOrder::Popularity
        };

        let repo = AttractionRepository::new(self.db);

        let results = repo
            .search(AttractionSearchFilter {
                city: query.city,
                categories,
                order,
                limit: query.limit.unwrap_or(DEFAULT_RECOMMENDED_LIMIT),
            })
            .await?;

        Ok(results
            .into_iter()
            .map(|(attraction, city)| AttractionDto::from_model(attraction, city))
            .collect())
    }
}
