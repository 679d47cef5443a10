use chrono::Utc;
use migration::{Expr, ExprTrait};
use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
    UpdateResult,
};

use crate::{
    model::attraction::AttractionOrder,
    server::model::db::{AttractionModel, CityModel},
};

/// Search parameters for the attraction list queries.
///
/// An empty `categories` vec means no category filter. Wildcard sentinels are
/// translated away before this struct is built; no magic strings reach here.
pub struct AttractionSearchFilter {
    pub city: Option<String>,
    pub categories: Vec<String>,
    pub order: AttractionOrder,
    pub limit: u64,
}

pub struct AttractionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AttractionRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Lists attractions joined with their parent city, filtered and ordered
    /// descending by the chosen field, capped at `filter.limit`.
    pub async fn search(
        &self,
        filter: AttractionSearchFilter,
    ) -> Result<Vec<(AttractionModel, Option<CityModel>)>, DbErr> {
        let mut query = entity::prelude::Attraction::find().find_also_related(entity::prelude::City);

        if let Some(city) = &filter.city {
            query = query.filter(entity::city::Column::Name.eq(city));
        }

        if !filter.categories.is_empty() {
            query = query.filter(
                entity::attraction::Column::Category
                    .is_in(filter.categories.iter().map(String::as_str)),
            );
        }

        let order_column = match filter.order {
            AttractionOrder::Rating => entity::attraction::Column::Rating,
            AttractionOrder::Popularity => entity::attraction::Column::Popularity,
            AttractionOrder::Name => entity::attraction::Column::Name,
        };

        query
            .order_by_desc(order_column)
            .limit(filter.limit)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(
        &self,
        attraction_id: i32,
    ) -> Result<Option<AttractionModel>, DbErr> {
        entity::prelude::Attraction::find_by_id(attraction_id)
            .one(self.db)
            .await
    }

    pub async fn get_with_city(
        &self,
        attraction_id: i32,
    ) -> Result<Option<(AttractionModel, Option<CityModel>)>, DbErr> {
        entity::prelude::Attraction::find_by_id(attraction_id)
            .find_also_related(entity::prelude::City)
            .one(self.db)
            .await
    }

    /// Persists a recomputed mean rating.
    pub async fn update_rating(
        &self,
        attraction_id: i32,
        rating: f64,
    ) -> Result<UpdateResult, DbErr> {
        entity::prelude::Attraction::update_many()
            .col_expr(entity::attraction::Column::Rating, Expr::value(rating))
            .col_expr(
                entity::attraction::Column::UpdatedAt,
                Expr::value(Utc::now().naive_utc()),
            )
            .filter(entity::attraction::Column::Id.eq(attraction_id))
            .exec(self.db)
            .await
    }

    /// Adds 1 to the popularity counter as a relative SQL increment, so
    /// concurrent calls never lose updates.
    pub async fn increment_popularity(
        &self,
        attraction_id: i32,
    ) -> Result<UpdateResult, DbErr> {
        entity::prelude::Attraction::update_many()
            .col_expr(
                entity::attraction::Column::Popularity,
                Expr::col(entity::attraction::Column::Popularity).add(1),
            )
            .filter(entity::attraction::Column::Id.eq(attraction_id))
            .exec(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{ConnectionTrait, DatabaseConnection, DbBackend, DbErr, Schema};

    use crate::{
        model::attraction::AttractionOrder,
        server::{
            data::attraction::{AttractionRepository, AttractionSearchFilter},
            util::test::{
                mock::{insert_attraction, insert_city},
                setup::test_setup,
            },
        },
    };

    async fn setup() -> Result<DatabaseConnection, DbErr> {
        let test = test_setup().await;

        let db = test.state.db;
        let schema = Schema::new(DbBackend::Sqlite);

        let stmts = vec![
            schema.create_table_from_entity(entity::prelude::City),
            schema.create_table_from_entity(entity::prelude::Attraction),
        ];

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(db)
    }

    fn unfiltered(order: AttractionOrder, limit: u64) -> AttractionSearchFilter {
        AttractionSearchFilter {
            city: None,
            categories: Vec::new(),
            order,
            limit,
        }
    }

    /// Expect attractions ordered by popularity descending and capped at the limit
    #[tokio::test]
    async fn search_orders_by_popularity_and_caps_at_limit() -> Result<(), DbErr> {
        let db = setup().await?;
        let city = insert_city(&db).await?;

        for (name, popularity) in [("甲", 9800), ("乙", 10000), ("丙", 9500), ("丁", 9600)] {
            insert_attraction(&db, city.id, name, "公园", 4.0, popularity).await?;
        }

        let repo = AttractionRepository::new(&db);
        let results = repo
            .search(unfiltered(AttractionOrder::Popularity, 2))
            .await?;

        let popularity: Vec<i64> = results.iter().map(|(a, _)| a.popularity).collect();
        assert_eq!(popularity, vec![10000, 9800]);

        Ok(())
    }

    /// Expect the city filter to match on the joined city name
    #[tokio::test]
    async fn search_filters_by_city_name() -> Result<(), DbErr> {
        let db = setup().await?;
        let city = insert_city(&db).await?;

        let other_city = entity::city::ActiveModel {
            name: sea_orm::ActiveValue::Set("苏州".to_string()),
            province: sea_orm::ActiveValue::Set("江苏".to_string()),
            created_at: sea_orm::ActiveValue::Set(chrono::Utc::now().naive_utc()),
            ..Default::default()
        };
        let other_city = sea_orm::ActiveModelTrait::insert(other_city, &db).await?;

        insert_attraction(&db, city.id, "西湖", "自然风光", 4.8, 10000).await?;
        insert_attraction(&db, other_city.id, "拙政园", "历史遗迹", 4.6, 8000).await?;

        let repo = AttractionRepository::new(&db);
        let results = repo
            .search(AttractionSearchFilter {
                city: Some("杭州".to_string()),
                categories: Vec::new(),
                order: AttractionOrder::Popularity,
                limit: 100,
            })
            .await?;

        assert_eq!(results.len(), 1);
        let (attraction, joined_city) = &results[0];
        assert_eq!(attraction.name, "西湖");
        assert_eq!(joined_city.as_ref().unwrap().name, "杭州");

        Ok(())
    }

    /// Expect the category filter to accept a set of categories
    #[tokio::test]
    async fn search_filters_by_category_set() -> Result<(), DbErr> {
        let db = setup().await?;
        let city = insert_city(&db).await?;

        insert_attraction(&db, city.id, "博物馆甲", "博物馆", 4.9, 100).await?;
        insert_attraction(&db, city.id, "寺庙乙", "寺庙", 4.5, 200).await?;
        insert_attraction(&db, city.id, "乐园丙", "主题乐园", 4.7, 300).await?;

        let repo = AttractionRepository::new(&db);
        let results = repo
            .search(AttractionSearchFilter {
                city: None,
                categories: vec!["博物馆".to_string(), "寺庙".to_string()],
                order: AttractionOrder::Rating,
                limit: 100,
            })
            .await?;

        let names: Vec<&str> = results.iter().map(|(a, _)| a.name.as_str()).collect();
        assert_eq!(names, vec!["博物馆甲", "寺庙乙"]);

        Ok(())
    }

    /// Expect popularity increments to be relative and report affected rows
    #[tokio::test]
    async fn increment_popularity_is_relative() -> Result<(), DbErr> {
        let db = setup().await?;
        let city = insert_city(&db).await?;
        let attraction = insert_attraction(&db, city.id, "西湖", "自然风光", 4.8, 10).await?;

        let repo = AttractionRepository::new(&db);

        let result = repo.increment_popularity(attraction.id).await?;
        assert_eq!(result.rows_affected, 1);
        repo.increment_popularity(attraction.id).await?;

        let updated = repo.get_by_id(attraction.id).await?.unwrap();
        assert_eq!(updated.popularity, 12);

        Ok(())
    }

    /// Expect no rows to be affected when incrementing an unknown attraction
    #[tokio::test]
    async fn increment_popularity_unknown_id() -> Result<(), DbErr> {
        let db = setup().await?;

        let repo = AttractionRepository::new(&db);
        let result = repo.increment_popularity(42).await?;

        assert_eq!(result.rows_affected, 0);

        Ok(())
    }

    /// Expect update_rating to persist the new value
    #[tokio::test]
    async fn update_rating_persists() -> Result<(), DbErr> {
        let db = setup().await?;
        let city = insert_city(&db).await?;
        let attraction = insert_attraction(&db, city.id, "西湖", "自然风光", 0.0, 0).await?;

        let repo = AttractionRepository::new(&db);
        repo.update_rating(attraction.id, 4.5).await?;

        let updated = repo.get_by_id(attraction.id).await?.unwrap();
        assert_eq!(updated.rating, 4.5);

        Ok(())
    }

    /// Expect Error when the required tables don't exist
    #[tokio::test]
    async fn search_error_without_tables() -> Result<(), DbErr> {
        let test = test_setup().await;
        let repo = AttractionRepository::new(&test.state.db);

        let result = repo
            .search(unfiltered(AttractionOrder::Popularity, 100))
            .await;

        assert!(result.is_err());

        Ok(())
    }
}
