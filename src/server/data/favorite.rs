use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    ModelTrait, QueryFilter, QueryOrder,
};

use crate::server::model::db::{AttractionModel, FavoriteModel};

pub struct FavoriteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoriteRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Looks up the unique (user, attraction) favorite row.
    pub async fn find_by_pair(
        &self,
        user_id: i32,
        attraction_id: i32,
    ) -> Result<Option<FavoriteModel>, DbErr> {
        entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .filter(entity::favorite::Column::AttractionId.eq(attraction_id))
            .one(self.db)
            .await
    }

    pub async fn create(
        &self,
        user_id: i32,
        attraction_id: i32,
    ) -> Result<FavoriteModel, DbErr> {
        let favorite = entity::favorite::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            attraction_id: ActiveValue::Set(attraction_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        favorite.insert(self.db).await
    }

    pub async fn delete(&self, favorite: FavoriteModel) -> Result<DeleteResult, DbErr> {
        favorite.delete(self.db).await
    }

    /// A user's favorites joined with their attractions, most recently
    /// favorited first.
    pub async fn list_with_attractions(
        &self,
        user_id: i32,
    ) -> Result<Vec<(FavoriteModel, Option<AttractionModel>)>, DbErr> {
        entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .order_by_desc(entity::favorite::Column::CreatedAt)
            .order_by_desc(entity::favorite::Column::Id)
            .find_also_related(entity::prelude::Attraction)
            .all(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{ConnectionTrait, DatabaseConnection, DbBackend, DbErr, Schema};

    use crate::server::{
        data::favorite::FavoriteRepository,
        util::test::{
            mock::{insert_attraction, insert_city, insert_user},
            setup::test_setup,
        },
    };

    async fn setup() -> Result<DatabaseConnection, DbErr> {
        let test = test_setup().await;

        let db = test.state.db;
        let schema = Schema::new(DbBackend::Sqlite);

        let stmts = vec![
            schema.create_table_from_entity(entity::prelude::City),
            schema.create_table_from_entity(entity::prelude::User),
            schema.create_table_from_entity(entity::prelude::Attraction),
            schema.create_table_from_entity(entity::prelude::Favorite),
        ];

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(db)
    }

    /// Expect find_by_pair to return the row only after it was created
    #[tokio::test]
    async fn find_create_delete_round() -> Result<(), DbErr> {
        let db = setup().await?;
        let city = insert_city(&db).await?;
        let attraction = insert_attraction(&db, city.id, "西湖", "自然风光", 0.0, 0).await?;
        let user = insert_user(&db, "visitor@example.com").await?;

        let repo = FavoriteRepository::new(&db);

        assert!(repo.find_by_pair(user.id, attraction.id).await?.is_none());

        let favorite = repo.create(user.id, attraction.id).await?;
        let found = repo.find_by_pair(user.id, attraction.id).await?;
        assert_eq!(found.as_ref().map(|f| f.id), Some(favorite.id));

        let result = repo.delete(favorite).await?;
        assert_eq!(result.rows_affected, 1);
        assert!(repo.find_by_pair(user.id, attraction.id).await?.is_none());

        Ok(())
    }

    /// Expect the user's favorites with attractions, most recent first
    #[tokio::test]
    async fn list_with_attractions_orders_by_recency() -> Result<(), DbErr> {
        let db = setup().await?;
        let city = insert_city(&db).await?;
        let first = insert_attraction(&db, city.id, "西湖", "自然风光", 0.0, 0).await?;
        let second = insert_attraction(&db, city.id, "灵隐寺", "寺庙", 0.0, 0).await?;
        let user = insert_user(&db, "visitor@example.com").await?;
        let other_user = insert_user(&db, "other@example.com").await?;

        let repo = FavoriteRepository::new(&db);
        repo.create(user.id, first.id).await?;
        repo.create(user.id, second.id).await?;
        repo.create(other_user.id, first.id).await?;

        let favorites = repo.list_with_attractions(user.id).await?;

        assert_eq!(favorites.len(), 2);
        assert_eq!(favorites[0].1.as_ref().unwrap().name, "灵隐寺");
        assert_eq!(favorites[1].1.as_ref().unwrap().name, "西湖");

        Ok(())
    }

    /// Expect Error when the required tables don't exist
    #[tokio::test]
    async fn find_by_pair_error_without_tables() -> Result<(), DbErr> {
        let test = test_setup().await;
        let repo = FavoriteRepository::new(&test.state.db);

        let result = repo.find_by_pair(1, 1).await;

        assert!(result.is_err());

        Ok(())
    }
}
