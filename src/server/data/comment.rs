use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::server::model::db::{CommentModel, UserModel};

pub struct CommentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CommentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        user_id: i32,
        attraction_id: i32,
        content: String,
        rating: i32,
    ) -> Result<CommentModel, DbErr> {
        let comment = entity::comment::ActiveModel {
            content: ActiveValue::Set(content),
            rating: ActiveValue::Set(rating),
            user_id: ActiveValue::Set(user_id),
            attraction_id: ActiveValue::Set(attraction_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        comment.insert(self.db).await
    }

    /// The most recent comments for an attraction, newest first, each joined
    /// with its author.
    pub async fn list_recent_with_authors(
        &self,
        attraction_id: i32,
        limit: u64,
    ) -> Result<Vec<(CommentModel, Option<UserModel>)>, DbErr> {
        entity::prelude::Comment::find()
            .filter(entity::comment::Column::AttractionId.eq(attraction_id))
            .order_by_desc(entity::comment::Column::CreatedAt)
            .order_by_desc(entity::comment::Column::Id)
            .limit(limit)
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await
    }

    /// All ratings currently stored for an attraction, for the mean-rating
    /// recompute.
    pub async fn ratings_for_attraction(&self, attraction_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::Comment::find()
            .select_only()
            .column(entity::comment::Column::Rating)
            .filter(entity::comment::Column::AttractionId.eq(attraction_id))
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }
}
