use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::model::db::MediaModel;

pub struct MediaRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MediaRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// All media rows attached to an attraction, in insertion order.
    pub async fn list_for_attraction(
        &self,
        attraction_id: i32,
    ) -> Result<Vec<MediaModel>, DbErr> {
        entity::prelude::Media::find()
            .filter(entity::media::Column::AttractionId.eq(attraction_id))
            .order_by_asc(entity::media::Column::Id)
            .all(self.db)
            .await
    }
}
