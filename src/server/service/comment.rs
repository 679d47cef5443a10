use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, TransactionTrait};

use crate::{
    model::attraction::CommentDto,
    server::{
        data::{attraction::AttractionRepository, comment::CommentRepository, user::UserRepository},
        error::{content::ContentError, Error},
    },
};

/// Comment creation and the derived-rating consistency rule.
pub struct CommentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a comment and recomputes the parent attraction's mean rating
    /// in the same transaction. After this returns, the stored rating equals
    /// the arithmetic mean of all comment ratings for the attraction.
    pub async fn add_comment(
        &self,
        attraction_id: i32,
        user_id: i32,
        content: String,
        rating: i32,
    ) -> Result<CommentDto, Error> {
        let txn = self.db.begin().await?;

        let attraction = AttractionRepository::new(&txn)
            .get_by_id(attraction_id)
            .await?
            .ok_or(ContentError::AttractionNotFound(attraction_id))?;

        let user = UserRepository::new(&txn)
            .get_by_id(user_id)
            .await?
            .ok_or(ContentError::UserNotFound(user_id))?;

        let comment = CommentRepository::new(&txn)
            .create(user.id, attraction.id, content, rating)
            .await?;

        recompute_rating_on(&txn, attraction.id).await?;

        txn.commit().await?;

        Ok(CommentDto::from_model(comment, Some(user)))
    }

    /// Standalone mean-rating recompute. An attraction with zero comments
    /// keeps its stored rating; the value is never reset to zero or null.
    pub async fn recompute_rating(&self, attraction_id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        recompute_rating_on(&txn, attraction_id).await?;

        txn.commit().await?;

        Ok(())
    }

    /// Records one view of an attraction.
    pub async fn increment_popularity(&self, attraction_id: i32) -> Result<(), Error> {
        let result = AttractionRepository::new(self.db)
            .increment_popularity(attraction_id)
            .await?;

        if result.rows_affected == 0 {
            return Err(ContentError::AttractionNotFound(attraction_id).into());
        }

        Ok(())
    }
}

async fn recompute_rating_on<C: ConnectionTrait>(
    conn: &C,
    attraction_id: i32,
) -> Result<(), DbErr> {
    let ratings = CommentRepository::new(conn)
        .ratings_for_attraction(attraction_id)
        .await?;

    if ratings.is_empty() {
        return Ok(());
    }

    let mean = ratings.iter().copied().map(f64::from).sum::<f64>() / ratings.len() as f64;

    AttractionRepository::new(conn)
        .update_rating(attraction_id, mean)
        .await?;

    Ok(())
}
