use sea_orm::{ConnectionTrait, DbErr, EntityTrait};

use crate::server::model::db::UserModel;

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_by_id(&self, user_id: i32) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::User::find_by_id(user_id).one(self.db).await
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{ConnectionTrait, DatabaseConnection, DbBackend, DbErr, Schema};

    use crate::server::{
        data::user::UserRepository,
        util::test::{mock::insert_user, setup::test_setup},
    };

    async fn setup() -> Result<DatabaseConnection, DbErr> {
        let test = test_setup().await;

        let db = test.state.db;
        let schema = Schema::new(DbBackend::Sqlite);

        let stmt = schema.create_table_from_entity(entity::prelude::User);

        db.execute(&stmt).await?;

        Ok(db)
    }

    /// Expect the inserted user to be found by id
    #[tokio::test]
    async fn get_by_id_found() -> Result<(), DbErr> {
        let db = setup().await?;
        let user = insert_user(&db, "visitor@example.com").await?;

        let repo = UserRepository::new(&db);
        let found = repo.get_by_id(user.id).await?;

        assert_eq!(found.map(|u| u.email), Some("visitor@example.com".to_string()));

        Ok(())
    }

    /// Expect None for an unknown user id
    #[tokio::test]
    async fn get_by_id_none() -> Result<(), DbErr> {
        let db = setup().await?;

        let repo = UserRepository::new(&db);
        let found = repo.get_by_id(42).await?;

        assert!(found.is_none());

        Ok(())
    }
}
