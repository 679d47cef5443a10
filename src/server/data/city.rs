use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::model::db::CityModel;

pub struct CityRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CityRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// All cities, alphabetical by name.
    pub async fn all(&self) -> Result<Vec<CityModel>, DbErr> {
        entity::prelude::City::find()
            .order_by_asc(entity::city::Column::Name)
            .all(self.db)
            .await
    }

    /// The cities matching the given ids, one query for the whole batch.
    pub async fn get_by_ids(&self, city_ids: Vec<i32>) -> Result<Vec<CityModel>, DbErr> {
        entity::prelude::City::find()
            .filter(entity::city::Column::Id.is_in(city_ids))
            .all(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{ConnectionTrait, DatabaseConnection, DbBackend, DbErr, Schema};

    use crate::server::{
        data::city::CityRepository,
        util::test::{mock::insert_city, setup::test_setup},
    };

    async fn setup() -> Result<DatabaseConnection, DbErr> {
        let test = test_setup().await;

        let db = test.state.db;
        let schema = Schema::new(DbBackend::Sqlite);

        let stmt = schema.create_table_from_entity(entity::prelude::City);

        db.execute(&stmt).await?;

        Ok(db)
    }

    /// Expect all inserted cities to be returned
    #[tokio::test]
    async fn all_returns_inserted_cities() -> Result<(), DbErr> {
        let db = setup().await?;
        insert_city(&db).await?;

        let repo = CityRepository::new(&db);
        let cities = repo.all().await?;

        assert_eq!(cities.len(), 1);
        assert_eq!(cities[0].name, "杭州");

        Ok(())
    }

    /// Expect only the requested ids, and no rows for unknown ids
    #[tokio::test]
    async fn get_by_ids_scopes_to_requested() -> Result<(), DbErr> {
        let db = setup().await?;
        let city = insert_city(&db).await?;

        let repo = CityRepository::new(&db);
        let cities = repo.get_by_ids(vec![city.id, city.id + 1]).await?;

        assert_eq!(cities.len(), 1);
        assert_eq!(cities[0].id, city.id);

        Ok(())
    }

    /// Expect Error when the city table does not exist
    #[tokio::test]
    async fn all_error_without_tables() -> Result<(), DbErr> {
        let test = test_setup().await;
        let repo = CityRepository::new(&test.state.db);

        let result = repo.all().await;

        assert!(result.is_err());

        Ok(())
    }
}
