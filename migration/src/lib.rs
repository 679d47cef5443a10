pub use sea_orm_migration::prelude::*;

mod m20260829_000001_city;
mod m20260829_000002_user;
mod m20260829_000003_attraction;
mod m20260829_000004_media;
mod m20260829_000005_comment;
mod m20260829_000006_favorite;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260829_000001_city::Migration),
            Box::new(m20260829_000002_user::Migration),
            Box::new(m20260829_000003_attraction::Migration),
            Box::new(m20260829_000004_media::Migration),
            Box::new(m20260829_000005_comment::Migration),
            Box::new(m20260829_000006_favorite::Migration),
        ]
    }
}
