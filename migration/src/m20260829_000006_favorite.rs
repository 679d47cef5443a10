use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260829_000002_user::User, m20260829_000003_attraction::Attraction};

static IDX_FAVORITE_USER_ATTRACTION: &str = "idx-favorite-user_id-attraction_id";
static FK_FAVORITE_USER_ID: &str = "fk-favorite-user_id";
static FK_FAVORITE_ATTRACTION_ID: &str = "fk-favorite-attraction_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Favorite::Table)
                    .if_not_exists()
                    .col(pk_auto(Favorite::Id))
                    .col(integer(Favorite::UserId))
                    .col(integer(Favorite::AttractionId))
                    .col(timestamp(Favorite::CreatedAt))
                    .to_owned(),
            )
            .await?;

        // A user can favorite a given attraction at most once.
        manager
            .create_index(
                Index::create()
                    .name(IDX_FAVORITE_USER_ATTRACTION)
                    .table(Favorite::Table)
                    .col(Favorite::UserId)
                    .col(Favorite::AttractionId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FAVORITE_USER_ID)
                    .from_tbl(Favorite::Table)
                    .from_col(Favorite::UserId)
                    .to_tbl(User::Table)
                    .to_col(User::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FAVORITE_ATTRACTION_ID)
                    .from_tbl(Favorite::Table)
                    .from_col(Favorite::AttractionId)
                    .to_tbl(Attraction::Table)
                    .to_col(Attraction::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_FAVORITE_ATTRACTION_ID)
                    .table(Favorite::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_FAVORITE_USER_ID)
                    .table(Favorite::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FAVORITE_USER_ATTRACTION)
                    .table(Favorite::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Favorite::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Favorite {
    Table,
    Id,
    UserId,
    AttractionId,
    CreatedAt,
}
