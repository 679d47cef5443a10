use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260829_000003_attraction::Attraction;

static IDX_MEDIA_ATTRACTION_ID: &str = "idx-media-attraction_id";
static FK_MEDIA_ATTRACTION_ID: &str = "fk-media-attraction_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Media::Table)
                    .if_not_exists()
                    .col(pk_auto(Media::Id))
                    .col(string(Media::MediaType))
                    .col(string(Media::Url))
                    .col(string_null(Media::Thumbnail))
                    .col(string_null(Media::Title))
                    .col(integer(Media::AttractionId))
                    .col(timestamp(Media::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_MEDIA_ATTRACTION_ID)
                    .table(Media::Table)
                    .col(Media::AttractionId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_MEDIA_ATTRACTION_ID)
                    .from_tbl(Media::Table)
                    .from_col(Media::AttractionId)
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
                    .name(FK_MEDIA_ATTRACTION_ID)
                    .table(Media::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_MEDIA_ATTRACTION_ID)
                    .table(Media::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Media::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Media {
    Table,
    Id,
    MediaType,
    Url,
    Thumbnail,
    Title,
    AttractionId,
    CreatedAt,
}
