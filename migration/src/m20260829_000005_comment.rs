use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260829_000002_user::User, m20260829_000003_attraction::Attraction};

static IDX_COMMENT_USER_ID: &str = "idx-comment-user_id";
static IDX_COMMENT_ATTRACTION_ID: &str = "idx-comment-attraction_id";
static FK_COMMENT_USER_ID: &str = "fk-comment-user_id";
static FK_COMMENT_ATTRACTION_ID: &str = "fk-comment-attraction_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Comment::Table)
                    .if_not_exists()
                    .col(pk_auto(Comment::Id))
                    .col(text(Comment::Content))
                    .col(integer(Comment::Rating))
                    .col(integer(Comment::UserId))
                    .col(integer(Comment::AttractionId))
                    .col(timestamp(Comment::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_COMMENT_USER_ID)
                    .table(Comment::Table)
                    .col(Comment::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_COMMENT_ATTRACTION_ID)
                    .table(Comment::Table)
                    .col(Comment::AttractionId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_COMMENT_USER_ID)
                    .from_tbl(Comment::Table)
                    .from_col(Comment::UserId)
                    .to_tbl(User::Table)
                    .to_col(User::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_COMMENT_ATTRACTION_ID)
                    .from_tbl(Comment::Table)
                    .from_col(Comment::AttractionId)
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
                    .name(FK_COMMENT_ATTRACTION_ID)
                    .table(Comment::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_COMMENT_USER_ID)
                    .table(Comment::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_COMMENT_ATTRACTION_ID)
                    .table(Comment::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_COMMENT_USER_ID)
                    .table(Comment::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Comment::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Comment {
    Table,
    Id,
    Content,
    Rating,
    UserId,
    AttractionId,
    CreatedAt,
}
