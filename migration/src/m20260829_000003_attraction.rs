use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260829_000001_city::City;

static IDX_ATTRACTION_CITY_ID: &str = "idx-attraction-city_id";
static IDX_ATTRACTION_CATEGORY: &str = "idx-attraction-category";
static FK_ATTRACTION_CITY_ID: &str = "fk-attraction-city_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Attraction::Table)
                    .if_not_exists()
                    .col(pk_auto(Attraction::Id))
                    .col(string(Attraction::Name))
                    .col(text_null(Attraction::Description))
                    .col(string_null(Attraction::OpeningHours))
                    .col(string_null(Attraction::TicketPrice))
                    .col(string_null(Attraction::Contact))
                    .col(string_null(Attraction::Address))
                    .col(double_null(Attraction::Latitude))
                    .col(double_null(Attraction::Longitude))
                    .col(string(Attraction::Category))
                    .col(double(Attraction::Rating).default(0.0))
                    .col(big_integer(Attraction::Popularity).default(0))
                    .col(integer(Attraction::CityId))
                    .col(timestamp(Attraction::CreatedAt))
                    .col(timestamp(Attraction::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ATTRACTION_CITY_ID)
                    .table(Attraction::Table)
                    .col(Attraction::CityId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ATTRACTION_CATEGORY)
                    .table(Attraction::Table)
                    .col(Attraction::Category)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ATTRACTION_CITY_ID)
                    .from_tbl(Attraction::Table)
                    .from_col(Attraction::CityId)
                    .to_tbl(City::Table)
                    .to_col(City::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_ATTRACTION_CITY_ID)
                    .table(Attraction::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ATTRACTION_CATEGORY)
                    .table(Attraction::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ATTRACTION_CITY_ID)
                    .table(Attraction::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Attraction::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Attraction {
    Table,
    Id,
    Name,
    Description,
    OpeningHours,
    TicketPrice,
    Contact,
    Address,
    Latitude,
    Longitude,
    Category,
    Rating,
    Popularity,
    CityId,
    CreatedAt,
    UpdatedAt,
}
