//! Create hotels table
//!
//! Every hotel belongs to a city.

use sea_orm_migration::prelude::*;

use super::m20250101_000001_create_cities::Cities;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Hotels::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Hotels::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Hotels::Name).string_len(160).not_null())
                    .col(ColumnDef::new(Hotels::CityId).big_integer().not_null())
                    .col(ColumnDef::new(Hotels::StarRating).integer().not_null())
                    .col(ColumnDef::new(Hotels::PricePerNight).double().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_hotels_city")
                            .from(Hotels::Table, Hotels::CityId)
                            .to(Cities::Table, Cities::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_hotels_city")
                    .table(Hotels::Table)
                    .col(Hotels::CityId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Hotels::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Hotels {
    Table,
    Id,
    Name,
    CityId,
    StarRating,
    PricePerNight,
}
