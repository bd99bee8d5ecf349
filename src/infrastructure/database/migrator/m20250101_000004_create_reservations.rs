//! Create reservations table
//!
//! Append-only; `hotel_id` must point at an existing hotel.

use sea_orm_migration::prelude::*;

use super::m20250101_000003_create_hotels::Hotels;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reservations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Reservations::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Reservations::HotelId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Reservations::GuestName)
                            .string_len(160)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Reservations::Email)
                            .string_len(160)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Reservations::NumGuests)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Reservations::StartDate).date().not_null())
                    .col(ColumnDef::new(Reservations::EndDate).date().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservations_hotel")
                            .from(Reservations::Table, Reservations::HotelId)
                            .to(Hotels::Table, Hotels::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_reservations_hotel")
                    .table(Reservations::Table)
                    .col(Reservations::HotelId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reservations::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Reservations {
    Table,
    Id,
    HotelId,
    GuestName,
    Email,
    NumGuests,
    StartDate,
    EndDate,
}
