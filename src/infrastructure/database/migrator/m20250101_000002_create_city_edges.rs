//! Create city_edges table
//!
//! Undirected roads; each row is stored once with the endpoints as given.

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
                    .table(CityEdges::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CityEdges::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CityEdges::FromId).big_integer().not_null())
                    .col(ColumnDef::new(CityEdges::ToId).big_integer().not_null())
                    .col(ColumnDef::new(CityEdges::DistanceKm).double().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_city_edges_from")
                            .from(CityEdges::Table, CityEdges::FromId)
                            .to(Cities::Table, Cities::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_city_edges_to")
                            .from(CityEdges::Table, CityEdges::ToId)
                            .to(Cities::Table, Cities::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_city_edges_from")
                    .table(CityEdges::Table)
                    .col(CityEdges::FromId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_city_edges_to")
                    .table(CityEdges::Table)
                    .col(CityEdges::ToId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CityEdges::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum CityEdges {
    Table,
    Id,
    FromId,
    ToId,
    DistanceKm,
}
