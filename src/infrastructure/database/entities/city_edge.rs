//! Road between two cities

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "city_edges")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub from_id: i64,
    pub to_id: i64,
    pub distance_km: f64,
}

// Both ends point at `cities`, so there is no single `Related` impl.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::city::Entity",
        from = "Column::FromId",
        to = "super::city::Column::Id"
    )]
    FromCity,
    #[sea_orm(
        belongs_to = "super::city::Entity",
        from = "Column::ToId",
        to = "super::city::Column::Id"
    )]
    ToCity,
}

impl ActiveModelBehavior for ActiveModel {}
