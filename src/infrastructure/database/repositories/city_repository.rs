//! SeaORM implementation of CityRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, NotSet,
    PaginatorTrait, QueryFilter, QueryOrder, Set,
};
use tracing::debug;

use crate::domain::{City, CityEdge, CityRepository, DomainError, DomainResult, NewCity};
use crate::infrastructure::database::entities::{city, city_edge};

pub struct SeaOrmCityRepository {
    db: DatabaseConnection,
}

impl SeaOrmCityRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn model_to_domain(m: city::Model) -> City {
    City {
        id: m.id,
        name: m.name,
        lat: m.lat,
        lon: m.lon,
    }
}

fn edge_to_domain(m: city_edge::Model) -> CityEdge {
    CityEdge {
        from_id: m.from_id,
        to_id: m.to_id,
        distance_km: m.distance_km,
    }
}

#[async_trait]
impl CityRepository for SeaOrmCityRepository {
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<City>> {
        let model = city::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(model_to_domain))
    }

    async fn find_all(&self) -> DomainResult<Vec<City>> {
        let models = city::Entity::find()
            .order_by_asc(city::Column::Id)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn save(&self, c: NewCity) -> DomainResult<City> {
        debug!("Saving city: {}", c.name);

        let model = city::ActiveModel {
            id: NotSet,
            name: Set(c.name),
            lat: Set(c.lat),
            lon: Set(c.lon),
        };
        let inserted = model.insert(&self.db).await?;
        Ok(model_to_domain(inserted))
    }

    async fn count(&self) -> DomainResult<u64> {
        Ok(city::Entity::find().count(&self.db).await?)
    }

    async fn save_edge(&self, edge: CityEdge) -> DomainResult<CityEdge> {
        // same error as the in-memory store instead of a raw FK failure
        for end in [edge.from_id, edge.to_id] {
            if city::Entity::find_by_id(end).one(&self.db).await?.is_none() {
                return Err(DomainError::validation(format!(
                    "Edge references missing city id: {}",
                    end
                )));
            }
        }
        debug!("Saving road {} -> {}", edge.from_id, edge.to_id);

        let model = city_edge::ActiveModel {
            id: NotSet,
            from_id: Set(edge.from_id),
            to_id: Set(edge.to_id),
            distance_km: Set(edge.distance_km),
        };
        let inserted = model.insert(&self.db).await?;
        Ok(edge_to_domain(inserted))
    }

    async fn edges(&self) -> DomainResult<Vec<CityEdge>> {
        let models = city_edge::Entity::find()
            .order_by_asc(city_edge::Column::Id)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(edge_to_domain).collect())
    }

    async fn edges_of(&self, city_id: i64) -> DomainResult<Vec<CityEdge>> {
        let models = city_edge::Entity::find()
            .filter(
                Condition::any()
                    .add(city_edge::Column::FromId.eq(city_id))
                    .add(city_edge::Column::ToId.eq(city_id)),
            )
            .order_by_asc(city_edge::Column::Id)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(edge_to_domain).collect())
    }
}
