//! SeaORM implementation of HotelRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, NotSet, PaginatorTrait, QueryOrder, Set,
};
use tracing::debug;

use crate::domain::{DomainResult, Hotel, HotelRepository, NewHotel};
use crate::infrastructure::database::entities::hotel;

pub struct SeaOrmHotelRepository {
    db: DatabaseConnection,
}

impl SeaOrmHotelRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn model_to_domain(m: hotel::Model) -> Hotel {
    Hotel {
        id: m.id,
        name: m.name,
        city_id: m.city_id,
        star_rating: m.star_rating,
        price_per_night: m.price_per_night,
    }
}

#[async_trait]
impl HotelRepository for SeaOrmHotelRepository {
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Hotel>> {
        let model = hotel::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(model_to_domain))
    }

    async fn find_all(&self) -> DomainResult<Vec<Hotel>> {
        let models = hotel::Entity::find()
            .order_by_asc(hotel::Column::Id)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn save(&self, h: NewHotel) -> DomainResult<Hotel> {
        debug!("Saving hotel: {}", h.name);

        let model = hotel::ActiveModel {
            id: NotSet,
            name: Set(h.name),
            city_id: Set(h.city_id),
            star_rating: Set(h.star_rating),
            price_per_night: Set(h.price_per_night),
        };
        let inserted = model.insert(&self.db).await?;
        Ok(model_to_domain(inserted))
    }

    async fn count(&self) -> DomainResult<u64> {
        Ok(hotel::Entity::find().count(&self.db).await?)
    }
}
