//! SeaORM implementation of ReservationRepository

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, NotSet, QueryOrder, Set};
use tracing::debug;

use crate::domain::{DomainResult, NewReservation, Reservation, ReservationRepository};
use crate::infrastructure::database::entities::reservation;

pub struct SeaOrmReservationRepository {
    db: DatabaseConnection,
}

impl SeaOrmReservationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(m: reservation::Model) -> Reservation {
    Reservation {
        id: m.id,
        hotel_id: m.hotel_id,
        guest_name: m.guest_name,
        email: m.email,
        num_guests: m.num_guests,
        start_date: m.start_date,
        end_date: m.end_date,
    }
}

// ── ReservationRepository impl ──────────────────────────────────

#[async_trait]
impl ReservationRepository for SeaOrmReservationRepository {
    async fn save(&self, r: NewReservation) -> DomainResult<Reservation> {
        debug!("Saving reservation for hotel {}", r.hotel_id);

        let model = reservation::ActiveModel {
            id: NotSet,
            hotel_id: Set(r.hotel_id),
            guest_name: Set(r.guest_name),
            email: Set(r.email),
            num_guests: Set(r.num_guests),
            start_date: Set(r.start_date),
            end_date: Set(r.end_date),
        };
        let inserted = model.insert(&self.db).await?;
        Ok(model_to_domain(inserted))
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Reservation>> {
        let model = reservation::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(model_to_domain))
    }

    async fn find_all(&self) -> DomainResult<Vec<Reservation>> {
        let models = reservation::Entity::find()
            .order_by_asc(reservation::Column::Id)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }
}
