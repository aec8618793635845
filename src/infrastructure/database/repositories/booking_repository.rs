//! SeaORM implementation of BookingRepository

use async_trait::async_trait;
use log::debug;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use super::listing_repository::load_listing_refs;
use super::update_err;
use super::user_repository::model_to_summary;
use crate::domain::booking::{Booking, BookingRepository, BookingStatus, BookingView};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::{booking, user};

pub struct SeaOrmBookingRepository {
    db: DatabaseConnection,
}

impl SeaOrmBookingRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Attach listing references to (booking, guest) rows.
    async fn assemble(
        &self,
        rows: Vec<(booking::Model, Option<user::Model>)>,
    ) -> DomainResult<Vec<BookingView>> {
        let refs = load_listing_refs(&self.db, rows.iter().map(|(b, _)| b.listing_id.clone())).await?;

        rows.into_iter()
            .map(|(m, guest)| {
                let guest = guest
                    .ok_or_else(|| DomainError::Database(format!("Booking {} has no guest", m.id)))?;
                let listing = refs.get(&m.listing_id).cloned().ok_or_else(|| {
                    DomainError::Database(format!("Booking {} has no listing", m.id))
                })?;
                Ok(BookingView {
                    booking: model_to_domain(m)?,
                    guest: model_to_summary(guest),
                    listing,
                })
            })
            .collect()
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(m: booking::Model) -> DomainResult<Booking> {
    let status = BookingStatus::parse(&m.status).ok_or_else(|| {
        DomainError::Database(format!("Booking {} has unknown status '{}'", m.id, m.status))
    })?;
    Ok(Booking {
        id: m.id,
        listing_id: m.listing_id,
        guest_id: m.guest_id,
        check_in: m.check_in,
        check_out: m.check_out,
        status,
        created_at: m.created_at,
        updated_at: m.updated_at,
    })
}

fn domain_to_active(b: Booking) -> booking::ActiveModel {
    booking::ActiveModel {
        id: Set(b.id),
        listing_id: Set(b.listing_id),
        guest_id: Set(b.guest_id),
        check_in: Set(b.check_in),
        check_out: Set(b.check_out),
        status: Set(b.status.as_str().to_string()),
        created_at: Set(b.created_at),
        updated_at: Set(b.updated_at),
    }
}

// ── BookingRepository impl ──────────────────────────────────────

#[async_trait]
impl BookingRepository for SeaOrmBookingRepository {
    async fn save(&self, b: Booking) -> DomainResult<()> {
        debug!(
            "Saving booking: {} (listing {}, guest {}, {} -> {})",
            b.id, b.listing_id, b.guest_id, b.check_in, b.check_out
        );
        domain_to_active(b).insert(&self.db).await?;
        Ok(())
    }

    async fn update(&self, b: Booking) -> DomainResult<()> {
        debug!("Updating booking: {} status={}", b.id, b.status);
        let id = b.id.clone();
        domain_to_active(b)
            .update(&self.db)
            .await
            .map_err(|e| update_err(e, "Booking", &id))?;
        Ok(())
    }

    async fn delete(&self, id: &str) -> DomainResult<bool> {
        debug!("Deleting booking: {}", id);
        let result = booking::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected > 0)
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<BookingView>> {
        let row = booking::Entity::find_by_id(id)
            .find_also_related(user::Entity)
            .one(&self.db)
            .await?;
        match row {
            Some(row) => Ok(self.assemble(vec![row]).await?.pop()),
            None => Ok(None),
        }
    }

    async fn find_all(&self) -> DomainResult<Vec<BookingView>> {
        let rows = booking::Entity::find()
            .find_also_related(user::Entity)
            .order_by_desc(booking::Column::CreatedAt)
            .all(&self.db)
            .await?;
        self.assemble(rows).await
    }

    async fn find_by_listings(&self, listing_ids: &[String]) -> DomainResult<Vec<BookingView>> {
        if listing_ids.is_empty() {
            return Ok(Vec::new());
        }
        let rows = booking::Entity::find()
            .filter(booking::Column::ListingId.is_in(listing_ids.iter().cloned()))
            .find_also_related(user::Entity)
            .order_by_asc(booking::Column::CreatedAt)
            .all(&self.db)
            .await?;
        self.assemble(rows).await
    }
}
