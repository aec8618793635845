//! SeaORM implementation of ListingRepository

use std::collections::HashMap;

use async_trait::async_trait;
use log::debug;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use super::update_err;
use super::user_repository::model_to_summary;
use crate::domain::listing::{Listing, ListingRef, ListingRepository, ListingView};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::{listing, user};

pub struct SeaOrmListingRepository {
    db: DatabaseConnection,
}

impl SeaOrmListingRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(m: listing::Model) -> Listing {
    Listing {
        id: m.id,
        host_id: m.host_id,
        title: m.title,
        description: m.description,
        location: m.location,
        price_per_night: m.price_per_night,
        created_at: m.created_at,
        updated_at: m.updated_at,
    }
}

fn domain_to_active(l: Listing) -> listing::ActiveModel {
    listing::ActiveModel {
        id: Set(l.id),
        host_id: Set(l.host_id),
        title: Set(l.title),
        description: Set(l.description),
        location: Set(l.location),
        price_per_night: Set(l.price_per_night),
        created_at: Set(l.created_at),
        updated_at: Set(l.updated_at),
    }
}

fn join_host(m: listing::Model, host: Option<user::Model>) -> DomainResult<ListingView> {
    let host = host.ok_or_else(|| DomainError::Database(format!("Listing {} has no host", m.id)))?;
    Ok(ListingView {
        listing: model_to_domain(m),
        host: model_to_summary(host),
    })
}

/// Load compact listing references (with hosts) for the given IDs in one query.
pub(super) async fn load_listing_refs(
    db: &DatabaseConnection,
    ids: impl IntoIterator<Item = String>,
) -> DomainResult<HashMap<String, ListingRef>> {
    let mut ids: Vec<String> = ids.into_iter().collect();
    ids.sort();
    ids.dedup();
    if ids.is_empty() {
        return Ok(HashMap::new());
    }

    let rows = listing::Entity::find()
        .filter(listing::Column::Id.is_in(ids))
        .find_also_related(user::Entity)
        .all(db)
        .await?;

    rows.into_iter()
        .map(|(m, host)| {
            let view = join_host(m, host)?;
            Ok((view.listing.id.clone(), view.to_ref()))
        })
        .collect()
}

// ── ListingRepository impl ──────────────────────────────────────

#[async_trait]
impl ListingRepository for SeaOrmListingRepository {
    async fn save(&self, l: Listing) -> DomainResult<()> {
        debug!("Saving listing: {} (host {})", l.id, l.host_id);
        domain_to_active(l).insert(&self.db).await?;
        Ok(())
    }

    async fn update(&self, l: Listing) -> DomainResult<()> {
        debug!("Updating listing: {}", l.id);
        let id = l.id.clone();
        domain_to_active(l)
            .update(&self.db)
            .await
            .map_err(|e| update_err(e, "Listing", &id))?;
        Ok(())
    }

    async fn delete(&self, id: &str) -> DomainResult<bool> {
        debug!("Deleting listing: {}", id);
        let result = listing::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected > 0)
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<ListingView>> {
        let row = listing::Entity::find_by_id(id)
            .find_also_related(user::Entity)
            .one(&self.db)
            .await?;
        row.map(|(m, host)| join_host(m, host)).transpose()
    }

    async fn find_all(&self) -> DomainResult<Vec<ListingView>> {
        let rows = listing::Entity::find()
            .find_also_related(user::Entity)
            .order_by_desc(listing::Column::CreatedAt)
            .all(&self.db)
            .await?;
        rows.into_iter().map(|(m, host)| join_host(m, host)).collect()
    }
}
