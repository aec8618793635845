//! Listing repository interface

use async_trait::async_trait;

use super::model::{Listing, ListingView};
use crate::domain::DomainResult;

#[async_trait]
pub trait ListingRepository: Send + Sync {
    /// Save a new listing
    async fn save(&self, listing: Listing) -> DomainResult<()>;

    /// Update an existing listing
    async fn update(&self, listing: Listing) -> DomainResult<()>;

    /// Delete a listing by ID. Returns `false` if nothing was deleted.
    async fn delete(&self, id: &str) -> DomainResult<bool>;

    /// Find listing by ID, joined with its host
    async fn find_by_id(&self, id: &str) -> DomainResult<Option<ListingView>>;

    /// All listings, newest first, joined with their hosts
    async fn find_all(&self) -> DomainResult<Vec<ListingView>>;
}
