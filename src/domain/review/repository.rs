//! Review repository interface

use async_trait::async_trait;

use super::model::{Review, ReviewView};
use crate::domain::DomainResult;

#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Save a new review. A second review of the same listing by the same
    /// user yields `Conflict`.
    async fn save(&self, review: Review) -> DomainResult<()>;

    async fn update(&self, review: Review) -> DomainResult<()>;

    /// Returns `false` if nothing was deleted
    async fn delete(&self, id: &str) -> DomainResult<bool>;

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<ReviewView>>;

    /// All reviews, newest first
    async fn find_all(&self) -> DomainResult<Vec<ReviewView>>;

    /// Reviews of the given listings in one batch, oldest first
    async fn find_by_listings(&self, listing_ids: &[String]) -> DomainResult<Vec<ReviewView>>;

    /// Whether `user_id` already reviewed `listing_id`
    async fn exists_for(&self, listing_id: &str, user_id: &str) -> DomainResult<bool>;
}
