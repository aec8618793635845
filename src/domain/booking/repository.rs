//! Booking repository interface

use async_trait::async_trait;

use super::model::{Booking, BookingView};
use crate::domain::DomainResult;

#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn save(&self, booking: Booking) -> DomainResult<()>;

    async fn update(&self, booking: Booking) -> DomainResult<()>;

    /// Returns `false` if nothing was deleted
    async fn delete(&self, id: &str) -> DomainResult<bool>;

    /// Find booking by ID, joined with guest and listing host
    async fn find_by_id(&self, id: &str) -> DomainResult<Option<BookingView>>;

    /// All bookings, newest first
    async fn find_all(&self) -> DomainResult<Vec<BookingView>>;

    /// Bookings of the given listings in one batch, oldest first
    async fn find_by_listings(&self, listing_ids: &[String]) -> DomainResult<Vec<BookingView>>;
}
