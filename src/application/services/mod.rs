//! Application services
//!
//! One service per resource. Each create method assigns the owner from the
//! caller; update and destroy fetch first, then run the permission gate.

mod booking;
mod listing;
mod review;

pub use booking::BookingService;
pub use listing::ListingService;
pub use review::ReviewService;

use crate::domain::{DomainError, DomainResult, ListingRef, RepositoryProvider};

/// Resolve the listing a booking or review points at.
///
/// An unknown listing is a payload error, not a missing resource.
async fn referenced_listing(repos: &dyn RepositoryProvider, listing_id: &str) -> DomainResult<ListingRef> {
    repos
        .listings()
        .find_by_id(listing_id)
        .await?
        .map(|view| view.to_ref())
        .ok_or_else(|| DomainError::InvalidField {
            field: "listing",
            message: format!("Listing {} does not exist", listing_id),
        })
}
