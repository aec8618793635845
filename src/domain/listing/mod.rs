//! Listing aggregate
//!
//! Contains the Listing entity, related types, and repository interface.

pub mod model;
pub mod repository;

pub use model::{Listing, ListingChanges, ListingDetail, ListingDraft, ListingRef, ListingView};
pub use repository::ListingRepository;
