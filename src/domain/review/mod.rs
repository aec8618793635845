//! Review aggregate

pub mod model;
pub mod repository;

pub use model::{validate_rating, Review, ReviewChanges, ReviewDraft, ReviewView, MAX_RATING, MIN_RATING};
pub use repository::ReviewRepository;
