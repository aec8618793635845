//! Booking aggregate

pub mod model;
pub mod repository;

pub use model::{Booking, BookingChanges, BookingDraft, BookingStatus, BookingView};
pub use repository::BookingRepository;
