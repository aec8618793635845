pub mod auth;
pub mod bookings;
pub mod health;
pub mod listings;
pub mod metrics;
pub mod request_id;
pub mod reviews;
