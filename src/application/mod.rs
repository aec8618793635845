pub mod identity;
pub mod services;

// Re-export key types for convenience
pub use identity::{AuthResult, IdentityService};
pub use services::{BookingService, ListingService, ReviewService};
