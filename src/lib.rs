//! # Travel Listings API
//!
//! REST service for a travel-listings platform: hosts publish listings,
//! guests book them and leave reviews.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: Core entities, ownership rules and repository traits
//! - **application**: Use cases (listing, booking, review, identity services)
//! - **infrastructure**: External concerns (database, crypto)
//! - **interfaces**: REST API with Swagger documentation
//! - **support**: Cross-cutting helpers (errors, shutdown)

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod support;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig, SeaOrmRepositoryProvider};

// Re-export API router
pub use interfaces::http::create_api_router;
