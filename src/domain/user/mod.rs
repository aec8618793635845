//! User aggregate

pub mod model;
pub mod repository;

pub use model::{User, UserSummary};
pub use repository::UserRepository;
