//! HTTP REST API interfaces
//!
//! - `common`: response envelope, error mapping, validated JSON extractor
//! - `middleware`: JWT authentication middleware
//! - `modules`: per-resource handlers, DTOs and operation metadata
//! - `docs`: operation metadata applied to the OpenAPI document
//! - `router`: API router with Swagger documentation

pub mod common;
pub mod docs;
pub mod dto;
pub mod middleware;
pub mod modules;
pub mod router;

#[cfg(test)]
mod tests;

pub use router::create_api_router;
