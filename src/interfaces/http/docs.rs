//! Operation metadata for the OpenAPI document
//!
//! Each resource module declares an `OPERATIONS` table of `OperationMeta`
//! records. `OperationMetadataAddon` writes them into the generated document:
//! tag, summary, description and bearer security for authenticated
//! operations. Handlers themselves only describe request and response shapes.

use utoipa::openapi::path::{Operation, PathItem};
use utoipa::openapi::security::SecurityRequirement;
use utoipa::openapi::OpenApi;
use utoipa::Modify;

use super::modules::{auth, bookings, health, listings, reviews};

/// Name of the bearer security scheme registered in the document
pub const BEARER_SCHEME: &str = "bearer_auth";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthRequirement {
    Public,
    Authenticated,
}

/// Documentation for a single HTTP operation
#[derive(Debug, Clone, Copy)]
pub struct OperationMeta {
    pub method: HttpMethod,
    pub path: &'static str,
    pub tag: &'static str,
    pub summary: &'static str,
    pub description: &'static str,
    pub auth: AuthRequirement,
}

impl OperationMeta {
    pub const fn public(
        method: HttpMethod,
        path: &'static str,
        tag: &'static str,
        summary: &'static str,
        description: &'static str,
    ) -> Self {
        Self {
            method,
            path,
            tag,
            summary,
            description,
            auth: AuthRequirement::Public,
        }
    }

    pub const fn authenticated(
        method: HttpMethod,
        path: &'static str,
        tag: &'static str,
        summary: &'static str,
        description: &'static str,
    ) -> Self {
        Self {
            method,
            path,
            tag,
            summary,
            description,
            auth: AuthRequirement::Authenticated,
        }
    }
}

/// Every documented operation, grouped by resource
pub fn all_operations() -> impl Iterator<Item = &'static OperationMeta> {
    health::OPERATIONS
        .iter()
        .chain(auth::OPERATIONS)
        .chain(listings::OPERATIONS)
        .chain(bookings::OPERATIONS)
        .chain(reviews::OPERATIONS)
}

fn operation_mut(item: &mut PathItem, method: HttpMethod) -> Option<&mut Operation> {
    match method {
        HttpMethod::Get => item.get.as_mut(),
        HttpMethod::Post => item.post.as_mut(),
        HttpMethod::Put => item.put.as_mut(),
        HttpMethod::Patch => item.patch.as_mut(),
        HttpMethod::Delete => item.delete.as_mut(),
    }
}

/// Applies `OperationMeta` records to the generated document
pub struct OperationMetadataAddon;

impl Modify for OperationMetadataAddon {
    fn modify(&self, openapi: &mut OpenApi) {
        for meta in all_operations() {
            let Some(operation) = openapi
                .paths
                .paths
                .get_mut(meta.path)
                .and_then(|item| operation_mut(item, meta.method))
            else {
                tracing::warn!(path = meta.path, method = ?meta.method, "Undocumented operation metadata");
                continue;
            };

            operation.tags = Some(vec![meta.tag.to_string()]);
            operation.summary = Some(meta.summary.to_string());
            operation.description = Some(meta.description.to_string());
            if meta.auth == AuthRequirement::Authenticated {
                operation.security = Some(vec![SecurityRequirement::new(
                    BEARER_SCHEME,
                    Vec::<String>::new(),
                )]);
            }
        }
    }
}
