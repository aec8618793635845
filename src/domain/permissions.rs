//! Object-level permission gate
//!
//! Read actions are always allowed. Writes on an existing object are allowed
//! only for the user named by the object's owner field (`host_id` for
//! listings, `guest_id` for bookings, `user_id` for reviews).

use super::{DomainError, DomainResult, UserSummary};

/// Authenticated identity performing a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    pub user_id: String,
    pub username: String,
}

impl Caller {
    pub fn new(user_id: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            username: username.into(),
        }
    }

    pub fn summary(&self) -> UserSummary {
        UserSummary {
            id: self.user_id.clone(),
            username: self.username.clone(),
        }
    }
}

/// Controller action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    List,
    Retrieve,
    Create,
    Update,
    PartialUpdate,
    Destroy,
}

impl Action {
    /// Read-only actions are exempt from ownership checks
    pub fn is_safe(self) -> bool {
        matches!(self, Self::List | Self::Retrieve)
    }

    fn verb(self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Retrieve => "view",
            Self::Create => "create",
            Self::Update | Self::PartialUpdate => "update",
            Self::Destroy => "delete",
        }
    }
}

/// An entity with a designated owning user.
pub trait Owned {
    /// Entity name used in error messages
    const ENTITY: &'static str;
    /// Role the owner plays for this entity (host, guest, author)
    const OWNER_ROLE: &'static str;

    fn owner_id(&self) -> &str;
}

pub fn is_owner<E: Owned>(entity: &E, caller: &Caller) -> bool {
    entity.owner_id() == caller.user_id
}

/// Check whether `caller` may perform `action` on an already fetched `entity`.
pub fn check_object_permission<E: Owned>(
    action: Action,
    entity: &E,
    caller: Option<&Caller>,
) -> DomainResult<()> {
    if action.is_safe() {
        return Ok(());
    }

    let Some(caller) = caller else {
        return Err(DomainError::Unauthorized(
            "Authentication credentials were not provided".to_string(),
        ));
    };

    if is_owner(entity, caller) {
        Ok(())
    } else {
        Err(DomainError::Forbidden(format!(
            "Only the {} can {} this {}",
            E::OWNER_ROLE,
            action.verb(),
            E::ENTITY.to_lowercase()
        )))
    }
}
