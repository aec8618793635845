//! SeaORM implementation of UserRepository

use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use sea_orm::prelude::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use super::insert_err;
use crate::domain::user::{User, UserRepository, UserSummary};
use crate::domain::DomainResult;
use crate::infrastructure::database::entities::user;

pub struct SeaOrmUserRepository {
    db: DatabaseConnection,
}

impl SeaOrmUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(m: user::Model) -> User {
    User {
        id: m.id,
        username: m.username,
        email: m.email,
        password_hash: m.password_hash,
        is_active: m.is_active,
        created_at: m.created_at,
        updated_at: m.updated_at,
        last_login_at: m.last_login_at,
    }
}

pub(super) fn model_to_summary(m: user::Model) -> UserSummary {
    UserSummary {
        id: m.id,
        username: m.username,
    }
}

#[async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn create(&self, u: User) -> DomainResult<()> {
        debug!("Creating user: {}", u.username);

        let model = user::ActiveModel {
            id: Set(u.id),
            username: Set(u.username),
            email: Set(u.email),
            password_hash: Set(u.password_hash),
            is_active: Set(u.is_active),
            created_at: Set(u.created_at),
            updated_at: Set(u.updated_at),
            last_login_at: Set(u.last_login_at),
        };
        model
            .insert(&self.db)
            .await
            .map_err(|e| insert_err(e, "Username or email already exists"))?;
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<User>> {
        let model = user::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(model_to_domain))
    }

    async fn find_by_username(&self, username: &str) -> DomainResult<Option<User>> {
        let model = user::Entity::find()
            .filter(user::Column::Username.eq(username))
            .one(&self.db)
            .await?;
        Ok(model.map(model_to_domain))
    }

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        let model = user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await?;
        Ok(model.map(model_to_domain))
    }

    async fn touch_last_login(&self, id: &str) -> DomainResult<()> {
        user::Entity::update_many()
            .col_expr(user::Column::LastLoginAt, Expr::value(Utc::now()))
            .filter(user::Column::Id.eq(id))
            .exec(&self.db)
            .await?;
        Ok(())
    }
}
