//! SeaORM-backed repository implementation for the domain port.
//!
//! Generic over `C: ConnectionTrait + TransactionTrait`, so it can be built
//! on a `DatabaseConnection` or on an already open transaction.

use anyhow::Context;
use chrono::{DateTime, Utc};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder,
    TransactionTrait,
};
use tracing::debug;
use uuid::Uuid;

use crate::contract::model::{Pet, User};
use crate::domain::repo::UsersRepository;
use crate::infra::storage::entity::{pet, user};
use crate::infra::storage::mapper;

/// SeaORM repository impl.
/// Holds a connection object; its lifetime/ownership is up to the caller.
pub struct SeaOrmUsersRepository<C>
where
    C: ConnectionTrait + TransactionTrait + Send + Sync,
{
    conn: C,
}

impl<C> SeaOrmUsersRepository<C>
where
    C: ConnectionTrait + TransactionTrait + Send + Sync,
{
    pub fn new(conn: C) -> Self {
        Self { conn }
    }
}

#[async_trait::async_trait]
impl<C> UsersRepository for SeaOrmUsersRepository<C>
where
    C: ConnectionTrait + TransactionTrait + Send + Sync + 'static,
{
    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<User>> {
        let found = user::Entity::find_by_id(id)
            .one(&self.conn)
            .await
            .context("find_by_id failed")?;
        Ok(found.map(mapper::user_to_contract))
    }

    async fn insert(&self, u: User) -> anyhow::Result<()> {
        let _ = mapper::user_to_active(u)
            .insert(&self.conn)
            .await
            .context("insert failed")?;
        Ok(())
    }

    async fn update_happiness(
        &self,
        id: Uuid,
        happiness: i32,
        updated_at: DateTime<Utc>,
    ) -> anyhow::Result<bool> {
        let res = user::Entity::update_many()
            .col_expr(user::Column::Happiness, Expr::value(happiness))
            .col_expr(user::Column::UpdatedAt, Expr::value(updated_at))
            .filter(user::Column::Id.eq(id))
            .exec(&self.conn)
            .await
            .context("update_happiness failed")?;
        Ok(res.rows_affected > 0)
    }

    async fn delete(&self, id: Uuid) -> anyhow::Result<bool> {
        let txn = self.conn.begin().await.context("delete: begin failed")?;

        let pets = pet::Entity::delete_many()
            .filter(pet::Column::UserId.eq(id))
            .exec(&txn)
            .await
            .context("delete: removing pets failed")?;
        let res = user::Entity::delete_by_id(id)
            .exec(&txn)
            .await
            .context("delete failed")?;

        txn.commit().await.context("delete: commit failed")?;

        debug!(user_id = %id, pets_removed = pets.rows_affected, "Deleted user rows");
        Ok(res.rows_affected > 0)
    }

    async fn insert_pet(&self, p: Pet) -> anyhow::Result<()> {
        let _ = mapper::pet_to_active(p)
            .insert(&self.conn)
            .await
            .context("insert_pet failed")?;
        Ok(())
    }

    async fn pets_of(&self, user_id: Uuid) -> anyhow::Result<Vec<Pet>> {
        let rows = pet::Entity::find()
            .filter(pet::Column::UserId.eq(user_id))
            .order_by_asc(pet::Column::CreatedAt)
            .all(&self.conn)
            .await
            .context("pets_of failed")?;
        Ok(rows.into_iter().map(mapper::pet_to_contract).collect())
    }
}
