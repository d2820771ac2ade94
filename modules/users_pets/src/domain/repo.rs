use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::contract::model::{Pet, User};

/// Persistence port for users and the pets they own.
#[async_trait]
pub trait UsersRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<User>>;

    async fn insert(&self, user: User) -> anyhow::Result<()>;

    /// Returns false when no such user exists.
    async fn update_happiness(
        &self,
        id: Uuid,
        happiness: i32,
        updated_at: DateTime<Utc>,
    ) -> anyhow::Result<bool>;

    /// Removes the user and every pet they own. Returns false when no such user exists.
    async fn delete(&self, id: Uuid) -> anyhow::Result<bool>;

    async fn insert_pet(&self, pet: Pet) -> anyhow::Result<()>;

    /// Oldest first.
    async fn pets_of(&self, user_id: Uuid) -> anyhow::Result<Vec<Pet>>;
}
