use async_trait::async_trait;
use uuid::Uuid;

use crate::contract::{
    error::UsersPetsError,
    model::{NewPet, NewUser, Pet, User},
};

/// Public API trait for the users_pets module that other modules can use
#[async_trait]
pub trait UsersPetsApi: Send + Sync {
    /// Get a user by ID
    async fn get_user(&self, id: Uuid) -> Result<User, UsersPetsError>;

    /// Validate and store a new user
    async fn create_user(&self, new_user: NewUser) -> Result<User, UsersPetsError>;

    /// Delete a user together with all of their pets
    async fn delete_user(&self, id: Uuid) -> Result<(), UsersPetsError>;

    /// Give a user a new pet
    async fn add_pet(&self, user_id: Uuid, new_pet: NewPet) -> Result<Pet, UsersPetsError>;

    /// Pets owned by a user
    async fn list_pets(&self, user_id: Uuid) -> Result<Vec<Pet>, UsersPetsError>;

    /// Take the user for a nice walk; fails when they own no pets
    async fn take_a_walk(&self, user_id: Uuid) -> Result<User, UsersPetsError>;
}
