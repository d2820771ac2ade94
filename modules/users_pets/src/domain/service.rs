use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::contract::model::{NewPet, NewUser, Pet, User};
use crate::domain::error::DomainError;
use crate::domain::repo::UsersRepository;
use crate::domain::validation::validate_new_user;
use crate::domain::walk::{ANiceWalk, WalkError, Walker};

/// Domain service for users and their pets
pub struct Service {
    repo: Arc<dyn UsersRepository>,
}

impl Service {
    pub fn new(repo: Arc<dyn UsersRepository>) -> Self {
        Self { repo }
    }

    #[instrument(name = "users_pets.service.get_user", skip(self), fields(user_id = %id))]
    pub async fn get_user(&self, id: Uuid) -> Result<User, DomainError> {
        debug!("Getting user by id");
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::user_not_found(id))
    }

    #[instrument(
        name = "users_pets.service.create_user",
        skip(self, new_user),
        fields(email = %new_user.email)
    )]
    pub async fn create_user(&self, new_user: NewUser) -> Result<User, DomainError> {
        info!("Creating new user");

        validate_new_user(&new_user).map_err(DomainError::validation)?;

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            first_name: new_user.first_name,
            last_name: new_user.last_name.filter(|n| !n.trim().is_empty()),
            email: new_user.email,
            happiness: 0,
            created_at: now,
            updated_at: now,
        };

        self.repo.insert(user.clone()).await?;

        info!(user_id = %user.id, "Successfully created user");
        Ok(user)
    }

    #[instrument(name = "users_pets.service.delete_user", skip(self), fields(user_id = %id))]
    pub async fn delete_user(&self, id: Uuid) -> Result<(), DomainError> {
        info!("Deleting user and their pets");

        if !self.repo.delete(id).await? {
            return Err(DomainError::user_not_found(id));
        }

        info!("Successfully deleted user");
        Ok(())
    }

    #[instrument(name = "users_pets.service.add_pet", skip(self, new_pet), fields(user_id = %user_id))]
    pub async fn add_pet(&self, user_id: Uuid, new_pet: NewPet) -> Result<Pet, DomainError> {
        self.get_user(user_id).await?;

        let now = Utc::now();
        let pet = Pet {
            id: Uuid::new_v4(),
            name: new_pet.name,
            user_id,
            created_at: now,
            updated_at: now,
        };

        self.repo.insert_pet(pet.clone()).await?;

        info!(pet_id = %pet.id, "Pet adopted");
        Ok(pet)
    }

    #[instrument(name = "users_pets.service.list_pets", skip(self), fields(user_id = %user_id))]
    pub async fn list_pets(&self, user_id: Uuid) -> Result<Vec<Pet>, DomainError> {
        self.get_user(user_id).await?;
        Ok(self.repo.pets_of(user_id).await?)
    }

    /// Runs [`ANiceWalk`] for the stored user and returns them afterwards.
    #[instrument(name = "users_pets.service.take_a_walk", skip(self), fields(user_id = %user_id))]
    pub async fn take_a_walk(&self, user_id: Uuid) -> Result<User, DomainError> {
        let mut user = self.get_user(user_id).await?;

        let mut walker = StoredWalker {
            user: &mut user,
            repo: self.repo.as_ref(),
        };
        ANiceWalk::take(&mut walker).await.map_err(|e| match e {
            WalkError::CantWalkWithoutPets => DomainError::cant_walk_without_pets(user_id),
            WalkError::Storage(e) => DomainError::from(e),
        })?;

        info!(happiness = user.happiness, "Back from a nice walk");
        Ok(user)
    }
}

/// A loaded user whose happiness changes are written through to storage.
struct StoredWalker<'a> {
    user: &'a mut User,
    repo: &'a dyn UsersRepository,
}

#[async_trait]
impl Walker for StoredWalker<'_> {
    async fn pets(&self) -> anyhow::Result<Vec<Pet>> {
        self.repo.pets_of(self.user.id).await
    }

    async fn set_happiness(&mut self, happiness: i32) -> anyhow::Result<()> {
        let now = Utc::now();
        if !self
            .repo
            .update_happiness(self.user.id, happiness, now)
            .await?
        {
            anyhow::bail!("user {} vanished during the walk", self.user.id);
        }
        self.user.set_happiness(happiness);
        self.user.updated_at = now;
        Ok(())
    }
}
