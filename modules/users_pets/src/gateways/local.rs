use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::contract::{
    client::UsersPetsApi,
    error::UsersPetsError,
    model::{NewPet, NewUser, Pet, User},
};
use crate::domain::service::Service;

/// Local implementation of the UsersPetsApi trait that delegates to the domain service
pub struct UsersPetsLocalClient {
    service: Arc<Service>,
}

impl UsersPetsLocalClient {
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl UsersPetsApi for UsersPetsLocalClient {
    async fn get_user(&self, id: Uuid) -> Result<User, UsersPetsError> {
        self.service.get_user(id).await.map_err(Into::into)
    }

    async fn create_user(&self, new_user: NewUser) -> Result<User, UsersPetsError> {
        self.service.create_user(new_user).await.map_err(Into::into)
    }

    async fn delete_user(&self, id: Uuid) -> Result<(), UsersPetsError> {
        self.service.delete_user(id).await.map_err(Into::into)
    }

    async fn add_pet(&self, user_id: Uuid, new_pet: NewPet) -> Result<Pet, UsersPetsError> {
        self.service
            .add_pet(user_id, new_pet)
            .await
            .map_err(Into::into)
    }

    async fn list_pets(&self, user_id: Uuid) -> Result<Vec<Pet>, UsersPetsError> {
        self.service.list_pets(user_id).await.map_err(Into::into)
    }

    async fn take_a_walk(&self, user_id: Uuid) -> Result<User, UsersPetsError> {
        self.service.take_a_walk(user_id).await.map_err(Into::into)
    }
}
