//! Tests to verify that the service layer emits expected tracing spans and events

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use anyhow::Result;
use chrono::{DateTime, Utc};
use tracing_test::traced_test;
use uuid::Uuid;

use users_pets::contract::model::{NewPet, NewUser, Pet, User};
use users_pets::domain::repo::UsersRepository;
use users_pets::domain::service::Service;

// In-memory repository for testing
#[derive(Default)]
struct MockUsersRepository {
    users: Mutex<HashMap<Uuid, User>>,
    pets: Mutex<Vec<Pet>>,
}

#[async_trait::async_trait]
impl UsersRepository for MockUsersRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>> {
        Ok(self.users.lock().unwrap().get(&id).cloned())
    }

    async fn insert(&self, user: User) -> Result<()> {
        self.users.lock().unwrap().insert(user.id, user);
        Ok(())
    }

    async fn update_happiness(
        &self,
        id: Uuid,
        happiness: i32,
        updated_at: DateTime<Utc>,
    ) -> Result<bool> {
        let mut users = self.users.lock().unwrap();
        Ok(match users.get_mut(&id) {
            Some(u) => {
                u.happiness = happiness;
                u.updated_at = updated_at;
                true
            }
            None => false,
        })
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        self.pets.lock().unwrap().retain(|p| p.user_id != id);
        Ok(self.users.lock().unwrap().remove(&id).is_some())
    }

    async fn insert_pet(&self, pet: Pet) -> Result<()> {
        self.pets.lock().unwrap().push(pet);
        Ok(())
    }

    async fn pets_of(&self, user_id: Uuid) -> Result<Vec<Pet>> {
        Ok(self
            .pets
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.user_id == user_id)
            .cloned()
            .collect())
    }
}

// Repository whose storage is always down
struct BrokenRepository;

#[async_trait::async_trait]
impl UsersRepository for BrokenRepository {
    async fn find_by_id(&self, _id: Uuid) -> Result<Option<User>> {
        anyhow::bail!("connection refused")
    }

    async fn insert(&self, _user: User) -> Result<()> {
        anyhow::bail!("connection refused")
    }

    async fn update_happiness(&self, _: Uuid, _: i32, _: DateTime<Utc>) -> Result<bool> {
        anyhow::bail!("connection refused")
    }

    async fn delete(&self, _id: Uuid) -> Result<bool> {
        anyhow::bail!("connection refused")
    }

    async fn insert_pet(&self, _pet: Pet) -> Result<()> {
        anyhow::bail!("connection refused")
    }

    async fn pets_of(&self, _user_id: Uuid) -> Result<Vec<Pet>> {
        anyhow::bail!("connection refused")
    }
}

fn service() -> Service {
    Service::new(Arc::new(MockUsersRepository::default()))
}

fn homer() -> NewUser {
    NewUser {
        first_name: "homer".to_string(),
        last_name: Some("simpson".to_string()),
        email: "homer@example.com".to_string(),
    }
}

#[traced_test]
#[tokio::test]
async fn create_user_emits_spans() {
    let service = service();

    let result = service.create_user(homer()).await;

    assert!(result.is_ok());
    assert!(logs_contain("users_pets.service.create_user"));
    assert!(logs_contain("Creating new user"));
    assert!(logs_contain("homer@example.com"));
}

#[traced_test]
#[tokio::test]
async fn get_user_records_user_id() {
    let service = service();
    let user = service.create_user(homer()).await.unwrap();

    let result = service.get_user(user.id).await;

    assert!(result.is_ok());
    assert!(logs_contain("users_pets.service.get_user"));
    assert!(logs_contain(&user.id.to_string()));
}

#[traced_test]
#[tokio::test]
async fn take_a_walk_emits_spans() {
    let service = service();
    let user = service.create_user(homer()).await.unwrap();
    service.add_pet(user.id, NewPet::default()).await.unwrap();

    let walked = service.take_a_walk(user.id).await.unwrap();

    assert_eq!(walked.happiness, 20);
    assert!(logs_contain("users_pets.service.take_a_walk"));
    assert!(logs_contain("Back from a nice walk"));
}

#[traced_test]
#[tokio::test]
async fn delete_user_emits_spans() {
    let service = service();
    let user = service.create_user(homer()).await.unwrap();

    let result = service.delete_user(user.id).await;

    assert!(result.is_ok());
    assert!(logs_contain("users_pets.service.delete_user"));
    assert!(logs_contain("Successfully deleted user"));
}

#[traced_test]
#[tokio::test]
async fn storage_failures_become_database_errors() {
    let service = Service::new(Arc::new(BrokenRepository));

    let err = service.get_user(Uuid::new_v4()).await.unwrap_err();

    match err {
        users_pets::domain::error::DomainError::Database { message } => {
            assert!(message.contains("connection refused"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(logs_contain("users_pets.service.get_user"));
}
