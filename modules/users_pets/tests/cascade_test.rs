mod common;

use anyhow::Result;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

use common::{create_test_module, new_user};
use users_pets::contract::model::NewPet;
use users_pets::infra::storage::entity::pet;

fn named(name: &str) -> NewPet {
    NewPet {
        name: Some(name.to_string()),
    }
}

#[tokio::test]
async fn test_deleting_a_user_deletes_their_pets() -> Result<()> {
    let (module, db) = create_test_module().await;
    let service = module.service();

    let homer = service
        .create_user(new_user("homer", Some("simpson"), "homer@example.com"))
        .await?;
    let ned = service
        .create_user(new_user("ned", Some("flanders"), "ned@example.com"))
        .await?;

    service.add_pet(homer.id, named("Santa's Little Helper")).await?;
    service.add_pet(homer.id, named("Snowball II")).await?;
    service.add_pet(ned.id, named("Rod's hamster")).await?;

    service.delete_user(homer.id).await?;

    let homers_pets = pet::Entity::find()
        .filter(pet::Column::UserId.eq(homer.id))
        .count(&db)
        .await?;
    assert_eq!(homers_pets, 0);

    let neds_pets = service.list_pets(ned.id).await?;
    assert_eq!(neds_pets.len(), 1);
    assert_eq!(neds_pets[0].name.as_deref(), Some("Rod's hamster"));

    Ok(())
}

#[tokio::test]
async fn test_schema_rejects_orphan_pets() -> Result<()> {
    use chrono::Utc;
    use sea_orm::{ActiveModelTrait, Set};
    use uuid::Uuid;

    let db = common::create_test_db().await;
    let now = Utc::now();

    let orphan = pet::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(Some("Stray".to_string())),
        user_id: Set(Uuid::new_v4()),
        created_at: Set(now),
        updated_at: Set(now),
    };

    assert!(orphan.insert(&db).await.is_err());

    Ok(())
}

#[tokio::test]
async fn test_pets_are_listed_oldest_first() -> Result<()> {
    let (module, _db) = create_test_module().await;
    let service = module.service();

    let user = service
        .create_user(new_user("lisa", Some("simpson"), "lisa@example.com"))
        .await?;
    for name in ["Snowball", "Snowball II", "Snowball V"] {
        service.add_pet(user.id, named(name)).await?;
        tokio::time::sleep(std::time::Duration::from_millis(2)).await;
    }

    let names: Vec<_> = service
        .list_pets(user.id)
        .await?
        .into_iter()
        .filter_map(|p| p.name)
        .collect();
    assert_eq!(names, ["Snowball", "Snowball II", "Snowball V"]);

    Ok(())
}
