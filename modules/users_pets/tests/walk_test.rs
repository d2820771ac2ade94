mod common;

use anyhow::Result;

use common::{create_test_service, new_user};
use users_pets::contract::model::NewPet;
use users_pets::domain::error::DomainError;
use users_pets::domain::walk::WALK_HAPPINESS;

#[tokio::test]
async fn test_walk_without_pets_fails_and_changes_nothing() -> Result<()> {
    let service = create_test_service().await;
    let user = service
        .create_user(new_user("homer", Some("simpson"), "homer@example.com"))
        .await?;

    let result = service.take_a_walk(user.id).await;
    assert!(matches!(result, Err(DomainError::CantWalkWithoutPets { id }) if id == user.id));

    let reloaded = service.get_user(user.id).await?;
    assert_eq!(reloaded.happiness, 0);

    Ok(())
}

#[tokio::test]
async fn test_walk_with_a_pet_makes_happiness_twenty() -> Result<()> {
    let service = create_test_service().await;
    let user = service
        .create_user(new_user("homer", Some("simpson"), "homer@example.com"))
        .await?;
    service
        .add_pet(
            user.id,
            NewPet {
                name: Some("Santa's Little Helper".to_string()),
            },
        )
        .await?;

    let walked = service.take_a_walk(user.id).await?;
    assert_eq!(walked.happiness, WALK_HAPPINESS);
    assert_eq!(walked.happiness, 20);

    let reloaded = service.get_user(user.id).await?;
    assert_eq!(reloaded.happiness, 20);

    Ok(())
}

#[tokio::test]
async fn test_walking_twice_stays_at_twenty() -> Result<()> {
    let service = create_test_service().await;
    let user = service
        .create_user(new_user("marge", None, "marge@example.com"))
        .await?;
    service.add_pet(user.id, NewPet::default()).await?;
    service.add_pet(user.id, NewPet::default()).await?;

    service.take_a_walk(user.id).await?;
    let walked = service.take_a_walk(user.id).await?;

    assert_eq!(walked.happiness, 20);
    assert_eq!(service.get_user(user.id).await?.happiness, 20);

    Ok(())
}

#[tokio::test]
async fn test_walk_only_touches_the_walker() -> Result<()> {
    let service = create_test_service().await;
    let walker = service
        .create_user(new_user("homer", None, "homer@example.com"))
        .await?;
    let bystander = service
        .create_user(new_user("ned", None, "ned@example.com"))
        .await?;
    service.add_pet(walker.id, NewPet::default()).await?;

    service.take_a_walk(walker.id).await?;

    assert_eq!(service.get_user(bystander.id).await?.happiness, 0);

    Ok(())
}
