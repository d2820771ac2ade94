//! The "nice walk": a user with at least one pet comes back with happiness 20.

use async_trait::async_trait;
use thiserror::Error;

use crate::contract::model::Pet;

/// Happiness a user has after any successful walk. Assigned, not added.
pub const WALK_HAPPINESS: i32 = 20;

/// Whoever goes for the walk: needs to know their pets and to be made happy.
#[async_trait]
pub trait Walker: Send + Sync {
    async fn pets(&self) -> anyhow::Result<Vec<Pet>>;

    async fn set_happiness(&mut self, happiness: i32) -> anyhow::Result<()>;
}

#[derive(Error, Debug)]
pub enum WalkError {
    #[error("can't walk without pets")]
    CantWalkWithoutPets,

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

pub struct ANiceWalk;

impl ANiceWalk {
    /// Nothing is mutated when the walker has no pets.
    pub async fn take<W: Walker + ?Sized>(walker: &mut W) -> Result<(), WalkError> {
        if walker.pets().await?.is_empty() {
            return Err(WalkError::CantWalkWithoutPets);
        }
        walker.set_happiness(WALK_HAPPINESS).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    #[derive(Default)]
    struct FakeWalker {
        pets: Vec<Pet>,
        happiness: i32,
        set_calls: usize,
        broken_leash: bool,
    }

    impl FakeWalker {
        fn with_pets(count: usize) -> Self {
            let owner = Uuid::new_v4();
            let now = Utc::now();
            let pets = (0..count)
                .map(|i| Pet {
                    id: Uuid::new_v4(),
                    name: Some(format!("Rex {i}")),
                    user_id: owner,
                    created_at: now,
                    updated_at: now,
                })
                .collect();
            Self {
                pets,
                ..Default::default()
            }
        }
    }

    #[async_trait]
    impl Walker for FakeWalker {
        async fn pets(&self) -> anyhow::Result<Vec<Pet>> {
            Ok(self.pets.clone())
        }

        async fn set_happiness(&mut self, happiness: i32) -> anyhow::Result<()> {
            if self.broken_leash {
                anyhow::bail!("leash snapped");
            }
            self.set_calls += 1;
            self.happiness = happiness;
            Ok(())
        }
    }

    #[tokio::test]
    async fn no_pets_no_walk() {
        let mut walker = FakeWalker {
            happiness: 3,
            ..Default::default()
        };

        let err = ANiceWalk::take(&mut walker).await.unwrap_err();

        assert!(matches!(err, WalkError::CantWalkWithoutPets));
        assert_eq!(walker.happiness, 3);
        assert_eq!(walker.set_calls, 0);
    }

    #[tokio::test]
    async fn walk_with_a_pet_sets_happiness_once() {
        let mut walker = FakeWalker::with_pets(1);

        ANiceWalk::take(&mut walker).await.unwrap();

        assert_eq!(walker.happiness, WALK_HAPPINESS);
        assert_eq!(walker.set_calls, 1);
    }

    #[tokio::test]
    async fn happiness_is_assigned_not_accumulated() {
        let mut walker = FakeWalker::with_pets(3);
        walker.happiness = 55;

        ANiceWalk::take(&mut walker).await.unwrap();
        ANiceWalk::take(&mut walker).await.unwrap();

        assert_eq!(walker.happiness, 20);
        assert_eq!(walker.set_calls, 2);
    }

    #[tokio::test]
    async fn storage_failure_is_passed_through() {
        let mut walker = FakeWalker::with_pets(1);
        walker.broken_leash = true;

        let err = ANiceWalk::take(&mut walker).await.unwrap_err();

        match err {
            WalkError::Storage(e) => assert_eq!(e.to_string(), "leash snapped"),
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(walker.happiness, 0);
    }
}
