use sea_orm::Set;

use crate::contract::model::{Pet, User};
use crate::infra::storage::entity::{pet, user};

/// Convert a database entity to a contract model
pub fn user_to_contract(entity: user::Model) -> User {
    User {
        id: entity.id,
        first_name: entity.first_name,
        last_name: entity.last_name,
        email: entity.email,
        happiness: entity.happiness,
        created_at: entity.created_at,
        updated_at: entity.updated_at,
    }
}

pub fn user_to_active(user: User) -> user::ActiveModel {
    user::ActiveModel {
        id: Set(user.id),
        first_name: Set(user.first_name),
        last_name: Set(user.last_name),
        email: Set(user.email),
        happiness: Set(user.happiness),
        created_at: Set(user.created_at),
        updated_at: Set(user.updated_at),
    }
}

pub fn pet_to_contract(entity: pet::Model) -> Pet {
    Pet {
        id: entity.id,
        name: entity.name,
        user_id: entity.user_id,
        created_at: entity.created_at,
        updated_at: entity.updated_at,
    }
}

pub fn pet_to_active(pet: Pet) -> pet::ActiveModel {
    pet::ActiveModel {
        id: Set(pet.id),
        name: Set(pet.name),
        user_id: Set(pet.user_id),
        created_at: Set(pet.created_at),
        updated_at: Set(pet.updated_at),
    }
}
