use thiserror::Error;
use uuid::Uuid;

use crate::contract::error::FieldErrors;

/// Domain-specific errors using thiserror
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("User not found: {id}")]
    UserNotFound { id: Uuid },

    #[error("Validation failed: {errors}")]
    Validation { errors: FieldErrors },

    #[error("User {id} can't walk without pets")]
    CantWalkWithoutPets { id: Uuid },

    #[error("Database error: {message}")]
    Database { message: String },
}

impl DomainError {
    pub fn user_not_found(id: Uuid) -> Self {
        Self::UserNotFound { id }
    }

    pub fn validation(errors: FieldErrors) -> Self {
        Self::Validation { errors }
    }

    pub fn cant_walk_without_pets(id: Uuid) -> Self {
        Self::CantWalkWithoutPets { id }
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::Database {
            message: message.into(),
        }
    }
}

impl From<anyhow::Error> for DomainError {
    fn from(e: anyhow::Error) -> Self {
        // {:#} keeps the whole context chain in one line
        Self::database(format!("{e:#}"))
    }
}
