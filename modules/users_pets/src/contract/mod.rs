pub mod client;
pub mod error;
pub mod model;

pub use client::UsersPetsApi;
pub use error::{FieldError, FieldErrors, UsersPetsError};
pub use model::{NewPet, NewUser, Pet, User};
