use crate::contract::{error::FieldErrors, model::NewUser};

pub const BLANK: &str = "can't be blank";

/// Field rules for a user about to be stored.
pub fn validate_new_user(new_user: &NewUser) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    if new_user.first_name.trim().is_empty() {
        errors.add("first_name", BLANK);
    }
    errors.into_result()
}
