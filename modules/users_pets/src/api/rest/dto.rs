use serde::{Deserialize, Serialize};

use crate::contract::model::NewUser;

/// The `user[...]` fields of the creation form.
///
/// Only these three keys are read; anything else in the submission is dropped.
/// Serializes with plain field names so the form can be echoed back into a view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserForm {
    #[serde(rename(deserialize = "user[first_name]"), default)]
    pub first_name: String,
    #[serde(rename(deserialize = "user[last_name]"), default)]
    pub last_name: String,
    #[serde(rename(deserialize = "user[email]"), default)]
    pub email: String,
}

/// Query parameters of the show page
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShowQuery {
    pub notice: Option<String>,
}

impl From<UserForm> for NewUser {
    fn from(form: UserForm) -> Self {
        let last_name = Some(form.last_name).filter(|n| !n.is_empty());
        Self {
            first_name: form.first_name,
            last_name,
            email: form.email,
        }
    }
}
