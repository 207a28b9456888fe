use serde::{Deserialize, Serialize};

use crate::{extractors::null_as_empty, users::repo_types::UserProfile};

/// Request body for `POST /users`. Missing or `null` fields decode as empty strings.
#[derive(Default, Deserialize)]
#[serde(default)]
pub struct CreateUserRequest {
    #[serde(rename = "userId", deserialize_with = "null_as_empty")]
    pub user_id: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub password: String,
}

/// User as returned to clients. Carries no password field.
#[derive(Debug, Serialize)]
pub struct PublicUser {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub name: String,
    pub email: String,
}

impl From<UserProfile> for PublicUser {
    fn from(p: UserProfile) -> Self {
        Self {
            user_id: p.user_id,
            name: p.name,
            email: p.email,
        }
    }
}
