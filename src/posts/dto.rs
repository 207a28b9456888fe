use serde::Deserialize;

use crate::extractors::null_as_empty;

/// Request body for `POST /posts`. Any `postId` or `posted_at` sent by the client is ignored;
/// missing or `null` fields decode as empty strings.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreatePostRequest {
    #[serde(deserialize_with = "null_as_empty")]
    pub caption: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub image_url: String,
    #[serde(rename = "userId", deserialize_with = "null_as_empty")]
    pub user_id: String,
}
