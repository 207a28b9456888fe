use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;

/// Post record in the database; also the wire shape of every post response.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Post {
    #[serde(rename = "postId")]
    pub post_id: i64,
    pub caption: String,
    pub image_url: String,
    #[serde(with = "time::serde::rfc3339")]
    pub posted_at: OffsetDateTime,
    #[serde(rename = "userId")]
    pub user_id: String,
}

/// Values bound on insert; `post_id` comes back from the store.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub caption: String,
    pub image_url: String,
    pub posted_at: OffsetDateTime,
    pub user_id: String,
}
