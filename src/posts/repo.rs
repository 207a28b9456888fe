use crate::posts::repo_types::{NewPost, Post};
use sqlx::PgPool;

impl Post {
    /// Insert a post and read back the generated id and the stored timestamp.
    pub async fn create(db: &PgPool, new: &NewPost) -> anyhow::Result<Post> {
        let post = sqlx::query_as::<_, Post>(
            r#"
            INSERT INTO posts (caption, image_url, posted_at, user_id)
            VALUES ($1, $2, $3, $4)
            RETURNING post_id, caption, image_url, posted_at, user_id
            "#,
        )
        .bind(&new.caption)
        .bind(&new.image_url)
        .bind(new.posted_at)
        .bind(&new.user_id)
        .fetch_one(db)
        .await?;
        Ok(post)
    }

    pub async fn find_by_id(db: &PgPool, post_id: i64) -> anyhow::Result<Option<Post>> {
        let post = sqlx::query_as::<_, Post>(
            r#"
            SELECT post_id, caption, image_url, posted_at, user_id
            FROM posts
            WHERE post_id = $1
            "#,
        )
        .bind(post_id)
        .fetch_optional(db)
        .await?;
        Ok(post)
    }

    /// All posts owned by `user_id`, oldest first. A decode failure on any row fails the whole call.
    pub async fn list_by_user(db: &PgPool, user_id: &str) -> anyhow::Result<Vec<Post>> {
        let rows = sqlx::query_as::<_, Post>(
            r#"
            SELECT post_id, caption, image_url, posted_at, user_id
            FROM posts
            WHERE user_id = $1
            ORDER BY posted_at ASC, post_id ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }
}
