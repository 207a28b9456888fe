use crate::users::repo_types::{User, UserProfile};
use sqlx::PgPool;

impl User {
    /// Insert a new user. Uniqueness of `user_id` is left to the primary key.
    pub async fn insert(db: &PgPool, user: &User) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO users (user_id, name, email, password)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(&user.user_id)
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password)
        .execute(db)
        .await?;
        Ok(())
    }
}

impl UserProfile {
    /// Find a user by exact identifier.
    pub async fn find_by_id(db: &PgPool, user_id: &str) -> anyhow::Result<Option<UserProfile>> {
        let user = sqlx::query_as::<_, UserProfile>(
            r#"
            SELECT user_id, name, email
            FROM users
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }
}
