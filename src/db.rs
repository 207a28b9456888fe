use anyhow::Context;
use axum::async_trait;
use sqlx::{postgres::PgPoolOptions, Connection, PgPool};
use tracing::info;

use crate::config::DatabaseConfig;
use crate::posts::repo_types::{NewPost, Post};
use crate::users::repo_types::{User, UserProfile};

#[cfg(test)]
pub(crate) mod memory;

/// Everything the handlers need from the store. Errors carry the driver's message.
#[async_trait]
pub trait Database: Send + Sync {
    async fn insert_user(&self, user: &User) -> anyhow::Result<()>;
    async fn find_user(&self, user_id: &str) -> anyhow::Result<Option<UserProfile>>;
    async fn insert_post(&self, post: &NewPost) -> anyhow::Result<Post>;
    async fn find_post(&self, post_id: i64) -> anyhow::Result<Option<Post>>;
    async fn list_posts_by_user(&self, user_id: &str) -> anyhow::Result<Vec<Post>>;
    async fn ping(&self) -> anyhow::Result<()>;
    async fn close(&self);
}

#[derive(Clone)]
pub struct PgDatabase {
    pool: PgPool,
}

impl PgDatabase {
    /// Opens the pool and pings it once; either failure is fatal to the caller.
    pub async fn connect(config: &DatabaseConfig) -> anyhow::Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.url)
            .await
            .context("connect to database")?;
        let db = Self { pool };
        db.ping().await.context("unable to reach the database")?;
        info!("database connected");
        Ok(db)
    }

    /// Applies `migrations/`. A failure is fatal at startup, like a failed ping.
    pub async fn migrate(&self) -> anyhow::Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .context("run migrations")?;
        info!("migrations applied");
        Ok(())
    }
}

#[async_trait]
impl Database for PgDatabase {
    async fn insert_user(&self, user: &User) -> anyhow::Result<()> {
        User::insert(&self.pool, user).await
    }

    async fn find_user(&self, user_id: &str) -> anyhow::Result<Option<UserProfile>> {
        UserProfile::find_by_id(&self.pool, user_id).await
    }

    async fn insert_post(&self, post: &NewPost) -> anyhow::Result<Post> {
        Post::create(&self.pool, post).await
    }

    async fn find_post(&self, post_id: i64) -> anyhow::Result<Option<Post>> {
        Post::find_by_id(&self.pool, post_id).await
    }

    async fn list_posts_by_user(&self, user_id: &str) -> anyhow::Result<Vec<Post>> {
        Post::list_by_user(&self.pool, user_id).await
    }

    async fn ping(&self) -> anyhow::Result<()> {
        let mut conn = self.pool.acquire().await?;
        conn.ping().await?;
        Ok(())
    }

    async fn close(&self) {
        self.pool.close().await;
        info!("database pool closed");
    }
}
