//! In-process `Database` used by the router tests.

use std::collections::BTreeMap;

use axum::async_trait;
use tokio::sync::RwLock;

use crate::db::Database;
use crate::posts::repo_types::{NewPost, Post};
use crate::users::repo_types::{User, UserProfile};

#[derive(Default)]
struct Tables {
    users: BTreeMap<String, User>,
    posts: Vec<Post>,
    next_post_id: i64,
}

#[derive(Default)]
pub(crate) struct MemoryDatabase {
    tables: RwLock<Tables>,
    broken: bool,
}

impl MemoryDatabase {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Every call fails, as if the server went away.
    pub(crate) fn broken() -> Self {
        Self {
            broken: true,
            ..Self::default()
        }
    }

    pub(crate) async fn stored_user(&self, user_id: &str) -> Option<User> {
        self.tables.read().await.users.get(user_id).cloned()
    }

    fn check(&self) -> anyhow::Result<()> {
        if self.broken {
            anyhow::bail!("connection refused");
        }
        Ok(())
    }
}

#[async_trait]
impl Database for MemoryDatabase {
    async fn insert_user(&self, user: &User) -> anyhow::Result<()> {
        self.check()?;
        let mut t = self.tables.write().await;
        if t.users.contains_key(&user.user_id) {
            anyhow::bail!(
                "duplicate key value violates unique constraint \"users_pkey\""
            );
        }
        t.users.insert(user.user_id.clone(), user.clone());
        Ok(())
    }

    async fn find_user(&self, user_id: &str) -> anyhow::Result<Option<UserProfile>> {
        self.check()?;
        let t = self.tables.read().await;
        Ok(t.users.get(user_id).map(UserProfile::from))
    }

    async fn insert_post(&self, post: &NewPost) -> anyhow::Result<Post> {
        self.check()?;
        let mut t = self.tables.write().await;
        if !t.users.contains_key(&post.user_id) {
            anyhow::bail!(
                "insert or update on table \"posts\" violates foreign key constraint \"posts_user_id_fkey\""
            );
        }
        t.next_post_id += 1;
        let stored = Post {
            post_id: t.next_post_id,
            caption: post.caption.clone(),
            image_url: post.image_url.clone(),
            posted_at: post.posted_at,
            user_id: post.user_id.clone(),
        };
        t.posts.push(stored.clone());
        Ok(stored)
    }

    async fn find_post(&self, post_id: i64) -> anyhow::Result<Option<Post>> {
        self.check()?;
        let t = self.tables.read().await;
        Ok(t.posts.iter().find(|p| p.post_id == post_id).cloned())
    }

    async fn list_posts_by_user(&self, user_id: &str) -> anyhow::Result<Vec<Post>> {
        self.check()?;
        let t = self.tables.read().await;
        let mut posts: Vec<Post> = t
            .posts
            .iter()
            .filter(|p| p.user_id == user_id)
            .cloned()
            .collect();
        posts.sort_by_key(|p| (p.posted_at, p.post_id));
        Ok(posts)
    }

    async fn ping(&self) -> anyhow::Result<()> {
        self.check()
    }

    async fn close(&self) {}
}
