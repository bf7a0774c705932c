//! Mock implementation of PostRepository for testing

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::post::{NewPost, Post};
use crate::errors::DomainError;

use super::trait_::PostRepository;

/// Mock post repository for testing
pub struct MockPostRepository {
    posts: Arc<RwLock<HashMap<i64, Post>>>,
    next_id: Arc<RwLock<i64>>,
}

impl MockPostRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            posts: Arc::new(RwLock::new(HashMap::new())),
            next_id: Arc::new(RwLock::new(1)),
        }
    }

    /// Number of stored posts, for assertions
    pub async fn len(&self) -> usize {
        self.posts.read().await.len()
    }

    /// Whether no post was stored
    pub async fn is_empty(&self) -> bool {
        self.posts.read().await.is_empty()
    }
}

impl Default for MockPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for MockPostRepository {
    async fn count_free_in_window(
        &self,
        tailleur_id: i64,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<u64, DomainError> {
        let posts = self.posts.read().await;
        let count = posts
            .values()
            .filter(|p| {
                p.tailleur_id == tailleur_id
                    && p.count == 0
                    && p.created_at >= start
                    && p.created_at <= end
            })
            .count();
        Ok(count as u64)
    }

    async fn create(&self, draft: NewPost) -> Result<Post, DomainError> {
        let mut next_id = self.next_id.write().await;
        let id = *next_id;
        *next_id += 1;
        drop(next_id);

        let now = Utc::now();
        let post = Post {
            id,
            tailleur_id: draft.tailleur_id,
            title: draft.title,
            content: draft.content,
            files: draft.files,
            count: draft.count,
            categorie: draft.categorie,
            state: draft.state,
            share_nb: 0,
            view_nb: 0,
            created_at: now,
            updated_at: now,
        };
        self.posts.write().await.insert(id, post.clone());
        Ok(post)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, DomainError> {
        let posts = self.posts.read().await;
        Ok(posts.get(&id).cloned())
    }

    async fn update(&self, post: Post) -> Result<Post, DomainError> {
        let mut posts = self.posts.write().await;
        if !posts.contains_key(&post.id) {
            return Err(DomainError::not_found("post"));
        }
        posts.insert(post.id, post.clone());
        Ok(post)
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let mut posts = self.posts.write().await;
        Ok(posts.remove(&id).is_some())
    }
}
