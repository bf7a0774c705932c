//! Post repository trait defining the interface for post persistence.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::post::{NewPost, Post};
use crate::errors::DomainError;

/// Repository trait for Post persistence operations
///
/// The quota policy reads history instead of keeping a counter: the number of
/// free posts in the month window is recomputed per request from the
/// append-only post log, so counter drift cannot occur.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Count the free posts (`count = 0`) of a tailor inside a time window
    ///
    /// Both bounds are inclusive.
    async fn count_free_in_window(
        &self,
        tailleur_id: i64,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<u64, DomainError>;

    /// Persist a new post, assigning the identifier and timestamps
    async fn create(&self, draft: NewPost) -> Result<Post, DomainError>;

    /// Find a post by its identifier
    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, DomainError>;

    /// Persist an edited post
    ///
    /// # Returns
    /// * `Ok(Post)` - The updated post
    /// * `Err(DomainError)` - Update failed (e.g., post no longer exists)
    async fn update(&self, post: Post) -> Result<Post, DomainError>;

    /// Delete a post
    ///
    /// # Returns
    /// * `Ok(true)` - Post was deleted
    /// * `Ok(false)` - Post not found
    async fn delete(&self, id: i64) -> Result<bool, DomainError>;
}
