//! Post entity owned by a tailor.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// `count` value of a post admitted within the free monthly quota
pub const FREE_POST_COUNT: u32 = 0;

/// A content item published by a tailor
///
/// The `count` field records how many credit units were charged for the post:
/// 0 for a quota post, otherwise the paid-post cost in force when it was
/// admitted (2 under the current policy).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Unique identifier for the post
    pub id: i64,

    /// Identifier of the owning tailor profile
    pub tailleur_id: i64,

    /// Post title
    pub title: String,

    /// Post body
    pub content: String,

    /// Reference to the already-uploaded media, opaque to the core
    pub files: String,

    /// Credit units charged on admission (0 = free quota post)
    pub count: u32,

    /// Optional category label
    pub categorie: Option<String>,

    /// Publication state ("draft" unless the caller says otherwise)
    pub state: String,

    /// Number of shares
    pub share_nb: u32,

    /// Number of views
    pub view_nb: u32,

    /// Timestamp when the post was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the post was last updated
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Checks if the post was admitted within the free monthly quota
    pub fn is_free(&self) -> bool {
        self.count == FREE_POST_COUNT
    }

    /// Credit units that were charged for this post
    pub fn credit_units(&self) -> u32 {
        self.count
    }

    /// Applies a partial edit, touching `updated_at`
    ///
    /// Fields absent from the edit keep their current value; `count`, `files`
    /// and `created_at` are never editable.
    pub fn apply_edit(&mut self, edit: PostEdit) {
        if let Some(title) = edit.title {
            self.title = title;
        }
        if let Some(content) = edit.content {
            self.content = content;
        }
        self.updated_at = Utc::now();
    }
}

/// Draft of a post about to be persisted; the store assigns the identifier
/// and both timestamps
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPost {
    /// Identifier of the owning tailor profile
    pub tailleur_id: i64,

    /// Post title
    pub title: String,

    /// Post body
    pub content: String,

    /// Reference to the already-uploaded media
    pub files: String,

    /// Credit units charged on admission
    pub count: u32,

    /// Optional category label
    pub categorie: Option<String>,

    /// Publication state
    pub state: String,
}

/// Partial update of an owned post
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PostEdit {
    /// Replacement title, if any
    pub title: Option<String>,

    /// Replacement body, if any
    pub content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_post() -> Post {
        let now = Utc::now();
        Post {
            id: 7,
            tailleur_id: 3,
            title: "Boubou brodé".to_string(),
            content: "Broderie main, livraison sous quinzaine".to_string(),
            files: "uploads/boubou.png".to_string(),
            count: FREE_POST_COUNT,
            categorie: None,
            state: "draft".to_string(),
            share_nb: 0,
            view_nb: 0,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_free_post_marker() {
        let post = sample_post();
        assert!(post.is_free());
        assert_eq!(post.credit_units(), 0);

        let paid = Post { count: 2, ..post };
        assert!(!paid.is_free());
        assert_eq!(paid.credit_units(), 2);
    }

    #[test]
    fn test_apply_edit_is_partial() {
        let mut post = sample_post();
        let before = post.updated_at;

        post.apply_edit(PostEdit {
            title: Some("Boubou grand modèle".to_string()),
            content: None,
        });

        assert_eq!(post.title, "Boubou grand modèle");
        assert_eq!(post.content, "Broderie main, livraison sous quinzaine");
        assert!(post.updated_at >= before);
    }

    #[test]
    fn test_apply_edit_never_touches_count() {
        let mut post = sample_post();
        post.apply_edit(PostEdit::default());
        assert_eq!(post.count, FREE_POST_COUNT);
    }
}
