//! Post request and response DTOs.

use serde::{Deserialize, Serialize};
use validator::Validate;

use ch_core::domain::entities::post::{Post, PostEdit};
use ch_core::services::post::PostDraft;

/// Body of `POST /api/v1/tailleur/posts`
///
/// `files` carries the reference of the already-uploaded media; the upload
/// itself happens before this endpoint is called.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePostRequest {
    #[validate(length(min = 1, max = 255))]
    pub title: String,

    #[validate(length(min = 1))]
    pub content: String,

    /// Uploaded media reference
    pub files: Option<String>,

    /// Optional category label
    pub categorie: Option<String>,

    /// Publication state, "draft" when absent
    pub status: Option<String>,

    /// Spend credit even if the free quota is untouched
    #[serde(rename = "useCredit", default)]
    pub use_credit: bool,
}

impl From<CreatePostRequest> for PostDraft {
    fn from(request: CreatePostRequest) -> Self {
        PostDraft {
            title: request.title,
            content: request.content,
            files: request.files,
            categorie: request.categorie,
            state: request.status,
            use_credit: request.use_credit,
        }
    }
}

/// Body of `PUT /api/v1/tailleur/posts/{post_id}`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdatePostRequest {
    #[validate(length(min = 1, max = 255))]
    pub title: Option<String>,

    #[validate(length(min = 1))]
    pub content: Option<String>,
}

impl From<UpdatePostRequest> for PostEdit {
    fn from(request: UpdatePostRequest) -> Self {
        PostEdit {
            title: request.title,
            content: request.content,
        }
    }
}

/// Payload of a successful post creation or update
#[derive(Debug, Clone, Serialize)]
pub struct PostPayload {
    pub post: Post,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_use_credit_is_camel_cased_and_optional() {
        let body = r#"{"title": "Boubou", "content": "Bazin riche", "useCredit": true}"#;
        let request: CreatePostRequest = serde_json::from_str(body).unwrap();
        assert!(request.use_credit);

        let body = r#"{"title": "Boubou", "content": "Bazin riche"}"#;
        let request: CreatePostRequest = serde_json::from_str(body).unwrap();
        assert!(!request.use_credit);
    }

    #[test]
    fn test_empty_title_fails_validation() {
        let request: CreatePostRequest =
            serde_json::from_str(r#"{"title": "", "content": "x"}"#).unwrap();
        assert!(request.validate().is_err());
    }
}
