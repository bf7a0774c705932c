//! Outcome of a post submission that passed the admission policy.

use serde::Serialize;

use crate::domain::entities::post::Post;

/// How a new post was admitted
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum PostAdmission {
    /// Admitted within the free monthly quota; no ledger interaction
    Free {
        /// The persisted post, `count == 0`
        post: Post,
    },
    /// Admitted against the credit balance
    Paid {
        /// The persisted post, `count` equal to the units charged
        post: Post,
        /// Balance left after the debit
        remaining_credit: f64,
    },
}

impl PostAdmission {
    /// The persisted post, whichever way it was admitted
    pub fn post(&self) -> &Post {
        match self {
            PostAdmission::Free { post } => post,
            PostAdmission::Paid { post, .. } => post,
        }
    }

    /// Whether the submission consumed the free quota slot
    pub fn is_free(&self) -> bool {
        matches!(self, PostAdmission::Free { .. })
    }
}
