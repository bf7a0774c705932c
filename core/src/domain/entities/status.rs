//! Status entity: an ephemeral, story-like item published by a tailor.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Description applied when the tailor does not provide one
pub const DEFAULT_STATUS_DESCRIPTION: &str = "Model du jour";

/// Fixed lifetime of a status
pub const DEFAULT_STATUS_DURATION: &str = "24hours";

/// A short-lived media item attached to a tailor profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Status {
    /// Unique identifier for the status
    pub id: i64,

    /// Identifier of the owning tailor profile
    pub tailleur_id: i64,

    /// Reference to the already-uploaded media
    pub files: String,

    /// Caption shown with the media
    pub description: String,

    /// Lifetime of the status
    pub duration: String,

    /// Number of views
    pub view_nb: u32,

    /// Timestamp when the status was created
    pub created_at: DateTime<Utc>,
}

/// Draft of a status about to be persisted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewStatus {
    /// Identifier of the owning tailor profile
    pub tailleur_id: i64,

    /// Reference to the already-uploaded media
    pub files: String,

    /// Caption shown with the media
    pub description: String,

    /// Lifetime of the status
    pub duration: String,

    /// Number of views, zero on creation
    pub view_nb: u32,
}

impl NewStatus {
    /// Builds a draft with the policy defaults applied
    pub fn with_defaults(tailleur_id: i64, files: String, description: Option<String>) -> Self {
        Self {
            tailleur_id,
            files,
            description: description
                .filter(|d| !d.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_STATUS_DESCRIPTION.to_string()),
            duration: DEFAULT_STATUS_DURATION.to_string(),
            view_nb: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_applied() {
        let draft = NewStatus::with_defaults(4, "uploads/status.png".to_string(), None);
        assert_eq!(draft.description, DEFAULT_STATUS_DESCRIPTION);
        assert_eq!(draft.duration, DEFAULT_STATUS_DURATION);
        assert_eq!(draft.view_nb, 0);
    }

    #[test]
    fn test_blank_description_falls_back_to_default() {
        let draft = NewStatus::with_defaults(4, "uploads/status.png".to_string(), Some("  ".into()));
        assert_eq!(draft.description, DEFAULT_STATUS_DESCRIPTION);
    }

    #[test]
    fn test_explicit_description_kept() {
        let draft = NewStatus::with_defaults(
            4,
            "uploads/status.png".to_string(),
            Some("Tenue de cérémonie".into()),
        );
        assert_eq!(draft.description, "Tenue de cérémonie");
    }
}
