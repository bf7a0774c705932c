//! Status service implementation.

use std::sync::Arc;

use tracing::info;

use crate::domain::entities::status::{NewStatus, Status};
use crate::errors::{DomainError, DomainResult, ValidationError};
use crate::repositories::{StatusRepository, TailorRepository};
use ch_shared::validation::valid_media_reference;

/// A status submission as received from the request layer
#[derive(Debug, Clone)]
pub struct StatusDraft {
    /// Uploaded media reference, if any was attached
    pub files: Option<String>,
    /// Optional caption; a default applies when absent
    pub description: Option<String>,
}

/// Service creating ephemeral statuses for a tailor
pub struct StatusService<T, S>
where
    T: TailorRepository,
    S: StatusRepository,
{
    tailors: Arc<T>,
    statuses: Arc<S>,
}

impl<T, S> StatusService<T, S>
where
    T: TailorRepository,
    S: StatusRepository,
{
    /// Create a new status service
    pub fn new(tailors: Arc<T>, statuses: Arc<S>) -> Self {
        Self { tailors, statuses }
    }

    /// Create a status for the tailor owned by the given account
    ///
    /// The media reference is required; the description falls back to the
    /// policy default when absent or blank.
    pub async fn create_status(
        &self,
        compte_id: i64,
        draft: StatusDraft,
    ) -> DomainResult<Status> {
        let tailor = self
            .tailors
            .find_by_compte_id(compte_id)
            .await?
            .ok_or_else(|| DomainError::not_found("tailleur"))?;

        let files = draft
            .files
            .as_deref()
            .ok_or_else(|| ValidationError::RequiredField {
                field: "files".to_string(),
            })?;
        if !valid_media_reference(files) {
            return Err(ValidationError::InvalidMediaReference {
                reference: files.to_string(),
            }
            .into());
        }

        let status = self
            .statuses
            .create(NewStatus::with_defaults(
                tailor.id,
                files.to_string(),
                draft.description,
            ))
            .await?;
        info!(tailleur_id = tailor.id, status_id = status.id, "status created");
        Ok(status)
    }
}
