//! Status DTOs.

use serde::{Deserialize, Serialize};

use ch_core::domain::entities::status::Status;
use ch_core::services::status::StatusDraft;

/// Body of `POST /api/v1/tailleur/status`
#[derive(Debug, Clone, Deserialize)]
pub struct CreateStatusRequest {
    /// Uploaded media reference
    pub files: Option<String>,

    /// Optional caption; "Model du jour" when absent
    pub description: Option<String>,
}

impl From<CreateStatusRequest> for StatusDraft {
    fn from(request: CreateStatusRequest) -> Self {
        StatusDraft {
            files: request.files,
            description: request.description,
        }
    }
}

/// Payload of a successful status creation
///
/// Keyed `statut` because `status` is already the envelope's outcome marker.
#[derive(Debug, Clone, Serialize)]
pub struct StatusPayload {
    pub statut: Status,
}
