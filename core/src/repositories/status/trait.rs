//! Status repository trait.

use async_trait::async_trait;

use crate::domain::entities::status::{NewStatus, Status};
use crate::errors::DomainError;

/// Repository trait for Status persistence operations
#[async_trait]
pub trait StatusRepository: Send + Sync {
    /// Persist a new status, assigning the identifier and timestamp
    async fn create(&self, draft: NewStatus) -> Result<Status, DomainError>;
}
