//! Tailor repository trait.

use async_trait::async_trait;

use crate::domain::entities::tailor::Tailor;
use crate::errors::DomainError;

/// Repository trait for Tailor profile lookups
///
/// Tailor profiles are created at registration, outside this core; the
/// services only resolve the profile owned by an authenticated account.
#[async_trait]
pub trait TailorRepository: Send + Sync {
    /// Find the tailor profile owned by the given account
    async fn find_by_compte_id(&self, compte_id: i64) -> Result<Option<Tailor>, DomainError>;
}
