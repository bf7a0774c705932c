//! Conversion rule repository trait.

use async_trait::async_trait;

use crate::domain::entities::conversion_rule::ConversionRule;
use crate::errors::DomainError;

/// Repository trait for the append-only conversion rule history
///
/// Rule authoring is an administrative action outside this core; the ledger
/// only ever reads the rule in force.
#[async_trait]
pub trait ConversionRuleRepository: Send + Sync {
    /// Find the rule with the latest creation timestamp
    ///
    /// # Returns
    /// * `Ok(Some(ConversionRule))` - The rule currently in force
    /// * `Ok(None)` - No rule has ever been recorded
    async fn find_current(&self) -> Result<Option<ConversionRule>, DomainError>;
}
