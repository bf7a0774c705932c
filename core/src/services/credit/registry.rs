//! Conversion rule registry: lookup of the rule currently in force.

use std::sync::Arc;

use crate::domain::entities::conversion_rule::ConversionRule;
use crate::errors::{CreditError, DomainResult};
use crate::repositories::ConversionRuleRepository;

/// Read-only view over the append-only conversion rule history
///
/// The rule in force is the one with the latest creation timestamp. An empty
/// registry is an operator configuration defect: no caller can recover from
/// it by retrying, someone has to seed a rule.
pub struct ConversionRuleRegistry<C>
where
    C: ConversionRuleRepository,
{
    rules: Arc<C>,
}

impl<C> ConversionRuleRegistry<C>
where
    C: ConversionRuleRepository,
{
    /// Create a new registry over the rule store
    pub fn new(rules: Arc<C>) -> Self {
        Self { rules }
    }

    /// Resolve the rule with the maximum creation timestamp
    ///
    /// # Returns
    /// * `Ok(ConversionRule)` - The rule currently in force
    /// * `Err(CreditError::NoRuleConfigured)` - The history is empty
    pub async fn current_rule(&self) -> DomainResult<ConversionRule> {
        self.rules
            .find_current()
            .await?
            .ok_or_else(|| CreditError::NoRuleConfigured.into())
    }
}
