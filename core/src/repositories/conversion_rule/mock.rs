//! Mock implementation of ConversionRuleRepository for testing

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::conversion_rule::ConversionRule;
use crate::errors::DomainError;

use super::trait_::ConversionRuleRepository;

/// Mock conversion rule repository for testing
///
/// Rules are kept in insertion order; `find_current` selects by timestamp,
/// not by position, matching the store's `ORDER BY created_at DESC`.
pub struct MockConversionRuleRepository {
    rules: Arc<RwLock<Vec<ConversionRule>>>,
}

impl MockConversionRuleRepository {
    /// Create a new, empty mock repository
    pub fn new() -> Self {
        Self {
            rules: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Append a rule to the history
    pub async fn push(&self, rule: ConversionRule) {
        self.rules.write().await.push(rule);
    }
}

impl Default for MockConversionRuleRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConversionRuleRepository for MockConversionRuleRepository {
    async fn find_current(&self) -> Result<Option<ConversionRule>, DomainError> {
        let rules = self.rules.read().await;
        Ok(rules
            .iter()
            .max_by_key(|r| r.created_at)
            .cloned())
    }
}
