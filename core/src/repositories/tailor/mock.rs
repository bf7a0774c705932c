//! Mock implementation of TailorRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::tailor::Tailor;
use crate::errors::DomainError;

use super::trait_::TailorRepository;

/// Mock tailor repository for testing
pub struct MockTailorRepository {
    tailors: Arc<RwLock<HashMap<i64, Tailor>>>,
}

impl MockTailorRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            tailors: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Seed a tailor profile
    pub async fn insert(&self, tailor: Tailor) {
        self.tailors.write().await.insert(tailor.id, tailor);
    }
}

impl Default for MockTailorRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TailorRepository for MockTailorRepository {
    async fn find_by_compte_id(&self, compte_id: i64) -> Result<Option<Tailor>, DomainError> {
        let tailors = self.tailors.read().await;
        Ok(tailors
            .values()
            .find(|t| t.compte_id == compte_id)
            .copied())
    }
}
