//! Mock implementation of AccountRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::account::Account;
use crate::errors::DomainError;

use super::trait_::{AccountRepository, BalanceUpdate};

/// Mock account repository for testing
///
/// Balance mutations run under the map's write lock, which reproduces the
/// atomic-conditional-update semantics of the real store.
pub struct MockAccountRepository {
    accounts: Arc<RwLock<HashMap<i64, Account>>>,
}

impl MockAccountRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            accounts: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Seed an account (registration happens outside the core)
    pub async fn insert(&self, account: Account) {
        self.accounts.write().await.insert(account.id, account);
    }

    /// Current balance of a seeded account, for assertions
    pub async fn balance_of(&self, id: i64) -> Option<f64> {
        self.accounts.read().await.get(&id).map(|a| a.credit)
    }
}

impl Default for MockAccountRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccountRepository for MockAccountRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Account>, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.get(&id).cloned())
    }

    async fn add_credit(&self, id: i64, amount: f64) -> Result<Option<f64>, DomainError> {
        let mut accounts = self.accounts.write().await;
        Ok(accounts.get_mut(&id).map(|account| {
            account.credit += amount;
            account.credit
        }))
    }

    async fn debit_credit(&self, id: i64, amount: f64) -> Result<BalanceUpdate, DomainError> {
        let mut accounts = self.accounts.write().await;
        let Some(account) = accounts.get_mut(&id) else {
            return Ok(BalanceUpdate::AccountMissing);
        };

        if account.credit >= amount {
            account.credit -= amount;
            Ok(BalanceUpdate::Applied {
                new_balance: account.credit,
            })
        } else {
            Ok(BalanceUpdate::InsufficientCredit {
                balance: account.credit,
            })
        }
    }
}
