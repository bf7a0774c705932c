//! Account repository trait defining the interface for account persistence.
//!
//! The balance operations are the concurrency-sensitive part of the whole
//! system: both are specified as single atomic conditional updates so that
//! concurrent ledger calls on the same account can never lose an update or
//! drive the balance negative.

use async_trait::async_trait;

use crate::domain::entities::account::Account;
use crate::errors::DomainError;

/// Result of an atomic conditional balance decrement
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BalanceUpdate {
    /// The decrement was applied; carries the committed balance
    Applied { new_balance: f64 },
    /// The balance was below the requested amount; nothing was changed
    InsufficientCredit { balance: f64 },
    /// No account with the given identifier exists
    AccountMissing,
}

/// Repository trait for Account persistence operations
///
/// Accounts are created at registration, outside this core; the operations
/// here are the reads and the two balance mutations the credit ledger needs.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Find an account by its identifier
    ///
    /// # Returns
    /// * `Ok(Some(Account))` - Account found
    /// * `Ok(None)` - No account with the given id
    /// * `Err(DomainError)` - Database or other error occurred
    async fn find_by_id(&self, id: i64) -> Result<Option<Account>, DomainError>;

    /// Atomically add `amount` to the account balance
    ///
    /// Must be a single read-modify-write in the store (`credit = credit + ?`)
    /// so that two concurrent additions are both reflected.
    ///
    /// # Returns
    /// * `Ok(Some(balance))` - The committed balance after the addition
    /// * `Ok(None)` - No account with the given id
    async fn add_credit(&self, id: i64, amount: f64) -> Result<Option<f64>, DomainError>;

    /// Atomically subtract `amount` from the balance, only if it covers it
    ///
    /// Must be a single conditional update (`credit = credit - ? WHERE
    /// credit >= ?`): of two concurrent decrements racing for the same last
    /// units, exactly one may be applied.
    async fn debit_credit(&self, id: i64, amount: f64) -> Result<BalanceUpdate, DomainError>;
}
