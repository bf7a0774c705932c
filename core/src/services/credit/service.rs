//! Credit ledger implementation.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::entities::account::Account;
use crate::domain::value_objects::{CreditPurchase, TailorAccount};
use crate::errors::{CreditError, DomainResult};
use crate::repositories::{AccountRepository, BalanceUpdate, ConversionRuleRepository};

use super::registry::ConversionRuleRegistry;

/// The credit ledger
///
/// Converts purchased currency into credit using the rule in force and is the
/// only component allowed to mutate an account balance. Conversion is a pure
/// function of `(amount, current rule)`, deliberately decoupled from the
/// balance mutation so the rate can be audited and replayed independently.
pub struct CreditService<A, C>
where
    A: AccountRepository,
    C: ConversionRuleRepository,
{
    /// Account store holding the balances
    accounts: Arc<A>,
    /// Registry resolving the conversion rule in force
    registry: Arc<ConversionRuleRegistry<C>>,
}

impl<A, C> CreditService<A, C>
where
    A: AccountRepository,
    C: ConversionRuleRepository,
{
    /// Create a new credit ledger
    pub fn new(accounts: Arc<A>, registry: Arc<ConversionRuleRegistry<C>>) -> Self {
        Self { accounts, registry }
    }

    /// Convert a paid currency amount into credit units
    ///
    /// `credit = amount * rule.credit / rule.price` under the rule in force.
    ///
    /// # Errors
    /// * `CreditError::InvalidAmount` - `amount` is zero, negative or not finite
    /// * `CreditError::NoRuleConfigured` - no rule was ever recorded
    /// * `CreditError::InvalidRule` - the rule in force has a non-positive price
    pub async fn convert(&self, amount: f64) -> DomainResult<f64> {
        if amount <= 0.0 || !amount.is_finite() {
            return Err(CreditError::InvalidAmount { amount }.into());
        }

        let rule = self.registry.current_rule().await?;
        if !rule.is_well_formed() {
            return Err(CreditError::InvalidRule { price: rule.price }.into());
        }

        Ok(amount * rule.credit / rule.price)
    }

    /// Convert `amount` and atomically add the result to the account balance
    ///
    /// Only tailor accounts may hold purchasable credit; eligibility is
    /// decided once, by constructing the [`TailorAccount`] witness.
    ///
    /// # Errors
    /// * everything [`convert`](Self::convert) can fail with
    /// * `CreditError::AccountNotFound` - no such account
    /// * `CreditError::RoleNotEligible` - the account is not a tailleur
    pub async fn purchase(&self, account_id: i64, amount: f64) -> DomainResult<CreditPurchase> {
        let credited = self.convert(amount).await?;

        let account = self
            .accounts
            .find_by_id(account_id)
            .await?
            .ok_or(CreditError::AccountNotFound { account_id })?;
        let tailor = TailorAccount::try_from(account)?;

        let new_balance = self
            .accounts
            .add_credit(tailor.id(), credited)
            .await?
            .ok_or(CreditError::AccountNotFound { account_id })?;

        debug!(
            account_id,
            credited, new_balance, "credit purchase committed"
        );

        let mut account = tailor.into_inner();
        account.credit = new_balance;
        Ok(CreditPurchase { account, credited })
    }

    /// Atomically subtract `units` from the balance, only if it covers them
    ///
    /// This is the primitive the quota policy uses to charge for an
    /// over-quota post. The store applies it as a single conditional update,
    /// so two concurrent debits racing for the same last units cannot both
    /// succeed.
    ///
    /// # Errors
    /// * `CreditError::InvalidAmount` - `units` is zero
    /// * `CreditError::AccountNotFound` - no such account
    /// * `CreditError::InsufficientCredit` - balance below `units`; nothing changed
    pub async fn debit(&self, account_id: i64, units: u32) -> DomainResult<f64> {
        if units == 0 {
            return Err(CreditError::InvalidAmount { amount: 0.0 }.into());
        }

        match self.accounts.debit_credit(account_id, f64::from(units)).await? {
            BalanceUpdate::Applied { new_balance } => {
                debug!(account_id, units, new_balance, "debit committed");
                Ok(new_balance)
            }
            BalanceUpdate::InsufficientCredit { balance } => {
                Err(CreditError::InsufficientCredit {
                    balance,
                    required: f64::from(units),
                }
                .into())
            }
            BalanceUpdate::AccountMissing => {
                Err(CreditError::AccountNotFound { account_id }.into())
            }
        }
    }

    /// Put debited units back on the balance
    ///
    /// Compensation path for a failed debit-then-create sequence; bypasses
    /// conversion and the eligibility witness since the units were just taken
    /// from that same account.
    pub async fn refund(&self, account_id: i64, units: u32) -> DomainResult<f64> {
        warn!(account_id, units, "refunding debited units");
        self.accounts
            .add_credit(account_id, f64::from(units))
            .await?
            .ok_or_else(|| CreditError::AccountNotFound { account_id }.into())
    }

    /// Read the account as stored, without touching the balance
    pub async fn account(&self, account_id: i64) -> DomainResult<Option<Account>> {
        self.accounts.find_by_id(account_id).await
    }
}
