//! Role witness restricting balance mutation to tailor accounts.

use crate::domain::entities::account::Account;
use crate::errors::CreditError;

/// An account proven to carry the `tailleur` role
///
/// Only tailor accounts may hold purchasable credit. Constructing this witness
/// is the single place that eligibility is decided; the ledger's mutation path
/// takes the witness, so an ineligible account never reaches it.
#[derive(Debug, Clone, PartialEq)]
pub struct TailorAccount(Account);

impl TailorAccount {
    /// Identifier of the underlying account
    pub fn id(&self) -> i64 {
        self.0.id
    }

    /// Credit balance as last read from the store
    pub fn credit(&self) -> f64 {
        self.0.credit
    }

    /// Unwraps back into the plain account
    pub fn into_inner(self) -> Account {
        self.0
    }
}

impl TryFrom<Account> for TailorAccount {
    type Error = CreditError;

    fn try_from(account: Account) -> Result<Self, Self::Error> {
        if account.is_tailleur() {
            Ok(Self(account))
        } else {
            Err(CreditError::RoleNotEligible { role: account.role })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::account::Role;

    #[test]
    fn test_tailleur_account_is_accepted() {
        let account = Account::new(1, Role::Tailleur, 4.0);
        let witness = TailorAccount::try_from(account.clone()).unwrap();
        assert_eq!(witness.id(), 1);
        assert_eq!(witness.credit(), 4.0);
        assert_eq!(witness.into_inner(), account);
    }

    #[test]
    fn test_other_roles_are_rejected() {
        for role in [Role::Client, Role::Vendeur, Role::Admin] {
            let result = TailorAccount::try_from(Account::new(2, role, 0.0));
            assert!(matches!(
                result,
                Err(CreditError::RoleNotEligible { role: r }) if r == role
            ));
        }
    }
}
