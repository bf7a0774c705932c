//! Outcome of a successful credit purchase.

use serde::Serialize;

use crate::domain::entities::account::Account;

/// Receipt of a currency-to-credit purchase
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreditPurchase {
    /// The account with its balance as committed by the purchase
    pub account: Account,

    /// Credit units granted by this purchase
    pub credited: f64,
}
