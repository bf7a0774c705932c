//! Credit purchase DTOs.

use serde::{Deserialize, Serialize};

use ch_core::domain::entities::account::Account;

/// Body of `POST /api/v1/tailleur/achetercredit`
#[derive(Debug, Clone, Deserialize)]
pub struct BuyCreditRequest {
    /// Currency amount paid; converted through the rule in force
    pub montant: f64,
}

/// Payload of a successful purchase: the account with its committed balance
#[derive(Debug, Clone, Serialize)]
pub struct ComptePayload {
    pub compte: Account,
}
