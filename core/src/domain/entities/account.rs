//! Account entity representing a billing and identity principal.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Role attached to an account, fixed at registration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// A customer browsing and ordering from tailors
    Client,
    /// A tailor producing posts and holding purchasable credit
    Tailleur,
    /// A fabric vendor selling articles
    Vendeur,
    /// A platform administrator
    Admin,
}

impl Role {
    /// Database/string representation of the role
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Client => "client",
            Role::Tailleur => "tailleur",
            Role::Vendeur => "vendeur",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "client" => Ok(Role::Client),
            "tailleur" => Ok(Role::Tailleur),
            "vendeur" => Ok(Role::Vendeur),
            "admin" => Ok(Role::Admin),
            other => Err(format!("Unknown role: {}", other)),
        }
    }
}

/// Account entity holding the credit balance
///
/// The `credit` balance is money-like state: it is never negative at a
/// committed state and is mutated exclusively through the credit ledger's
/// atomic `add`/`debit` operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier for the account
    pub id: i64,

    /// Role of the account owner
    pub role: Role,

    /// Credit balance in internal credit units
    pub credit: f64,

    /// Timestamp when the account was created
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Creates a new Account instance
    pub fn new(id: i64, role: Role, credit: f64) -> Self {
        Self {
            id,
            role,
            credit,
            created_at: Utc::now(),
        }
    }

    /// Checks if the account belongs to a tailor
    pub fn is_tailleur(&self) -> bool {
        matches!(self.role, Role::Tailleur)
    }
}
