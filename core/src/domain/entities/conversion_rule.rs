//! Conversion rule entity: the versioned currency-to-credit exchange policy.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A versioned conversion policy record
///
/// Rules are append-only and totally ordered by `created_at`; the rule with
/// the latest creation timestamp is the one in force. `credit` units are
/// granted per `price` units of currency paid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRule {
    /// Unique identifier for the rule
    pub id: i64,

    /// Credit units granted per transaction at `price`
    pub credit: f64,

    /// Currency amount that yields `credit` units; must be strictly positive
    pub price: f64,

    /// Timestamp when the rule was recorded
    pub created_at: DateTime<Utc>,
}

impl ConversionRule {
    /// Checks the structural invariant a usable rule must satisfy
    ///
    /// A rule with a non-positive price would grant infinite or negative
    /// credit; the ledger refuses to convert against one.
    pub fn is_well_formed(&self) -> bool {
        self.price > 0.0 && self.price.is_finite() && self.credit.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_formed_rule() {
        let rule = ConversionRule {
            id: 1,
            credit: 100.0,
            price: 5000.0,
            created_at: Utc::now(),
        };
        assert!(rule.is_well_formed());
    }

    #[test]
    fn test_zero_or_negative_price_is_rejected() {
        let mut rule = ConversionRule {
            id: 1,
            credit: 100.0,
            price: 0.0,
            created_at: Utc::now(),
        };
        assert!(!rule.is_well_formed());
        rule.price = -1.0;
        assert!(!rule.is_well_formed());
    }
}
