//! Error type definitions for the credit ledger and the post quota policy.
//!
//! User-facing messages are produced in the presentation layer; these types
//! carry the data the handlers need to build them.

use thiserror::Error;

use crate::domain::entities::account::Role;

/// Credit ledger errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CreditError {
    #[error("No conversion rule configured")]
    NoRuleConfigured,

    #[error("Conversion rule has non-positive price: {price}")]
    InvalidRule { price: f64 },

    #[error("Amount must be strictly positive: {amount}")]
    InvalidAmount { amount: f64 },

    #[error("Account not found: {account_id}")]
    AccountNotFound { account_id: i64 },

    #[error("Role not eligible for credit: {role}")]
    RoleNotEligible { role: Role },

    #[error("Insufficient credit: balance {balance}, required {required}")]
    InsufficientCredit { balance: f64, required: f64 },
}

/// Post quota policy errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QuotaError {
    #[error("Monthly quota used and credit insufficient: balance {balance}, required {required}")]
    QuotaExceededAndInsufficientCredit { balance: f64, required: u32 },
}

/// Input validation errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Required field: {field}")]
    RequiredField { field: String },

    #[error("Field must be non-empty text: {field}")]
    EmptyText { field: String },

    #[error("Invalid media reference: {reference}")]
    InvalidMediaReference { reference: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credit_error_messages_carry_data() {
        let error = CreditError::InsufficientCredit {
            balance: 1.0,
            required: 2.0,
        };
        let message = error.to_string();
        assert!(message.contains("balance 1"));
        assert!(message.contains("required 2"));
    }

    #[test]
    fn test_role_not_eligible_names_role() {
        let error = CreditError::RoleNotEligible { role: Role::Client };
        assert!(error.to_string().contains("client"));
    }

    #[test]
    fn test_validation_error_names_field() {
        let error = ValidationError::EmptyText {
            field: "title".to_string(),
        };
        assert!(error.to_string().contains("title"));
    }
}
