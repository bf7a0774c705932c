//! Credit ledger module
//!
//! This module holds the two components around purchasable credit:
//! - the conversion rule registry, resolving the rule currently in force
//! - the credit ledger, converting paid amounts and mutating balances

mod registry;
mod service;

#[cfg(test)]
mod tests;

pub use registry::ConversionRuleRegistry;
pub use service::CreditService;
