//! Value objects representing immutable domain concepts.

pub mod admission;
pub mod credit;
pub mod tailor_account;

// Re-export commonly used types
pub use admission::PostAdmission;
pub use credit::CreditPurchase;
pub use tailor_account::TailorAccount;
