//! # CoutureHub Infrastructure
//!
//! MySQL implementations of the repository traits defined in `ch_core`,
//! plus connection pool management.

pub mod database;

pub use database::connection::create_pool;
pub use database::mysql::{
    MySqlAccountRepository, MySqlConversionRuleRepository, MySqlPostRepository,
    MySqlStatusRepository, MySqlTailorRepository,
};
