//! MySQL repository implementations.

mod account_repository_impl;
mod conversion_rule_repository_impl;
mod post_repository_impl;
mod status_repository_impl;
mod tailor_repository_impl;

pub use account_repository_impl::MySqlAccountRepository;
pub use conversion_rule_repository_impl::MySqlConversionRuleRepository;
pub use post_repository_impl::MySqlPostRepository;
pub use status_repository_impl::MySqlStatusRepository;
pub use tailor_repository_impl::MySqlTailorRepository;
