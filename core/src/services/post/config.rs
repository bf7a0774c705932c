//! Configuration for the post service

/// Configuration for the post quota policy
///
/// The paid-post cost is deliberately its own constant, NOT derived from the
/// conversion rule: the currency-to-credit rate and the price of an
/// over-quota post evolve independently.
#[derive(Debug, Clone)]
pub struct PostServiceConfig {
    /// Posts admitted free of charge per tailor and calendar month
    pub free_posts_per_month: u64,
    /// Credit units charged for a post beyond the free quota
    pub paid_post_cost: u32,
}

impl Default for PostServiceConfig {
    fn default() -> Self {
        Self {
            free_posts_per_month: 1,
            paid_post_cost: 2,
        }
    }
}
