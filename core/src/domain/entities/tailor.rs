//! Tailor profile entity.

use serde::{Deserialize, Serialize};

/// Role-specific profile owned by exactly one tailleur account (1:1 by
/// account identifier). Immutable after creation from the core's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tailor {
    /// Unique identifier for the tailor profile
    pub id: i64,

    /// Identifier of the owning account
    pub compte_id: i64,
}

impl Tailor {
    /// Creates a new Tailor instance
    pub fn new(id: i64, compte_id: i64) -> Self {
        Self { id, compte_id }
    }
}
