//! Authentication configuration

use serde::{Deserialize, Serialize};

/// JWT configuration consumed by the authentication middleware
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// JWT secret key for signature verification
    pub secret: String,

    /// Access token expiry time in seconds
    pub access_token_expiry: i64,

    /// JWT issuer claim
    pub issuer: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from("your-secret-key-change-in-production"),
            access_token_expiry: 900, // 15 minutes
            issuer: String::from("couturehub"),
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        let secret = std::env::var("JWT_SECRET")
            .unwrap_or_else(|_| JwtConfig::default().secret);
        let access_token_expiry = std::env::var("JWT_ACCESS_EXPIRY_SECONDS")
            .unwrap_or_else(|_| "900".to_string())
            .parse()
            .unwrap_or(900);
        let issuer = std::env::var("JWT_ISSUER").unwrap_or_else(|_| "couturehub".to_string());

        Self {
            secret,
            access_token_expiry,
            issuer,
        }
    }
}
