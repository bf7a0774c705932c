//! JWT authentication middleware for protecting API endpoints.
//!
//! This middleware extracts the bearer token from the Authorization header,
//! verifies it, and injects an [`AuthContext`] into the request extensions.
//! A scope can additionally require a specific account role; the tailor
//! scope runs with `JwtAuth::tailleur_only()`.

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    error::{ErrorForbidden, ErrorUnauthorized},
    http::header::AUTHORIZATION,
    Error, FromRequest, HttpMessage, HttpRequest,
};
use futures_util::future::LocalBoxFuture;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use std::{
    future::{ready, Ready},
    rc::Rc,
    str::FromStr,
    task::{Context, Poll},
};

use ch_core::domain::entities::account::Role;
use ch_shared::config::JwtConfig;

/// JWT claims carried by an access token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Account identifier, as issued at login
    pub sub: String,
    /// Account role ("client", "tailleur", "vendeur", "admin")
    pub role: String,
    /// Expiry, seconds since epoch
    pub exp: i64,
    /// Issued-at, seconds since epoch
    pub iat: i64,
    /// Issuer
    pub iss: String,
}

/// Authenticated request context injected into request extensions
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// Account identifier extracted from the token subject
    pub account_id: i64,
    /// Account role
    pub role: Role,
}

impl AuthContext {
    /// Creates an authentication context from verified claims
    pub fn from_claims(claims: &Claims) -> Result<Self, String> {
        let account_id = claims
            .sub
            .parse::<i64>()
            .map_err(|_| format!("Invalid subject claim: {}", claims.sub))?;
        let role = Role::from_str(&claims.role)?;
        Ok(Self { account_id, role })
    }
}

/// JWT authentication middleware factory
pub struct JwtAuth {
    secret: String,
    issuer: Option<String>,
    required_role: Option<Role>,
}

impl JwtAuth {
    /// Creates a middleware from the JWT configuration
    pub fn from_config(config: &JwtConfig) -> Self {
        Self {
            secret: config.secret.clone(),
            issuer: Some(config.issuer.clone()),
            required_role: None,
        }
    }

    /// Creates a middleware with a specific secret and no issuer check
    pub fn with_secret(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            issuer: None,
            required_role: None,
        }
    }

    /// Additionally require the tailleur role
    pub fn tailleur_only(mut self) -> Self {
        self.required_role = Some(Role::Tailleur);
        self
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
            secret: self.secret.clone(),
            issuer: self.issuer.clone(),
            required_role: self.required_role,
        }))
    }
}

/// JWT authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    secret: String,
    issuer: Option<String>,
    required_role: Option<Role>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let secret = self.secret.clone();
        let issuer = self.issuer.clone();
        let required_role = self.required_role;

        Box::pin(async move {
            let token = match extract_bearer_token(&req) {
                Some(token) => token,
                None => {
                    return Err(ErrorUnauthorized("Missing or invalid Authorization header"));
                }
            };

            let claims = verify_token(&token, &secret, issuer.as_deref())
                .map_err(|e| ErrorUnauthorized(format!("Token verification failed: {}", e)))?;

            let context = AuthContext::from_claims(&claims)
                .map_err(|e| ErrorUnauthorized(format!("Invalid token: {}", e)))?;

            if let Some(required) = required_role {
                if context.role != required {
                    return Err(ErrorForbidden(format!(
                        "Reserved for {} accounts",
                        required
                    )));
                }
            }

            req.extensions_mut().insert(context);
            service.call(req).await
        })
    }
}

/// Extracts Bearer token from Authorization header
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}

/// Decodes and validates the token signature, expiry and optional issuer
fn verify_token(token: &str, secret: &str, issuer: Option<&str>) -> Result<Claims, String> {
    let decoding_key = DecodingKey::from_secret(secret.as_bytes());
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;
    if let Some(iss) = issuer {
        validation.set_issuer(&[iss]);
    }

    let token_data = decode::<Claims>(token, &decoding_key, &validation)
        .map_err(|e| format!("Token decode error: {}", e))?;
    Ok(token_data.claims)
}

/// Extractor for required authentication
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| ErrorUnauthorized("Authentication required"));

        ready(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_bearer_token() {
        use actix_web::test;

        let req = test::TestRequest::default()
            .insert_header((AUTHORIZATION, "Bearer test_token_123"))
            .to_srv_request();
        assert_eq!(extract_bearer_token(&req), Some("test_token_123".to_string()));

        let req_no_bearer = test::TestRequest::default()
            .insert_header((AUTHORIZATION, "test_token_123"))
            .to_srv_request();
        assert_eq!(extract_bearer_token(&req_no_bearer), None);

        let req_no_header = test::TestRequest::default().to_srv_request();
        assert_eq!(extract_bearer_token(&req_no_header), None);
    }

    #[test]
    fn test_auth_context_from_claims() {
        let claims = Claims {
            sub: "7".to_string(),
            role: "tailleur".to_string(),
            exp: 0,
            iat: 0,
            iss: "couturehub".to_string(),
        };
        let context = AuthContext::from_claims(&claims).unwrap();
        assert_eq!(context.account_id, 7);
        assert_eq!(context.role, Role::Tailleur);

        let bad_role = Claims {
            role: "couturier".to_string(),
            ..claims.clone()
        };
        assert!(AuthContext::from_claims(&bad_role).is_err());

        let bad_sub = Claims {
            sub: "abc".to_string(),
            ..claims
        };
        assert!(AuthContext::from_claims(&bad_sub).is_err());
    }
}
