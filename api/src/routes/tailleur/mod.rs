//! Tailor-scoped routes.
//!
//! All endpoints below run behind the JWT middleware with the tailleur role
//! required; handlers are generic over the repository traits so the same
//! code serves MySQL in production and the in-memory mocks in tests.

pub mod buy_credit;
pub mod create_post;
pub mod create_status;
pub mod delete_post;
pub mod update_post;

use std::sync::Arc;

use actix_web::HttpResponse;
use validator::ValidationErrors;

use ch_core::repositories::{
    AccountRepository, ConversionRuleRepository, PostRepository, StatusRepository,
    TailorRepository,
};
use ch_core::services::credit::CreditService;
use ch_core::services::post::PostService;
use ch_core::services::status::StatusService;
use ch_shared::types::response::Envelope;

/// Application state that holds the shared services
pub struct AppState<A, C, T, P, S>
where
    A: AccountRepository,
    C: ConversionRuleRepository,
    T: TailorRepository,
    P: PostRepository,
    S: StatusRepository,
{
    pub post_service: Arc<PostService<A, C, T, P>>,
    pub credit_service: Arc<CreditService<A, C>>,
    pub status_service: Arc<StatusService<T, S>>,
}

impl<A, C, T, P, S> Clone for AppState<A, C, T, P, S>
where
    A: AccountRepository,
    C: ConversionRuleRepository,
    T: TailorRepository,
    P: PostRepository,
    S: StatusRepository,
{
    fn clone(&self) -> Self {
        Self {
            post_service: Arc::clone(&self.post_service),
            credit_service: Arc::clone(&self.credit_service),
            status_service: Arc::clone(&self.status_service),
        }
    }
}

/// 400 response for a request body that failed DTO validation
pub(crate) fn validation_response(errors: &ValidationErrors) -> HttpResponse {
    let message = if errors.field_errors().contains_key("title") {
        "Title must be a non-empty string"
    } else if errors.field_errors().contains_key("content") {
        "Content must be a non-empty string"
    } else {
        "Données invalides"
    };
    HttpResponse::BadRequest().json(Envelope::ko(message))
}
