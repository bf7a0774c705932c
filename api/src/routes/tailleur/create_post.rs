//! Handler for POST /api/v1/tailleur/posts
//!
//! The quota-enforced post creation: the first post of the calendar month is
//! admitted free, every further one is charged 2 credits, and a submission
//! with neither quota nor credit is rejected inside the same 200/KO envelope
//! the success path uses.

use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::post::{CreatePostRequest, PostPayload};
use crate::handlers::error::to_response;
use crate::middleware::auth::AuthContext;

use ch_core::repositories::{
    AccountRepository, ConversionRuleRepository, PostRepository, StatusRepository,
    TailorRepository,
};
use ch_shared::types::response::Envelope;

use super::{validation_response, AppState};

pub async fn create_post<A, C, T, P, S>(
    auth: AuthContext,
    state: web::Data<AppState<A, C, T, P, S>>,
    request: web::Json<CreatePostRequest>,
) -> HttpResponse
where
    A: AccountRepository + 'static,
    C: ConversionRuleRepository + 'static,
    T: TailorRepository + 'static,
    P: PostRepository + 'static,
    S: StatusRepository + 'static,
{
    if let Err(errors) = request.0.validate() {
        return validation_response(&errors);
    }

    log::info!(
        "compte {} submits a post (useCredit: {})",
        auth.account_id,
        request.use_credit
    );

    match state
        .post_service
        .create_post(auth.account_id, request.into_inner().into())
        .await
    {
        Ok(admission) => {
            let post = admission.post().clone();
            HttpResponse::Created().json(Envelope::ok(
                "Post created successfully",
                PostPayload { post },
            ))
        }
        Err(error) => to_response(&error),
    }
}
