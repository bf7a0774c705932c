//! Handler for PUT /api/v1/tailleur/posts/{post_id}

use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::post::{PostPayload, UpdatePostRequest};
use crate::handlers::error::to_response;
use crate::middleware::auth::AuthContext;

use ch_core::repositories::{
    AccountRepository, ConversionRuleRepository, PostRepository, StatusRepository,
    TailorRepository,
};
use ch_shared::types::response::Envelope;

use super::{validation_response, AppState};

pub async fn update_post<A, C, T, P, S>(
    auth: AuthContext,
    state: web::Data<AppState<A, C, T, P, S>>,
    path: web::Path<i64>,
    request: web::Json<UpdatePostRequest>,
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

    let post_id = path.into_inner();
    match state
        .post_service
        .update_post(auth.account_id, post_id, request.into_inner().into())
        .await
    {
        Ok(post) => HttpResponse::Ok().json(Envelope::ok(
            "Post updated successfully",
            PostPayload { post },
        )),
        Err(error) => to_response(&error),
    }
}
