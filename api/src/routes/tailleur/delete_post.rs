//! Handler for DELETE /api/v1/tailleur/posts/{post_id}

use actix_web::{web, HttpResponse};

use crate::handlers::error::to_response;
use crate::middleware::auth::AuthContext;

use ch_core::repositories::{
    AccountRepository, ConversionRuleRepository, PostRepository, StatusRepository,
    TailorRepository,
};
use ch_shared::types::response::Envelope;

use super::AppState;

pub async fn delete_post<A, C, T, P, S>(
    auth: AuthContext,
    state: web::Data<AppState<A, C, T, P, S>>,
    path: web::Path<i64>,
) -> HttpResponse
where
    A: AccountRepository + 'static,
    C: ConversionRuleRepository + 'static,
    T: TailorRepository + 'static,
    P: PostRepository + 'static,
    S: StatusRepository + 'static,
{
    let post_id = path.into_inner();
    match state
        .post_service
        .delete_post(auth.account_id, post_id)
        .await
    {
        Ok(()) => HttpResponse::Ok().json(Envelope::ok_message("Post deleted successfully")),
        Err(error) => to_response(&error),
    }
}
