//! Handler for POST /api/v1/tailleur/status

use actix_web::{web, HttpResponse};

use crate::dto::status::{CreateStatusRequest, StatusPayload};
use crate::handlers::error::to_response;
use crate::middleware::auth::AuthContext;

use ch_core::repositories::{
    AccountRepository, ConversionRuleRepository, PostRepository, StatusRepository,
    TailorRepository,
};
use ch_shared::types::response::Envelope;

use super::AppState;

pub async fn create_status<A, C, T, P, S>(
    auth: AuthContext,
    state: web::Data<AppState<A, C, T, P, S>>,
    request: web::Json<CreateStatusRequest>,
) -> HttpResponse
where
    A: AccountRepository + 'static,
    C: ConversionRuleRepository + 'static,
    T: TailorRepository + 'static,
    P: PostRepository + 'static,
    S: StatusRepository + 'static,
{
    match state
        .status_service
        .create_status(auth.account_id, request.into_inner().into())
        .await
    {
        Ok(status) => HttpResponse::Created()
            .json(Envelope::ok("Statut créé", StatusPayload { statut: status })),
        Err(error) => to_response(&error),
    }
}
