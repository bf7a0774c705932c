//! Handler for POST /api/v1/tailleur/achetercredit
//!
//! Converts the paid amount through the conversion rule in force and adds
//! the result to the account balance. The role check runs again in the
//! ledger even though the route is tailleur-gated: credit eligibility is a
//! ledger invariant, not a routing detail.

use actix_web::{web, HttpResponse};

use crate::dto::credit::{BuyCreditRequest, ComptePayload};
use crate::handlers::error::to_response;
use crate::middleware::auth::AuthContext;

use ch_core::repositories::{
    AccountRepository, ConversionRuleRepository, PostRepository, StatusRepository,
    TailorRepository,
};
use ch_shared::types::response::Envelope;

use super::AppState;

pub async fn buy_credit<A, C, T, P, S>(
    auth: AuthContext,
    state: web::Data<AppState<A, C, T, P, S>>,
    request: web::Json<BuyCreditRequest>,
) -> HttpResponse
where
    A: AccountRepository + 'static,
    C: ConversionRuleRepository + 'static,
    T: TailorRepository + 'static,
    P: PostRepository + 'static,
    S: StatusRepository + 'static,
{
    log::info!(
        "compte {} buys credit for montant {}",
        auth.account_id,
        request.montant
    );

    match state
        .credit_service
        .purchase(auth.account_id, request.montant)
        .await
    {
        Ok(purchase) => HttpResponse::Ok().json(Envelope::ok(
            "Crédit ajouté avec succès",
            ComptePayload {
                compte: purchase.account,
            },
        )),
        Err(error) => to_response(&error),
    }
}
