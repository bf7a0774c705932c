//! Translation of domain errors into the response envelope.
//!
//! Every domain error is handled here, once, at the boundary. One family
//! deliberately does NOT map to an HTTP error status: an exhausted credit
//! balance is a user-recoverable business outcome, so it travels as a 200
//! with `status: "KO"` and an explanatory message.

use actix_web::HttpResponse;

use ch_core::errors::{CreditError, DomainError, QuotaError, ValidationError};
use ch_shared::types::response::Envelope;

/// Convert a domain error into the enveloped HTTP response
pub fn to_response(error: &DomainError) -> HttpResponse {
    match error {
        DomainError::Validation(validation) => {
            HttpResponse::BadRequest().json(Envelope::ko(validation_message(validation)))
        }

        DomainError::NotFound { resource } => {
            HttpResponse::NotFound().json(Envelope::ko(not_found_message(resource)))
        }

        DomainError::Credit(credit) => credit_response(credit),

        DomainError::Quota(QuotaError::QuotaExceededAndInsufficientCredit { .. }) => {
            // Business rejection, not a protocol error
            HttpResponse::Ok().json(Envelope::ko(
                "Votre crédit est insuffisant et vous avez déjà plus d'un post ce mois-ci, achetez du crédit",
            ))
        }

        DomainError::Database { message } | DomainError::Internal { message } => {
            log::error!("Unexpected failure: {}", message);
            HttpResponse::InternalServerError()
                .json(Envelope::ko("Une erreur est survenue, réessayez plus tard"))
        }
    }
}

fn credit_response(error: &CreditError) -> HttpResponse {
    match error {
        CreditError::NoRuleConfigured => {
            // Operator defect: nobody seeded a conversion rule
            log::error!("No conversion rule configured");
            HttpResponse::InternalServerError()
                .json(Envelope::ko("Règle de conversion non trouvée"))
        }
        CreditError::InvalidRule { price } => {
            log::error!("Conversion rule has non-positive price: {}", price);
            HttpResponse::InternalServerError()
                .json(Envelope::ko("Règle de conversion invalide"))
        }
        CreditError::InvalidAmount { .. } => {
            HttpResponse::BadRequest().json(Envelope::ko("Montant invalide"))
        }
        CreditError::AccountNotFound { .. } => {
            HttpResponse::NotFound().json(Envelope::ko("Compte non trouvé"))
        }
        CreditError::RoleNotEligible { .. } => {
            HttpResponse::Forbidden().json(Envelope::ko("Seul un tailleur peut acheter des crédits"))
        }
        CreditError::InsufficientCredit { .. } => {
            // Business rejection, same envelope shape as a success
            HttpResponse::Ok().json(Envelope::ko("Votre crédit est insuffisant, achetez du crédit"))
        }
    }
}

fn validation_message(error: &ValidationError) -> String {
    match error {
        ValidationError::RequiredField { field } if field == "files" => {
            "Le fichier est requis".to_string()
        }
        ValidationError::RequiredField { field } => format!("Le champ {} est requis", field),
        ValidationError::EmptyText { field } if field == "title" => {
            "Title must be a non-empty string".to_string()
        }
        ValidationError::EmptyText { field } if field == "content" => {
            "Content must be a non-empty string".to_string()
        }
        ValidationError::EmptyText { field } => {
            format!("Le champ {} ne peut pas être vide", field)
        }
        ValidationError::InvalidMediaReference { .. } => {
            "Référence de fichier invalide".to_string()
        }
    }
}

fn not_found_message(resource: &str) -> String {
    match resource {
        "compte" => "Compte introuvable".to_string(),
        "tailleur" => "Tailleur not found".to_string(),
        "post" => "Post not found or you don't have permission".to_string(),
        other => format!("{} introuvable", other),
    }
}
