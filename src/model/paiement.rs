use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::utilisateur::UtilisateurSummaryDto;

/// Body of POST /api/paiements.
///
/// `etat_paiement` arrives as the raw enum string and is validated against
/// the recognized values before anything is written.
#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaiementDto {
    pub reservation_id: i32,
    pub montant: f64,
    pub montant_total: f64,
    pub methode_paiement: String,
    pub pourcentage_stripe: f64,
    pub etat_paiement: String,
}

/// Response of POST /api/paiements.
#[derive(Serialize)]
pub struct CreatedPaiementDto {
    pub message: String,
    pub paiement: entity::paiement::Model,
}

/// Reservation nested under a payment row, with renter and boat joined.
#[derive(Serialize)]
pub struct PaiementReservationDto {
    #[serde(flatten)]
    pub reservation: entity::reservation::Model,
    pub utilisateur: Option<UtilisateurSummaryDto>,
    pub bateau: Option<entity::bateau::Model>,
}

/// Payment with its reservation chain, for the admin and owner listings.
#[derive(Serialize)]
pub struct PaiementCompletDto {
    #[serde(flatten)]
    pub paiement: entity::paiement::Model,
    pub reservation: Option<PaiementReservationDto>,
}

/// Response of the payment list endpoints.
#[derive(Serialize)]
pub struct ListePaiementsDto {
    pub success: bool,
    pub paiements: Vec<PaiementCompletDto>,
}
