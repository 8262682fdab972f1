use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::utilisateur::UtilisateurSummaryDto;

/// Body of POST /api/reservations.
///
/// Absent price fields default to zero when the row is written.
#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservationDto {
    pub utilisateur_id: i32,
    pub bateau_id: i32,
    pub date_debut: DateTime<Utc>,
    pub date_fin: DateTime<Utc>,
    /// Boat display name, echoed into the notification message body.
    pub bateaunom: Option<String>,
    pub plage: Option<String>,
    #[serde(alias = "numbreDePassage")]
    pub nombre_de_passagers: Option<i32>,
    pub supplement: Option<String>,
    pub heure: Option<String>,
    pub prix_de_base: Option<f64>,
    pub prix_supplement_passagers: Option<f64>,
    pub prix_options_payantes: Option<f64>,
    #[serde(alias = "Total")]
    pub total: Option<f64>,
    pub montant_final: Option<f64>,
    pub commission: Option<f64>,
}

/// Body of PUT /api/reservations/{id}.
#[derive(Deserialize, ToSchema)]
pub struct UpdateStatutReservationDto {
    /// Free-form status text the owner sets on the reservation.
    pub statusduproprietaire: String,
    #[serde(rename = "expediteurId")]
    pub expediteur_id: i32,
}

/// Compact boat projection joined into the renter's reservation list.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BateauSummaryDto {
    pub id: i32,
    pub nom: String,
    pub proprietaire_id: i32,
}

impl From<entity::bateau::Model> for BateauSummaryDto {
    fn from(model: entity::bateau::Model) -> Self {
        Self {
            id: model.id,
            nom: model.nom,
            proprietaire_id: model.proprietaire_id,
        }
    }
}

/// Reservation joined with its boat and renter summaries.
#[derive(Serialize)]
pub struct ReservationUtilisateurDto {
    #[serde(flatten)]
    pub reservation: entity::reservation::Model,
    pub bateau: Option<BateauSummaryDto>,
    pub utilisateur: Option<UtilisateurSummaryDto>,
}

/// Boat with medias and owner summary, nested in the deep reservation reads.
#[derive(Serialize)]
pub struct BateauAvecMediasDto {
    #[serde(flatten)]
    pub bateau: entity::bateau::Model,
    pub medias: Vec<entity::media::Model>,
    pub proprietaire: Option<UtilisateurSummaryDto>,
}

/// Contract with its uploaded documents.
#[derive(Serialize)]
pub struct ContratAvecMediasDto {
    #[serde(flatten)]
    pub contrat: entity::contrat::Model,
    pub medias: Vec<entity::media::Model>,
}

/// Receipt with its uploaded document.
#[derive(Serialize)]
pub struct RecuAvecMediaDto {
    #[serde(flatten)]
    pub recu: entity::recu::Model,
    pub media: Option<entity::media::Model>,
}

/// Payment with its receipt chain.
#[derive(Serialize)]
pub struct PaiementAvecRecuDto {
    #[serde(flatten)]
    pub paiement: entity::paiement::Model,
    pub recu: Option<RecuAvecMediaDto>,
}

/// Fully joined reservation row for the owner and admin listings.
#[derive(Serialize)]
pub struct ReservationCompleteDto {
    #[serde(flatten)]
    pub reservation: entity::reservation::Model,
    pub bateau: Option<BateauAvecMediasDto>,
    pub utilisateur: Option<UtilisateurSummaryDto>,
    pub contrat: Option<ContratAvecMediasDto>,
    pub paiement: Option<PaiementAvecRecuDto>,
}

/// Response of POST /api/reservations.
#[derive(Serialize)]
pub struct CreatedReservationDto {
    pub message: String,
    pub reservation: entity::reservation::Model,
}

/// Response of the renter's reservation list.
#[derive(Serialize)]
pub struct ReservationsUtilisateurDto {
    pub success: bool,
    pub reservations: Vec<ReservationUtilisateurDto>,
}

/// Response of the owner and admin reservation lists.
#[derive(Serialize)]
pub struct ReservationsCompletesDto {
    pub success: bool,
    pub reservations: Vec<ReservationCompleteDto>,
}

/// Response of PUT /api/reservations/{id}.
#[derive(Serialize)]
pub struct UpdateStatutReservationResponseDto {
    pub success: bool,
    pub reservation: entity::reservation::Model,
    pub message: entity::message::Model,
}
