//! String-backed enums shared across the schema.
//!
//! Variants serialize to the same uppercase French values on the wire and
//! in the database, so the stored column value and the JSON representation
//! always agree.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Account role. CLIENT accounts are promoted to PROPRIETAIRE when a
/// partnership request is accepted.
#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum RoleUtilisateur {
    #[sea_orm(string_value = "CLIENT")]
    #[serde(rename = "CLIENT")]
    Client,
    #[sea_orm(string_value = "PROPRIETAIRE")]
    #[serde(rename = "PROPRIETAIRE")]
    Proprietaire,
    #[sea_orm(string_value = "ADMIN")]
    #[serde(rename = "ADMIN")]
    Admin,
}

/// Reservation lifecycle. A reservation starts EN_ATTENTE and becomes
/// CONFIRMEE when a successful payment is recorded.
#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum StatutReservation {
    #[sea_orm(string_value = "EN_ATTENTE")]
    #[serde(rename = "EN_ATTENTE")]
    EnAttente,
    #[sea_orm(string_value = "CONFIRMEE")]
    #[serde(rename = "CONFIRMEE")]
    Confirmee,
}

/// Payment settlement state.
#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum EtatPaiement {
    #[sea_orm(string_value = "PAYE")]
    #[serde(rename = "PAYE")]
    Paye,
    #[sea_orm(string_value = "EN_ATTENTE")]
    #[serde(rename = "EN_ATTENTE")]
    EnAttente,
    #[sea_orm(string_value = "ECHEC")]
    #[serde(rename = "ECHEC")]
    Echec,
}

/// Decision state of a partnership request.
#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum StatutDemande {
    #[sea_orm(string_value = "EN_ATTENTE")]
    #[serde(rename = "EN_ATTENTE")]
    EnAttente,
    #[sea_orm(string_value = "ACCEPTEE")]
    #[serde(rename = "ACCEPTEE")]
    Acceptee,
    #[sea_orm(string_value = "REFUSEE")]
    #[serde(rename = "REFUSEE")]
    Refusee,
}

/// Kind of externally stored file a media row points at.
#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum TypeMedia {
    #[sea_orm(string_value = "COVER")]
    #[serde(rename = "COVER")]
    Cover,
    #[sea_orm(string_value = "GALLERIE")]
    #[serde(rename = "GALLERIE")]
    Gallerie,
    #[sea_orm(string_value = "PROFIL")]
    #[serde(rename = "PROFIL")]
    Profil,
    #[sea_orm(string_value = "CONTRAT")]
    #[serde(rename = "CONTRAT")]
    Contrat,
    #[sea_orm(string_value = "RECUS")]
    #[serde(rename = "RECUS")]
    Recus,
    #[sea_orm(string_value = "ATTESTATION_ASSURANCE")]
    #[serde(rename = "ATTESTATION_ASSURANCE")]
    AttestationAssurance,
    #[sea_orm(string_value = "CERTIFICAT_NAVIGATION")]
    #[serde(rename = "CERTIFICAT_NAVIGATION")]
    CertificatNavigation,
}
