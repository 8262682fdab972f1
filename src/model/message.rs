use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::utilisateur::UtilisateurSummaryDto;

/// Body of POST /api/messages.
#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateMessageDto {
    pub destinataire_id: Option<i32>,
    pub contenu: String,
    #[serde(rename = "object")]
    pub objet: Option<String>,
    pub reservation_id: Option<i32>,
    pub bateau_id: Option<i32>,
}

/// Query string of GET /api/messages.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessagesQuery {
    pub user_id: Option<i32>,
    /// Direction filter: `recus`, `envoyes` or `all` (default).
    #[serde(rename = "type")]
    pub direction: Option<String>,
    pub skip: Option<u64>,
    pub take: Option<u64>,
}

/// Message with its correspondents and linked rows joined.
#[derive(Serialize)]
pub struct MessageCompletDto {
    #[serde(flatten)]
    pub message: entity::message::Model,
    pub expediteur: Option<UtilisateurSummaryDto>,
    pub destinataire: Option<UtilisateurSummaryDto>,
    pub reservation: Option<entity::reservation::Model>,
    pub bateau: Option<entity::bateau::Model>,
}

/// Response of GET /api/messages.
#[derive(Serialize)]
pub struct ListeMessagesDto {
    pub messages: Vec<MessageCompletDto>,
}

/// Response of GET /api/messages/admin.
#[derive(Serialize)]
pub struct ListeMessagesAdminDto {
    pub success: bool,
    pub messages: Vec<MessageCompletDto>,
}
