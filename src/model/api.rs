use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body used by the workflow surfaces (`{ "error": … }`).
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Message body used by the auth/user surfaces (`{ "message": … }`).
#[derive(Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    pub message: String,
}

/// Success envelope with a human-readable confirmation.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct SuccessMessageDto {
    pub success: bool,
    pub message: String,
}
