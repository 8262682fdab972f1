use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of POST /api/auth/register.
#[derive(Deserialize, ToSchema)]
pub struct RegisterDto {
    pub nom: String,
    pub prenom: String,
    pub email: String,
    pub password: String,
    pub role: Option<String>,
}

/// Body of POST /api/auth/login.
#[derive(Deserialize, ToSchema)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

/// Response of POST /api/auth/register.
#[derive(Serialize)]
pub struct RegisterResponseDto {
    pub message: String,
    pub user: entity::utilisateur::Model,
}
