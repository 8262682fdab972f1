use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    error::AppError,
    middleware::auth::AuthGuard,
    model::{
        api::MessageDto,
        auth::{LoginDto, RegisterDto, RegisterResponseDto},
    },
    service::auth::AuthService,
    state::AppState,
};

/// Session key holding the authenticated user's id.
pub static SESSION_AUTH_USER_ID: &str = "auth:user_id";

/// POST /api/auth/register
/// Create an account; role defaults to CLIENT
pub async fn register(
    State(state): State<AppState>,
    Json(dto): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = AuthService::new(&state.db);

    let user = auth_service.register(dto).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponseDto {
            message: "Utilisateur créé".to_string(),
            user,
        }),
    ))
}

/// POST /api/auth/login
/// Verify credentials and open a session
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = AuthService::new(&state.db);

    let utilisateur = auth_service.login(dto).await?;

    session
        .insert(SESSION_AUTH_USER_ID, utilisateur.id)
        .await?;

    Ok((StatusCode::OK, Json(utilisateur)))
}

/// GET /api/auth/logout
/// Close the session
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    session.flush().await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Déconnexion réussie".to_string(),
        }),
    ))
}

/// GET /api/auth/user
/// Return the session's user
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let utilisateur = AuthGuard::new(&state.db, &session).require(&[]).await?;

    Ok((StatusCode::OK, Json(utilisateur)))
}
