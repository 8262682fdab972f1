use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::MessageDto;

/// Authentication failures surfaced by the register/login endpoints.
///
/// The auth surface answers `{ "message": … }` bodies, unlike the workflow
/// surface which answers `{ "error": … }`.
#[derive(Error, Debug)]
pub enum AuthError {
    /// A required credential field is absent from the request body.
    #[error("Email et mot de passe requis")]
    MissingCredentials,

    /// The email fails shape validation or contains unsafe characters.
    #[error("Email invalide ou dangereux")]
    InvalidEmail,

    /// The password contains characters rejected by the input filter.
    #[error("Mot de passe contient des caractères non autorisés")]
    UnsafePassword,

    /// The password does not meet the strength policy at registration.
    #[error(
        "Le mot de passe doit contenir au moins 6 caractères, une majuscule, un chiffre et un caractère spécial"
    )]
    WeakPassword,

    /// A name field fails shape validation at registration.
    #[error("{0} invalide. Lettres uniquement sans caractères spéciaux dangereux.")]
    InvalidName(String),

    /// The email is already attached to an account.
    #[error("Cet email est déjà utilisé")]
    EmailTaken,

    /// The phone number is already attached to an account.
    #[error("Ce numéro de téléphone est déjà utilisé")]
    TelephoneTaken,

    /// No account exists for the given email.
    #[error("Utilisateur non trouvé")]
    UserNotFound,

    /// The password does not match the stored hash.
    #[error("Mot de passe incorrect")]
    WrongPassword,

    /// No authenticated user in the session.
    #[error("Vous devez être connecté")]
    NotLoggedIn,

    /// The session user id no longer resolves to a database row.
    #[error("Utilisateur de session introuvable ({0})")]
    UserNotInDatabase(i32),

    /// The authenticated user lacks the required role.
    #[error("Accès refusé")]
    AccessDenied,
}

/// Converts authentication errors into HTTP responses.
///
/// - Validation failures → 400 Bad Request
/// - Unknown user / wrong password / missing session → 401 Unauthorized
/// - Role mismatch → 403 Forbidden
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::MissingCredentials
            | Self::InvalidEmail
            | Self::UnsafePassword
            | Self::WeakPassword
            | Self::InvalidName(_) => StatusCode::BAD_REQUEST,
            Self::EmailTaken | Self::TelephoneTaken => StatusCode::CONFLICT,
            Self::UserNotFound | Self::WrongPassword | Self::NotLoggedIn => {
                StatusCode::UNAUTHORIZED
            }
            Self::UserNotInDatabase(_) => StatusCode::NOT_FOUND,
            Self::AccessDenied => StatusCode::FORBIDDEN,
        };

        (
            status,
            Json(MessageDto {
                message: self.to_string(),
            }),
        )
            .into_response()
    }
}
