use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::NaiveDate;
use thiserror::Error;

use crate::model::api::MessageDto;

/// Rate-limit violations of the partnership request workflow.
///
/// A closed set of variants matched exhaustively at the HTTP boundary: one
/// request per user per calendar day, and one per rolling 7-day window.
#[derive(Error, Debug)]
pub enum DemandeError {
    /// A request already exists for this user today.
    #[error("Vous avez déjà envoyé une demande aujourd'hui.")]
    DailyLimit,

    /// The user's most recent request is younger than 7 days.
    ///
    /// Carries the first day a new request becomes admissible.
    #[error("Vous pourrez refaire une demande à partir du {}.", .next_allowed.format("%d/%m/%Y"))]
    WeeklyLimit {
        /// First day a new request will be accepted.
        next_allowed: NaiveDate,
    },
}

/// Both limits answer 409 Conflict with the limit-specific message.
impl IntoResponse for DemandeError {
    fn into_response(self) -> Response {
        match self {
            Self::DailyLimit | Self::WeeklyLimit { .. } => (
                StatusCode::CONFLICT,
                Json(MessageDto {
                    message: self.to_string(),
                }),
            )
                .into_response(),
        }
    }
}
