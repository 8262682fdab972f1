use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    data::message::DirectionMessage,
    error::AppError,
    model::{
        api::ErrorDto,
        message::{CreateMessageDto, ListeMessagesAdminDto, ListeMessagesDto, MessagesQuery},
    },
    service::message::MessageService,
    state::AppState,
};

/// Tag for grouping message endpoints in OpenAPI documentation
pub static MESSAGE_TAG: &str = "message";

const DEFAULT_TAKE: u64 = 20;

#[derive(Deserialize)]
pub struct ActingUserQuery {
    #[serde(rename = "userId")]
    pub user_id: Option<i32>,
}

/// List a user's messages.
///
/// Filters on direction (`recus`, `envoyes` or `all`), paginates with
/// skip/take and orders by send time descending.
///
/// # Returns
/// - `200 OK` - Messages with correspondents joined
/// - `400 Bad Request` - Missing userId
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/messages",
    tag = MESSAGE_TAG,
    params(
        ("userId" = i32, Query, description = "Mailbox owner"),
        ("type" = Option<String>, Query, description = "recus | envoyes | all (default all)"),
        ("skip" = Option<u64>, Query, description = "Pagination offset"),
        ("take" = Option<u64>, Query, description = "Page size (default 20)")
    ),
    responses(
        (status = 200, description = "Messages for the user"),
        (status = 400, description = "Missing userId", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_messages(
    State(state): State<AppState>,
    Query(query): Query<MessagesQuery>,
) -> Result<impl IntoResponse, AppError> {
    let Some(user_id) = query.user_id else {
        return Err(AppError::BadRequest(
            "userId est requis dans la query".to_string(),
        ));
    };

    let direction = DirectionMessage::from_query(query.direction.as_deref());
    let skip = query.skip.unwrap_or(0);
    let take = query.take.unwrap_or(DEFAULT_TAKE);

    let service = MessageService::new(&state.db);
    let messages = service
        .get_for_utilisateur(user_id, direction, skip, take)
        .await?;

    Ok((StatusCode::OK, Json(ListeMessagesDto { messages })))
}

/// Mark a message as read.
///
/// Only the recipient may flip the flag; re-marking an already-read
/// message succeeds unchanged.
///
/// # Returns
/// - `200 OK` - The (possibly unchanged) message
/// - `403 Forbidden` - Acting user is not the recipient
/// - `404 Not Found` - Unknown message
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/api/messages/{id}/lu",
    tag = MESSAGE_TAG,
    params(
        ("id" = i32, Path, description = "Message id"),
        ("userId" = i32, Query, description = "Acting user")
    ),
    responses(
        (status = 200, description = "Message marked as read"),
        (status = 403, description = "Not the recipient", body = ErrorDto),
        (status = 404, description = "Unknown message", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn mark_as_read(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(query): Query<ActingUserQuery>,
) -> Result<impl IntoResponse, AppError> {
    let Some(user_id) = query.user_id else {
        return Err(AppError::BadRequest("userId est requis".to_string()));
    };

    let service = MessageService::new(&state.db);
    let message = service.mark_as_read(id, user_id).await?;

    Ok((StatusCode::OK, Json(message)))
}

/// POST /api/messages?userId=
/// Send a direct message
pub async fn create_message(
    State(state): State<AppState>,
    Query(query): Query<ActingUserQuery>,
    Json(dto): Json<CreateMessageDto>,
) -> Result<impl IntoResponse, AppError> {
    let Some(user_id) = query.user_id else {
        return Err(AppError::BadRequest(
            "expediteurId et contenu sont requis".to_string(),
        ));
    };

    let service = MessageService::new(&state.db);
    let message = service.create(user_id, dto).await?;

    Ok((StatusCode::OK, Json(message)))
}

/// GET /api/messages/admin
/// List every message
pub async fn get_all_messages(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = MessageService::new(&state.db);
    let messages = service.get_all().await?;

    Ok((
        StatusCode::OK,
        Json(ListeMessagesAdminDto {
            success: true,
            messages,
        }),
    ))
}
