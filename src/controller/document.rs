use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    error::AppError,
    model::document::{
        ContratUploadDto, RecuUploadDto, UploadDocumentsFields, UploadDocumentsResponseDto,
    },
    service::document::{DocumentService, UploadFile},
    state::AppState,
};

/// POST /api/contrats
/// Upload the signed contract document of a reservation
pub async fn upload_contrat(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let (reservation_id, file) = parse_single_document(multipart).await?;

    let Some(reservation_id) = reservation_id else {
        return Err(AppError::BadRequest("Reservation ID manquant".to_string()));
    };
    let Some((file_name, bytes)) = file else {
        return Err(AppError::BadRequest("Fichier manquant".to_string()));
    };

    let service = DocumentService::new(&state.db, &state.storage);
    let url = service
        .upload_contrat(reservation_id, &file_name, bytes)
        .await?;

    Ok((StatusCode::OK, Json(ContratUploadDto { success: true, url })))
}

/// POST /api/recus
/// Upload the payment receipt of a reservation
pub async fn upload_recu(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let (reservation_id, file) = parse_single_document(multipart).await?;

    let Some(reservation_id) = reservation_id else {
        return Err(AppError::BadRequest("Reservation ID manquant".to_string()));
    };
    let Some((file_name, bytes)) = file else {
        return Err(AppError::BadRequest("Fichier manquant".to_string()));
    };

    let service = DocumentService::new(&state.db, &state.storage);
    let (url, recu_id) = service
        .upload_recu(reservation_id, &file_name, bytes)
        .await?;

    Ok((
        StatusCode::OK,
        Json(RecuUploadDto {
            success: true,
            url,
            recu_id,
        }),
    ))
}

/// POST /upload-documents
/// Upload the grouped media files of the listing wizard
pub async fn upload_documents(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let mut fields = UploadDocumentsFields::default();
    let mut files = Vec::new();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();

        match name.as_str() {
            "bateauId" => fields.bateau_id = field.text().await?.parse().ok(),
            "utilisateurId" => fields.utilisateur_id = field.text().await?.parse().ok(),
            "numeroPolice" => {
                let value = field.text().await?;
                if !value.is_empty() {
                    fields.numero_police = Some(value);
                }
            }
            "noCertificat" => fields.no_certificat = field.text().await? == "true",
            "section1" | "section2" | "attestation1" | "certificat" => {
                let file_name = field.file_name().unwrap_or("document").to_string();
                let bytes = field.bytes().await?.to_vec();
                files.push(UploadFile {
                    section: name.clone(),
                    file_name,
                    bytes,
                });
            }
            // Descriptive text fields (nomBateau, description, …) ride along
            // with the form but play no role in media persistence.
            _ => {
                let _ = field.text().await;
            }
        }
    }

    let service = DocumentService::new(&state.db, &state.storage);
    let medias = service.upload_documents(fields, files).await?;

    Ok((
        StatusCode::OK,
        Json(UploadDocumentsResponseDto {
            success: true,
            message: "Upload réussi".to_string(),
            medias,
        }),
    ))
}

/// Pulls the reservationId text field and the single document file out of
/// a multipart body, whatever order they arrive in.
async fn parse_single_document(
    mut multipart: Multipart,
) -> Result<(Option<i32>, Option<(String, Vec<u8>)>), AppError> {
    let mut reservation_id = None;
    let mut file = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();

        if name == "reservationId" {
            reservation_id = field.text().await?.parse().ok();
        } else if field.file_name().is_some() {
            let file_name = field.file_name().unwrap_or("document").to_string();
            let bytes = field.bytes().await?.to_vec();
            file = Some((file_name, bytes));
        } else {
            let _ = field.text().await;
        }
    }

    Ok((reservation_id, file))
}
