use serde::Serialize;

/// Response of POST /api/contrats.
#[derive(Serialize)]
pub struct ContratUploadDto {
    pub success: bool,
    pub url: String,
}

/// Response of POST /api/recus.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecuUploadDto {
    pub success: bool,
    pub url: String,
    pub recu_id: i32,
}

/// Text fields accompanying the multipart document upload.
#[derive(Default)]
pub struct UploadDocumentsFields {
    pub bateau_id: Option<i32>,
    pub utilisateur_id: Option<i32>,
    pub numero_police: Option<String>,
    pub no_certificat: bool,
}

/// Response of POST /upload-documents.
#[derive(Serialize)]
pub struct UploadDocumentsResponseDto {
    pub success: bool,
    pub message: String,
    pub medias: Vec<entity::media::Model>,
}
