//! Document workflows: contract uploads, receipt uploads and the grouped
//! media upload used by the listing wizard.

use entity::enums::TypeMedia;
use sea_orm::DatabaseConnection;

use crate::{
    data::{
        contrat::ContratRepository,
        media::{CreateMediaParams, MediaRepository},
        paiement::PaiementRepository,
        recu::RecuRepository,
    },
    error::AppError,
    model::document::UploadDocumentsFields,
    service::storage::StorageClient,
};

/// One file extracted from the multipart upload, tagged with the form
/// section it came from.
pub struct UploadFile {
    pub section: String,
    pub file_name: String,
    pub bytes: Vec<u8>,
}

pub struct DocumentService<'a> {
    db: &'a DatabaseConnection,
    storage: &'a StorageClient,
}

impl<'a> DocumentService<'a> {
    pub fn new(db: &'a DatabaseConnection, storage: &'a StorageClient) -> Self {
        Self { db, storage }
    }

    /// Attaches an uploaded contract document to a reservation.
    ///
    /// Finds or creates the contract row, pushes the file to object storage
    /// and records a CONTRAT media row pointing at the stored URL.
    ///
    /// # Arguments
    /// - `reservation_id`: Reservation the contract belongs to
    /// - `file_name` / `bytes`: The uploaded document
    ///
    /// # Returns
    /// - `Ok(String)`: Public URL of the stored document
    /// - `Err(AppError)`: Storage or database error
    pub async fn upload_contrat(
        &self,
        reservation_id: i32,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<String, AppError> {
        let contrat_repo = ContratRepository::new(self.db);

        let contrat = match contrat_repo.find_by_reservation(reservation_id).await? {
            Some(contrat) => contrat,
            None => contrat_repo.create(reservation_id).await?,
        };

        let url = self.storage.upload("contrats", file_name, bytes).await?;

        MediaRepository::new(self.db)
            .create(CreateMediaParams {
                url: url.clone(),
                type_media: TypeMedia::Contrat,
                titre: Some("Contrat de location".to_string()),
                description: None,
                numero_police: None,
                bateau_id: None,
                utilisateur_id: None,
                contrat_id: Some(contrat.id),
                recu_id: None,
            })
            .await?;

        Ok(url)
    }

    /// Attaches an uploaded receipt to the payment of a reservation.
    ///
    /// The payment must exist and carry no receipt yet; at most one receipt
    /// per payment.
    ///
    /// # Arguments
    /// - `reservation_id`: Reservation whose payment is receipted
    /// - `file_name` / `bytes`: The uploaded document
    ///
    /// # Returns
    /// - `Ok((url, recu_id))`: Stored URL and the created receipt row id
    /// - `Err(AppError::NotFound)`: No payment for the reservation
    /// - `Err(AppError::Conflict)`: A receipt already exists
    /// - `Err(AppError)`: Storage or database error
    pub async fn upload_recu(
        &self,
        reservation_id: i32,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<(String, i32), AppError> {
        let paiement = PaiementRepository::new(self.db)
            .find_by_reservation(reservation_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Paiement non trouvé".to_string()))?;

        let recu_repo = RecuRepository::new(self.db);
        if recu_repo.find_by_paiement(paiement.id).await?.is_some() {
            return Err(AppError::Conflict(
                "Un reçu existe déjà pour ce paiement".to_string(),
            ));
        }

        let url = self.storage.upload("recus", file_name, bytes).await?;

        let recu = recu_repo.create(paiement.id).await?;

        MediaRepository::new(self.db)
            .create(CreateMediaParams {
                url: url.clone(),
                type_media: TypeMedia::Recus,
                titre: Some("Reçu de paiement".to_string()),
                description: None,
                numero_police: None,
                bateau_id: None,
                utilisateur_id: None,
                contrat_id: None,
                recu_id: Some(recu.id),
            })
            .await?;

        Ok((url, recu.id))
    }

    /// Stores the grouped media files of the listing wizard.
    ///
    /// Section mapping: the first `section1` file becomes the COVER, every
    /// other `section1`/`section2` file a GALLERIE image, `attestation1`
    /// the insurance attestation and `certificat` the navigation
    /// certificate — the latter only when `no_certificat` is unset.
    ///
    /// # Arguments
    /// - `fields`: Optional boat/user links and policy number
    /// - `files`: Files in form order with their section names
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)`: The created media rows
    /// - `Err(AppError)`: Storage or database error
    pub async fn upload_documents(
        &self,
        fields: UploadDocumentsFields,
        files: Vec<UploadFile>,
    ) -> Result<Vec<entity::media::Model>, AppError> {
        let media_repo = MediaRepository::new(self.db);

        let mut medias = Vec::new();
        let mut premiere_section1 = true;

        for file in files {
            let type_media = match file.section.as_str() {
                "section1" => {
                    let t = if premiere_section1 {
                        TypeMedia::Cover
                    } else {
                        TypeMedia::Gallerie
                    };
                    premiere_section1 = false;
                    t
                }
                "section2" => TypeMedia::Gallerie,
                "attestation1" => TypeMedia::AttestationAssurance,
                "certificat" => {
                    if fields.no_certificat {
                        continue;
                    }
                    TypeMedia::CertificatNavigation
                }
                _ => continue,
            };

            let url = self
                .storage
                .upload("documents", &file.file_name, file.bytes)
                .await?;

            let media = media_repo
                .create(CreateMediaParams {
                    url,
                    type_media,
                    titre: Some(file.file_name),
                    description: None,
                    numero_police: fields.numero_police.clone(),
                    bateau_id: fields.bateau_id,
                    utilisateur_id: fields.utilisateur_id,
                    contrat_id: None,
                    recu_id: None,
                })
                .await?;

            medias.push(media);
        }

        Ok(medias)
    }
}
