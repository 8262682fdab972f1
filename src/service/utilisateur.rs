use entity::enums::RoleUtilisateur;
use sea_orm::DatabaseConnection;

use crate::{
    data::utilisateur::{CreateUtilisateurParams, UpdateUtilisateurParams, UtilisateurRepository},
    error::{auth::AuthError, AppError},
    model::utilisateur::{CreateUtilisateurDto, UpdateUtilisateurDto},
    service::auth::hash_password,
};

pub struct UtilisateurService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UtilisateurService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a user account from the management surface.
    ///
    /// Unlike registration, the caller chooses the role (defaulting to
    /// PROPRIETAIRE, the role the onboarding flow creates accounts with).
    ///
    /// # Returns
    /// - `Ok(Model)`: The created account
    /// - `Err(AppError::AuthErr)`: Duplicate email or phone number
    /// - `Err(AppError)`: Database error
    pub async fn create(
        &self,
        dto: CreateUtilisateurDto,
    ) -> Result<entity::utilisateur::Model, AppError> {
        let repo = UtilisateurRepository::new(self.db);

        let email = dto.email.trim().to_lowercase();
        if repo.find_by_email(&email).await?.is_some() {
            return Err(AuthError::EmailTaken.into());
        }

        let role = match dto.role.as_deref() {
            Some("CLIENT") => RoleUtilisateur::Client,
            Some("ADMIN") => RoleUtilisateur::Admin,
            _ => RoleUtilisateur::Proprietaire,
        };

        let utilisateur = repo
            .create(CreateUtilisateurParams {
                nom: dto.nom,
                prenom: dto.prenom,
                email,
                mot_de_passe: hash_password(&dto.mot_de_passe)?,
                role,
                telephone: dto.telephone,
                adresse: dto.adresse,
                photo_profil: dto.photo_profil,
            })
            .await
            .map_err(map_unique_violation)?;

        Ok(utilisateur)
    }

    /// Gets every account.
    pub async fn get_all(&self) -> Result<Vec<entity::utilisateur::Model>, AppError> {
        Ok(UtilisateurRepository::new(self.db).get_all().await?)
    }

    /// Gets an account by id.
    ///
    /// # Returns
    /// - `Ok(Model)`: The account
    /// - `Err(AppError::NotFound)`: Unknown id
    pub async fn get_by_id(&self, id: i32) -> Result<entity::utilisateur::Model, AppError> {
        UtilisateurRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Utilisateur non trouvé".to_string()))
    }

    /// Updates an account profile; a provided password is rehashed.
    ///
    /// # Returns
    /// - `Ok(Model)`: The updated account
    /// - `Err(AppError::AuthErr)`: Duplicate email or phone number
    /// - `Err(AppError)`: Unknown id or database error
    pub async fn update(
        &self,
        id: i32,
        dto: UpdateUtilisateurDto,
    ) -> Result<entity::utilisateur::Model, AppError> {
        let mot_de_passe = match dto.mot_de_passe {
            Some(plain) => Some(hash_password(&plain)?),
            None => None,
        };

        let utilisateur = UtilisateurRepository::new(self.db)
            .update(
                id,
                UpdateUtilisateurParams {
                    nom: dto.nom,
                    prenom: dto.prenom,
                    email: dto.email.map(|e| e.trim().to_lowercase()),
                    mot_de_passe,
                    telephone: dto.telephone,
                    adresse: dto.adresse,
                    photo_profil: dto.photo_profil,
                },
            )
            .await
            .map_err(map_unique_violation)?;

        Ok(utilisateur)
    }

    /// Deletes an account; owned boats cascade away with it.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        Ok(UtilisateurRepository::new(self.db).delete(id).await?)
    }
}

/// Maps unique-constraint violations on email/telephone to their 409
/// variants; anything else stays a database error.
fn map_unique_violation(err: sea_orm::DbErr) -> AppError {
    let text = err.to_string();
    if text.contains("UNIQUE") || text.contains("unique") {
        if text.contains("telephone") {
            AuthError::TelephoneTaken.into()
        } else {
            AuthError::EmailTaken.into()
        }
    } else {
        AppError::DbErr(err)
    }
}
