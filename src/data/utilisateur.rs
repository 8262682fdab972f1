//! User data repository for database operations.
//!
//! This module provides the `UtilisateurRepository` for managing user records in the
//! database. It handles account creation, profile updates, queries and role changes.
//! Password hashes are received already computed; the repository never touches
//! plaintext credentials.

use chrono::Utc;
use entity::enums::RoleUtilisateur;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

/// Parameters for creating a user account.
pub struct CreateUtilisateurParams {
    pub nom: String,
    pub prenom: String,
    pub email: String,
    /// Already-hashed password.
    pub mot_de_passe: String,
    pub role: RoleUtilisateur,
    pub telephone: Option<String>,
    pub adresse: Option<String>,
    pub photo_profil: Option<String>,
}

/// Parameters for updating a user profile; `None` fields are left unchanged.
#[derive(Default)]
pub struct UpdateUtilisateurParams {
    pub nom: Option<String>,
    pub prenom: Option<String>,
    pub email: Option<String>,
    /// Already-hashed password.
    pub mot_de_passe: Option<String>,
    pub telephone: Option<String>,
    pub adresse: Option<String>,
    pub photo_profil: Option<String>,
}

pub struct UtilisateurRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UtilisateurRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new user account
    ///
    /// # Arguments
    /// - `params`: Account fields with the password already hashed
    ///
    /// # Returns
    /// - `Ok(Model)`: The created user
    /// - `Err(DbErr)`: Database error (including unique violations on email/telephone)
    pub async fn create(
        &self,
        params: CreateUtilisateurParams,
    ) -> Result<entity::utilisateur::Model, DbErr> {
        entity::utilisateur::ActiveModel {
            nom: ActiveValue::Set(params.nom),
            prenom: ActiveValue::Set(params.prenom),
            email: ActiveValue::Set(params.email),
            mot_de_passe: ActiveValue::Set(params.mot_de_passe),
            role: ActiveValue::Set(params.role),
            telephone: ActiveValue::Set(params.telephone),
            adresse: ActiveValue::Set(params.adresse),
            photo_profil: ActiveValue::Set(params.photo_profil),
            cree_le: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Finds a user by id
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: User found
    /// - `Ok(None)`: No user with that id
    /// - `Err(DbErr)`: Database error
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::utilisateur::Model>, DbErr> {
        entity::prelude::Utilisateur::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Finds a user by email
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: User found
    /// - `Ok(None)`: No user with that email
    /// - `Err(DbErr)`: Database error
    pub async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<entity::utilisateur::Model>, DbErr> {
        entity::prelude::Utilisateur::find()
            .filter(entity::utilisateur::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Finds the first user with the ADMIN role.
    ///
    /// Selection among several admins is arbitrary (lowest id first).
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: An admin user
    /// - `Ok(None)`: No admin exists
    /// - `Err(DbErr)`: Database error
    pub async fn find_first_admin(&self) -> Result<Option<entity::utilisateur::Model>, DbErr> {
        entity::prelude::Utilisateur::find()
            .filter(entity::utilisateur::Column::Role.eq(RoleUtilisateur::Admin))
            .order_by_asc(entity::utilisateur::Column::Id)
            .one(self.db)
            .await
    }

    /// Gets all users ordered alphabetically by last name
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)`: All users
    /// - `Err(DbErr)`: Database error
    pub async fn get_all(&self) -> Result<Vec<entity::utilisateur::Model>, DbErr> {
        entity::prelude::Utilisateur::find()
            .order_by_asc(entity::utilisateur::Column::Nom)
            .all(self.db)
            .await
    }

    /// Updates a user profile
    ///
    /// # Arguments
    /// - `id`: User id
    /// - `params`: Fields to change; `None` fields are left as-is
    ///
    /// # Returns
    /// - `Ok(Model)`: The updated user
    /// - `Err(DbErr)`: User not found or database error
    pub async fn update(
        &self,
        id: i32,
        params: UpdateUtilisateurParams,
    ) -> Result<entity::utilisateur::Model, DbErr> {
        let user = entity::prelude::Utilisateur::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Utilisateur {} not found",
                id
            )))?;

        let mut active_model: entity::utilisateur::ActiveModel = user.into();

        if let Some(nom) = params.nom {
            active_model.nom = ActiveValue::Set(nom);
        }
        if let Some(prenom) = params.prenom {
            active_model.prenom = ActiveValue::Set(prenom);
        }
        if let Some(email) = params.email {
            active_model.email = ActiveValue::Set(email);
        }
        if let Some(mot_de_passe) = params.mot_de_passe {
            active_model.mot_de_passe = ActiveValue::Set(mot_de_passe);
        }
        if let Some(telephone) = params.telephone {
            active_model.telephone = ActiveValue::Set(Some(telephone));
        }
        if let Some(adresse) = params.adresse {
            active_model.adresse = ActiveValue::Set(Some(adresse));
        }
        if let Some(photo_profil) = params.photo_profil {
            active_model.photo_profil = ActiveValue::Set(Some(photo_profil));
        }

        active_model.update(self.db).await
    }

    /// Deletes a user by id.
    ///
    /// Owned boats and dependent rows are removed by the schema's cascade
    /// rules.
    ///
    /// # Returns
    /// - `Ok(())`: User deleted (or none matched)
    /// - `Err(DbErr)`: Database error
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Utilisateur::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(())
    }
}
