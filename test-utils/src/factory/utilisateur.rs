//! Utilisateur factory for creating test user entities.
//!
//! This module provides factory methods for creating user entities with sensible
//! defaults, reducing boilerplate in tests. The factory supports customization
//! through a builder pattern.

use argon2::password_hash::{rand_core::OsRng, SaltString};
use argon2::{Argon2, PasswordHasher};
use chrono::Utc;
use entity::enums::RoleUtilisateur;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test users with customizable fields.
///
/// Provides a builder pattern for creating user entities with default values
/// that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::utilisateur::UtilisateurFactory;
///
/// let user = UtilisateurFactory::new(&db)
///     .email("marin@example.com")
///     .role(RoleUtilisateur::Proprietaire)
///     .build()
///     .await?;
/// ```
pub struct UtilisateurFactory<'a> {
    db: &'a DatabaseConnection,
    nom: String,
    prenom: String,
    email: String,
    password: String,
    role: RoleUtilisateur,
    telephone: Option<String>,
}

impl<'a> UtilisateurFactory<'a> {
    /// Creates a new UtilisateurFactory with default values.
    ///
    /// Defaults:
    /// - nom: `"Utilisateur {id}"` where id is auto-incremented
    /// - prenom: `"Prenom {id}"`
    /// - email: `"user{id}@example.com"`
    /// - password: `"Secret123!"` (stored as an argon2 hash)
    /// - role: `RoleUtilisateur::Client`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `UtilisateurFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            nom: format!("Utilisateur {}", id),
            prenom: format!("Prenom {}", id),
            email: format!("user{}@example.com", id),
            password: "Secret123!".to_string(),
            role: RoleUtilisateur::Client,
            telephone: None,
        }
    }

    /// Sets the last name.
    pub fn nom(mut self, nom: impl Into<String>) -> Self {
        self.nom = nom.into();
        self
    }

    /// Sets the first name.
    pub fn prenom(mut self, prenom: impl Into<String>) -> Self {
        self.prenom = prenom.into();
        self
    }

    /// Sets the email address.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the plaintext password (hashed on insert).
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    /// Sets the account role.
    pub fn role(mut self, role: RoleUtilisateur) -> Self {
        self.role = role;
        self
    }

    /// Sets the phone number.
    pub fn telephone(mut self, telephone: Option<String>) -> Self {
        self.telephone = telephone;
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// The password is hashed with argon2 before insertion so login flows
    /// can be exercised against factory-created users.
    ///
    /// # Returns
    /// - `Ok(entity::utilisateur::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::utilisateur::Model, DbErr> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(self.password.as_bytes(), &salt)
            .map_err(|e| DbErr::Custom(e.to_string()))?
            .to_string();

        entity::utilisateur::ActiveModel {
            nom: ActiveValue::Set(self.nom),
            prenom: ActiveValue::Set(self.prenom),
            email: ActiveValue::Set(self.email),
            mot_de_passe: ActiveValue::Set(hash),
            role: ActiveValue::Set(self.role),
            telephone: ActiveValue::Set(self.telephone),
            adresse: ActiveValue::Set(None),
            photo_profil: ActiveValue::Set(None),
            cree_le: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a CLIENT user with default values.
///
/// Shorthand for `UtilisateurFactory::new(db).build().await`.
pub async fn create_utilisateur(
    db: &DatabaseConnection,
) -> Result<entity::utilisateur::Model, DbErr> {
    UtilisateurFactory::new(db).build().await
}

/// Creates a PROPRIETAIRE user with default values.
pub async fn create_proprietaire(
    db: &DatabaseConnection,
) -> Result<entity::utilisateur::Model, DbErr> {
    UtilisateurFactory::new(db)
        .role(RoleUtilisateur::Proprietaire)
        .build()
        .await
}

/// Creates an ADMIN user with default values.
pub async fn create_admin(db: &DatabaseConnection) -> Result<entity::utilisateur::Model, DbErr> {
    UtilisateurFactory::new(db)
        .role(RoleUtilisateur::Admin)
        .build()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_utilisateur_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(Utilisateur)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let user = create_utilisateur(db).await?;

        assert!(!user.email.is_empty());
        assert_eq!(user.role, RoleUtilisateur::Client);
        assert_ne!(user.mot_de_passe, "Secret123!");

        Ok(())
    }

    #[tokio::test]
    async fn creates_multiple_unique_utilisateurs() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(Utilisateur)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let user1 = create_utilisateur(db).await?;
        let user2 = create_utilisateur(db).await?;

        assert_ne!(user1.id, user2.id);
        assert_ne!(user1.email, user2.email);

        Ok(())
    }
}
