//! Bateau factory for creating test boat listings.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test boats with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let bateau = BateauFactory::new(&db, proprietaire.id)
///     .nom("Perle Noire")
///     .build()
///     .await?;
/// ```
pub struct BateauFactory<'a> {
    db: &'a DatabaseConnection,
    proprietaire_id: i32,
    nom: String,
    slug: String,
    modele: Option<String>,
    portdefault: Option<String>,
}

impl<'a> BateauFactory<'a> {
    /// Creates a new BateauFactory with default values.
    ///
    /// Defaults:
    /// - nom: `"Bateau {id}"` where id is auto-incremented
    /// - slug: `"bateau-{id}"`
    /// - modele / portdefault: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `proprietaire_id` - Id of the owning user
    pub fn new(db: &'a DatabaseConnection, proprietaire_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            proprietaire_id,
            nom: format!("Bateau {}", id),
            slug: format!("bateau-{}", id),
            modele: None,
            portdefault: None,
        }
    }

    /// Sets the boat name.
    pub fn nom(mut self, nom: impl Into<String>) -> Self {
        self.nom = nom.into();
        self
    }

    /// Sets the slug.
    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    /// Sets the model label.
    pub fn modele(mut self, modele: Option<String>) -> Self {
        self.modele = modele;
        self
    }

    /// Sets the home port.
    pub fn portdefault(mut self, portdefault: Option<String>) -> Self {
        self.portdefault = portdefault;
        self
    }

    /// Builds and inserts the boat entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::bateau::Model)` - Created boat entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::bateau::Model, DbErr> {
        entity::bateau::ActiveModel {
            nom: ActiveValue::Set(self.nom),
            slug: ActiveValue::Set(self.slug),
            modele: ActiveValue::Set(self.modele),
            portdefault: ActiveValue::Set(self.portdefault),
            type_bateau: ActiveValue::Set(None),
            description: ActiveValue::Set(None),
            dates_indisponibles: ActiveValue::Set(None),
            proprietaire_id: ActiveValue::Set(self.proprietaire_id),
            cree_le: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a boat with default values for the specified owner.
///
/// Shorthand for `BateauFactory::new(db, proprietaire_id).build().await`.
pub async fn create_bateau(
    db: &DatabaseConnection,
    proprietaire_id: i32,
) -> Result<entity::bateau::Model, DbErr> {
    BateauFactory::new(db, proprietaire_id).build().await
}
