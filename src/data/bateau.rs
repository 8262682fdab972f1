//! Boat data repository for database operations.
//!
//! Handles boat listings together with their 1:1 details sub-record. The
//! unique slug is computed by the service layer; this repository only
//! checks existence and persists rows.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

/// Details sub-record fields, shared by create and update.
#[derive(Default)]
pub struct DetailsBateauParams {
    pub longueur: Option<f64>,
    pub largeur: Option<f64>,
    pub tirant_eau: Option<f64>,
    pub capacite_max: Option<i32>,
    pub nombre_cabines: Option<i32>,
    pub nombre_couchages: Option<i32>,
    pub equipements: Option<String>,
    pub options_payantes: Option<String>,
    pub zones_navigation: Option<String>,
    pub depot_garantie: Option<String>,
    pub duree_location: Option<String>,
    pub politique_annulation: Option<String>,
    pub location_sans_permis: bool,
    pub numero_police_assurance: Option<String>,
    pub certificat_navigation: Option<String>,
    pub tarifications: Option<String>,
    pub annee_construction: Option<String>,
    pub portdedepart: Option<String>,
    pub portdarriver: Option<String>,
    pub passagers_inclus_dans_le_prix: Option<String>,
    pub supplement_par_passager: Option<String>,
    pub moteur: Option<String>,
    pub reservoir_eau: Option<String>,
    pub reservoir_carburant: Option<String>,
}

/// Parameters for creating a boat listing with its details.
pub struct CreateBateauParams {
    pub nom: String,
    pub slug: String,
    pub modele: Option<String>,
    pub portdefault: Option<String>,
    pub type_bateau: Option<String>,
    pub description: Option<String>,
    pub dates_indisponibles: Option<String>,
    pub proprietaire_id: i32,
    pub details: DetailsBateauParams,
}

/// Parameters for updating a boat listing; the details record is replaced
/// wholesale, matching the form that always submits every field.
pub struct UpdateBateauParams {
    pub nom: String,
    pub modele: Option<String>,
    pub portdefault: Option<String>,
    pub type_bateau: Option<String>,
    pub description: Option<String>,
    pub dates_indisponibles: Option<String>,
    pub details: DetailsBateauParams,
}

pub struct BateauRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BateauRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a boat and its details sub-record
    ///
    /// # Returns
    /// - `Ok(Model)`: The created boat
    /// - `Err(DbErr)`: Database error
    pub async fn create(
        &self,
        params: CreateBateauParams,
    ) -> Result<entity::bateau::Model, DbErr> {
        let bateau = entity::bateau::ActiveModel {
            nom: ActiveValue::Set(params.nom),
            slug: ActiveValue::Set(params.slug),
            modele: ActiveValue::Set(params.modele),
            portdefault: ActiveValue::Set(params.portdefault),
            type_bateau: ActiveValue::Set(params.type_bateau),
            description: ActiveValue::Set(params.description),
            dates_indisponibles: ActiveValue::Set(params.dates_indisponibles),
            proprietaire_id: ActiveValue::Set(params.proprietaire_id),
            cree_le: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Self::details_active_model(bateau.id, params.details)
            .insert(self.db)
            .await?;

        Ok(bateau)
    }

    /// Checks whether a slug is already taken
    pub async fn slug_exists(&self, slug: &str) -> Result<bool, DbErr> {
        Ok(entity::prelude::Bateau::find()
            .filter(entity::bateau::Column::Slug.eq(slug))
            .one(self.db)
            .await?
            .is_some())
    }

    /// Finds a boat by id
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::bateau::Model>, DbErr> {
        entity::prelude::Bateau::find_by_id(id).one(self.db).await
    }

    /// Finds a boat by slug
    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<entity::bateau::Model>, DbErr> {
        entity::prelude::Bateau::find()
            .filter(entity::bateau::Column::Slug.eq(slug))
            .one(self.db)
            .await
    }

    /// Gets every boat
    pub async fn get_all(&self) -> Result<Vec<entity::bateau::Model>, DbErr> {
        entity::prelude::Bateau::find().all(self.db).await
    }

    /// Gets a user's boats
    pub async fn get_by_proprietaire(
        &self,
        proprietaire_id: i32,
    ) -> Result<Vec<entity::bateau::Model>, DbErr> {
        entity::prelude::Bateau::find()
            .filter(entity::bateau::Column::ProprietaireId.eq(proprietaire_id))
            .all(self.db)
            .await
    }

    /// Finds the details sub-record of a boat
    pub async fn find_details(
        &self,
        bateau_id: i32,
    ) -> Result<Option<entity::details_bateau::Model>, DbErr> {
        entity::prelude::DetailsBateau::find()
            .filter(entity::details_bateau::Column::BateauId.eq(bateau_id))
            .one(self.db)
            .await
    }

    /// Updates a boat and replaces its details sub-record.
    ///
    /// The details row is created when the boat does not have one yet.
    ///
    /// # Returns
    /// - `Ok(Model)`: The updated boat
    /// - `Err(DbErr)`: Boat not found or database error
    pub async fn update(
        &self,
        id: i32,
        params: UpdateBateauParams,
    ) -> Result<entity::bateau::Model, DbErr> {
        let bateau = entity::prelude::Bateau::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Bateau {} not found", id)))?;

        let mut active_model: entity::bateau::ActiveModel = bateau.into();
        active_model.nom = ActiveValue::Set(params.nom);
        active_model.modele = ActiveValue::Set(params.modele);
        active_model.portdefault = ActiveValue::Set(params.portdefault);
        active_model.type_bateau = ActiveValue::Set(params.type_bateau);
        active_model.description = ActiveValue::Set(params.description);
        active_model.dates_indisponibles = ActiveValue::Set(params.dates_indisponibles);
        let updated = active_model.update(self.db).await?;

        match self.find_details(id).await? {
            Some(existing) => {
                let mut details = Self::details_active_model(id, params.details);
                details.id = ActiveValue::Unchanged(existing.id);
                details.update(self.db).await?;
            }
            None => {
                Self::details_active_model(id, params.details)
                    .insert(self.db)
                    .await?;
            }
        }

        Ok(updated)
    }

    /// Deletes a boat and its details sub-record
    ///
    /// # Returns
    /// - `Ok(())`: Boat deleted
    /// - `Err(DbErr)`: Database error
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::DetailsBateau::delete_many()
            .filter(entity::details_bateau::Column::BateauId.eq(id))
            .exec(self.db)
            .await?;

        entity::prelude::Bateau::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(())
    }

    fn details_active_model(
        bateau_id: i32,
        params: DetailsBateauParams,
    ) -> entity::details_bateau::ActiveModel {
        entity::details_bateau::ActiveModel {
            bateau_id: ActiveValue::Set(bateau_id),
            longueur: ActiveValue::Set(params.longueur),
            largeur: ActiveValue::Set(params.largeur),
            tirant_eau: ActiveValue::Set(params.tirant_eau),
            capacite_max: ActiveValue::Set(params.capacite_max),
            nombre_cabines: ActiveValue::Set(params.nombre_cabines),
            nombre_couchages: ActiveValue::Set(params.nombre_couchages),
            equipements: ActiveValue::Set(params.equipements),
            options_payantes: ActiveValue::Set(params.options_payantes),
            zones_navigation: ActiveValue::Set(params.zones_navigation),
            depot_garantie: ActiveValue::Set(params.depot_garantie),
            duree_location: ActiveValue::Set(params.duree_location),
            politique_annulation: ActiveValue::Set(params.politique_annulation),
            location_sans_permis: ActiveValue::Set(params.location_sans_permis),
            numero_police_assurance: ActiveValue::Set(params.numero_police_assurance),
            certificat_navigation: ActiveValue::Set(params.certificat_navigation),
            tarifications: ActiveValue::Set(params.tarifications),
            annee_construction: ActiveValue::Set(params.annee_construction),
            portdedepart: ActiveValue::Set(params.portdedepart),
            portdarriver: ActiveValue::Set(params.portdarriver),
            passagers_inclus_dans_le_prix: ActiveValue::Set(params.passagers_inclus_dans_le_prix),
            supplement_par_passager: ActiveValue::Set(params.supplement_par_passager),
            moteur: ActiveValue::Set(params.moteur),
            reservoir_eau: ActiveValue::Set(params.reservoir_eau),
            reservoir_carburant: ActiveValue::Set(params.reservoir_carburant),
            ..Default::default()
        }
    }
}
