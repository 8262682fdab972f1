use sea_orm::DatabaseConnection;

use crate::{
    data::{
        bateau::{BateauRepository, CreateBateauParams, DetailsBateauParams, UpdateBateauParams},
        media::MediaRepository,
        utilisateur::UtilisateurRepository,
    },
    error::AppError,
    model::{
        bateau::{BateauCompletDto, CreateBateauDto},
        utilisateur::UtilisateurSummaryDto,
    },
    util::slug::generate_slug,
};

pub struct BateauService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BateauService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a boat listing with a generated unique slug.
    ///
    /// The slug is derived from the boat name; collisions resolve with a
    /// numeric suffix (`perle-noire`, `perle-noire-1`, `perle-noire-2`, …).
    ///
    /// # Arguments
    /// - `dto`: Listing form with the flattened details fields
    ///
    /// # Returns
    /// - `Ok(BateauCompletDto)`: The created boat with details joined
    /// - `Err(AppError)`: Database error
    pub async fn create(&self, dto: CreateBateauDto) -> Result<BateauCompletDto, AppError> {
        let repo = BateauRepository::new(self.db);

        let slug = self.generate_unique_slug(&dto.nom_bateau).await?;

        let bateau = repo
            .create(CreateBateauParams {
                nom: dto.nom_bateau.clone(),
                slug,
                modele: dto.modele_marque.clone(),
                portdefault: Some(
                    dto.portattache
                        .clone()
                        .unwrap_or_else(|| "Port inconnu".to_string()),
                ),
                type_bateau: Some(
                    dto.type_bateau
                        .clone()
                        .unwrap_or_else(|| "inconnu".to_string()),
                ),
                description: dto.description.clone(),
                dates_indisponibles: Some(json_or_empty_array(&dto.indisponibilites)),
                proprietaire_id: dto.proprietaire_id,
                details: details_params(&dto),
            })
            .await?;

        self.with_relations(bateau).await
    }

    /// Gets every boat with relations joined.
    pub async fn get_all(&self) -> Result<Vec<BateauCompletDto>, AppError> {
        let bateaux = BateauRepository::new(self.db).get_all().await?;

        let mut list = Vec::new();
        for bateau in bateaux {
            list.push(self.with_relations(bateau).await?);
        }
        Ok(list)
    }

    /// Gets a boat by id with relations joined.
    ///
    /// # Returns
    /// - `Ok(BateauCompletDto)`: The boat
    /// - `Err(AppError::NotFound)`: Unknown id
    pub async fn get_by_id(&self, id: i32) -> Result<BateauCompletDto, AppError> {
        let bateau = BateauRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Bateau non trouvé".to_string()))?;

        self.with_relations(bateau).await
    }

    /// Gets a boat by slug with relations joined.
    pub async fn get_by_slug(&self, slug: &str) -> Result<BateauCompletDto, AppError> {
        let bateau = BateauRepository::new(self.db)
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::NotFound("Bateau non trouvé".to_string()))?;

        self.with_relations(bateau).await
    }

    /// Gets an owner's boats with relations joined.
    pub async fn get_by_proprietaire(
        &self,
        proprietaire_id: i32,
    ) -> Result<Vec<BateauCompletDto>, AppError> {
        let bateaux = BateauRepository::new(self.db)
            .get_by_proprietaire(proprietaire_id)
            .await?;

        let mut list = Vec::new();
        for bateau in bateaux {
            list.push(self.with_relations(bateau).await?);
        }
        Ok(list)
    }

    /// Updates a boat and replaces its details record.
    ///
    /// # Returns
    /// - `Ok(BateauCompletDto)`: The updated boat
    /// - `Err(AppError::NotFound)`: Unknown id
    pub async fn update(&self, id: i32, dto: CreateBateauDto) -> Result<BateauCompletDto, AppError> {
        let repo = BateauRepository::new(self.db);

        repo.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Bateau non trouvé".to_string()))?;

        let bateau = repo
            .update(
                id,
                UpdateBateauParams {
                    nom: dto.nom_bateau.clone(),
                    modele: dto.modele_marque.clone(),
                    portdefault: dto.portattache.clone(),
                    type_bateau: dto.type_bateau.clone(),
                    description: dto.description.clone(),
                    dates_indisponibles: Some(json_or_empty_array(&dto.indisponibilites)),
                    details: details_params(&dto),
                },
            )
            .await?;

        self.with_relations(bateau).await
    }

    /// Deletes a boat identified by slug.
    ///
    /// # Returns
    /// - `Ok(())`: Boat and its details removed
    /// - `Err(AppError::NotFound)`: Unknown slug
    pub async fn delete_by_slug(&self, slug: &str) -> Result<(), AppError> {
        let repo = BateauRepository::new(self.db);

        let bateau = repo
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::NotFound("Bateau non trouvé".to_string()))?;

        repo.delete(bateau.id).await?;
        Ok(())
    }

    /// Derives a slug from the name and suffixes it until it is free.
    async fn generate_unique_slug(&self, nom: &str) -> Result<String, AppError> {
        let repo = BateauRepository::new(self.db);

        let base_slug = generate_slug(nom);
        let mut slug = base_slug.clone();
        let mut index = 1;

        while repo.slug_exists(&slug).await? {
            slug = format!("{}-{}", base_slug, index);
            index += 1;
        }

        Ok(slug)
    }

    /// Joins a boat with its details, medias and owner summary.
    async fn with_relations(
        &self,
        bateau: entity::bateau::Model,
    ) -> Result<BateauCompletDto, AppError> {
        let repo = BateauRepository::new(self.db);

        let details = repo.find_details(bateau.id).await?;
        let medias = MediaRepository::new(self.db).get_by_bateau(bateau.id).await?;
        let proprietaire = UtilisateurRepository::new(self.db)
            .find_by_id(bateau.proprietaire_id)
            .await?
            .map(UtilisateurSummaryDto::from);

        Ok(BateauCompletDto {
            bateau,
            details,
            medias,
            proprietaire,
        })
    }
}

/// Serializes an optional JSON value, defaulting to an empty array like the
/// listing form does.
fn json_or_empty_array(value: &Option<serde_json::Value>) -> String {
    value
        .as_ref()
        .map(|v| v.to_string())
        .unwrap_or_else(|| "[]".to_string())
}

fn details_params(dto: &CreateBateauDto) -> DetailsBateauParams {
    DetailsBateauParams {
        longueur: dto.longueur,
        largeur: dto.largeur,
        tirant_eau: dto.tirant_eau,
        capacite_max: dto.capacite_max,
        nombre_cabines: dto.nombre_cabines,
        nombre_couchages: dto.nombre_couchages,
        equipements: Some(json_or_empty_array(&dto.equipements_inclus)),
        options_payantes: Some(json_or_empty_array(&dto.tags)),
        zones_navigation: dto.zonesnavigation.clone(),
        depot_garantie: dto.depotgarantie.clone(),
        duree_location: dto.duree_location.clone(),
        politique_annulation: dto.politique_annulation.clone(),
        location_sans_permis: dto.location_sans_permis,
        numero_police_assurance: dto.numero_police_assurance.clone(),
        certificat_navigation: dto.certificat_navigation.clone(),
        tarifications: Some(json_or_empty_array(&dto.tarifications)),
        annee_construction: dto.annee_construction.clone(),
        portdedepart: dto.portdepart.clone(),
        portdarriver: dto.portarriver.clone(),
        passagers_inclus_dans_le_prix: dto.passagers_inclus_dans_le_prix.clone(),
        supplement_par_passager: dto.supplement_par_passager.clone(),
        moteur: dto.moteurs.clone(),
        reservoir_eau: dto.reservoir_eau.clone(),
        reservoir_carburant: dto.reservoir_carburant.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use entity::prelude::{Bateau, DetailsBateau, Media, Utilisateur};
    use test_utils::{builder::TestBuilder, factory};

    fn dto(nom: &str, proprietaire_id: i32) -> CreateBateauDto {
        CreateBateauDto {
            nom_bateau: nom.to_string(),
            modele_marque: Some("Jeanneau Sun Odyssey".to_string()),
            portattache: None,
            type_bateau: Some("voilier".to_string()),
            description: None,
            indisponibilites: None,
            proprietaire_id,
            longueur: Some(12.5),
            largeur: None,
            tirant_eau: None,
            capacite_max: Some(8),
            nombre_cabines: None,
            nombre_couchages: None,
            equipements_inclus: None,
            tags: None,
            zonesnavigation: None,
            depotgarantie: None,
            duree_location: None,
            politique_annulation: None,
            location_sans_permis: false,
            numero_police_assurance: None,
            certificat_navigation: None,
            tarifications: None,
            annee_construction: None,
            portdepart: None,
            portarriver: None,
            passagers_inclus_dans_le_prix: None,
            supplement_par_passager: None,
            moteurs: None,
            reservoir_eau: None,
            reservoir_carburant: None,
        }
    }

    #[tokio::test]
    async fn slug_collisions_get_numeric_suffixes() {
        let test = TestBuilder::new()
            .with_table(Utilisateur)
            .with_table(Bateau)
            .with_table(DetailsBateau)
            .with_table(Media)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let proprietaire = factory::create_proprietaire(db).await.unwrap();

        let service = BateauService::new(db);
        let premier = service
            .create(dto("Perle Noire", proprietaire.id))
            .await
            .unwrap();
        let deuxieme = service
            .create(dto("Perle Noire", proprietaire.id))
            .await
            .unwrap();
        let troisieme = service
            .create(dto("Perle Noire", proprietaire.id))
            .await
            .unwrap();

        assert_eq!(premier.bateau.slug, "perle-noire");
        assert_eq!(deuxieme.bateau.slug, "perle-noire-1");
        assert_eq!(troisieme.bateau.slug, "perle-noire-2");
    }

    #[tokio::test]
    async fn create_persists_details_and_defaults_port() {
        let test = TestBuilder::new()
            .with_table(Utilisateur)
            .with_table(Bateau)
            .with_table(DetailsBateau)
            .with_table(Media)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let proprietaire = factory::create_proprietaire(db).await.unwrap();

        let service = BateauService::new(db);
        let cree = service
            .create(dto("Étoile du Sud", proprietaire.id))
            .await
            .unwrap();

        assert_eq!(cree.bateau.slug, "etoile-du-sud");
        assert_eq!(cree.bateau.portdefault.as_deref(), Some("Port inconnu"));
        let details = cree.details.expect("details record created");
        assert_eq!(details.longueur, Some(12.5));
        assert_eq!(details.capacite_max, Some(8));
        assert_eq!(details.equipements.as_deref(), Some("[]"));
    }

    #[tokio::test]
    async fn delete_by_slug_removes_boat_and_details() {
        let test = TestBuilder::new()
            .with_table(Utilisateur)
            .with_table(Bateau)
            .with_table(DetailsBateau)
            .with_table(Media)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let proprietaire = factory::create_proprietaire(db).await.unwrap();

        let service = BateauService::new(db);
        let cree = service
            .create(dto("Grand Large", proprietaire.id))
            .await
            .unwrap();

        service.delete_by_slug("grand-large").await.unwrap();

        let repo = BateauRepository::new(db);
        assert!(repo.find_by_id(cree.bateau.id).await.unwrap().is_none());
        assert!(repo.find_details(cree.bateau.id).await.unwrap().is_none());

        let result = service.delete_by_slug("grand-large").await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
