use chrono::Utc;
use entity::enums::TypeMedia;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

/// Parameters for creating a media row.
pub struct CreateMediaParams {
    pub url: String,
    pub type_media: TypeMedia,
    pub titre: Option<String>,
    pub description: Option<String>,
    pub numero_police: Option<String>,
    pub bateau_id: Option<i32>,
    pub utilisateur_id: Option<i32>,
    pub contrat_id: Option<i32>,
    pub recu_id: Option<i32>,
}

pub struct MediaRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MediaRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a media row pointing at an externally stored file
    ///
    /// # Returns
    /// - `Ok(Model)`: The created media row
    /// - `Err(DbErr)`: Database error
    pub async fn create(&self, params: CreateMediaParams) -> Result<entity::media::Model, DbErr> {
        entity::media::ActiveModel {
            url: ActiveValue::Set(params.url),
            type_media: ActiveValue::Set(params.type_media),
            titre: ActiveValue::Set(params.titre),
            description: ActiveValue::Set(params.description),
            numero_police: ActiveValue::Set(params.numero_police),
            bateau_id: ActiveValue::Set(params.bateau_id),
            utilisateur_id: ActiveValue::Set(params.utilisateur_id),
            contrat_id: ActiveValue::Set(params.contrat_id),
            recu_id: ActiveValue::Set(params.recu_id),
            cree_le: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets all media attached to a boat
    pub async fn get_by_bateau(&self, bateau_id: i32) -> Result<Vec<entity::media::Model>, DbErr> {
        entity::prelude::Media::find()
            .filter(entity::media::Column::BateauId.eq(bateau_id))
            .all(self.db)
            .await
    }

    /// Gets all media attached to a contract
    pub async fn get_by_contrat(
        &self,
        contrat_id: i32,
    ) -> Result<Vec<entity::media::Model>, DbErr> {
        entity::prelude::Media::find()
            .filter(entity::media::Column::ContratId.eq(contrat_id))
            .all(self.db)
            .await
    }

    /// Finds the media attached to a receipt
    pub async fn find_by_recu(&self, recu_id: i32) -> Result<Option<entity::media::Model>, DbErr> {
        entity::prelude::Media::find()
            .filter(entity::media::Column::RecuId.eq(recu_id))
            .one(self.db)
            .await
    }
}
