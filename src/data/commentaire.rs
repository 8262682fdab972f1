use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

/// Parameters for creating a review.
pub struct CreateCommentaireParams {
    pub contenu: String,
    pub note: i32,
    pub auteur_id: i32,
    pub bateau_id: Option<i32>,
    pub reservation_id: Option<i32>,
}

pub struct CommentaireRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentaireRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a review row
    pub async fn create(
        &self,
        params: CreateCommentaireParams,
    ) -> Result<entity::commentaire::Model, DbErr> {
        entity::commentaire::ActiveModel {
            contenu: ActiveValue::Set(params.contenu),
            note: ActiveValue::Set(params.note),
            auteur_id: ActiveValue::Set(params.auteur_id),
            bateau_id: ActiveValue::Set(params.bateau_id),
            reservation_id: ActiveValue::Set(params.reservation_id),
            cree_le: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets reviews with their authors, optionally filtered by boat, newest first
    pub async fn get_all_with_auteur(
        &self,
        bateau_id: Option<i32>,
    ) -> Result<
        Vec<(
            entity::commentaire::Model,
            Option<entity::utilisateur::Model>,
        )>,
        DbErr,
    > {
        let mut query = entity::prelude::Commentaire::find()
            .find_also_related(entity::prelude::Utilisateur)
            .order_by_desc(entity::commentaire::Column::CreeLe);

        if let Some(bateau_id) = bateau_id {
            query = query.filter(entity::commentaire::Column::BateauId.eq(bateau_id));
        }

        query.all(self.db).await
    }
}
