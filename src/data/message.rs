//! Message data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

/// Parameters for creating a message row.
pub struct CreateMessageParams {
    pub expediteur_id: i32,
    pub destinataire_id: Option<i32>,
    pub reservation_id: Option<i32>,
    pub bateau_id: Option<i32>,
    pub contenu: String,
    pub objet: Option<String>,
}

/// Direction filter for a user's message listing.
pub enum DirectionMessage {
    Recus,
    Envoyes,
    All,
}

impl DirectionMessage {
    /// Parses the query-string value; unknown values fall back to `All`.
    pub fn from_query(value: Option<&str>) -> Self {
        match value {
            Some("recus") => Self::Recus,
            Some("envoyes") => Self::Envoyes,
            _ => Self::All,
        }
    }
}

pub struct MessageRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MessageRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a message row
    ///
    /// # Arguments
    /// - `params`: Sender, optional recipient and linked rows, body and subject
    ///
    /// # Returns
    /// - `Ok(Model)`: The created message
    /// - `Err(DbErr)`: Database error
    pub async fn create(
        &self,
        params: CreateMessageParams,
    ) -> Result<entity::message::Model, DbErr> {
        entity::message::ActiveModel {
            expediteur_id: ActiveValue::Set(params.expediteur_id),
            destinataire_id: ActiveValue::Set(params.destinataire_id),
            reservation_id: ActiveValue::Set(params.reservation_id),
            bateau_id: ActiveValue::Set(params.bateau_id),
            contenu: ActiveValue::Set(params.contenu),
            objet: ActiveValue::Set(params.objet),
            lu: ActiveValue::Set(false),
            date_envoi: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets a user's messages filtered by direction, newest first
    ///
    /// # Arguments
    /// - `utilisateur_id`: The user whose mailbox is read
    /// - `direction`: Received, sent, or both
    /// - `skip` / `take`: Offset/limit pagination
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)`: Matching messages
    /// - `Err(DbErr)`: Database error
    pub async fn get_for_utilisateur(
        &self,
        utilisateur_id: i32,
        direction: DirectionMessage,
        skip: u64,
        take: u64,
    ) -> Result<Vec<entity::message::Model>, DbErr> {
        let condition = match direction {
            DirectionMessage::Recus => {
                Condition::all().add(entity::message::Column::DestinataireId.eq(utilisateur_id))
            }
            DirectionMessage::Envoyes => {
                Condition::all().add(entity::message::Column::ExpediteurId.eq(utilisateur_id))
            }
            DirectionMessage::All => Condition::any()
                .add(entity::message::Column::DestinataireId.eq(utilisateur_id))
                .add(entity::message::Column::ExpediteurId.eq(utilisateur_id)),
        };

        entity::prelude::Message::find()
            .filter(condition)
            .order_by_desc(entity::message::Column::DateEnvoi)
            .offset(skip)
            .limit(take)
            .all(self.db)
            .await
    }

    /// Gets every message, newest first
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)`: All messages
    /// - `Err(DbErr)`: Database error
    pub async fn get_all(&self) -> Result<Vec<entity::message::Model>, DbErr> {
        entity::prelude::Message::find()
            .order_by_desc(entity::message::Column::DateEnvoi)
            .all(self.db)
            .await
    }

    /// Finds a message by id
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: Message found
    /// - `Ok(None)`: No message with that id
    /// - `Err(DbErr)`: Database error
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::message::Model>, DbErr> {
        entity::prelude::Message::find_by_id(id).one(self.db).await
    }

    /// Sets the read flag on a message.
    ///
    /// Idempotent: marking an already-read message succeeds and leaves the
    /// row unchanged.
    ///
    /// # Returns
    /// - `Ok(Model)`: The updated message
    /// - `Err(DbErr)`: Message not found or database error
    pub async fn mark_as_read(&self, id: i32) -> Result<entity::message::Model, DbErr> {
        let message = entity::prelude::Message::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Message {} not found", id)))?;

        if message.lu {
            return Ok(message);
        }

        let mut active_model: entity::message::ActiveModel = message.into();
        active_model.lu = ActiveValue::Set(true);
        active_model.update(self.db).await
    }
}
