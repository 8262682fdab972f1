//! Message factory for creating test notification rows.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test messages with customizable fields.
pub struct MessageFactory<'a> {
    db: &'a DatabaseConnection,
    expediteur_id: i32,
    destinataire_id: Option<i32>,
    reservation_id: Option<i32>,
    bateau_id: Option<i32>,
    contenu: String,
    objet: Option<String>,
    lu: bool,
}

impl<'a> MessageFactory<'a> {
    /// Creates a new MessageFactory with default values.
    ///
    /// Defaults:
    /// - contenu: `"Message {id}"` where id is auto-incremented
    /// - objet / relational links: `None`
    /// - lu: `false`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `expediteur_id` - Id of the sending user
    pub fn new(db: &'a DatabaseConnection, expediteur_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            expediteur_id,
            destinataire_id: None,
            reservation_id: None,
            bateau_id: None,
            contenu: format!("Message {}", id),
            objet: None,
            lu: false,
        }
    }

    /// Sets the recipient.
    pub fn destinataire_id(mut self, destinataire_id: Option<i32>) -> Self {
        self.destinataire_id = destinataire_id;
        self
    }

    /// Sets the linked reservation.
    pub fn reservation_id(mut self, reservation_id: Option<i32>) -> Self {
        self.reservation_id = reservation_id;
        self
    }

    /// Sets the linked boat.
    pub fn bateau_id(mut self, bateau_id: Option<i32>) -> Self {
        self.bateau_id = bateau_id;
        self
    }

    /// Sets the body text.
    pub fn contenu(mut self, contenu: impl Into<String>) -> Self {
        self.contenu = contenu.into();
        self
    }

    /// Sets the subject line.
    pub fn objet(mut self, objet: Option<String>) -> Self {
        self.objet = objet;
        self
    }

    /// Sets the read flag.
    pub fn lu(mut self, lu: bool) -> Self {
        self.lu = lu;
        self
    }

    /// Builds and inserts the message entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::message::Model)` - Created message entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::message::Model, DbErr> {
        entity::message::ActiveModel {
            expediteur_id: ActiveValue::Set(self.expediteur_id),
            destinataire_id: ActiveValue::Set(self.destinataire_id),
            reservation_id: ActiveValue::Set(self.reservation_id),
            bateau_id: ActiveValue::Set(self.bateau_id),
            contenu: ActiveValue::Set(self.contenu),
            objet: ActiveValue::Set(self.objet),
            lu: ActiveValue::Set(self.lu),
            date_envoi: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a message with default values from the specified sender.
pub async fn create_message(
    db: &DatabaseConnection,
    expediteur_id: i32,
    destinataire_id: Option<i32>,
) -> Result<entity::message::Model, DbErr> {
    MessageFactory::new(db, expediteur_id)
        .destinataire_id(destinataire_id)
        .build()
        .await
}
