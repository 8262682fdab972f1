//! Reservation factory for creating test bookings.

use chrono::{DateTime, Duration, Utc};
use entity::enums::StatutReservation;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test reservations with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let reservation = ReservationFactory::new(&db, renter.id, bateau.id)
///     .date_debut(debut)
///     .date_fin(fin)
///     .build()
///     .await?;
/// ```
pub struct ReservationFactory<'a> {
    db: &'a DatabaseConnection,
    utilisateur_id: i32,
    bateau_id: i32,
    date_debut: DateTime<Utc>,
    date_fin: DateTime<Utc>,
    statut: StatutReservation,
    total: f64,
}

impl<'a> ReservationFactory<'a> {
    /// Creates a new ReservationFactory with default values.
    ///
    /// Defaults:
    /// - date_debut: 1 day from now
    /// - date_fin: 3 days from now
    /// - statut: `StatutReservation::EnAttente`
    /// - all price fields zero
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `utilisateur_id` - Id of the renting user
    /// - `bateau_id` - Id of the booked boat
    pub fn new(db: &'a DatabaseConnection, utilisateur_id: i32, bateau_id: i32) -> Self {
        Self {
            db,
            utilisateur_id,
            bateau_id,
            date_debut: Utc::now() + Duration::days(1),
            date_fin: Utc::now() + Duration::days(3),
            statut: StatutReservation::EnAttente,
            total: 0.0,
        }
    }

    /// Sets the start of the booked range.
    pub fn date_debut(mut self, date_debut: DateTime<Utc>) -> Self {
        self.date_debut = date_debut;
        self
    }

    /// Sets the end of the booked range.
    pub fn date_fin(mut self, date_fin: DateTime<Utc>) -> Self {
        self.date_fin = date_fin;
        self
    }

    /// Sets the lifecycle status.
    pub fn statut(mut self, statut: StatutReservation) -> Self {
        self.statut = statut;
        self
    }

    /// Sets the total price.
    pub fn total(mut self, total: f64) -> Self {
        self.total = total;
        self
    }

    /// Builds and inserts the reservation entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::reservation::Model)` - Created reservation entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::reservation::Model, DbErr> {
        entity::reservation::ActiveModel {
            utilisateur_id: ActiveValue::Set(self.utilisateur_id),
            bateau_id: ActiveValue::Set(self.bateau_id),
            date_debut: ActiveValue::Set(self.date_debut),
            date_fin: ActiveValue::Set(self.date_fin),
            statut: ActiveValue::Set(self.statut),
            data: ActiveValue::Set(None),
            plage: ActiveValue::Set(None),
            nombre_de_passagers: ActiveValue::Set(None),
            supplement: ActiveValue::Set(None),
            heure: ActiveValue::Set(None),
            prix_de_base: ActiveValue::Set(0.0),
            prix_supplement_passagers: ActiveValue::Set(0.0),
            prix_options_payantes: ActiveValue::Set(0.0),
            total: ActiveValue::Set(self.total),
            montant_final: ActiveValue::Set(0.0),
            commission: ActiveValue::Set(0.0),
            cree_le: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a reservation with default values for the specified renter and boat.
///
/// Shorthand for `ReservationFactory::new(db, utilisateur_id, bateau_id).build().await`.
pub async fn create_reservation(
    db: &DatabaseConnection,
    utilisateur_id: i32,
    bateau_id: i32,
) -> Result<entity::reservation::Model, DbErr> {
    ReservationFactory::new(db, utilisateur_id, bateau_id)
        .build()
        .await
}
