//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models and keep query
//! construction out of the business logic layer. All database queries, inserts, updates,
//! and deletes outside explicit service transactions are performed through these
//! repositories.

pub mod bateau;
pub mod commentaire;
pub mod contrat;
pub mod demande;
pub mod media;
pub mod message;
pub mod paiement;
pub mod recu;
pub mod reservation;
pub mod utilisateur;

#[cfg(test)]
mod test;
