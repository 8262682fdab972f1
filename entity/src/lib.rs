//! SeaORM entity models for the sailloc database schema.

pub mod prelude;

pub mod bateau;
pub mod commentaire;
pub mod contrat;
pub mod demande_proprietaire;
pub mod details_bateau;
pub mod enums;
pub mod media;
pub mod message;
pub mod paiement;
pub mod recu;
pub mod reservation;
pub mod utilisateur;
