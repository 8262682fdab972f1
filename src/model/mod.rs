//! Wire DTOs for API requests and responses.
//!
//! Request DTOs deserialize the JSON bodies the frontend sends (the French
//! camelCase field names are part of the public contract). Response DTOs
//! wrap entity models — which serialize in the same camelCase convention —
//! together with their joined relations, mirroring the nested payloads the
//! API has always produced.

pub mod api;
pub mod auth;
pub mod bateau;
pub mod commentaire;
pub mod demande;
pub mod document;
pub mod message;
pub mod paiement;
pub mod reservation;
pub mod utilisateur;
