//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically handle foreign key relationships,
//! making tests more concise and maintainable.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let proprietaire = factory::utilisateur::create_proprietaire(&db).await?;
//!     let bateau = factory::bateau::create_bateau(&db, proprietaire.id).await?;
//!     let renter = factory::utilisateur::create_utilisateur(&db).await?;
//!     let reservation = factory::reservation::create_reservation(&db, renter.id, bateau.id).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! let utilisateur = factory::utilisateur::UtilisateurFactory::new(&db)
//!     .email("marin@example.com")
//!     .role(RoleUtilisateur::Admin)
//!     .build()
//!     .await?;
//! ```

pub mod bateau;
pub mod demande;
pub mod helpers;
pub mod message;
pub mod paiement;
pub mod reservation;
pub mod utilisateur;

// Re-export commonly used factory functions for concise usage
pub use bateau::create_bateau;
pub use demande::create_demande;
pub use message::create_message;
pub use paiement::create_paiement;
pub use reservation::create_reservation;
pub use utilisateur::{create_admin, create_proprietaire, create_utilisateur};
