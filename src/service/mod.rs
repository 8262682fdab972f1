//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing core business rules and validation
//! - **Orchestration**: Coordinating multiple repository calls and external services
//! - **Transaction Management**: Wrapping multi-row writes in explicit transactions

pub mod auth;
pub mod bateau;
pub mod demande;
pub mod document;
pub mod message;
pub mod paiement;
pub mod reservation;
pub mod storage;
pub mod utilisateur;
