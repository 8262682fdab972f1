use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Utilisateur, Bateau};
///
/// let test = TestBuilder::new()
///     .with_table(Utilisateur)
///     .with_table(Bateau)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// Vector of CREATE TABLE statements to execute during database setup.
    ///
    /// Each statement is generated from an entity model using SeaORM's schema builder.
    /// Statements are executed in the order they were added during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with empty table configuration
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. The table will be created when `build()` is called. Tables should
    /// be added in dependency order (tables with foreign keys after their referenced
    /// tables).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds all tables required for reservation workflow tests.
    ///
    /// This convenience method adds the following tables in dependency order:
    /// - Utilisateur
    /// - Bateau
    /// - DetailsBateau
    /// - Reservation
    /// - Message
    ///
    /// The message table is included because the reservation workflows emit
    /// notification messages alongside their main writes.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_reservation_tables(self) -> Self {
        self.with_table(Utilisateur)
            .with_table(Bateau)
            .with_table(DetailsBateau)
            .with_table(Reservation)
            .with_table(Message)
    }

    /// Adds all tables required for payment workflow tests.
    ///
    /// Equivalent to `with_reservation_tables()` followed by
    /// `with_table(Paiement)`.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_paiement_tables(self) -> Self {
        self.with_reservation_tables().with_table(Paiement)
    }

    /// Adds all tables required for partnership request tests.
    ///
    /// Adds Utilisateur, DemandeProprietaire and Message (decision
    /// notifications are message rows).
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_demande_tables(self) -> Self {
        self.with_table(Utilisateur)
            .with_table(DemandeProprietaire)
            .with_table(Message)
    }

    /// Adds all tables required for document upload tests (contracts,
    /// receipts and their media rows).
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_document_tables(self) -> Self {
        self.with_paiement_tables()
            .with_table(Contrat)
            .with_table(Recu)
            .with_table(Media)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection and executes all CREATE TABLE
    /// statements that were added via `with_table()`, in insertion order.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}
