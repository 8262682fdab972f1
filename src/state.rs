//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.

use sea_orm::DatabaseConnection;

use crate::service::storage::StorageClient;

/// Application state containing shared resources and dependencies.
///
/// Initialized once during server startup and then cloned (cheaply, as it
/// contains reference-counted or cloneable types) for each incoming request
/// via Axum's state extraction.
///
/// All fields use cheap-to-clone types:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `StorageClient` wraps a `reqwest::Client`, which uses an `Arc` internally
/// - `String` is cloned when needed
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    ///
    /// This connection is shared across all requests and manages a pool of
    /// connections to the SQLite database.
    pub db: DatabaseConnection,

    /// Client for the external object storage service.
    ///
    /// Used by the upload workflows to push file bytes and obtain stable URLs.
    pub storage: StorageClient,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// Called once during server startup after all dependencies have been
    /// initialized. The resulting state is then provided to the Axum router
    /// for use in request handlers.
    pub fn new(db: DatabaseConnection, storage: StorageClient) -> Self {
        Self { db, storage }
    }
}
