//! Application state management.
//!
//! Shared state handed to route builders and the readiness probe.

use mongodb::{Client, Database};

/// Shared application state.
///
/// Cloning is inexpensive: the client shares one connection pool.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// MongoDB client (cloneable, shares underlying connection pool)
    pub mongo_client: Client,
    /// MongoDB database instance
    pub db: Database,
}
