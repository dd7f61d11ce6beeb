//! Items Domain
//!
//! CRUD over a single `Item` resource stored in MongoDB.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints under /Item
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Uniqueness check, id parsing, error context
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + MongoDB implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entity, stored document, conversions
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use axum::Router;
//! use domain_items::{handlers, mongodb::MongoItemRepository, service::ItemService};
//! use mongodb::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let db = client.database("local");
//!
//! let service = ItemService::new(MongoItemRepository::new(&db));
//! let app: Router = Router::new().nest("/Item", handlers::router(service));
//! # Ok(())
//! # }
//! ```

pub mod conversions;
pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

pub use conversions::{to_entity, to_entity_list};
pub use error::{ItemError, ItemResult};
pub use handlers::ApiDoc;
pub use models::{Item, ItemDocument, ItemFields};
pub use self::mongodb::{DEFAULT_COLLECTION, MongoItemRepository};
pub use repository::ItemRepository;
pub use service::ItemService;
