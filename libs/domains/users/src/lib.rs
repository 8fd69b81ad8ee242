//! Users Domain
//!
//! Users are created once and read by id; there is no update or delete.
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← POST /, GET /{id}
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← UserOperations: validation, not-found translation
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← UserRepository: Postgres or in-memory
//! └─────────────┘
//! ```
//!
//! ```rust,no_run
//! use domain_users::{handlers, PgUserRepository, UserService};
//! use sea_orm::Database;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let db = Database::connect("postgres://...").await?;
//! let service = UserService::new(PgUserRepository::new(db));
//! let router = axum::Router::new().nest("/user", handlers::router(service));
//! # Ok(())
//! # }
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod memory;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use error::{UserError, UserResult};
pub use memory::InMemoryUserRepository;
pub use models::{CreateUser, User};
pub use postgres::PgUserRepository;
pub use repository::UserRepository;
pub use service::{UserOperations, UserService};
