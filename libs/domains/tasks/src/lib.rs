//! Tasks Domain
//!
//! This module provides a complete domain implementation for managing tasks.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP binding, status mapping
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐      ┌────────────────┐
//! │   Service   │ ───▶ │ UserOperations │  ← owner must exist
//! └──────┬──────┘      └────────────────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + implementations)
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_tasks::{PgTaskRepository, TaskService};
//! use domain_users::{PgUserRepository, UserService};
//! use sea_orm::Database;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let db = Database::connect("postgres://...").await?;
//!
//! let users = UserService::new(PgUserRepository::new(db.clone()));
//! let tasks = TaskService::new(PgTaskRepository::new(db), users);
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

// Re-export commonly used types
pub use error::{TaskError, TaskResult};
pub use memory::InMemoryTaskRepository;
pub use models::{CreateTask, Task};
pub use postgres::PgTaskRepository;
pub use repository::TaskRepository;
pub use service::{TaskOperations, TaskService};
