//! Todos Domain
//!
//! This module provides a complete domain implementation for managing todos.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │   Service   │  ← Business logic
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + in-memory implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_todos::{MemTodoRepository, TodoService};
//!
//! let repository = MemTodoRepository::new();
//! let service = TodoService::new(repository);
//! ```

pub mod conversions;
pub mod error;
pub mod handlers;
pub mod memory;
pub mod models;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{TodoError, TodoResult};
pub use handlers::GatewayApiDoc;
pub use memory::MemTodoRepository;
pub use models::{NewTodo, Todo};
pub use repository::TodoRepository;
pub use service::TodoService;
