//! Todo gRPC Service
//!
//! A microservice for managing todos via gRPC.
//!
//! ## Architecture
//!
//! ```text
//! Client
//!   ↓ (gRPC with Zstd compression)
//! TodoServiceImpl (service.rs)
//!   ↓ (version check, proto ↔ domain conversions, error mapping)
//! TodoService (domain layer)
//!   ↓
//! MemTodoRepository (in-memory store)
//! ```
//!
//! ## Modules
//!
//! - `server`: Server initialization and lifecycle
//! - `service`: gRPC service implementation (TodoServiceImpl)

pub mod server;
pub mod service;

// Re-export for convenience
pub use server::run;
pub use service::TodoServiceImpl;
