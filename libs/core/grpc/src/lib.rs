//! # gRPC Client Library
//!
//! Reusable gRPC client plumbing shared by the gateway and by tests:
//! optimized channel creation with HTTP/2 tuning, and generic
//! protobuf ↔ domain conversions.
//!
//! ## Quick Start
//!
//! ```ignore
//! use grpc_client::create_channel_lazy;
//! use rpc::todo::todo_service_client::TodoServiceClient;
//!
//! let channel = create_channel_lazy("http://[::1]:50051")?;
//! let client = TodoServiceClient::new(channel);
//! ```

pub mod channel;
pub mod conversions;
pub mod error;

// Re-export main types and functions for convenience
pub use channel::{
  ChannelConfig, create_channel, create_channel_lazy, create_channel_with_config,
};
pub use error::{GrpcError, GrpcResult};
