//! gRPC server initialization and lifecycle management
//!
//! This module handles all server setup:
//! - Tracing initialization
//! - Store construction
//! - gRPC server configuration and startup
//! - Health check service (grpc.health.v1.Health)

use core_config::{Environment, FromEnv, server::GrpcConfig};
use domain_todos::{MemTodoRepository, TodoService};
use eyre::{Result, WrapErr};
use rpc::todo::todo_service_server::TodoServiceServer;
use tonic::transport::Server;
use tonic_health::server::health_reporter;
use tracing::info;

use crate::service::TodoServiceImpl;

/// Run the gRPC server
///
/// This is the main entry point for server initialization. It:
/// 1. Sets up structured logging (env-aware: JSON for prod, pretty for dev)
/// 2. Constructs the in-memory store and the service layers
/// 3. Starts the gRPC server with compression enabled
///
/// # Errors
///
/// Returns an error if:
/// - The bind address cannot be parsed
/// - Server binding fails
/// - Server runtime encounters an error
pub async fn run() -> Result<()> {
    // Initialize tracing (env-aware: JSON for prod, pretty for dev)
    let environment = Environment::from_env();
    core_config::tracing::init_tracing(&environment);

    // Construct the store and the service layers. The store owns all
    // records; everything downstream talks to it through the service.
    let repository = MemTodoRepository::new();
    let service = TodoService::new(repository);

    // Create gRPC service implementation
    let todo_service = TodoServiceImpl::new(service);

    // Configure server address from environment or default
    let config = GrpcConfig::from_env().wrap_err("Failed to load gRPC configuration")?;
    let addr_str = config.address();
    let addr = addr_str
        .parse()
        .wrap_err_with(|| format!("Failed to parse server address: {}", addr_str))?;
    info!("TodoService listening on {}", addr);

    // Create health reporter for Kubernetes probes
    let (mut health_reporter, health_service) = health_reporter();

    // Mark the todo service as serving, using the service name from the
    // proto definition
    health_reporter
        .set_service_status("todo.v1.TodoService", tonic_health::ServingStatus::Serving)
        .await;
    // Also set empty service name for generic health checks (what k8s uses by default)
    health_reporter
        .set_service_status("", tonic_health::ServingStatus::Serving)
        .await;
    info!("Health check service enabled (grpc.health.v1.Health)");

    // Build and start the gRPC server
    Server::builder()
        .add_service(health_service)
        .add_service(
            TodoServiceServer::new(todo_service)
                // Enable zstd compression for requests and responses
                .accept_compressed(tonic::codec::CompressionEncoding::Zstd)
                .send_compressed(tonic::codec::CompressionEncoding::Zstd),
        )
        .serve(addr)
        .await
        .wrap_err("gRPC server failed")?;

    Ok(())
}
