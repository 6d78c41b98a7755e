use axum::Router;
use axum_helpers::server::{create_app, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_todos::handlers::grpc_router;
use grpc_client::create_channel_lazy;
use rpc::todo::todo_service_client::TodoServiceClient;
use tracing::info;

mod config;
mod openapi;

use config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    // Initialize tracing with ErrorLayer for span trace capture
    init_tracing(&config.environment);

    let todo_addr =
        std::env::var("TODO_SERVICE_ADDR").unwrap_or_else(|_| "http://[::1]:50051".to_string());
    info!("Connecting to TodoService at {}", todo_addr);

    // Lazy channel: the gateway starts even when the gRPC service is
    // still coming up; the connection is made on the first request
    let channel = create_channel_lazy(todo_addr)?;
    let client = TodoServiceClient::new(channel);

    // Build router with API routes
    let api_routes = Router::new().nest("/v1/todos", grpc_router(client));

    // create_router adds docs/middleware to our composed routes
    let router = axum_helpers::create_router::<openapi::ApiDoc>(api_routes);

    // Merge the /health liveness endpoint into the app
    let app = router.merge(health_router(config.app.clone()));

    create_app(app, &config.server)
        .await
        .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Todo gateway shutdown complete");
    Ok(())
}
