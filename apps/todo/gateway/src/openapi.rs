use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(
        schemas(axum_helpers::ErrorResponse)
    ),
    info(
        title = "Todo Gateway",
        version = "0.1.0",
        description = "HTTP/JSON gateway transcoding onto the todo gRPC service"
    ),
    servers(
        (url = "/api", description = "API base path")
    ),
    nest(
        (path = "/v1/todos", api = domain_todos::GatewayApiDoc)
    )
)]
pub struct ApiDoc;
