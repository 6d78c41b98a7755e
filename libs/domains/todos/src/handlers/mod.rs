mod grpc;

use axum::{Router, routing::get};
use rpc::todo::todo_service_client::TodoServiceClient;
use tonic::transport::Channel;
use utoipa::OpenApi;

use crate::models::{NewTodo, Todo};

pub use grpc::{
    ApiQuery, CreateTodoResponse, DeleteTodoResponse, ListTodosResponse, ReadTodoResponse,
    UpdateTodoResponse,
};

/// OpenAPI documentation for the Todos API (gRPC-backed gateway)
#[derive(OpenApi)]
#[openapi(
    paths(
        grpc::list_todos,
        grpc::get_todo,
        grpc::create_todo,
        grpc::update_todo,
        grpc::delete_todo,
    ),
    components(
        schemas(
            Todo,
            NewTodo,
            CreateTodoResponse,
            ReadTodoResponse,
            ListTodosResponse,
            UpdateTodoResponse,
            DeleteTodoResponse,
        )
    ),
    tags(
        (name = "todos", description = "gRPC-backed todo operations")
    )
)]
pub struct GatewayApiDoc;

/// Create router for gRPC-backed handlers
pub fn grpc_router(client: TodoServiceClient<Channel>) -> Router {
    Router::new()
        .route("/", get(grpc::list_todos).post(grpc::create_todo))
        .route(
            "/{id}",
            get(grpc::get_todo)
                .put(grpc::update_todo)
                .delete(grpc::delete_todo),
        )
        .with_state(client)
}
