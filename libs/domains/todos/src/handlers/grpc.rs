//! Gateway handlers that transcode HTTP/JSON onto the gRPC service.
//!
//! These handlers carry no business logic: every request, including its
//! `api` version tag, is forwarded to the gRPC service, which remains
//! the sole enforcement point for versioning and validation.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use rpc::todo::todo_service_client::TodoServiceClient;
use rpc::todo::{CreateRequest, DeleteRequest, ReadAllRequest, ReadRequest, UpdateRequest};
use serde::{Deserialize, Serialize};
use tonic::transport::Channel;
use utoipa::{IntoParams, ToSchema};

use axum_helpers::AppError;

use crate::models::{NewTodo, Todo};

/// API version tag forwarded to the gRPC service
///
/// Empty (the default) means "use the current version".
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct ApiQuery {
    #[serde(default)]
    pub api: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CreateTodoResponse {
    pub api: String,
    /// ID of the created todo
    pub id: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ReadTodoResponse {
    pub api: String,
    pub todo: Todo,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ListTodosResponse {
    pub api: String,
    pub todos: Vec<Todo>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UpdateTodoResponse {
    pub api: String,
    /// Number of records updated; 1 on success
    pub updated: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteTodoResponse {
    pub api: String,
    /// Number of records deleted; 1 on success
    pub deleted: i64,
}

/// Map a gRPC status onto the gateway's error taxonomy.
///
/// The message text travels through unchanged so both front ends report
/// the same failure for the same call.
fn status_to_app_error(status: tonic::Status) -> AppError {
    match status.code() {
        tonic::Code::Unimplemented => AppError::NotImplemented(status.message().to_string()),
        tonic::Code::InvalidArgument => AppError::BadRequest(status.message().to_string()),
        tonic::Code::Unavailable => AppError::ServiceUnavailable(status.message().to_string()),
        _ => AppError::InternalServerError(status.message().to_string()),
    }
}

/// List all todos
#[utoipa::path(
    get,
    path = "",
    tag = "todos",
    params(ApiQuery),
    responses(
        (status = 200, description = "All todos in ascending id order", body = ListTodosResponse),
        (status = 501, description = "Unsupported API version"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn list_todos(
    State(mut client): State<TodoServiceClient<Channel>>,
    Query(query): Query<ApiQuery>,
) -> Result<Json<ListTodosResponse>, AppError> {
    let response = client
        .read_all(ReadAllRequest { api: query.api })
        .await
        .map_err(status_to_app_error)?
        .into_inner();

    let todos = response
        .todos
        .into_iter()
        .map(Todo::try_from)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| AppError::InternalServerError(format!("Conversion error: {}", e)))?;

    Ok(Json(ListTodosResponse {
        api: response.api,
        todos,
    }))
}

/// Get a todo by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "todos",
    params(
        ("id" = i64, Path, description = "Todo ID"),
        ApiQuery
    ),
    responses(
        (status = 200, description = "Todo found", body = ReadTodoResponse),
        (status = 501, description = "Unsupported API version"),
        (status = 500, description = "Todo missing or internal error")
    )
)]
pub async fn get_todo(
    State(mut client): State<TodoServiceClient<Channel>>,
    Path(id): Path<i64>,
    Query(query): Query<ApiQuery>,
) -> Result<Json<ReadTodoResponse>, AppError> {
    let response = client
        .read(ReadRequest { api: query.api, id })
        .await
        .map_err(status_to_app_error)?
        .into_inner();

    let todo = response
        .todo
        .ok_or_else(|| AppError::InternalServerError("empty read response".to_string()))?
        .try_into()
        .map_err(|e| AppError::InternalServerError(format!("Conversion error: {}", e)))?;

    Ok(Json(ReadTodoResponse {
        api: response.api,
        todo,
    }))
}

/// Create a new todo
#[utoipa::path(
    post,
    path = "",
    tag = "todos",
    params(ApiQuery),
    request_body = NewTodo,
    responses(
        (status = 201, description = "Todo created", body = CreateTodoResponse),
        (status = 400, description = "Invalid request"),
        (status = 501, description = "Unsupported API version"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_todo(
    State(mut client): State<TodoServiceClient<Channel>>,
    Query(query): Query<ApiQuery>,
    Json(input): Json<NewTodo>,
) -> Result<impl IntoResponse, AppError> {
    // Id 0 in the payload: the store allocates the real one
    let todo = input.into_todo(0);

    let response = client
        .create(CreateRequest {
            api: query.api,
            todo: Some(todo.into()),
        })
        .await
        .map_err(status_to_app_error)?
        .into_inner();

    Ok((
        StatusCode::CREATED,
        Json(CreateTodoResponse {
            api: response.api,
            id: response.id,
        }),
    ))
}

/// Update a todo
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "todos",
    params(
        ("id" = i64, Path, description = "Todo ID"),
        ApiQuery
    ),
    request_body = NewTodo,
    responses(
        (status = 200, description = "Todo updated", body = UpdateTodoResponse),
        (status = 400, description = "Invalid request"),
        (status = 501, description = "Unsupported API version"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn update_todo(
    State(mut client): State<TodoServiceClient<Channel>>,
    Path(id): Path<i64>,
    Query(query): Query<ApiQuery>,
    Json(input): Json<NewTodo>,
) -> Result<Json<UpdateTodoResponse>, AppError> {
    // The path id names the target record
    let todo = input.into_todo(id);

    let response = client
        .update(UpdateRequest {
            api: query.api,
            todo: Some(todo.into()),
        })
        .await
        .map_err(status_to_app_error)?
        .into_inner();

    Ok(Json(UpdateTodoResponse {
        api: response.api,
        updated: response.updated,
    }))
}

/// Delete a todo
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "todos",
    params(
        ("id" = i64, Path, description = "Todo ID"),
        ApiQuery
    ),
    responses(
        (status = 200, description = "Todo deleted", body = DeleteTodoResponse),
        (status = 501, description = "Unsupported API version"),
        (status = 500, description = "Todo missing or internal error")
    )
)]
pub async fn delete_todo(
    State(mut client): State<TodoServiceClient<Channel>>,
    Path(id): Path<i64>,
    Query(query): Query<ApiQuery>,
) -> Result<Json<DeleteTodoResponse>, AppError> {
    let response = client
        .delete(DeleteRequest { api: query.api, id })
        .await
        .map_err(status_to_app_error)?
        .into_inner();

    Ok(Json(DeleteTodoResponse {
        api: response.api,
        deleted: response.deleted,
    }))
}
