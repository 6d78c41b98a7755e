//! Todo gRPC service implementation
//!
//! This module contains the TodoServiceImpl struct and its gRPC trait
//! implementation. It is the sole wire entry point: both native gRPC
//! clients and the HTTP gateway land here, so the API version check and
//! the error-code mapping live here and nowhere else.

use std::sync::Arc;

use domain_todos::{NewTodo, TodoRepository, TodoService, conversions as conv};
use rpc::todo::{
    CreateRequest, CreateResponse, DeleteRequest, DeleteResponse, ReadAllRequest, ReadAllResponse,
    ReadRequest, ReadResponse, UpdateRequest, UpdateResponse, todo_service_server::TodoService as TodoServiceTrait,
};
use tonic::{Request, Response, Status};
use tracing::info;

/// API version implemented by this service
pub const API_VERSION: &str = "v1";

/// gRPC service implementation for todos
///
/// Wraps the domain TodoService and handles proto ↔ domain conversions.
/// Generic over the repository type for testability.
pub struct TodoServiceImpl<R>
where
    R: TodoRepository + 'static,
{
    service: Arc<TodoService<R>>,
}

impl<R> TodoServiceImpl<R>
where
    R: TodoRepository + 'static,
{
    /// Create a new todo service implementation
    pub fn new(service: TodoService<R>) -> Self {
        Self {
            service: Arc::new(service),
        }
    }

    /// Reject requests tagged with an API version this service does not
    /// implement. An empty tag means "use the current version" and is
    /// always accepted.
    fn check_api(&self, api: &str) -> Result<(), Status> {
        if !api.is_empty() && api != API_VERSION {
            return Err(Status::unimplemented(format!(
                "unsupported API version: service implements API version '{}', but asked for '{}'",
                API_VERSION, api
            )));
        }
        Ok(())
    }
}

/// Extract the domain NewTodo from a wire payload, validating the
/// reminder timestamp. Runs before any store access.
fn new_todo_from_proto(todo: Option<rpc::todo::Todo>) -> Result<(i64, NewTodo), Status> {
    let todo = todo.ok_or_else(|| Status::invalid_argument("missing todo payload"))?;

    let reminder_ts = todo
        .reminder
        .ok_or_else(|| Status::invalid_argument("reminder field is required"))?;
    let reminder = conv::timestamp_to_datetime(&reminder_ts)
        .map_err(|e| Status::invalid_argument(format!("reminder field has invalid format: {}", e)))?;

    Ok((
        todo.id,
        NewTodo {
            title: todo.title,
            description: todo.description,
            reminder,
        },
    ))
}

#[tonic::async_trait]
impl<R> TodoServiceTrait for TodoServiceImpl<R>
where
    R: TodoRepository + 'static,
{
    async fn create(
        &self,
        request: Request<CreateRequest>,
    ) -> Result<Response<CreateResponse>, Status> {
        let req = request.into_inner();
        self.check_api(&req.api)?;

        let (_, input) = new_todo_from_proto(req.todo)?;

        let id = self
            .service
            .create_todo(input)
            .await
            .map_err(|e| Status::unknown(format!("failed to insert todo: {}", e)))?;

        Ok(Response::new(CreateResponse {
            api: API_VERSION.to_string(),
            id,
        }))
    }

    async fn read(&self, request: Request<ReadRequest>) -> Result<Response<ReadResponse>, Status> {
        let req = request.into_inner();
        self.check_api(&req.api)?;

        let todo = self
            .service
            .get_todo(req.id)
            .await
            .map_err(|e| Status::unknown(format!("failed to read todo: {}", e)))?;

        Ok(Response::new(ReadResponse {
            api: API_VERSION.to_string(),
            todo: Some(todo.into()),
        }))
    }

    async fn read_all(
        &self,
        request: Request<ReadAllRequest>,
    ) -> Result<Response<ReadAllResponse>, Status> {
        let req = request.into_inner();
        self.check_api(&req.api)?;

        let todos = self
            .service
            .list_todos()
            .await
            .map_err(|e| Status::unknown(format!("failed to read todos: {}", e)))?;

        Ok(Response::new(ReadAllResponse {
            api: API_VERSION.to_string(),
            todos: todos.into_iter().map(Into::into).collect(),
        }))
    }

    async fn update(
        &self,
        request: Request<UpdateRequest>,
    ) -> Result<Response<UpdateResponse>, Status> {
        let req = request.into_inner();
        self.check_api(&req.api)?;

        // The wire id names the target record and travels into the store
        let (id, input) = new_todo_from_proto(req.todo)?;

        self.service
            .update_todo(input.into_todo(id))
            .await
            .map_err(|e| Status::unknown(format!("failed to update todo: {}", e)))?;

        Ok(Response::new(UpdateResponse {
            api: API_VERSION.to_string(),
            updated: 1,
        }))
    }

    async fn delete(
        &self,
        request: Request<DeleteRequest>,
    ) -> Result<Response<DeleteResponse>, Status> {
        let req = request.into_inner();
        self.check_api(&req.api)?;

        self.service
            .delete_todo(req.id)
            .await
            .map_err(|e| Status::unknown(format!("failed to delete todo: {}", e)))?;

        info!("Deleted todo: {}", req.id);
        Ok(Response::new(DeleteResponse {
            api: API_VERSION.to_string(),
            deleted: 1,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use domain_todos::MemTodoRepository;
    use prost_types::Timestamp;

    fn create_test_service() -> TodoServiceImpl<MemTodoRepository> {
        let repository = MemTodoRepository::new();
        let service = TodoService::new(repository);
        TodoServiceImpl::new(service)
    }

    fn proto_todo(title: &str) -> rpc::todo::Todo {
        let reminder = Utc.with_ymd_and_hms(2026, 6, 1, 8, 0, 0).unwrap();
        rpc::todo::Todo {
            id: 0,
            title: title.to_string(),
            description: format!("{} description", title),
            reminder: Some(conv::datetime_to_timestamp(reminder)),
        }
    }

    fn create_request(title: &str) -> Request<CreateRequest> {
        Request::new(CreateRequest {
            api: "v1".to_string(),
            todo: Some(proto_todo(title)),
        })
    }

    #[tokio::test]
    async fn test_create_returns_allocated_id() {
        let service = create_test_service();

        let response = service.create(create_request("first")).await.unwrap();
        let result = response.into_inner();
        assert_eq!(result.api, "v1");
        assert_eq!(result.id, 1);

        let response = service.create(create_request("second")).await.unwrap();
        assert_eq!(response.into_inner().id, 2);
    }

    #[tokio::test]
    async fn test_create_accepts_empty_api_tag() {
        let service = create_test_service();

        let response = service
            .create(Request::new(CreateRequest {
                api: String::new(),
                todo: Some(proto_todo("untagged")),
            }))
            .await
            .unwrap();

        assert_eq!(response.into_inner().api, "v1");
    }

    #[tokio::test]
    async fn test_unsupported_api_version_rejected() {
        let service = create_test_service();

        let err = service
            .create(Request::new(CreateRequest {
                api: "v2".to_string(),
                todo: Some(proto_todo("rejected")),
            }))
            .await
            .unwrap_err();

        assert_eq!(err.code(), tonic::Code::Unimplemented);

        // No side effect: the rejected request neither wrote a record
        // nor consumed an id
        let all = service
            .read_all(Request::new(ReadAllRequest {
                api: "v1".to_string(),
            }))
            .await
            .unwrap()
            .into_inner();
        assert!(all.todos.is_empty());

        let id = service
            .create(create_request("accepted"))
            .await
            .unwrap()
            .into_inner()
            .id;
        assert_eq!(id, 1);
    }

    #[tokio::test]
    async fn test_version_check_applies_to_every_operation() {
        let service = create_test_service();
        let api = "v7".to_string();

        let read = service
            .read(Request::new(ReadRequest { api: api.clone(), id: 1 }))
            .await
            .unwrap_err();
        assert_eq!(read.code(), tonic::Code::Unimplemented);

        let read_all = service
            .read_all(Request::new(ReadAllRequest { api: api.clone() }))
            .await
            .unwrap_err();
        assert_eq!(read_all.code(), tonic::Code::Unimplemented);

        let update = service
            .update(Request::new(UpdateRequest {
                api: api.clone(),
                todo: Some(proto_todo("ignored")),
            }))
            .await
            .unwrap_err();
        assert_eq!(update.code(), tonic::Code::Unimplemented);

        let delete = service
            .delete(Request::new(DeleteRequest { api, id: 1 }))
            .await
            .unwrap_err();
        assert_eq!(delete.code(), tonic::Code::Unimplemented);
    }

    #[tokio::test]
    async fn test_create_missing_payload_rejected() {
        let service = create_test_service();

        let err = service
            .create(Request::new(CreateRequest {
                api: "v1".to_string(),
                todo: None,
            }))
            .await
            .unwrap_err();

        assert_eq!(err.code(), tonic::Code::InvalidArgument);
    }

    #[tokio::test]
    async fn test_create_malformed_reminder_rejected_without_mutation() {
        let service = create_test_service();

        let mut todo = proto_todo("bad-reminder");
        todo.reminder = Some(Timestamp {
            seconds: 0,
            nanos: -1,
        });

        let err = service
            .create(Request::new(CreateRequest {
                api: "v1".to_string(),
                todo: Some(todo),
            }))
            .await
            .unwrap_err();
        assert_eq!(err.code(), tonic::Code::InvalidArgument);

        let all = service
            .read_all(Request::new(ReadAllRequest {
                api: "v1".to_string(),
            }))
            .await
            .unwrap()
            .into_inner();
        assert!(all.todos.is_empty());
    }

    #[tokio::test]
    async fn test_create_then_read_round_trips() {
        let service = create_test_service();

        let sent = proto_todo("roundtrip");
        let id = service
            .create(Request::new(CreateRequest {
                api: "v1".to_string(),
                todo: Some(sent.clone()),
            }))
            .await
            .unwrap()
            .into_inner()
            .id;

        let response = service
            .read(Request::new(ReadRequest {
                api: "v1".to_string(),
                id,
            }))
            .await
            .unwrap()
            .into_inner();

        let stored = response.todo.unwrap();
        assert_eq!(stored.id, id);
        assert_eq!(stored.title, sent.title);
        assert_eq!(stored.description, sent.description);
        assert_eq!(stored.reminder, sent.reminder);
    }

    #[tokio::test]
    async fn test_read_missing_reports_unknown() {
        let service = create_test_service();

        let err = service
            .read(Request::new(ReadRequest {
                api: "v1".to_string(),
                id: 42,
            }))
            .await
            .unwrap_err();

        assert_eq!(err.code(), tonic::Code::Unknown);
        assert!(err.message().contains("not found"));
    }

    #[tokio::test]
    async fn test_read_all_empty_store() {
        let service = create_test_service();

        let response = service
            .read_all(Request::new(ReadAllRequest {
                api: "v1".to_string(),
            }))
            .await
            .unwrap()
            .into_inner();

        assert_eq!(response.api, "v1");
        assert!(response.todos.is_empty());
    }

    #[tokio::test]
    async fn test_read_all_returns_every_record() {
        let service = create_test_service();

        for i in 0..4 {
            service
                .create(create_request(&format!("todo-{}", i)))
                .await
                .unwrap();
        }

        let response = service
            .read_all(Request::new(ReadAllRequest {
                api: "v1".to_string(),
            }))
            .await
            .unwrap()
            .into_inner();

        assert_eq!(response.todos.len(), 4);
        let ids: Vec<i64> = response.todos.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[tokio::test]
    async fn test_update_targets_wire_id() {
        let service = create_test_service();

        let id = service
            .create(create_request("original"))
            .await
            .unwrap()
            .into_inner()
            .id;

        let mut updated = proto_todo("renamed");
        updated.id = id;

        let response = service
            .update(Request::new(UpdateRequest {
                api: "v1".to_string(),
                todo: Some(updated),
            }))
            .await
            .unwrap()
            .into_inner();
        assert_eq!(response.updated, 1);

        let stored = service
            .read(Request::new(ReadRequest {
                api: "v1".to_string(),
                id,
            }))
            .await
            .unwrap()
            .into_inner()
            .todo
            .unwrap();
        assert_eq!(stored.id, id);
        assert_eq!(stored.title, "renamed");
    }

    #[tokio::test]
    async fn test_update_malformed_reminder_rejected_without_mutation() {
        let service = create_test_service();

        let id = service
            .create(create_request("stable"))
            .await
            .unwrap()
            .into_inner()
            .id;

        let mut bad = proto_todo("tampered");
        bad.id = id;
        bad.reminder = Some(Timestamp {
            seconds: i64::MAX,
            nanos: 0,
        });

        let err = service
            .update(Request::new(UpdateRequest {
                api: "v1".to_string(),
                todo: Some(bad),
            }))
            .await
            .unwrap_err();
        assert_eq!(err.code(), tonic::Code::InvalidArgument);

        let stored = service
            .read(Request::new(ReadRequest {
                api: "v1".to_string(),
                id,
            }))
            .await
            .unwrap()
            .into_inner()
            .todo
            .unwrap();
        assert_eq!(stored.title, "stable");
    }

    #[tokio::test]
    async fn test_delete_then_read_reports_unknown() {
        let service = create_test_service();

        let id = service
            .create(create_request("doomed"))
            .await
            .unwrap()
            .into_inner()
            .id;

        let response = service
            .delete(Request::new(DeleteRequest {
                api: "v1".to_string(),
                id,
            }))
            .await
            .unwrap()
            .into_inner();
        assert_eq!(response.deleted, 1);

        let err = service
            .read(Request::new(ReadRequest {
                api: "v1".to_string(),
                id,
            }))
            .await
            .unwrap_err();
        assert_eq!(err.code(), tonic::Code::Unknown);
    }

    #[tokio::test]
    async fn test_delete_missing_reports_unknown() {
        let service = create_test_service();

        let err = service
            .delete(Request::new(DeleteRequest {
                api: "v1".to_string(),
                id: 42,
            }))
            .await
            .unwrap_err();

        assert_eq!(err.code(), tonic::Code::Unknown);
    }
}
