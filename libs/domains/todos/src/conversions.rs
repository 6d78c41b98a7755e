//! Todo-specific proto ↔ domain conversions
//!
//! Generic conversions (timestamps) are re-exported from
//! grpc_client::conversions and shared by the gRPC service and the
//! gateway handlers.

use crate::models::Todo;

// Re-export generic proto conversion helpers from shared library
pub use grpc_client::conversions::*;

impl From<Todo> for rpc::todo::Todo {
    fn from(todo: Todo) -> Self {
        rpc::todo::Todo {
            id: todo.id,
            title: todo.title,
            description: todo.description,
            reminder: Some(datetime_to_timestamp(todo.reminder)),
        }
    }
}

impl TryFrom<rpc::todo::Todo> for Todo {
    type Error = String;

    fn try_from(proto: rpc::todo::Todo) -> Result<Self, Self::Error> {
        let reminder = proto
            .reminder
            .ok_or_else(|| "missing reminder".to_string())?;

        Ok(Todo {
            id: proto.id,
            title: proto.title,
            description: proto.description,
            reminder: timestamp_to_datetime(&reminder)?,
        })
    }
}
