use async_trait::async_trait;

use crate::error::TodoResult;
use crate::models::{NewTodo, Todo};

/// Repository trait for Todo persistence
///
/// This trait defines the data access interface for todos.
/// Implementations can use different storage backends (in-memory, etc.)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Create a new todo, allocating and returning its id
    async fn create(&self, input: NewTodo) -> TodoResult<i64>;

    /// Get a todo by ID
    async fn get_by_id(&self, id: i64) -> TodoResult<Todo>;

    /// List all todos in ascending id order
    async fn list(&self) -> TodoResult<Vec<Todo>>;

    /// Insert or replace a todo keyed by the id it carries
    async fn update(&self, todo: Todo) -> TodoResult<()>;

    /// Delete a todo by ID
    async fn delete(&self, id: i64) -> TodoResult<()>;
}
