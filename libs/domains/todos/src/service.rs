use std::sync::Arc;
use tracing::instrument;

use crate::error::TodoResult;
use crate::models::{NewTodo, Todo};
use crate::repository::TodoRepository;

/// Service layer for Todo business logic
#[derive(Clone)]
pub struct TodoService<R: TodoRepository> {
    repository: Arc<R>,
}

impl<R: TodoRepository> TodoService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new todo and return its allocated id
    #[instrument(skip(self, input), fields(todo_title = %input.title))]
    pub async fn create_todo(&self, input: NewTodo) -> TodoResult<i64> {
        self.repository.create(input).await
    }

    /// Get a todo by ID
    #[instrument(skip(self), fields(todo_id = %id))]
    pub async fn get_todo(&self, id: i64) -> TodoResult<Todo> {
        self.repository.get_by_id(id).await
    }

    /// List all todos
    pub async fn list_todos(&self) -> TodoResult<Vec<Todo>> {
        self.repository.list().await
    }

    /// Insert or replace a todo keyed by the id it carries
    #[instrument(skip(self, todo), fields(todo_id = %todo.id))]
    pub async fn update_todo(&self, todo: Todo) -> TodoResult<()> {
        self.repository.update(todo).await
    }

    /// Delete a todo
    #[instrument(skip(self), fields(todo_id = %id))]
    pub async fn delete_todo(&self, id: i64) -> TodoResult<()> {
        self.repository.delete(id).await
    }
}
