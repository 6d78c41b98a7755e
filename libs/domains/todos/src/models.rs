use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Todo entity - represents a task to do
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Todo {
    /// Unique identifier, assigned by the store on create
    pub id: i64,
    /// Short title
    pub title: String,
    /// Longer free-form description
    pub description: String,
    /// Absolute time to remind the user
    pub reminder: DateTime<Utc>,
}

/// DTO for creating a new todo
///
/// The id is allocated by the store, so it is absent here.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NewTodo {
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Absolute time to remind the user
    pub reminder: DateTime<Utc>,
}

impl NewTodo {
    /// Materialize a full record once the store has allocated an id
    pub fn into_todo(self, id: i64) -> Todo {
        Todo {
            id,
            title: self.title,
            description: self.description,
            reminder: self.reminder,
        }
    }
}
