//! In-memory Todo repository
//!
//! Single-table store keyed by id. Each operation is one self-contained
//! critical section behind a `tokio::sync::RwLock`: writers are mutually
//! exclusive, readers see consistent snapshots. Id allocation uses a
//! dedicated atomic counter so two concurrent creates can never observe
//! the same id, independently of the table lock.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;

use async_trait::async_trait;

use crate::error::{TodoError, TodoResult};
use crate::models::{NewTodo, Todo};
use crate::repository::TodoRepository;

/// In-memory implementation of [`TodoRepository`]
///
/// Ids start at 1, are strictly increasing, and are never reused within
/// the lifetime of the process, including after deletes.
pub struct MemTodoRepository {
    table: RwLock<BTreeMap<i64, Todo>>,
    // Last allocated id; fetch_add(1) + 1 yields the next one
    id_counter: AtomicI64,
}

impl MemTodoRepository {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(BTreeMap::new()),
            id_counter: AtomicI64::new(0),
        }
    }
}

impl Default for MemTodoRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TodoRepository for MemTodoRepository {
    async fn create(&self, input: NewTodo) -> TodoResult<i64> {
        let id = self.id_counter.fetch_add(1, Ordering::SeqCst) + 1;
        let todo = input.into_todo(id);

        let mut table = self.table.write().await;
        table.insert(id, todo);

        Ok(id)
    }

    async fn get_by_id(&self, id: i64) -> TodoResult<Todo> {
        let table = self.table.read().await;
        table.get(&id).cloned().ok_or(TodoError::NotFound(id))
    }

    async fn list(&self) -> TodoResult<Vec<Todo>> {
        let table = self.table.read().await;
        // BTreeMap iteration is already in ascending id order
        Ok(table.values().cloned().collect())
    }

    async fn update(&self, todo: Todo) -> TodoResult<()> {
        let mut table = self.table.write().await;
        // Upsert: a record that does not pre-exist is silently created
        table.insert(todo.id, todo);
        Ok(())
    }

    async fn delete(&self, id: i64) -> TodoResult<()> {
        let mut table = self.table.write().await;
        table
            .remove(&id)
            .map(|_| ())
            .ok_or(TodoError::NotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use std::sync::Arc;

    fn sample_input(title: &str) -> NewTodo {
        NewTodo {
            title: title.to_string(),
            description: format!("description of {}", title),
            reminder: Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_create_assigns_increasing_ids() {
        let repo = MemTodoRepository::new();

        let first = repo.create(sample_input("first")).await.unwrap();
        let second = repo.create(sample_input("second")).await.unwrap();
        let third = repo.create(sample_input("third")).await.unwrap();

        assert_eq!(first, 1);
        assert_eq!(second, 2);
        assert_eq!(third, 3);
    }

    #[tokio::test]
    async fn test_create_then_get_round_trips() {
        let repo = MemTodoRepository::new();

        let input = sample_input("roundtrip");
        let expected_reminder = input.reminder;
        let id = repo.create(input).await.unwrap();

        let stored = repo.get_by_id(id).await.unwrap();
        assert_eq!(stored.id, id);
        assert_eq!(stored.title, "roundtrip");
        assert_eq!(stored.description, "description of roundtrip");
        assert_eq!(stored.reminder, expected_reminder);
    }

    #[tokio::test]
    async fn test_get_missing_returns_not_found() {
        let repo = MemTodoRepository::new();
        let err = repo.get_by_id(42).await.unwrap_err();
        assert_eq!(err, TodoError::NotFound(42));
    }

    #[tokio::test]
    async fn test_list_empty_store() {
        let repo = MemTodoRepository::new();
        let todos = repo.list().await.unwrap();
        assert!(todos.is_empty());
    }

    #[tokio::test]
    async fn test_list_returns_all_in_id_order() {
        let repo = MemTodoRepository::new();
        for i in 0..5 {
            repo.create(sample_input(&format!("todo-{}", i))).await.unwrap();
        }

        let todos = repo.list().await.unwrap();
        assert_eq!(todos.len(), 5);

        let ids: Vec<i64> = todos.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[tokio::test]
    async fn test_update_replaces_existing() {
        let repo = MemTodoRepository::new();
        let id = repo.create(sample_input("before")).await.unwrap();

        let mut todo = repo.get_by_id(id).await.unwrap();
        todo.title = "after".to_string();
        repo.update(todo).await.unwrap();

        let stored = repo.get_by_id(id).await.unwrap();
        assert_eq!(stored.title, "after");

        // Replacing does not grow the table
        assert_eq!(repo.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_update_upserts_missing_record() {
        let repo = MemTodoRepository::new();

        let todo = sample_input("phantom").into_todo(99);
        repo.update(todo).await.unwrap();

        let stored = repo.get_by_id(99).await.unwrap();
        assert_eq!(stored.title, "phantom");
    }

    #[tokio::test]
    async fn test_delete_then_get_not_found() {
        let repo = MemTodoRepository::new();
        let id = repo.create(sample_input("ephemeral")).await.unwrap();

        repo.delete(id).await.unwrap();

        let err = repo.get_by_id(id).await.unwrap_err();
        assert_eq!(err, TodoError::NotFound(id));
    }

    #[tokio::test]
    async fn test_delete_missing_returns_not_found() {
        let repo = MemTodoRepository::new();
        let err = repo.delete(7).await.unwrap_err();
        assert_eq!(err, TodoError::NotFound(7));
    }

    #[tokio::test]
    async fn test_ids_not_reused_after_delete() {
        let repo = MemTodoRepository::new();

        let id = repo.create(sample_input("one")).await.unwrap();
        repo.delete(id).await.unwrap();

        let next = repo.create(sample_input("two")).await.unwrap();
        assert!(next > id);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_concurrent_creates_yield_distinct_ids() {
        let repo = Arc::new(MemTodoRepository::new());

        let handles: Vec<_> = (0..100)
            .map(|i| {
                let repo = Arc::clone(&repo);
                tokio::spawn(async move {
                    repo.create(sample_input(&format!("concurrent-{}", i)))
                        .await
                        .unwrap()
                })
            })
            .collect();

        let mut ids = Vec::with_capacity(100);
        for handle in handles {
            ids.push(handle.await.unwrap());
        }

        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 100);

        let todos = repo.list().await.unwrap();
        assert_eq!(todos.len(), 100);
    }
}
