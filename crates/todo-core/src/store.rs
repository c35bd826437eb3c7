use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::dto::{NewTodo, TodoPatch};
use crate::error::{Result, TodoError};
use crate::todo::Todo;

/// Storage seam for todo records.
///
/// Each method is one atomic step against the collection; callers never hold
/// the underlying lock across calls.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    async fn create(&self, new_todo: NewTodo) -> Todo;
    async fn list(&self) -> Vec<Todo>;
    async fn get(&self, id: &str) -> Result<Todo>;
    async fn update(&self, id: &str, patch: TodoPatch) -> Result<Todo>;
    /// Removes the record and returns its last state.
    async fn delete(&self, id: &str) -> Result<Todo>;
    async fn len(&self) -> usize;

    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

/// Process-lifetime store, empty at startup, in insertion order
#[derive(Debug, Default)]
pub struct InMemoryTodoStore {
    todos: RwLock<Vec<Todo>>,
}

impl InMemoryTodoStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoRepository for InMemoryTodoStore {
    async fn create(&self, new_todo: NewTodo) -> Todo {
        let todo = Todo::new(new_todo, Utc::now());
        let mut todos = self.todos.write().await;
        todos.push(todo.clone());
        log::info!("[{}] Todo created ({} total)", todo.id, todos.len());
        todo
    }

    async fn list(&self) -> Vec<Todo> {
        self.todos.read().await.clone()
    }

    async fn get(&self, id: &str) -> Result<Todo> {
        let todos = self.todos.read().await;
        todos
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or_else(|| TodoError::not_found(id))
    }

    async fn update(&self, id: &str, patch: TodoPatch) -> Result<Todo> {
        let mut todos = self.todos.write().await;
        let todo = todos
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| TodoError::not_found(id))?;

        todo.apply(patch, Utc::now());
        log::debug!("[{}] Todo updated", id);
        Ok(todo.clone())
    }

    async fn delete(&self, id: &str) -> Result<Todo> {
        let mut todos = self.todos.write().await;
        let index = todos
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| TodoError::not_found(id))?;

        let removed = todos.remove(index);
        log::info!("[{}] Todo deleted ({} remaining)", id, todos.len());
        Ok(removed)
    }

    async fn len(&self) -> usize {
        self.todos.read().await.len()
    }
}
