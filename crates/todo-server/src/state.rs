use std::sync::Arc;

use todo_core::{InMemoryTodoStore, TodoRepository};

/// Shared state handed to every handler through `web::Data`
pub struct AppState {
    pub todos: Arc<dyn TodoRepository>,
}

impl AppState {
    /// State backed by a fresh, empty in-memory store.
    pub fn new() -> Self {
        Self::with_repository(Arc::new(InMemoryTodoStore::new()))
    }

    pub fn with_repository(todos: Arc<dyn TodoRepository>) -> Self {
        Self { todos }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
