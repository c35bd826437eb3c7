pub mod dto;
pub mod error;
pub mod store;
pub mod todo;

pub use dto::{CreateTodoRequest, NewTodo, TodoPatch, UpdateTodoRequest};
pub use error::{Result, TodoError};
pub use store::{InMemoryTodoStore, TodoRepository};
pub use todo::{Todo, DEFAULT_STATUS};
