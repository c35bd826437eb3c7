//! Request bodies accepted by the todo routes, validated before they reach the store
use serde::Deserialize;

use crate::error::{Result, TodoError};
use crate::todo::DEFAULT_STATUS;

/// Body of `POST /todos`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateTodoRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Body of `PUT /todos/{id}`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTodoRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Validated input for creating a todo
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    pub title: String,
    pub status: String,
}

/// Validated partial update; `None` fields keep their stored value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoPatch {
    pub title: Option<String>,
    pub status: Option<String>,
}

impl CreateTodoRequest {
    pub fn validate(self) -> Result<NewTodo> {
        let title = match self.title {
            Some(title) if !title.is_empty() => title,
            _ => return Err(TodoError::validation("Title is required")),
        };

        Ok(NewTodo {
            title,
            status: self.status.unwrap_or_else(|| DEFAULT_STATUS.to_string()),
        })
    }
}

impl UpdateTodoRequest {
    pub fn validate(self) -> Result<TodoPatch> {
        if matches!(self.title.as_deref(), Some("")) {
            return Err(TodoError::validation("Title cannot be empty"));
        }

        Ok(TodoPatch {
            title: self.title,
            status: self.status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create(json: &str) -> Result<NewTodo> {
        serde_json::from_str::<CreateTodoRequest>(json)
            .unwrap()
            .validate()
    }

    #[test]
    fn create_defaults_status() {
        let new_todo = create(r#"{"title": "buy milk"}"#).unwrap();
        assert_eq!(new_todo.title, "buy milk");
        assert_eq!(new_todo.status, "todo");
    }

    #[test]
    fn create_keeps_free_form_status() {
        let new_todo = create(r#"{"title": "buy milk", "status": "someday"}"#).unwrap();
        assert_eq!(new_todo.status, "someday");
    }

    #[test]
    fn create_requires_title() {
        for body in [r#"{}"#, r#"{"title": ""}"#, r#"{"title": null}"#, r#"{"status": "done"}"#] {
            assert_eq!(
                create(body),
                Err(TodoError::Validation("Title is required".to_string())),
                "body: {body}"
            );
        }
    }

    #[test]
    fn create_ignores_unknown_fields() {
        let new_todo = create(r#"{"title": "x", "priority": 3}"#).unwrap();
        assert_eq!(new_todo.title, "x");
    }

    #[test]
    fn update_passes_present_fields_through() {
        let patch = serde_json::from_str::<UpdateTodoRequest>(r#"{"status": "done"}"#)
            .unwrap()
            .validate()
            .unwrap();
        assert_eq!(
            patch,
            TodoPatch {
                title: None,
                status: Some("done".to_string()),
            }
        );
    }

    #[test]
    fn update_rejects_empty_title() {
        let result = UpdateTodoRequest {
            title: Some(String::new()),
            status: None,
        }
        .validate();
        assert!(matches!(result, Err(TodoError::Validation(_))));
    }
}
