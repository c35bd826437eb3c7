use thiserror::Error;

pub type Result<T, E = TodoError> = std::result::Result<T, E>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TodoError {
    /// A request body failed boundary validation. The message is client-facing.
    #[error("{0}")]
    Validation(String),

    /// No todo with the given id exists.
    #[error("Todo not found")]
    NotFound(String),
}

impl TodoError {
    pub fn validation(message: impl Into<String>) -> Self {
        TodoError::Validation(message.into())
    }

    pub fn not_found(id: impl Into<String>) -> Self {
        TodoError::NotFound(id.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_does_not_leak_id() {
        let err = TodoError::not_found("abc");
        assert_eq!(err.to_string(), "Todo not found");
        assert_eq!(err, TodoError::NotFound("abc".to_string()));
    }

    #[test]
    fn validation_message_is_passed_through() {
        let err = TodoError::validation("Title is required");
        assert_eq!(err.to_string(), "Title is required");
    }
}
