use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Input structure for creating or updating a Todo.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct TodoInput {
    /// The title of the Todo. Must be present and non-empty.
    #[validate(length(min = 1, message = "Title must not be blank"))]
    pub title: String,

    /// Completion flag. Absent means "not stated" and is stored as NULL.
    pub is_completed: Option<bool>,
}

/// A Todo record as stored in the database and returned by the API.
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct Todo {
    /// Database-generated identifier.
    pub id: i64,
    /// The title of the Todo.
    pub title: String,
    /// Completion flag, nullable.
    pub is_completed: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_todo_input_validation() {
        let valid_input = TodoInput {
            title: "Complete the backend".to_string(),
            is_completed: Some(false),
        };
        assert!(valid_input.validate().is_ok());

        let empty_title = TodoInput {
            title: "".to_string(),
            is_completed: None,
        };
        assert!(empty_title.validate().is_err());
    }

    #[test]
    fn test_todo_input_completion_defaults_to_absent() {
        let input: TodoInput = serde_json::from_str(r#"{ "title": "Buy milk" }"#).unwrap();
        assert_eq!(input.title, "Buy milk");
        assert!(input.is_completed.is_none());
    }

    #[test]
    fn test_todo_input_rejects_missing_title() {
        let result: Result<TodoInput, _> = serde_json::from_str(r#"{ "is_completed": true }"#);
        assert!(result.is_err());
    }
}
