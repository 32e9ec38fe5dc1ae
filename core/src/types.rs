//! Domain DTOs for the todo API.
//!
//! # Design
//! These types mirror the service's wire schema: items carry their key as
//! `_id`, and both create and update send the same `{title, description}`
//! body. They are defined independently from the mock-server crate; the
//! integration tests catch schema drift between the two.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque identifier of a todo item.
///
/// The service assigns ids as strings, but numeric ids (including the
/// client's timestamp placeholders) are accepted and kept in their decimal
/// form so every id compares and formats the same way.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "WireId", into = "String")]
pub struct TodoId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum WireId {
    Text(String),
    Number(i64),
}

impl From<WireId> for TodoId {
    fn from(raw: WireId) -> Self {
        match raw {
            WireId::Text(s) => TodoId(s),
            WireId::Number(n) => TodoId(n.to_string()),
        }
    }
}

impl From<TodoId> for String {
    fn from(id: TodoId) -> Self {
        id.0
    }
}

impl TodoId {
    pub fn new(id: impl Into<String>) -> Self {
        TodoId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TodoId {
    fn from(s: &str) -> Self {
        TodoId(s.to_string())
    }
}

impl From<i64> for TodoId {
    fn from(n: i64) -> Self {
        TodoId(n.to_string())
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single todo item as listed by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoItem {
    #[serde(rename = "_id")]
    pub id: TodoId,
    pub title: String,
    pub description: String,
}

/// Request payload for both creating and replacing a todo.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoInput {
    pub title: String,
    pub description: String,
}

impl TodoInput {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    /// Both fields must contain something other than whitespace.
    pub fn is_complete(&self) -> bool {
        !self.title.trim().is_empty() && !self.description.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_reads_underscore_id() {
        let item: TodoItem =
            serde_json::from_str(r#"{"_id":"65a1","title":"A","description":"a","__v":0}"#).unwrap();
        assert_eq!(item.id.as_str(), "65a1");
        assert_eq!(item.title, "A");
    }

    #[test]
    fn numeric_id_is_kept_as_decimal_text() {
        let item: TodoItem =
            serde_json::from_str(r#"{"_id":1,"title":"A","description":"a"}"#).unwrap();
        assert_eq!(item.id, TodoId::from(1));
        assert_eq!(item.id.to_string(), "1");
    }

    #[test]
    fn item_serializes_id_as_string() {
        let item = TodoItem {
            id: TodoId::from(42),
            title: "T".to_string(),
            description: "D".to_string(),
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["_id"], "42");
        assert!(json.get("id").is_none());
    }

    #[test]
    fn input_requires_non_blank_fields() {
        assert!(TodoInput::new("a", "b").is_complete());
        assert!(!TodoInput::new("   ", "b").is_complete());
        assert!(!TodoInput::new("a", "").is_complete());
    }

    #[test]
    fn input_rejects_missing_description() {
        let result: Result<TodoInput, _> = serde_json::from_str(r#"{"title":"x"}"#);
        assert!(result.is_err());
    }
}
