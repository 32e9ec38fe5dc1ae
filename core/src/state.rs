//! The state a todo-list view renders from.

use crate::types::{TodoId, TodoItem};

/// Everything the view needs, published as one value on every change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoState {
    /// Items in the order the service listed them, then in creation order.
    pub items: Vec<TodoItem>,
    pub draft_title: String,
    pub draft_description: String,
    /// Item whose row is in edit mode, if any.
    pub edit_target: Option<TodoId>,
    pub edit_title: String,
    pub edit_description: String,
    pub status_message: Option<String>,
    pub error_message: Option<String>,
}

impl TodoState {
    pub fn item(&self, id: &TodoId) -> Option<&TodoItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    pub fn is_editing(&self, id: &TodoId) -> bool {
        self.edit_target.as_ref() == Some(id)
    }
}
