//! Domain types for the to-do list.
//!
//! A to-do list is an ordered sequence of items; every mutation flows
//! through [`TodoAction`] and produces a new [`TodoListState`] snapshot.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a to-do item
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TodoId(Uuid);

impl TodoId {
    /// Creates a new random `TodoId`
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a `TodoId` from a UUID
    #[must_use]
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Returns the inner UUID
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for TodoId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single to-do item
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Unique identifier, assigned at creation and immutable after
    pub id: TodoId,
    /// Title of the to-do, non-empty
    pub title: String,
    /// Body text, non-empty
    pub content: String,
    /// Whether the to-do is completed
    #[serde(default)]
    pub completed: bool,
    /// Display date recorded at creation; absent in the mock variant
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl TodoItem {
    /// Creates a new, not yet completed to-do item
    #[must_use]
    pub const fn new(id: TodoId, title: String, content: String, date: Option<String>) -> Self {
        Self {
            id,
            title,
            content,
            completed: false,
            date,
        }
    }
}

/// State of the to-do list
///
/// An ordered sequence of items: appends go to the end, deletion keeps
/// the relative order of the rest, and nothing reorders. Serializes
/// transparently as a plain JSON array of items, which is exactly the
/// shape the persisted snapshot uses.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoListState {
    /// The items, in insertion order
    pub items: Vec<TodoItem>,
}

impl TodoListState {
    /// Creates a new empty list
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Returns the number of items
    #[must_use]
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Returns an item by id
    #[must_use]
    pub fn get(&self, id: &TodoId) -> Option<&TodoItem> {
        self.items.iter().find(|todo| &todo.id == id)
    }

    /// Checks if an item with the given id exists
    #[must_use]
    pub fn exists(&self, id: &TodoId) -> bool {
        self.get(id).is_some()
    }
}

/// Partial replacement values for an edit
///
/// Only fields that are present *and* non-empty take effect; anything
/// else falls back to the item's existing value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TodoEdit {
    /// Replacement title, if any
    pub title: Option<String>,
    /// Replacement content, if any
    pub content: Option<String>,
}

impl TodoEdit {
    /// Creates an edit that changes nothing
    #[must_use]
    pub const fn new() -> Self {
        Self {
            title: None,
            content: None,
        }
    }

    /// Sets the replacement title
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the replacement content
    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// The title override, if present and non-empty
    #[must_use]
    pub fn title_override(&self) -> Option<&str> {
        self.title.as_deref().filter(|title| !title.is_empty())
    }

    /// The content override, if present and non-empty
    #[must_use]
    pub fn content_override(&self) -> Option<&str> {
        self.content.as_deref().filter(|content| !content.is_empty())
    }

    /// Whether the edit carries no effective override at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title_override().is_none() && self.content_override().is_none()
    }
}

/// Actions over the to-do list
///
/// The closed set of state transitions; the reducer matches these
/// exhaustively. Ids that match no item make the action a no-op rather
/// than an error.
#[derive(Clone, Debug)]
pub enum TodoAction {
    /// Append a new item with a fresh id and stamped date
    Add {
        /// Title of the new item
        title: String,
        /// Body of the new item
        content: String,
    },

    /// Remove the item with the given id
    Delete {
        /// Item to remove
        id: TodoId,
    },

    /// Toggle the completion flag of the item with the given id
    Complete {
        /// Item to toggle
        id: TodoId,
    },

    /// Replace title and/or content of the item with the given id
    Edit {
        /// Item to edit
        id: TodoId,
        /// Replacement values; empty fields fall back to existing ones
        edit: TodoEdit,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_id_display() {
        let id = TodoId::new();
        let display = format!("{id}");
        assert!(!display.is_empty());
    }

    #[test]
    fn todo_item_new_is_uncompleted() {
        let id = TodoId::new();
        let item = TodoItem::new(id.clone(), "Test".to_string(), "Body".to_string(), None);

        assert_eq!(item.id, id);
        assert!(!item.completed);
        assert_eq!(item.date, None);
    }

    #[test]
    fn todo_list_state_lookup() {
        let id = TodoId::new();
        let mut state = TodoListState::new();
        assert_eq!(state.count(), 0);

        state.items.push(TodoItem::new(
            id.clone(),
            "A".to_string(),
            "B".to_string(),
            None,
        ));

        assert_eq!(state.count(), 1);
        assert!(state.exists(&id));
        assert!(!state.exists(&TodoId::new()));
    }

    #[test]
    fn todo_edit_empty_string_is_no_override() {
        let edit = TodoEdit::new().with_title("").with_content("next");
        assert_eq!(edit.title_override(), None);
        assert_eq!(edit.content_override(), Some("next"));
        assert!(!edit.is_empty());

        let vacuous = TodoEdit::new().with_title("").with_content("");
        assert!(vacuous.is_empty());
        assert!(TodoEdit::new().is_empty());
    }

    #[test]
    fn state_serializes_as_plain_item_array() {
        let state = TodoListState {
            items: vec![TodoItem::new(
                TodoId::from_uuid(uuid::Uuid::from_u128(1)),
                "A".to_string(),
                "B".to_string(),
                None,
            )],
        };

        #[allow(clippy::unwrap_used)] // test serialization cannot fail
        let json = serde_json::to_string(&state).unwrap();
        assert!(json.starts_with('['));
        assert!(json.ends_with(']'));
        // The mock variant has no date, so the key is absent entirely
        assert!(!json.contains("\"date\""));
    }

    #[test]
    fn state_round_trips_preserving_order() {
        let items: Vec<TodoItem> = (0..4)
            .map(|n| {
                TodoItem::new(
                    TodoId::from_uuid(uuid::Uuid::from_u128(n)),
                    format!("title {n}"),
                    format!("content {n}"),
                    Some("12/22/2024".to_string()),
                )
            })
            .collect();
        let state = TodoListState {
            items: items.clone(),
        };

        #[allow(clippy::unwrap_used)] // test serialization cannot fail
        let json = serde_json::to_string(&state).unwrap();
        #[allow(clippy::unwrap_used)] // round-trip of just-serialized data
        let restored: TodoListState = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.items, items);
    }

    #[test]
    fn missing_completed_defaults_to_false() {
        let json = r#"[{"id":"00000000-0000-0000-0000-000000000001","title":"A","content":"B"}]"#;
        #[allow(clippy::unwrap_used)] // fixed test payload
        let restored: TodoListState = serde_json::from_str(json).unwrap();
        assert!(!restored.items[0].completed);
        assert_eq!(restored.items[0].date, None);
    }
}
