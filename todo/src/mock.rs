//! Mock-data-only store variant.
//!
//! The reduced sibling of [`crate::TodoStore`]: Korean generation only,
//! no dates, no persistence, no edit. Useful as the minimal reference
//! when exercising reducer behavior on its own.

use crate::generate::generate_mock_todo_list;
use crate::reducer::TodoEnvironment;
use crate::types::{TodoId, TodoItem, TodoListState};
use composable_todo_core::reducer::Reducer;
use composable_todo_runtime::Store;

/// Actions of the mock store variant
#[derive(Clone, Debug)]
pub enum MockTodoAction {
    /// Append a new undated item
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
}

/// Reducer for the mock store variant
#[derive(Clone, Debug, Default)]
pub struct MockTodoReducer;

impl MockTodoReducer {
    /// Creates a new `MockTodoReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for MockTodoReducer {
    type State = TodoListState;
    type Action = MockTodoAction;
    type Environment = TodoEnvironment;

    fn reduce(
        &self,
        state: &Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> Self::State {
        match action {
            MockTodoAction::Add { title, content } => {
                let mut items = state.items.clone();
                items.push(TodoItem::new(
                    TodoId::from_uuid(env.ids.generate()),
                    title,
                    content,
                    None,
                ));
                TodoListState { items }
            }

            MockTodoAction::Delete { id } => TodoListState {
                items: state
                    .items
                    .iter()
                    .filter(|todo| todo.id != id)
                    .cloned()
                    .collect(),
            },

            MockTodoAction::Complete { id } => TodoListState {
                items: state
                    .items
                    .iter()
                    .map(|todo| {
                        if todo.id == id {
                            TodoItem {
                                completed: !todo.completed,
                                ..todo.clone()
                            }
                        } else {
                            todo.clone()
                        }
                    })
                    .collect(),
            },
        }
    }
}

/// The mock-data-only store
///
/// # Example
///
/// ```
/// use composable_todo::{MockTodoStore, TodoEnvironment};
///
/// let mut store = MockTodoStore::new(3, 25, TodoEnvironment::default());
/// assert_eq!(store.items().len(), 3);
///
/// let first = store.items()[0].id.clone();
/// store.toggle_todo(first);
/// assert!(store.items()[0].completed);
/// ```
pub struct MockTodoStore {
    inner: Store<TodoListState, MockTodoAction, TodoEnvironment, MockTodoReducer>,
}

impl MockTodoStore {
    /// Creates a store seeded with `data_num` generated Korean items
    #[must_use]
    pub fn new(data_num: usize, content_length: usize, env: TodoEnvironment) -> Self {
        let initial = generate_mock_todo_list(&env, data_num, content_length);
        Self {
            inner: Store::new(initial, MockTodoReducer::new(), env),
        }
    }

    /// The current items, in insertion order
    #[must_use]
    pub fn items(&self) -> &[TodoItem] {
        &self.inner.current().items
    }

    /// Appends a new item; no validation in this variant
    pub fn add_todo(&mut self, title: impl Into<String>, content: impl Into<String>) {
        self.inner.send(MockTodoAction::Add {
            title: title.into(),
            content: content.into(),
        });
    }

    /// Removes the item with the given id; unmatched ids are ignored
    pub fn delete_todo(&mut self, id: TodoId) {
        self.inner.send(MockTodoAction::Delete { id });
    }

    /// Toggles completion of the item with the given id
    pub fn toggle_todo(&mut self, id: TodoId) {
        self.inner.send(MockTodoAction::Complete { id });
    }
}
