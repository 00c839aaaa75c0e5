//! The full to-do store.
//!
//! Owns canonical list state, validates before dispatching, and keeps
//! the persisted snapshot in sync after every change.

use crate::generate::{generate_todo_list, Language};
use crate::reducer::{TodoEnvironment, TodoReducer};
use crate::types::{TodoAction, TodoEdit, TodoId, TodoItem, TodoListState};
use composable_todo_core::environment::KeyValueStore;
use composable_todo_runtime::Store;
use std::sync::Arc;
use thiserror::Error;

/// The fixed key the serialized snapshot lives under
pub const STORAGE_KEY: &str = "todo-list";

/// Errors surfaced by store operations
///
/// Everything else is total: unmatched ids are silently ignored rather
/// than reported, so the reducer stays a pure no-op under mismatched
/// input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TodoError {
    /// `add_todo` was called with an empty title or content
    #[error("title and content value is missing")]
    MissingFields,
}

/// Configuration for [`TodoStore`]
///
/// # Example
///
/// ```
/// use composable_todo::{Language, TodoOptions};
///
/// let options = TodoOptions::new()
///     .with_data_num(8)
///     .with_lang(Language::Kr)
///     .with_storage(true);
/// assert_eq!(options.content_length, 25);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TodoOptions {
    /// Number of items to generate for a fresh list
    pub data_num: usize,
    /// Minimum generated body length (characters for Korean, words for
    /// English)
    pub content_length: usize,
    /// Whether to persist a snapshot after every change
    pub use_storage: bool,
    /// Language of generated titles and content
    pub lang: Language,
}

impl TodoOptions {
    /// Creates the default configuration: five English items, body
    /// length 25, persistence off
    #[must_use]
    pub const fn new() -> Self {
        Self {
            data_num: 5,
            content_length: 25,
            use_storage: false,
            lang: Language::En,
        }
    }

    /// Sets the generated item count
    #[must_use]
    pub const fn with_data_num(mut self, data_num: usize) -> Self {
        self.data_num = data_num;
        self
    }

    /// Sets the minimum generated body length
    #[must_use]
    pub const fn with_content_length(mut self, content_length: usize) -> Self {
        self.content_length = content_length;
        self
    }

    /// Enables or disables snapshot persistence
    #[must_use]
    pub const fn with_storage(mut self, use_storage: bool) -> Self {
        self.use_storage = use_storage;
        self
    }

    /// Sets the generation language
    #[must_use]
    pub const fn with_lang(mut self, lang: Language) -> Self {
        self.lang = lang;
        self
    }
}

impl Default for TodoOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// The full to-do store
///
/// Wires initial state (restored from a persisted snapshot when
/// enabled, else freshly generated) through the reducer and exposes the
/// imperative operations a host UI renders against. After every state
/// change the snapshot is either persisted under [`STORAGE_KEY`] or,
/// with persistence disabled, removed so a previous run's snapshot
/// cannot linger.
///
/// # Example
///
/// ```
/// use composable_todo::{TodoEnvironment, TodoOptions, TodoStore};
/// use composable_todo_core::environment::MemoryStore;
/// use std::sync::Arc;
///
/// let mut store = TodoStore::new(
///     TodoOptions::new().with_data_num(2),
///     TodoEnvironment::default(),
///     Arc::new(MemoryStore::new()),
/// );
///
/// assert_eq!(store.items().len(), 2);
/// store.add_todo("Water the garden", "Back rows first")?;
/// assert_eq!(store.items().len(), 3);
/// # Ok::<(), composable_todo::TodoError>(())
/// ```
pub struct TodoStore {
    inner: Store<TodoListState, TodoAction, TodoEnvironment, TodoReducer>,
    storage: Arc<dyn KeyValueStore>,
    use_storage: bool,
}

impl TodoStore {
    /// Creates a store from configuration, environment, and a
    /// persistence sink
    ///
    /// With `use_storage` enabled and a readable snapshot present, the
    /// snapshot becomes the initial state; a corrupted snapshot is
    /// logged and replaced by fresh generation. The storage sync runs
    /// once right away, so constructing with persistence disabled also
    /// scrubs any snapshot a previous run left behind.
    #[must_use]
    pub fn new(
        options: TodoOptions,
        env: TodoEnvironment,
        storage: Arc<dyn KeyValueStore>,
    ) -> Self {
        let restored = if options.use_storage {
            restore_snapshot(storage.as_ref())
        } else {
            None
        };
        let initial = restored.unwrap_or_else(|| {
            generate_todo_list(&env, options.data_num, options.content_length, options.lang)
        });

        let store = Self {
            inner: Store::new(initial, TodoReducer::new(), env),
            storage,
            use_storage: options.use_storage,
        };
        store.sync_storage();
        store
    }

    /// The current items, in insertion order
    #[must_use]
    pub fn items(&self) -> &[TodoItem] {
        &self.inner.current().items
    }

    /// Appends a new item
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::MissingFields`] when either field is empty;
    /// the list is left untouched.
    pub fn add_todo(
        &mut self,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<(), TodoError> {
        let title = title.into();
        let content = content.into();
        if title.is_empty() || content.is_empty() {
            return Err(TodoError::MissingFields);
        }

        self.dispatch(TodoAction::Add { title, content });
        Ok(())
    }

    /// Removes the item with the given id; unmatched ids are ignored
    pub fn delete_todo(&mut self, id: TodoId) {
        self.dispatch(TodoAction::Delete { id });
    }

    /// Replaces title and/or content of the item with the given id
    ///
    /// An edit with no effective override (both fields absent or empty)
    /// dispatches nothing at all.
    pub fn edit_todo(&mut self, id: TodoId, edit: TodoEdit) {
        if edit.is_empty() {
            return;
        }
        self.dispatch(TodoAction::Edit { id, edit });
    }

    /// Toggles completion of the item with the given id
    pub fn toggle_completion(&mut self, id: TodoId) {
        self.dispatch(TodoAction::Complete { id });
    }

    fn dispatch(&mut self, action: TodoAction) {
        self.inner.send(action);
        self.sync_storage();
    }

    /// Persist the snapshot, or scrub it when persistence is off
    fn sync_storage(&self) {
        if self.use_storage {
            match serde_json::to_string(self.inner.current()) {
                Ok(snapshot) => {
                    self.storage.set(STORAGE_KEY, &snapshot);
                    tracing::debug!(items = self.items().len(), "persisted snapshot");
                }
                Err(error) => tracing::error!(%error, "failed to serialize snapshot"),
            }
        } else {
            self.storage.remove(STORAGE_KEY);
        }
    }
}

fn restore_snapshot(storage: &dyn KeyValueStore) -> Option<TodoListState> {
    let raw = storage.get(STORAGE_KEY)?;
    match serde_json::from_str(&raw) {
        Ok(state) => {
            tracing::debug!("restored snapshot");
            Some(state)
        }
        Err(error) => {
            tracing::warn!(%error, "discarding corrupted snapshot");
            None
        }
    }
}
