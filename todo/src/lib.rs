//! # Composable Todo
//!
//! Reducer-driven to-do list state with bilingual mock-data generation
//! and optional snapshot persistence.
//!
//! The crate seeds a list with synthetic Korean or English items, then
//! funnels every mutation through a pure reducer owned by a store:
//!
//! - [`TodoStore`]: the full variant with add/delete/toggle/edit,
//!   language selection, creation dates, and snapshot persistence
//!   through an injected key-value port
//! - [`MockTodoStore`]: the reduced variant with add/delete/toggle
//!   over generated data only
//!
//! All nondeterminism (time, ids, randomness) is injected via
//! [`TodoEnvironment`], so seeded test environments make every
//! generated list reproducible.
//!
//! # Quick Start
//!
//! ```
//! use composable_todo::{Language, TodoEnvironment, TodoOptions, TodoStore};
//! use composable_todo_core::environment::MemoryStore;
//! use std::sync::Arc;
//!
//! # fn main() -> Result<(), composable_todo::TodoError> {
//! let mut store = TodoStore::new(
//!     TodoOptions::new().with_data_num(5).with_lang(Language::En),
//!     TodoEnvironment::default(),
//!     Arc::new(MemoryStore::new()),
//! );
//!
//! // Five generated items, none completed yet
//! assert_eq!(store.items().len(), 5);
//!
//! // Add one of your own
//! store.add_todo("Review notes", "Everything from the workshop")?;
//!
//! // Toggle the first item
//! let first = store.items()[0].id.clone();
//! store.toggle_completion(first);
//! assert!(store.items()[0].completed);
//! # Ok(())
//! # }
//! ```

/// Mock content and list generation
pub mod generate;
/// Mock-data-only store variant
pub mod mock;
/// Reducer logic and environment
pub mod reducer;
/// The full store with validation and persistence
pub mod store;
/// Domain types
pub mod types;

mod words;

// Re-export commonly used types
pub use generate::{generate_content, generate_title, generate_todo_list, Language};
pub use mock::{MockTodoAction, MockTodoReducer, MockTodoStore};
pub use reducer::{TodoEnvironment, TodoReducer};
pub use store::{TodoError, TodoOptions, TodoStore, STORAGE_KEY};
pub use types::{TodoAction, TodoEdit, TodoId, TodoItem, TodoListState};
