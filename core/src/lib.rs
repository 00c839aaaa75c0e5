//! # Composable Todo Core
//!
//! Core traits and types for the Composable Todo architecture.
//!
//! This crate provides the fundamental abstractions for building
//! reducer-driven state containers with injected dependencies.
//!
//! ## Core Concepts
//!
//! - **State**: Domain state for a feature
//! - **Action**: All possible inputs to a reducer
//! - **Reducer**: Pure function `(State, Action, Environment) → State`
//! - **Environment**: Injected dependencies via traits
//!
//! ## Architecture Principles
//!
//! - Functional Core, Imperative Shell
//! - Unidirectional Data Flow
//! - Immutable snapshots (a reducer never mutates its input)
//! - Dependency Injection via Environment
//!
//! ## Example
//!
//! ```ignore
//! use composable_todo_core::reducer::Reducer;
//!
//! // Define your state
//! #[derive(Clone, Debug)]
//! struct ListState {
//!     entries: Vec<String>,
//! }
//!
//! // Define your actions
//! #[derive(Clone, Debug)]
//! enum ListAction {
//!     Push { entry: String },
//!     Clear,
//! }
//!
//! // Implement the reducer
//! impl Reducer for ListReducer {
//!     type State = ListState;
//!     type Action = ListAction;
//!     type Environment = ListEnvironment;
//!
//!     fn reduce(
//!         &self,
//!         state: &ListState,
//!         action: ListAction,
//!         env: &ListEnvironment,
//!     ) -> ListState {
//!         // Business logic goes here
//!         state.clone()
//!     }
//! }
//! ```

// Re-export commonly used types
pub use chrono::{DateTime, Utc};

/// Reducer module - The core trait for business logic
///
/// Reducers are pure functions: `(State, Action, Environment) → State`
///
/// They contain all business logic and are deterministic and testable.
/// A reducer never mutates the state it is given: it computes and
/// returns a fresh snapshot, which makes change detection trivial for
/// the owning store and keeps replay on the table.
pub mod reducer {
    /// The Reducer trait - core abstraction for business logic
    ///
    /// # Type Parameters
    ///
    /// - `State`: The domain state this reducer operates on
    /// - `Action`: The action type this reducer processes
    /// - `Environment`: The injected dependencies this reducer needs
    ///
    /// # Example
    ///
    /// ```ignore
    /// impl Reducer for TodoReducer {
    ///     type State = TodoListState;
    ///     type Action = TodoAction;
    ///     type Environment = TodoEnvironment;
    ///
    ///     fn reduce(
    ///         &self,
    ///         state: &TodoListState,
    ///         action: TodoAction,
    ///         env: &TodoEnvironment,
    ///     ) -> TodoListState {
    ///         match action {
    ///             TodoAction::Delete { id } => { /* remap without id */ }
    ///             _ => state.clone(),
    ///         }
    ///     }
    /// }
    /// ```
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected dependencies
        type Environment;

        /// Reduce an action into a new state snapshot
        ///
        /// This is a pure function that:
        /// 1. Inspects the current state and the action
        /// 2. Computes the next state without mutating the input
        /// 3. Returns the new snapshot to the owning store
        ///
        /// # Arguments
        ///
        /// - `state`: Shared reference to the current state
        /// - `action`: The action to process
        /// - `env`: Reference to injected dependencies
        ///
        /// # Returns
        ///
        /// The next state snapshot
        fn reduce(
            &self,
            state: &Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> Self::State;
    }
}

/// Environment module - Dependency injection traits
///
/// All external dependencies are abstracted behind traits and injected
/// via the Environment parameter: time, id generation, randomness, and
/// the key-value port used for snapshot persistence. Each trait has a
/// production implementation here; deterministic test doubles live in
/// the testing crate.
pub mod environment {
    use chrono::{DateTime, Utc};
    use std::collections::HashMap;
    use std::sync::{Mutex, PoisonError};
    use uuid::Uuid;

    /// Clock trait - abstracts time operations for testability
    ///
    /// # Examples
    ///
    /// ```
    /// use composable_todo_core::environment::{Clock, SystemClock};
    ///
    /// let clock = SystemClock;
    /// let earlier = clock.now();
    /// assert!(clock.now() >= earlier);
    /// ```
    pub trait Clock: Send + Sync {
        /// Get the current time
        fn now(&self) -> DateTime<Utc>;
    }

    /// Production clock backed by the system time
    #[derive(Debug, Clone, Copy, Default)]
    pub struct SystemClock;

    impl Clock for SystemClock {
        fn now(&self) -> DateTime<Utc> {
            Utc::now()
        }
    }

    /// `IdGenerator` trait - abstracts id generation for aggregates
    ///
    /// Production code wants opaque, collision-free ids; tests want
    /// predictable ones. Domain id newtypes wrap the returned [`Uuid`].
    pub trait IdGenerator: Send + Sync {
        /// Generate a fresh unique id
        fn generate(&self) -> Uuid;
    }

    /// Production id generator backed by random v4 UUIDs
    #[derive(Debug, Clone, Copy, Default)]
    pub struct UuidGenerator;

    impl IdGenerator for UuidGenerator {
        fn generate(&self) -> Uuid {
            Uuid::new_v4()
        }
    }

    /// `RandomSource` trait - abstracts uniform random index selection
    ///
    /// The one operation mock-data generation needs: an index into a
    /// slice. Keeping the trait this narrow makes it object-safe and
    /// trivially seedable for deterministic tests.
    pub trait RandomSource: Send + Sync {
        /// Pick a uniformly distributed index in `0..bound`
        ///
        /// Implementations must return `0` when `bound` is zero or one.
        fn pick_index(&self, bound: usize) -> usize;
    }

    /// Production randomness backed by the thread-local rand generator
    #[derive(Debug, Clone, Copy, Default)]
    pub struct EntropySource;

    impl RandomSource for EntropySource {
        fn pick_index(&self, bound: usize) -> usize {
            if bound < 2 {
                return 0;
            }
            rand::Rng::gen_range(&mut rand::thread_rng(), 0..bound)
        }
    }

    /// Pick a random element of a non-empty slice
    ///
    /// # Panics
    ///
    /// Panics if `items` is empty. Callers pass curated constant word
    /// tables, which are never empty.
    pub fn choose<'a, T>(random: &dyn RandomSource, items: &'a [T]) -> &'a T {
        &items[random.pick_index(items.len())]
    }

    /// `KeyValueStore` trait - the snapshot persistence port
    ///
    /// A synchronous string key-value sink with the same shape as
    /// browser-style local storage: `get` / `set` / `remove`, no error
    /// channel, no retries. Stores own exactly one fixed key in this
    /// system, holding a JSON-serialized item array.
    pub trait KeyValueStore: Send + Sync {
        /// Read the value stored under `key`, if any
        fn get(&self, key: &str) -> Option<String>;

        /// Store `value` under `key`, replacing any previous value
        fn set(&self, key: &str, value: &str);

        /// Remove the value stored under `key`, if any
        fn remove(&self, key: &str);
    }

    /// In-memory key-value store
    ///
    /// The default process-local persistence sink. Interior mutability
    /// keeps the port's `&self` contract; a poisoned lock degrades to
    /// the inner map rather than panicking.
    #[derive(Debug, Default)]
    pub struct MemoryStore {
        entries: Mutex<HashMap<String, String>>,
    }

    impl MemoryStore {
        /// Create an empty store
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Number of keys currently stored
        ///
        /// # Example
        ///
        /// ```
        /// use composable_todo_core::environment::{KeyValueStore, MemoryStore};
        ///
        /// let store = MemoryStore::new();
        /// store.set("todo-list", "[]");
        /// assert_eq!(store.len(), 1);
        /// ```
        #[must_use]
        pub fn len(&self) -> usize {
            self.entries
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .len()
        }

        /// Whether the store holds no keys
        #[must_use]
        pub fn is_empty(&self) -> bool {
            self.len() == 0
        }
    }

    impl KeyValueStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.entries
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .get(key)
                .cloned()
        }

        fn set(&self, key: &str, value: &str) {
            self.entries
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .insert(key.to_owned(), value.to_owned());
        }

        fn remove(&self, key: &str) {
            self.entries
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .remove(key);
        }
    }
}
