//! # Composable Todo Runtime
//!
//! Runtime implementation for the Composable Todo architecture.
//!
//! This crate provides the Store runtime that owns canonical state and
//! funnels every mutation through a reducer.
//!
//! ## Core Components
//!
//! - **Store**: The runtime that manages state snapshots
//! - **Dispatch**: The action → reducer → new snapshot cycle
//!
//! Execution is single-threaded and synchronous: each `send` runs the
//! reducer to completion before returning, so actions are processed
//! strictly in call order and no locking is needed.
//!
//! ## Example
//!
//! ```ignore
//! use composable_todo_runtime::Store;
//!
//! let mut store = Store::new(initial_state, my_reducer, environment);
//!
//! // Send an action
//! store.send(Action::DoSomething);
//!
//! // Read state
//! let value = store.state(|s| s.some_field);
//! ```

use composable_todo_core::reducer::Reducer;

/// The Store runtime
///
/// Owns the canonical state for a feature and is the sole mutation
/// path: every action goes through [`Store::send`], which asks the
/// reducer for the next snapshot and installs it. Reads go through
/// [`Store::state`] or [`Store::current`].
///
/// # Type Parameters
///
/// - `S`: State type
/// - `A`: Action type
/// - `E`: Environment type
/// - `R`: Reducer implementation
///
/// # Example
///
/// ```ignore
/// let mut store = Store::new(
///     TodoListState::default(),
///     TodoReducer::new(),
///     environment,
/// );
///
/// store.send(TodoAction::Delete { id });
/// let remaining = store.state(|s| s.count());
/// ```
pub struct Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E>,
{
    state: S,
    reducer: R,
    environment: E,
}

impl<S, A, E, R> Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E>,
    A: std::fmt::Debug,
{
    /// Create a new store with initial state, reducer, and environment
    ///
    /// # Arguments
    ///
    /// - `initial_state`: The starting state for the store
    /// - `reducer`: The reducer implementation (business logic)
    /// - `environment`: Injected dependencies
    ///
    /// # Returns
    ///
    /// A new Store instance ready to process actions
    #[must_use]
    pub const fn new(initial_state: S, reducer: R, environment: E) -> Self {
        Self {
            state: initial_state,
            reducer,
            environment,
        }
    }

    /// Send an action through the reducer
    ///
    /// Computes the next snapshot from the current one and installs it.
    /// Runs to completion before returning; actions sent from the same
    /// owner are therefore strictly ordered.
    pub fn send(&mut self, action: A) {
        tracing::debug!(?action, "dispatching action");
        self.state = self.reducer.reduce(&self.state, action, &self.environment);
    }

    /// Read a projection of the current state
    ///
    /// # Example
    ///
    /// ```ignore
    /// let count = store.state(|s| s.count());
    /// ```
    pub fn state<T>(&self, read: impl FnOnce(&S) -> T) -> T {
        read(&self.state)
    }

    /// Borrow the current state snapshot directly
    #[must_use]
    pub const fn current(&self) -> &S {
        &self.state
    }

    /// Borrow the environment the reducer runs against
    #[must_use]
    pub const fn environment(&self) -> &E {
        &self.environment
    }
}
