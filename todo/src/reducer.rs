//! Reducer logic for the to-do list.
//!
//! The reducer is a pure snapshot function: it never mutates the list
//! it is given and rebuilds the sequence for every transition. Ids that
//! match nothing make the action a silent no-op.

use crate::generate::stamp_creation_date;
use crate::types::{TodoAction, TodoId, TodoItem, TodoListState};
use composable_todo_core::environment::{
    Clock, EntropySource, IdGenerator, RandomSource, SystemClock, UuidGenerator,
};
use composable_todo_core::reducer::Reducer;
use std::sync::Arc;

/// Environment dependencies for the to-do reducer and generators
#[derive(Clone)]
pub struct TodoEnvironment {
    /// Clock for stamping creation dates
    pub clock: Arc<dyn Clock>,
    /// Generator for fresh item ids
    pub ids: Arc<dyn IdGenerator>,
    /// Randomness behind mock-data generation
    pub random: Arc<dyn RandomSource>,
}

impl TodoEnvironment {
    /// Creates a new `TodoEnvironment`
    #[must_use]
    pub fn new(
        clock: Arc<dyn Clock>,
        ids: Arc<dyn IdGenerator>,
        random: Arc<dyn RandomSource>,
    ) -> Self {
        Self { clock, ids, random }
    }
}

impl Default for TodoEnvironment {
    /// Production wiring: system clock, random v4 ids, thread-local
    /// entropy
    fn default() -> Self {
        Self::new(
            Arc::new(SystemClock),
            Arc::new(UuidGenerator),
            Arc::new(EntropySource),
        )
    }
}

impl std::fmt::Debug for TodoEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TodoEnvironment").finish_non_exhaustive()
    }
}

/// Reducer for the to-do list
#[derive(Clone, Debug, Default)]
pub struct TodoReducer;

impl TodoReducer {
    /// Creates a new `TodoReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for TodoReducer {
    type State = TodoListState;
    type Action = TodoAction;
    type Environment = TodoEnvironment;

    fn reduce(
        &self,
        state: &Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> Self::State {
        match action {
            // Append-copy; the caller pre-validates presence of both
            // fields, the reducer itself does not
            TodoAction::Add { title, content } => {
                let mut items = state.items.clone();
                items.push(TodoItem::new(
                    TodoId::from_uuid(env.ids.generate()),
                    title,
                    content,
                    Some(stamp_creation_date(env.clock.as_ref())),
                ));
                TodoListState { items }
            }

            // At most one item matches; relative order of the rest is
            // preserved
            TodoAction::Delete { id } => TodoListState {
                items: state
                    .items
                    .iter()
                    .filter(|todo| todo.id != id)
                    .cloned()
                    .collect(),
            },

            // Toggle, not set: applying twice restores the flag
            TodoAction::Complete { id } => TodoListState {
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

            TodoAction::Edit { id, edit } => TodoListState {
                items: state
                    .items
                    .iter()
                    .map(|todo| {
                        if todo.id == id {
                            TodoItem {
                                title: edit
                                    .title_override()
                                    .map_or_else(|| todo.title.clone(), str::to_owned),
                                content: edit
                                    .content_override()
                                    .map_or_else(|| todo.content.clone(), str::to_owned),
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TodoEdit;
    use composable_todo_testing::{test_clock, ReducerTest, SeededRandom, SequentialIds};
    use uuid::Uuid;

    fn test_env() -> TodoEnvironment {
        TodoEnvironment::new(
            Arc::new(test_clock()),
            Arc::new(SequentialIds::new()),
            Arc::new(SeededRandom::new(11)),
        )
    }

    fn item(n: u128, title: &str, content: &str) -> TodoItem {
        TodoItem::new(
            TodoId::from_uuid(Uuid::from_u128(n)),
            title.to_string(),
            content.to_string(),
            None,
        )
    }

    fn state_of(items: Vec<TodoItem>) -> TodoListState {
        TodoListState { items }
    }

    #[test]
    fn add_appends_with_fresh_id_and_stamped_date() {
        ReducerTest::new(TodoReducer::new())
            .with_env(test_env())
            .given_state(state_of(vec![item(100, "Old", "Body")]))
            .when_action(TodoAction::Add {
                title: "New".to_string(),
                content: "Fresh body".to_string(),
            })
            .then_state(|state| {
                assert_eq!(state.count(), 2);
                let added = &state.items[1];
                assert_eq!(added.id, TodoId::from_uuid(SequentialIds::nth(1)));
                assert_eq!(added.title, "New");
                assert_eq!(added.content, "Fresh body");
                assert!(!added.completed);
                assert_eq!(added.date.as_deref(), Some("12/22/2024"));
            })
            .run();
    }

    #[test]
    fn delete_removes_exactly_the_match_and_keeps_order() {
        let target = TodoId::from_uuid(Uuid::from_u128(2));

        ReducerTest::new(TodoReducer::new())
            .with_env(test_env())
            .given_state(state_of(vec![
                item(1, "A", "a"),
                item(2, "B", "b"),
                item(3, "C", "c"),
            ]))
            .when_action(TodoAction::Delete { id: target })
            .then_state(|state| {
                assert_eq!(state.count(), 2);
                assert_eq!(state.items[0].title, "A");
                assert_eq!(state.items[1].title, "C");
            })
            .run();
    }

    #[test]
    fn delete_unknown_id_is_a_noop() {
        let before = state_of(vec![item(1, "A", "a")]);
        let after = TodoReducer::new().reduce(
            &before,
            TodoAction::Delete {
                id: TodoId::from_uuid(Uuid::from_u128(999)),
            },
            &test_env(),
        );
        assert_eq!(after, before);
    }

    #[test]
    fn complete_toggles_only_the_match() {
        let target = TodoId::from_uuid(Uuid::from_u128(1));

        ReducerTest::new(TodoReducer::new())
            .with_env(test_env())
            .given_state(state_of(vec![item(1, "A", "a"), item(2, "B", "b")]))
            .when_action(TodoAction::Complete { id: target.clone() })
            .then_state(move |state| {
                assert!(state.get(&target).is_some_and(|todo| todo.completed));
                assert!(!state.items[1].completed);
            })
            .run();
    }

    #[test]
    fn complete_twice_restores_the_flag() {
        let target = TodoId::from_uuid(Uuid::from_u128(1));
        let env = test_env();
        let reducer = TodoReducer::new();
        let initial = state_of(vec![item(1, "A", "a")]);

        let once = reducer.reduce(
            &initial,
            TodoAction::Complete { id: target.clone() },
            &env,
        );
        let twice = reducer.reduce(&once, TodoAction::Complete { id: target }, &env);

        assert_eq!(twice, initial);
    }

    #[test]
    fn complete_unknown_id_is_a_noop() {
        let before = state_of(vec![item(1, "A", "a")]);
        let after = TodoReducer::new().reduce(
            &before,
            TodoAction::Complete {
                id: TodoId::from_uuid(Uuid::from_u128(999)),
            },
            &test_env(),
        );
        assert_eq!(after, before);
    }

    #[test]
    fn edit_replaces_title_and_keeps_content() {
        let target = TodoId::from_uuid(Uuid::from_u128(1));

        ReducerTest::new(TodoReducer::new())
            .with_env(test_env())
            .given_state(state_of(vec![item(1, "Old", "Content")]))
            .when_action(TodoAction::Edit {
                id: target,
                edit: TodoEdit::new().with_title("New"),
            })
            .then_state(|state| {
                assert_eq!(state.items[0].title, "New");
                assert_eq!(state.items[0].content, "Content");
            })
            .run();
    }

    #[test]
    fn edit_empty_override_falls_back_to_existing() {
        let target = TodoId::from_uuid(Uuid::from_u128(1));

        ReducerTest::new(TodoReducer::new())
            .with_env(test_env())
            .given_state(state_of(vec![item(1, "Old", "Content")]))
            .when_action(TodoAction::Edit {
                id: target,
                edit: TodoEdit::new().with_title("").with_content("Rewritten"),
            })
            .then_state(|state| {
                assert_eq!(state.items[0].title, "Old");
                assert_eq!(state.items[0].content, "Rewritten");
            })
            .run();
    }

    #[test]
    fn edit_unknown_id_is_a_noop() {
        let before = state_of(vec![item(1, "A", "a")]);
        let after = TodoReducer::new().reduce(
            &before,
            TodoAction::Edit {
                id: TodoId::from_uuid(Uuid::from_u128(999)),
                edit: TodoEdit::new().with_title("New"),
            },
            &test_env(),
        );
        assert_eq!(after, before);
    }

    #[test]
    fn reduce_never_mutates_its_input() {
        let before = state_of(vec![item(1, "A", "a")]);
        let copy = before.clone();

        let _ = TodoReducer::new().reduce(
            &before,
            TodoAction::Add {
                title: "New".to_string(),
                content: "Body".to_string(),
            },
            &test_env(),
        );

        assert_eq!(before, copy);
    }
}
