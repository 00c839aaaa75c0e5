//! Property tests for generation and reducer invariants.

#![allow(clippy::unwrap_used)] // Test code can unwrap

use composable_todo::{
    generate_content, generate_todo_list, Language, TodoAction, TodoEnvironment, TodoListState,
    TodoReducer,
};
use composable_todo_core::reducer::Reducer;
use composable_todo_testing::{test_clock, SeededRandom, SequentialIds};
use proptest::prelude::*;
use std::collections::HashSet;
use std::sync::Arc;

fn env_with_seed(seed: u64) -> TodoEnvironment {
    TodoEnvironment::new(
        Arc::new(test_clock()),
        Arc::new(SequentialIds::new()),
        Arc::new(SeededRandom::new(seed)),
    )
}

proptest! {
    #[test]
    fn kr_content_always_reaches_target(seed in any::<u64>(), target in 0usize..300) {
        let content = generate_content(&env_with_seed(seed), Language::Kr, target);
        prop_assert!(content.chars().count() >= target);
        prop_assert!(content.ends_with("하다."));
    }

    #[test]
    fn en_content_word_count_is_exact(seed in any::<u64>(), target in 0usize..100) {
        let content = generate_content(&env_with_seed(seed), Language::En, target);
        prop_assert_eq!(content.split(' ').count(), target.max(1));
    }

    #[test]
    fn generated_ids_are_unique(seed in any::<u64>(), count in 0usize..20) {
        let state = generate_todo_list(&env_with_seed(seed), count, 25, Language::Kr);
        let ids: HashSet<_> = state.items.iter().map(|todo| todo.id.clone()).collect();
        prop_assert_eq!(ids.len(), count);
    }

    #[test]
    fn toggle_twice_is_identity(seed in any::<u64>(), count in 1usize..10, pick in 0usize..10) {
        let env = env_with_seed(seed);
        let state = generate_todo_list(&env, count, 25, Language::Kr);
        let id = state.items[pick % count].id.clone();

        let reducer = TodoReducer::new();
        let once = reducer.reduce(&state, TodoAction::Complete { id: id.clone() }, &env);
        let twice = reducer.reduce(&once, TodoAction::Complete { id }, &env);

        prop_assert_eq!(twice, state);
    }

    #[test]
    fn snapshot_round_trip_preserves_content_and_order(seed in any::<u64>(), count in 0usize..8) {
        let state = generate_todo_list(&env_with_seed(seed), count, 25, Language::En);

        let json = serde_json::to_string(&state).unwrap();
        let restored: TodoListState = serde_json::from_str(&json).unwrap();

        prop_assert_eq!(restored, state);
    }
}
