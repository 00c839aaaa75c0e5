//! # Composable Todo Testing
//!
//! Testing utilities and helpers for the Composable Todo architecture.
//!
//! This crate provides:
//! - Mock implementations of Environment traits
//! - A fluent Given-When-Then harness for reducers
//!
//! ## Example
//!
//! ```ignore
//! use composable_todo_testing::{test_clock, ReducerTest};
//!
//! ReducerTest::new(TodoReducer::new())
//!     .with_env(deterministic_environment())
//!     .given_state(TodoListState::default())
//!     .when_action(TodoAction::Delete { id })
//!     .then_state(|state| assert_eq!(state.count(), 0))
//!     .run();
//! ```

use chrono::{DateTime, Utc};
use composable_todo_core::environment::{Clock, IdGenerator, RandomSource};


/// Mock implementations of Environment traits
///
/// Deterministic stand-ins for every injected dependency:
/// - [`FixedClock`]: frozen time
/// - [`SequentialIds`]: predictable ids
/// - [`SeededRandom`]: reproducible randomness
///
/// The in-memory key-value store already ships with the core crate
/// (`MemoryStore`) and doubles as its own test fake.
pub mod mocks {
    use super::{Clock, DateTime, IdGenerator, RandomSource, Utc};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::{Mutex, PoisonError};
    use uuid::Uuid;

    /// Fixed clock for deterministic tests
    ///
    /// Always returns the same time, making tests reproducible.
    ///
    /// # Example
    ///
    /// ```
    /// use composable_todo_testing::mocks::FixedClock;
    /// use composable_todo_core::environment::Clock;
    /// use chrono::Utc;
    ///
    /// let clock = FixedClock::new(Utc::now());
    /// let time1 = clock.now();
    /// let time2 = clock.now();
    /// assert_eq!(time1, time2); // Always the same!
    /// ```
    #[derive(Debug, Clone)]
    pub struct FixedClock {
        time: DateTime<Utc>,
    }

    impl FixedClock {
        /// Create a new fixed clock with the given time
        #[must_use]
        pub const fn new(time: DateTime<Utc>) -> Self {
            Self { time }
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.time
        }
    }

    /// Create a default fixed clock for tests (2025-01-01 00:00:00 UTC)
    ///
    /// # Panics
    ///
    /// This function will panic if the hardcoded timestamp fails to parse,
    /// which should never happen in practice.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn test_clock() -> FixedClock {
        FixedClock::new(
            DateTime::parse_from_rfc3339("2025-01-01T00:00:00Z")
                .expect("hardcoded timestamp should always parse")
                .with_timezone(&Utc),
        )
    }

    /// Sequential id generator for predictable ids
    ///
    /// Produces `Uuid`s from an incrementing counter, so the first id
    /// is `…0001`, the second `…0002`, and so on. Use [`SequentialIds::nth`]
    /// to reconstruct an expected id in assertions.
    #[derive(Debug, Default)]
    pub struct SequentialIds {
        counter: AtomicU64,
    }

    impl SequentialIds {
        /// Create a generator starting at id 1
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// The id the generator hands out on its `n`-th call (1-based)
        #[must_use]
        #[allow(clippy::cast_lossless)] // u128::from is not const
        pub const fn nth(n: u64) -> Uuid {
            Uuid::from_u128(n as u128)
        }
    }

    impl IdGenerator for SequentialIds {
        fn generate(&self) -> Uuid {
            let next = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
            Self::nth(next)
        }
    }

    /// Seeded random source for reproducible generation
    ///
    /// Wraps a seeded `StdRng`; the same seed always yields the same
    /// pick sequence, which makes generated mock data assertable.
    ///
    /// # Example
    ///
    /// ```
    /// use composable_todo_testing::mocks::SeededRandom;
    /// use composable_todo_core::environment::RandomSource;
    ///
    /// let a = SeededRandom::new(42);
    /// let b = SeededRandom::new(42);
    /// assert_eq!(a.pick_index(10), b.pick_index(10));
    /// ```
    #[derive(Debug)]
    pub struct SeededRandom {
        rng: Mutex<StdRng>,
    }

    impl SeededRandom {
        /// Create a random source from a fixed seed
        #[must_use]
        pub fn new(seed: u64) -> Self {
            Self {
                rng: Mutex::new(StdRng::seed_from_u64(seed)),
            }
        }
    }

    impl RandomSource for SeededRandom {
        fn pick_index(&self, bound: usize) -> usize {
            if bound < 2 {
                return 0;
            }
            self.rng
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .gen_range(0..bound)
        }
    }
}

// Re-export commonly used items
pub use mocks::{test_clock, FixedClock, SeededRandom, SequentialIds};
pub use reducer_test::ReducerTest;

#[cfg(test)]
mod tests {
    use super::*;
    use composable_todo_core::environment::{Clock, IdGenerator, RandomSource};

    #[test]
    fn test_fixed_clock() {
        let clock = test_clock();
        let time1 = clock.now();
        let time2 = clock.now();
        assert_eq!(time1, time2);
    }

    #[test]
    fn sequential_ids_count_up() {
        let ids = SequentialIds::new();
        assert_eq!(ids.generate(), SequentialIds::nth(1));
        assert_eq!(ids.generate(), SequentialIds::nth(2));
        assert_eq!(ids.generate(), SequentialIds::nth(3));
    }

    #[test]
    fn seeded_random_is_deterministic() {
        let a = SeededRandom::new(7);
        let b = SeededRandom::new(7);
        for bound in [1usize, 2, 5, 100] {
            assert_eq!(a.pick_index(bound), b.pick_index(bound));
        }
    }

    #[test]
    fn seeded_random_respects_bound() {
        let random = SeededRandom::new(1234);
        for _ in 0..100 {
            assert!(random.pick_index(3) < 3);
        }
    }
}
