//! Shared test utilities for domain testing
//!
//! This crate provides reusable test infrastructure for the workspace crates:
//! - `TestDatabase`: PostgreSQL container with migrations applied (feature: "postgres")
//! - `TestNats`: NATS container with JetStream enabled (feature: "nats")
//! - `TestDataBuilder`: Deterministic test data generation (always available)
//! - `assertions`: Custom assertion helpers (always available)
//!
//! # Features
//!
//! - `postgres` (default): Enables PostgreSQL test infrastructure
//! - `nats`: Enables NATS JetStream test infrastructure
//! - `all`: Enables everything
//!
//! # Usage
//!
//! ## PostgreSQL Testing
//!
//! ```rust,no_run
//! use test_utils::{TestDatabase, TestDataBuilder};
//!
//! #[tokio::test]
//! async fn my_postgres_test() {
//!     let db = TestDatabase::new().await;
//!     let builder = TestDataBuilder::from_test_name("my_test");
//!
//!     let (event_id, user_id) = builder.pair(0);
//! }
//! ```
//!
//! ## NATS Testing
//!
//! Add `features = ["nats"]` to your dev-dependencies:
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { workspace = true, features = ["nats"] }
//! ```
//!
//! ```rust,ignore
//! use test_utils::TestNats;
//!
//! #[tokio::test]
//! async fn my_nats_test() {
//!     let nats = TestNats::new().await;
//!     let jetstream = nats.jetstream();
//! }
//! ```

#[cfg(feature = "postgres")]
mod postgres;

#[cfg(feature = "nats")]
mod nats;

#[cfg(feature = "postgres")]
pub use postgres::TestDatabase;

#[cfg(feature = "nats")]
pub use nats::TestNats;

/// Largest generated event id.
pub const MAX_EVENT_ID: i64 = 30_000;

/// Largest generated user id.
pub const MAX_USER_ID: i64 = 1_000;

/// Builder for test data with deterministic randomization
///
/// This ensures tests are reproducible by deriving every value from a seed.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    /// Create a new builder with a seed (for deterministic tests)
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Create from test name (generates seed from test name hash)
    ///
    /// # Example
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("test_insert_record");
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Event id in `1..=MAX_EVENT_ID`, distinct for each `index` below `MAX_EVENT_ID`.
    pub fn event_id(&self, index: u64) -> i64 {
        let offset = self.seed.wrapping_add(index) % MAX_EVENT_ID as u64;
        offset as i64 + 1
    }

    /// User id in `1..=MAX_USER_ID` derived from the seed.
    pub fn user_id(&self) -> i64 {
        (self.seed % MAX_USER_ID as u64) as i64 + 1
    }

    /// `(event_id, user_id)` pair; pairs for different `index` values never collide.
    pub fn pair(&self, index: u64) -> (i64, i64) {
        (self.event_id(index), self.user_id())
    }
}

/// Test assertion helpers
pub mod assertions {
    /// Assert that `values` is strictly descending
    pub fn assert_strictly_descending<T: PartialOrd + std::fmt::Debug>(values: &[T], context: &str) {
        for window in values.windows(2) {
            assert!(
                window[0] > window[1],
                "{}: expected strictly descending, got {:?} before {:?}",
                context,
                window[0],
                window[1]
            );
        }
    }

    /// Assert that an optional value is Some
    pub fn assert_some<T>(value: Option<T>, context: &str) -> T {
        value.unwrap_or_else(|| panic!("{}: expected Some, got None", context))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_builder_deterministic() {
        let builder1 = TestDataBuilder::new(42);
        let builder2 = TestDataBuilder::new(42);

        assert_eq!(builder1.pair(3), builder2.pair(3));
    }

    #[test]
    fn test_data_builder_from_name() {
        let builder1 = TestDataBuilder::from_test_name("my_test");
        let builder2 = TestDataBuilder::from_test_name("my_test");

        assert_eq!(builder1.user_id(), builder2.user_id());
    }

    #[test]
    fn test_data_builder_stays_in_range() {
        let builder = TestDataBuilder::new(u64::MAX);

        for i in 0..100 {
            let (event_id, user_id) = builder.pair(i);
            assert!((1..=MAX_EVENT_ID).contains(&event_id));
            assert!((1..=MAX_USER_ID).contains(&user_id));
        }
    }

    #[test]
    fn test_data_builder_pairs_are_distinct() {
        let builder = TestDataBuilder::from_test_name("distinct");
        let pairs: std::collections::HashSet<_> = (0..50).map(|i| builder.pair(i)).collect();
        assert_eq!(pairs.len(), 50);
    }

    #[test]
    fn test_strictly_descending_accepts_sorted() {
        assertions::assert_strictly_descending(&[5, 3, 1], "sorted");
    }

    #[test]
    #[should_panic(expected = "strictly descending")]
    fn test_strictly_descending_rejects_ties() {
        assertions::assert_strictly_descending(&[5, 5], "ties");
    }
}
