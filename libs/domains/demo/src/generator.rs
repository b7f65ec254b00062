//! Synthetic record generation.

use chrono::{NaiveDateTime, SubsecRound, Utc};
use rand::Rng;

use crate::models::NewRecord;

pub const EVENT_ID_RANGE: std::ops::RangeInclusive<i64> = 1..=30_000;
pub const USER_ID_RANGE: std::ops::RangeInclusive<i64> = 1..=1_000;

/// Strategy producing the record for a create request.
pub trait RecordGenerator: Send + Sync {
    fn generate(&self) -> NewRecord;
}

/// Current wall-clock time at the precision PostgreSQL `TIMESTAMP` stores.
pub fn now() -> NaiveDateTime {
    Utc::now().naive_utc().trunc_subsecs(6)
}

/// Uniform ids within [`EVENT_ID_RANGE`] and [`USER_ID_RANGE`], stamped now.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomRecordGenerator;

impl RecordGenerator for RandomRecordGenerator {
    fn generate(&self) -> NewRecord {
        let mut rng = rand::rng();
        NewRecord {
            event_id: rng.random_range(EVENT_ID_RANGE),
            user_id: rng.random_range(USER_ID_RANGE),
            created_at: now(),
        }
    }
}

/// Always the same pair, stamped now.
#[derive(Debug, Clone, Copy)]
pub struct FixedRecordGenerator {
    pub event_id: i64,
    pub user_id: i64,
}

impl FixedRecordGenerator {
    pub fn new(event_id: i64, user_id: i64) -> Self {
        Self { event_id, user_id }
    }
}

impl RecordGenerator for FixedRecordGenerator {
    fn generate(&self) -> NewRecord {
        NewRecord {
            event_id: self.event_id,
            user_id: self.user_id,
            created_at: now(),
        }
    }
}
