//! Persistence seam - the gateway the engine reads history through.
//!
//! The engine only ever reads; writing earned badges and activity records is
//! the caller's second phase. Both write operations are idempotent (duplicate
//! appends are skipped by `LearnerHistory`), so retrying after a partial
//! failure is always safe.

use chrono::{DateTime, Utc};
use std::collections::HashMap;
use thiserror::Error;

use badge_catalog::{BadgeId, GameAction, LearnerHistory, StudentId};

/// Failure of the external history store.
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("history store unavailable: {0}")]
    Unavailable(String),
}

/// Read/write access to durable learner history.
pub trait HistoryStore {
    /// Snapshot of one learner's history.
    fn load_history(&self, student_id: StudentId) -> Result<LearnerHistory, HistoryError>;

    /// Durably record newly earned badges. Already-owned ids are skipped.
    fn append_badges(
        &mut self,
        student_id: StudentId,
        badge_ids: &[BadgeId],
        earned_at: DateTime<Utc>,
    ) -> Result<(), HistoryError>;

    /// Durably record a completed activity. A repeated `action_id` is skipped.
    fn record_activity(&mut self, action: &GameAction) -> Result<(), HistoryError>;
}

/// In-process store backing a single client session.
#[derive(Debug, Default)]
pub struct MemoryHistoryStore {
    histories: HashMap<StudentId, LearnerHistory>,
}

impl MemoryHistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn entry(&mut self, student_id: StudentId) -> &mut LearnerHistory {
        self.histories
            .entry(student_id)
            .or_insert_with(|| LearnerHistory::new(student_id))
    }
}

impl HistoryStore for MemoryHistoryStore {
    fn load_history(&self, student_id: StudentId) -> Result<LearnerHistory, HistoryError> {
        Ok(self
            .histories
            .get(&student_id)
            .cloned()
            .unwrap_or_else(|| LearnerHistory::new(student_id)))
    }

    fn append_badges(
        &mut self,
        student_id: StudentId,
        badge_ids: &[BadgeId],
        earned_at: DateTime<Utc>,
    ) -> Result<(), HistoryError> {
        let history = self.entry(student_id);
        for id in badge_ids {
            history.record_badge(id.clone(), earned_at);
        }
        Ok(())
    }

    fn record_activity(&mut self, action: &GameAction) -> Result<(), HistoryError> {
        self.entry(action.student_id).record_activity(action.clone());
        Ok(())
    }
}
