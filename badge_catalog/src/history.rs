//! Learner history - earned badges and completed activities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::activity::{GameAction, StudentId};
use crate::badges::BadgeId;

/// One `(badge, earned_at)` entry in a learner's record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EarnedBadge {
    pub badge_id: BadgeId,
    pub earned_at: DateTime<Utc>,
}

/// Everything the engine knows about one learner's past.
///
/// Both collections are append-only and chronological (oldest first). The
/// at-most-once badge invariant is enforced here: `record_badge` silently
/// skips an id that is already present, so no caller can create a duplicate
/// `(student, badge)` pair through this type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearnerHistory {
    pub student_id: StudentId,
    pub activities: Vec<GameAction>,
    pub earned: Vec<EarnedBadge>,
}

impl LearnerHistory {
    /// Create an empty history for a learner.
    pub fn new(student_id: StudentId) -> Self {
        Self {
            student_id,
            activities: Vec::new(),
            earned: Vec::new(),
        }
    }

    /// Whether the learner already owns a badge.
    pub fn owns(&self, badge_id: &BadgeId) -> bool {
        self.earned.iter().any(|e| &e.badge_id == badge_id)
    }

    /// The set of owned badge ids.
    pub fn owned_ids(&self) -> HashSet<&BadgeId> {
        self.earned.iter().map(|e| &e.badge_id).collect()
    }

    /// Append a badge award. Returns `false` without appending if the badge
    /// is already owned.
    pub fn record_badge(&mut self, badge_id: BadgeId, earned_at: DateTime<Utc>) -> bool {
        if self.owns(&badge_id) {
            return false;
        }
        self.earned.push(EarnedBadge { badge_id, earned_at });
        true
    }

    /// Append a completed activity. Returns `false` without appending if an
    /// activity with the same `action_id` was already recorded.
    pub fn record_activity(&mut self, action: GameAction) -> bool {
        if self.contains_action(&action) {
            return false;
        }
        self.activities.push(action);
        true
    }

    fn contains_action(&self, action: &GameAction) -> bool {
        self.activities.iter().any(|a| a.action_id == action.action_id)
    }

    /// The chronological activity sequence including the in-flight action
    /// exactly once.
    ///
    /// If `action` was already recorded (double submission, replay), the
    /// recorded copy stands in for it. Every cumulative evaluator reads this
    /// rather than `activities`, which is what keeps re-evaluation from
    /// counting the same action twice.
    pub fn timeline<'a>(&'a self, action: &'a GameAction) -> Vec<&'a GameAction> {
        let mut sequence: Vec<&GameAction> = self.activities.iter().collect();
        if !self.contains_action(action) {
            sequence.push(action);
        }
        sequence
    }

    /// Number of distinct activities, counting the in-flight action.
    pub fn activity_count_with(&self, action: &GameAction) -> usize {
        self.timeline(action).len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::SubjectArea;

    fn action(student: StudentId) -> GameAction {
        GameAction::new(student, "counting-quiz", SubjectArea::Math).with_score(90)
    }

    #[test]
    fn test_record_badge_at_most_once() {
        let mut history = LearnerHistory::new(StudentId::new());
        let id = BadgeId::from("perfect-score");

        assert!(history.record_badge(id.clone(), Utc::now()));
        assert!(!history.record_badge(id.clone(), Utc::now()));

        assert_eq!(history.earned.len(), 1);
        assert!(history.owns(&id));
    }

    #[test]
    fn test_record_activity_skips_duplicates() {
        let student = StudentId::new();
        let mut history = LearnerHistory::new(student);
        let a = action(student);

        assert!(history.record_activity(a.clone()));
        assert!(!history.record_activity(a));

        assert_eq!(history.activities.len(), 1);
    }

    #[test]
    fn test_timeline_appends_unrecorded_action() {
        let student = StudentId::new();
        let mut history = LearnerHistory::new(student);
        history.record_activity(action(student));

        let pending = action(student);
        let timeline = history.timeline(&pending);

        assert_eq!(timeline.len(), 2);
        assert_eq!(timeline[1].action_id, pending.action_id);
    }

    #[test]
    fn test_timeline_does_not_double_count_recorded_action() {
        let student = StudentId::new();
        let mut history = LearnerHistory::new(student);
        let recorded = action(student);
        history.record_activity(recorded.clone());

        let timeline = history.timeline(&recorded);

        assert_eq!(timeline.len(), 1);
    }

    #[test]
    fn test_owned_ids() {
        let mut history = LearnerHistory::new(StudentId::new());
        history.record_badge(BadgeId::from("first-steps"), Utc::now());
        history.record_badge(BadgeId::from("no-hints"), Utc::now());

        let owned = history.owned_ids();
        assert_eq!(owned.len(), 2);
        assert!(owned.contains(&BadgeId::from("first-steps")));
    }
}
