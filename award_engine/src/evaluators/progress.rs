//! Progress evaluator - cumulative counts over the whole history.

use badge_catalog::{BadgeCatalog, BadgeCategory, Criterion, GameAction, LearnerHistory};

use super::satisfied_in_category;
use super::NewBadges;

pub(super) fn evaluate(
    action: &GameAction,
    history: &LearnerHistory,
    catalog: &BadgeCatalog,
) -> NewBadges {
    let timeline = history.timeline(action);
    let total_correct: u64 = timeline.iter().map(|a| a.correct_answers as u64).sum();
    let total_activities = timeline.len() as u64;

    satisfied_in_category(BadgeCategory::Progress, history, catalog, |badge| {
        match &badge.criterion {
            Criterion::TotalCorrectAnswers { at_least } => total_correct >= *at_least as u64,
            Criterion::TotalActivities { at_least } => total_activities >= *at_least as u64,
            _ => false,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use badge_catalog::{StudentId, SubjectArea};

    fn action_with_correct(student: StudentId, correct: i64) -> GameAction {
        GameAction::new(student, "counting-quiz", SubjectArea::Math)
            .with_results(correct, correct)
            .with_score(100)
    }

    #[test]
    fn test_totals_aggregate_over_entire_history() {
        let catalog = BadgeCatalog::builtin().unwrap();
        let student = StudentId::new();
        let mut history = LearnerHistory::new(student);

        // 6 past correct answers; the in-flight action brings the total to 10.
        history.record_activity(action_with_correct(student, 6));
        let action = action_with_correct(student, 4);

        let ids = evaluate(&action, &history, &catalog);
        assert!(ids.iter().any(|id| id.as_str() == "ten-correct"));
    }

    #[test]
    fn test_current_action_alone_is_not_enough() {
        let catalog = BadgeCatalog::builtin().unwrap();
        let student = StudentId::new();
        let history = LearnerHistory::new(student);
        let action = action_with_correct(student, 9);

        let ids = evaluate(&action, &history, &catalog);
        assert!(!ids.iter().any(|id| id.as_str() == "ten-correct"));
    }

    #[test]
    fn test_activity_count_badge() {
        let catalog = BadgeCatalog::builtin().unwrap();
        let student = StudentId::new();
        let mut history = LearnerHistory::new(student);

        for _ in 0..4 {
            history.record_activity(action_with_correct(student, 1));
        }
        let fifth = action_with_correct(student, 1);

        let ids = evaluate(&fifth, &history, &catalog);
        assert!(ids.iter().any(|id| id.as_str() == "five-activities"));
    }

    #[test]
    fn test_recorded_action_not_counted_twice() {
        let catalog = BadgeCatalog::builtin().unwrap();
        let student = StudentId::new();
        let mut history = LearnerHistory::new(student);

        let recorded = action_with_correct(student, 9);
        history.record_activity(recorded.clone());

        // Re-evaluating the already-recorded action: total stays 9, not 18.
        let ids = evaluate(&recorded, &history, &catalog);
        assert!(!ids.iter().any(|id| id.as_str() == "ten-correct"));
    }
}
