//! Streak evaluator - consecutive qualifying actions.

use badge_catalog::{BadgeCatalog, BadgeCategory, Criterion, GameAction, LearnerHistory};

use super::satisfied_in_category;
use super::NewBadges;

/// Length of the trailing run of actions scoring at least `min_score`.
///
/// The run ends (resets to zero) at the most recent action below the
/// threshold; earlier qualifying actions do not count.
pub fn current_streak(timeline: &[&GameAction], min_score: u8) -> u32 {
    timeline
        .iter()
        .rev()
        .take_while(|a| a.score_percentage >= min_score)
        .count() as u32
}

pub(super) fn evaluate(
    action: &GameAction,
    history: &LearnerHistory,
    catalog: &BadgeCatalog,
) -> NewBadges {
    let timeline = history.timeline(action);

    satisfied_in_category(BadgeCategory::Streak, history, catalog, |badge| {
        match &badge.criterion {
            Criterion::ConsecutiveScores { min_score, length } => {
                current_streak(&timeline, *min_score) >= *length
            }
            _ => false,
        }
    })
}
