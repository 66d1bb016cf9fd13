//! Achievement evaluator - properties of the current action alone.

use badge_catalog::{BadgeCatalog, BadgeCategory, Criterion, GameAction, LearnerHistory};

use super::satisfied_in_category;
use super::NewBadges;

pub(super) fn evaluate(
    action: &GameAction,
    history: &LearnerHistory,
    catalog: &BadgeCatalog,
) -> NewBadges {
    // Hint and no-hint rules only apply when something was actually answered;
    // an empty action earns nothing here.
    let answered = action.questions_answered > 0;

    satisfied_in_category(BadgeCategory::Achievement, history, catalog, |badge| {
        match &badge.criterion {
            Criterion::ScoreAtLeast { threshold } => {
                answered && action.score_percentage >= *threshold
            }
            Criterion::PerfectScore => answered && action.is_perfect(),
            Criterion::NoHints => answered && action.hints_used == 0,
            Criterion::FlawlessRun => answered && action.is_perfect() && action.hints_used == 0,
            _ => false,
        }
    })
}
