//! Category evaluators - pure rule functions over `(action, history)`.
//!
//! Every evaluator follows the same contract:
//! 1. **Inputs**: the in-flight action, the learner's history, the catalog
//! 2. **Scope**: only badges of its own category are considered
//! 3. **Output**: catalog-ordered ids that are newly satisfied and not owned
//! 4. **Purity**: no I/O, no shared state - identical inputs give identical
//!    results, so re-running evaluation is always safe
//!
//! Cumulative evaluators read `LearnerHistory::timeline`, which includes the
//! in-flight action exactly once even if it was already persisted.

mod achievement;
mod mastery;
mod progress;
mod special;
mod streak;

use std::collections::HashSet;

use badge_catalog::{Badge, BadgeCatalog, BadgeCategory, BadgeId, GameAction, LearnerHistory};

pub use streak::current_streak;

/// Ids newly satisfied by an evaluation pass, in notification order.
pub type NewBadges = Vec<BadgeId>;

/// Run one category's evaluator.
pub fn evaluate_category(
    category: BadgeCategory,
    action: &GameAction,
    history: &LearnerHistory,
    catalog: &BadgeCatalog,
) -> NewBadges {
    match category {
        BadgeCategory::Progress => progress::evaluate(action, history, catalog),
        BadgeCategory::Achievement => achievement::evaluate(action, history, catalog),
        BadgeCategory::Streak => streak::evaluate(action, history, catalog),
        BadgeCategory::Mastery => mastery::evaluate(action, history, catalog),
        BadgeCategory::Special => special::evaluate(action, history, catalog),
    }
}

/// Run all five evaluators in the fixed order and union their results.
///
/// The union preserves first occurrence, so a badge that somehow satisfies
/// two evaluators appears once, at the position of the earlier category.
pub fn evaluate_all(
    action: &GameAction,
    history: &LearnerHistory,
    catalog: &BadgeCatalog,
) -> NewBadges {
    let mut seen = HashSet::new();
    let mut union = Vec::new();

    for category in BadgeCategory::ALL {
        for id in evaluate_category(category, action, history, catalog) {
            if seen.insert(id.clone()) {
                union.push(id);
            }
        }
    }

    union
}

/// Shared evaluator loop: walk one category's badges in catalog order, skip
/// owned ones, and keep those whose criterion the predicate accepts.
fn satisfied_in_category<F>(
    category: BadgeCategory,
    history: &LearnerHistory,
    catalog: &BadgeCatalog,
    mut satisfies: F,
) -> NewBadges
where
    F: FnMut(&Badge) -> bool,
{
    catalog
        .in_category(category)
        .filter(|badge| !history.owns(&badge.id))
        .filter(|badge| satisfies(badge))
        .map(|badge| badge.id.clone())
        .collect()
}
