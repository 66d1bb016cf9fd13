//! Special evaluator - one-off and edge-case rules.
//!
//! Each rule is checked independently; there is no shared state between them.

use chrono::Timelike;

use badge_catalog::{BadgeCatalog, BadgeCategory, Criterion, GameAction, LearnerHistory};

use super::satisfied_in_category;
use super::NewBadges;

/// Whether an hour falls inside `[start, end)`, allowing windows that wrap
/// past midnight (e.g. 20..6).
fn in_hour_window(hour: u8, start: u8, end: u8) -> bool {
    if start <= end {
        hour >= start && hour < end
    } else {
        hour >= start || hour < end
    }
}

pub(super) fn evaluate(
    action: &GameAction,
    history: &LearnerHistory,
    catalog: &BadgeCatalog,
) -> NewBadges {
    let completed_hour = action.completed_at.hour() as u8;
    let is_first = history.activity_count_with(action) == 1;

    satisfied_in_category(BadgeCategory::Special, history, catalog, |badge| {
        match &badge.criterion {
            Criterion::FirstActivity => is_first,
            Criterion::TimeOfDay { start_hour, end_hour } => {
                in_hour_window(completed_hour, *start_hour, *end_hour)
            }
            Criterion::GameCompleted { game_id } => action.game_id == *game_id,
            _ => false,
        }
    })
}
