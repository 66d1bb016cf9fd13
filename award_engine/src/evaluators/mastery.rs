//! Mastery evaluator - per-subject cumulative performance.

use badge_catalog::{BadgeCatalog, BadgeCategory, Criterion, GameAction, LearnerHistory, SubjectArea};

use super::satisfied_in_category;
use super::NewBadges;

/// `(activity count, average score)` for one subject across the timeline.
fn subject_totals(timeline: &[&GameAction], subject: SubjectArea) -> (u32, u32) {
    let mut count = 0u32;
    let mut score_sum = 0u64;

    for action in timeline.iter().filter(|a| a.subject_area == subject) {
        count += 1;
        score_sum += action.score_percentage as u64;
    }

    if count == 0 {
        (0, 0)
    } else {
        (count, (score_sum / count as u64) as u32)
    }
}

pub(super) fn evaluate(
    action: &GameAction,
    history: &LearnerHistory,
    catalog: &BadgeCatalog,
) -> NewBadges {
    let timeline = history.timeline(action);

    satisfied_in_category(BadgeCategory::Mastery, history, catalog, |badge| {
        match &badge.criterion {
            Criterion::SubjectMastery {
                subject,
                min_average,
                min_activities,
            } => {
                let (count, average) = subject_totals(&timeline, *subject);
                count >= *min_activities && average >= *min_average as u32
            }
            _ => false,
        }
    })
}
