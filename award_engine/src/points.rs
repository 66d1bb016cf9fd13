//! Point totalling - a pure sum over the de-duplicated badge set.

use std::collections::BTreeSet;

use badge_catalog::{Badge, BadgeCatalog, LearnerHistory};

/// Total reward points for a learner: everything in history plus the badges
/// earned just now.
///
/// The sum always runs over the de-duplicated union of badge ids - never a
/// running counter - so replays and overlapping inputs cannot double count.
/// Ids the catalog no longer defines are skipped.
pub fn total_points(
    catalog: &BadgeCatalog,
    history: &LearnerHistory,
    newly_earned: &[Badge],
) -> u32 {
    let ids: BTreeSet<_> = history
        .earned
        .iter()
        .map(|e| &e.badge_id)
        .chain(newly_earned.iter().map(|b| &b.id))
        .collect();

    ids.into_iter()
        .filter_map(|id| {
            let badge = catalog.get(id);
            if badge.is_none() {
                log::debug!("skipping unknown badge id `{}` in point total", id);
            }
            badge
        })
        .map(|b| b.points)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use badge_catalog::{BadgeId, StudentId};
    use chrono::Utc;

    #[test]
    fn test_sums_history_and_new_badges() {
        let catalog = BadgeCatalog::builtin().unwrap();
        let mut history = LearnerHistory::new(StudentId::new());
        history.record_badge("first-steps".into(), Utc::now()); // 10

        let new = vec![catalog.get(&BadgeId::from("perfect-score")).unwrap().clone()]; // 30

        assert_eq!(total_points(&catalog, &history, &new), 40);
    }

    #[test]
    fn test_overlap_between_history_and_new_counts_once() {
        let catalog = BadgeCatalog::builtin().unwrap();
        let mut history = LearnerHistory::new(StudentId::new());
        history.record_badge("perfect-score".into(), Utc::now());

        let new = vec![catalog.get(&BadgeId::from("perfect-score")).unwrap().clone()];

        assert_eq!(total_points(&catalog, &history, &new), 30);
    }

    #[test]
    fn test_unknown_id_in_history_is_skipped() {
        let catalog = BadgeCatalog::builtin().unwrap();
        let mut history = LearnerHistory::new(StudentId::new());
        history.record_badge("first-steps".into(), Utc::now());
        history.record_badge("retired-badge".into(), Utc::now());

        assert_eq!(total_points(&catalog, &history, &[]), 10);
    }

    #[test]
    fn test_empty_inputs_total_zero() {
        let catalog = BadgeCatalog::builtin().unwrap();
        let history = LearnerHistory::new(StudentId::new());

        assert_eq!(total_points(&catalog, &history, &[]), 0);
    }
}
