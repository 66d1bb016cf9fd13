//! The aggregator - the engine's single entry point after each activity.
//!
//! The pipeline:
//! 1. Load the learner's history (the only external read)
//! 2. Run all five evaluators in the fixed category order
//! 3. Union the id sets, first occurrence wins
//! 4. Drop anything already owned (defensive second check)
//! 5. Resolve ids to full catalog records
//! 6. Total points over history plus the new badges
//! 7. Build the summary message
//!
//! The aggregator performs no writes. Persisting the new badges and the
//! activity record is the caller's second phase, which is what makes a
//! repeated call with unchanged history return nothing new.

use serde::{Deserialize, Serialize};

use badge_catalog::{Badge, BadgeCatalog, GameAction, LearnerHistory};

use crate::evaluators;
use crate::points;
use crate::store::HistoryStore;

/// What the caller gets back after each completed activity.
///
/// Plain data across the UI boundary; rendering and persistence both happen
/// outside the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AwardOutcome {
    pub earned_badges: Vec<Badge>,
    pub total_points: u32,
    pub message: String,
}

impl AwardOutcome {
    /// The degraded result returned when history cannot be read.
    pub fn unavailable() -> Self {
        Self {
            earned_badges: Vec::new(),
            total_points: 0,
            message: "unavailable".to_string(),
        }
    }

    fn summary_message(earned: usize) -> String {
        match earned {
            0 => "no new badges".to_string(),
            1 => "+1 new badge".to_string(),
            n => format!("+{} new badges", n),
        }
    }
}

/// The badge evaluation engine. Holds only the immutable catalog; all state
/// comes in through the arguments of each call.
#[derive(Debug, Clone)]
pub struct AwardEngine {
    catalog: BadgeCatalog,
}

impl AwardEngine {
    /// Create an engine over a catalog.
    pub fn new(catalog: BadgeCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &BadgeCatalog {
        &self.catalog
    }

    /// Process one completed activity end to end.
    ///
    /// If the history read fails, the engine logs and returns the
    /// `unavailable` outcome instead of propagating - badge evaluation is
    /// best-effort and must never block the game-completion flow.
    pub fn process(&self, store: &dyn HistoryStore, action: &GameAction) -> AwardOutcome {
        let history = match store.load_history(action.student_id) {
            Ok(history) => history,
            Err(err) => {
                log::warn!(
                    "history read failed for student {}: {}",
                    action.student_id,
                    err
                );
                return AwardOutcome::unavailable();
            }
        };

        self.check_all_badges(action, &history)
    }

    /// The pure core: evaluate every category against a history snapshot.
    pub fn check_all_badges(&self, action: &GameAction, history: &LearnerHistory) -> AwardOutcome {
        let ids = evaluators::evaluate_all(action, history, &self.catalog);

        let earned_badges: Vec<Badge> = ids
            .into_iter()
            // Evaluators already exclude owned badges; this is the defensive
            // second check the awarding invariant rests on.
            .filter(|id| !history.owns(id))
            .filter_map(|id| {
                let badge = self.catalog.get(&id);
                debug_assert!(badge.is_some(), "evaluator returned unknown badge id `{id}`");
                if badge.is_none() {
                    log::debug!("dropping unknown badge id `{}` from evaluation result", id);
                }
                badge.cloned()
            })
            .collect();

        let total_points = points::total_points(&self.catalog, history, &earned_badges);
        let message = AwardOutcome::summary_message(earned_badges.len());

        AwardOutcome {
            earned_badges,
            total_points,
            message,
        }
    }
}
