//! Badge definitions - rarity tiers, categories, and award criteria.

mod catalog;

pub use catalog::*;

use serde::{Deserialize, Serialize};

use crate::activity::SubjectArea;

/// Curated slug identifying a badge (e.g. `"perfect-score"`).
///
/// Ids are stable across catalog versions; `Ord` gives id sets a
/// deterministic order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BadgeId(pub String);

impl BadgeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BadgeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for BadgeId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Rarity tiers, from everyday to once-per-player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    pub fn display_name(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
        }
    }
}

/// The five rule categories, each owned by one evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeCategory {
    /// Cumulative counts over the whole history.
    Progress,
    /// Properties of the current action alone.
    Achievement,
    /// Consecutive qualifying actions.
    Streak,
    /// Per-subject cumulative performance.
    Mastery,
    /// One-off and edge-case rules.
    Special,
}

impl BadgeCategory {
    /// Fixed evaluation order. Correctness does not depend on it, but
    /// notification order does, so it never changes.
    pub const ALL: [BadgeCategory; 5] = [
        BadgeCategory::Progress,
        BadgeCategory::Achievement,
        BadgeCategory::Streak,
        BadgeCategory::Mastery,
        BadgeCategory::Special,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            BadgeCategory::Progress => "Progress",
            BadgeCategory::Achievement => "Achievement",
            BadgeCategory::Streak => "Streak",
            BadgeCategory::Mastery => "Mastery",
            BadgeCategory::Special => "Special",
        }
    }
}

/// The declarative rule attached to a badge.
///
/// Criteria carry parameters only, never code; each variant belongs to
/// exactly one category and is checked by that category's evaluator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Criterion {
    /// Lifetime correct answers across all activities.
    TotalCorrectAnswers { at_least: u32 },

    /// Lifetime completed activities.
    TotalActivities { at_least: u32 },

    /// Current action scored at or above a threshold.
    ScoreAtLeast { threshold: u8 },

    /// Current action scored 100.
    PerfectScore,

    /// Current action answered at least one question with zero hints.
    NoHints,

    /// Perfect score and zero hints in the same action.
    FlawlessRun,

    /// Trailing run of actions each scoring at least `min_score`.
    ConsecutiveScores { min_score: u8, length: u32 },

    /// Average score over at least `min_activities` actions in one subject.
    SubjectMastery {
        subject: SubjectArea,
        min_average: u8,
        min_activities: u32,
    },

    /// The learner's very first activity.
    FirstActivity,

    /// Completed within a UTC hour window; `end_hour` is exclusive and the
    /// window may wrap past midnight.
    TimeOfDay { start_hour: u8, end_hour: u8 },

    /// A specific game was completed.
    GameCompleted { game_id: String },
}

impl Criterion {
    /// The category whose evaluator checks this criterion.
    pub fn category(&self) -> BadgeCategory {
        match self {
            Criterion::TotalCorrectAnswers { .. } | Criterion::TotalActivities { .. } => {
                BadgeCategory::Progress
            }
            Criterion::ScoreAtLeast { .. }
            | Criterion::PerfectScore
            | Criterion::NoHints
            | Criterion::FlawlessRun => BadgeCategory::Achievement,
            Criterion::ConsecutiveScores { .. } => BadgeCategory::Streak,
            Criterion::SubjectMastery { .. } => BadgeCategory::Mastery,
            Criterion::FirstActivity
            | Criterion::TimeOfDay { .. }
            | Criterion::GameCompleted { .. } => BadgeCategory::Special,
        }
    }
}

/// One immutable catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Badge {
    pub id: BadgeId,
    pub name: String,
    pub description: String,
    /// Opaque display token; rendering is the UI's business.
    pub icon: String,
    pub rarity: Rarity,
    pub category: BadgeCategory,
    /// Human-readable requirement text shown on the badge card.
    pub requirement: String,
    pub points: u32,
    pub criterion: Criterion,
}
