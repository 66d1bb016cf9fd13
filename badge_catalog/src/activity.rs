//! Activity records - the normalized snapshot of one completed activity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for learners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StudentId(pub Uuid);

impl StudentId {
    /// Create a new random student ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a student ID from a specific UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Create a nil/empty student ID (useful for defaults).
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }
}

impl Default for StudentId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for StudentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a single completed activity.
///
/// Cumulative evaluators use this to recognize an action that is already
/// recorded in history, so evaluating the same action twice never counts it
/// twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActionId(pub Uuid);

impl ActionId {
    /// Create a new random action ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn nil() -> Self {
        Self(Uuid::nil())
    }
}

impl Default for ActionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ActionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The three curricula of the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubjectArea {
    /// Word and letter games.
    Reading,
    /// Counting and arithmetic games.
    Math,
    /// Robot-programming and sequencing games.
    Logic,
}

impl SubjectArea {
    /// Human-readable name for display.
    pub fn display_name(&self) -> &'static str {
        match self {
            SubjectArea::Reading => "Reading",
            SubjectArea::Math => "Math",
            SubjectArea::Logic => "Logic",
        }
    }
}

/// A normalized snapshot of one completed learning activity.
///
/// Built once by a game's completion handler and never mutated afterwards.
/// Numeric inputs arrive through clamping builders, so a malformed report
/// (negative score, more correct answers than questions) produces a valid
/// record instead of an error - one bad report must never abort badge
/// evaluation for the rest of the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameAction {
    pub action_id: ActionId,
    pub student_id: StudentId,
    pub game_id: String,
    pub subject_area: SubjectArea,
    pub questions_answered: u32,
    pub correct_answers: u32,
    /// 0-100.
    pub score_percentage: u8,
    pub time_spent_seconds: u32,
    pub hints_used: u32,
    pub completed_at: DateTime<Utc>,
}

impl GameAction {
    /// Create a new action with zeroed results, stamped with the current time.
    pub fn new(student_id: StudentId, game_id: impl Into<String>, subject_area: SubjectArea) -> Self {
        Self {
            action_id: ActionId::new(),
            student_id,
            game_id: game_id.into(),
            subject_area,
            questions_answered: 0,
            correct_answers: 0,
            score_percentage: 0,
            time_spent_seconds: 0,
            hints_used: 0,
            completed_at: Utc::now(),
        }
    }

    /// Set question counts. Negatives clamp to zero; `correct` clamps to
    /// `questions`.
    pub fn with_results(mut self, questions: i64, correct: i64) -> Self {
        self.questions_answered = clamp_count(questions);
        self.correct_answers = clamp_count(correct).min(self.questions_answered);
        self
    }

    /// Set the score percentage, clamped to 0-100.
    pub fn with_score(mut self, percentage: i64) -> Self {
        self.score_percentage = percentage.clamp(0, 100) as u8;
        self
    }

    /// Set time spent, clamped to non-negative.
    pub fn with_time_spent(mut self, seconds: i64) -> Self {
        self.time_spent_seconds = clamp_count(seconds);
        self
    }

    /// Set hints used, clamped to non-negative.
    pub fn with_hints(mut self, hints: i64) -> Self {
        self.hints_used = clamp_count(hints);
        self
    }

    /// Set the completion timestamp.
    pub fn with_completed_at(mut self, at: DateTime<Utc>) -> Self {
        self.completed_at = at;
        self
    }

    /// Whether the action scored full marks.
    pub fn is_perfect(&self) -> bool {
        self.score_percentage == 100
    }
}

fn clamp_count(value: i64) -> u32 {
    value.clamp(0, u32::MAX as i64) as u32
}
