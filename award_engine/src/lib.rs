//! # Award Engine
//!
//! The achievement engine for Questward. Given a just-completed activity and
//! a learner's accumulated history, it determines which badges the learner
//! newly qualifies for, prevents duplicate awarding, totals reward points,
//! and queues user-facing notifications.
//!
//! ## Core Components
//!
//! - **evaluators**: five pure category evaluators (Progress, Achievement,
//!   Streak, Mastery, Special)
//! - **aggregator**: the single entry point that unions evaluator results
//!   deterministically
//! - **points**: duplicate-proof point totalling
//! - **notifications**: the stable-id notification queue
//! - **store**: the persistence-gateway seam
//!
//! ## Design Philosophy
//!
//! - **Pure core**: evaluation is a function of `(action, history)` - same
//!   inputs, same badges, same order, every time
//! - **Two-phase**: the engine computes; the caller persists and renders.
//!   Repeating a call with unchanged history awards nothing twice
//! - **Best-effort**: a failed history read degrades to an empty result;
//!   badge evaluation never blocks a game from reporting its completion

pub mod aggregator;
pub mod evaluators;
pub mod notifications;
pub mod points;
pub mod store;

pub use aggregator::*;
pub use notifications::*;
pub use store::*;
