//! # Badge Catalog
//!
//! The "curriculum bible" crate - contains the curated badge definitions, the
//! normalized activity record, and learner history types. This crate is the
//! single source of truth for what a badge is worth and what it requires; it
//! contains no evaluation logic.

pub mod activity;
pub mod badges;
pub mod history;

pub use activity::*;
pub use badges::*;
pub use history::*;
