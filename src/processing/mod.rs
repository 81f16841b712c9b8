//! Subscription selection logic.
//!
//! - [`matcher`] - Matching requested IDs against visible subscriptions

mod matcher;

// Re-export public functions
pub use matcher::{find_matches, MatchResult};
