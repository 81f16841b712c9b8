//! Reconcile requested subscription IDs with the subscriptions we can see.

use crate::models::Subscription;
use std::collections::HashSet;

/// Outcome of [`find_matches`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MatchResult {
    /// Requested subscriptions that exist, in the order of `available`.
    pub matched: Vec<Subscription>,
    /// Requested IDs that do not exist, in request order.
    pub unmatched: Vec<String>,
}

/// Split the comma separated `requested` list and partition it against `available`.
///
/// Tokens are compared verbatim: `" sub1"` does not match `"sub1"`, and an
/// empty `requested` yields a single unmatched `""`. An ID requested twice
/// is matched twice.
pub fn find_matches(available: &[Subscription], requested: &str) -> MatchResult {
    let known: HashSet<&str> = available
        .iter()
        .map(|s| s.subscription_id.as_str())
        .collect();

    let mut found: Vec<&str> = Vec::new();
    let mut unmatched: Vec<String> = Vec::new();
    for token in requested.split(',') {
        if known.contains(token) {
            found.push(token);
        } else {
            unmatched.push(token.to_string());
        }
    }

    let matched = available
        .iter()
        .flat_map(|sub| {
            found
                .iter()
                .filter(move |id| **id == sub.subscription_id)
                .map(move |_| sub.clone())
        })
        .collect();

    MatchResult { matched, unmatched }
}
