//! First-agreement scan over settled per-endpoint results.
//!
//! Stateless and synchronous: the resolver settles the full batch of
//! endpoint queries first, then hands the results here. Keeping the scan
//! separate from the orchestration makes the agreement rule directly
//! unit-testable without any I/O.

use std::{collections::HashSet, hash::Hash};

/// Returns the first value that occurs twice, scanning in slot order.
///
/// `results` must be in endpoint-configuration order; absent entries are
/// endpoints whose query failed. The scan stops at the first recurrence,
/// so the outcome depends only on slot order, never on response arrival
/// timing. Agreement is structural value equality (`Eq`), not serialized
/// representation.
///
/// Returns `None` when every present value is pairwise distinct, including
/// the degenerate cases of zero or one usable result.
#[must_use]
pub fn first_agreement<T>(results: &[Option<T>]) -> Option<T>
where
    T: Eq + Hash + Clone,
{
    let mut seen: HashSet<&T> = HashSet::with_capacity(results.len());

    for value in results.iter().flatten() {
        if !seen.insert(value) {
            return Some(value.clone());
        }
    }

    None
}
