use std::cmp::Reverse;

use crate::duration::Duration;

/// Anything that can be ranked by how long it has lasted.
pub trait Timed {
    /// Approximate length in days.
    fn duration_days(&self) -> u64;
}

impl Timed for Duration {
    fn duration_days(&self) -> u64 {
        self.total_days()
    }
}

/// Return a copy of `entries` sorted by duration, longest first.
///
/// The sort is stable: entries with equal day counts keep their relative
/// order, so zero-length entries stay at the bottom in entry order. The
/// input slice is left untouched.
pub fn reorder<T: Timed + Clone>(entries: &[T]) -> Vec<T> {
    let mut sorted = entries.to_vec();
    sorted.sort_by_key(|entry| Reverse(entry.duration_days()));
    sorted
}

/// True when `entries` is already in [`reorder`] order.
pub fn is_ordered<T: Timed>(entries: &[T]) -> bool {
    entries
        .windows(2)
        .all(|pair| pair[0].duration_days() >= pair[1].duration_days())
}
