//! Small shared pieces used by the quiz, flashcard and drill generators.

use rand::Rng;

use crate::drill_engine::models::Entry;

/// In-place Fisher-Yates shuffle driven by `rng`.
pub fn shuffle<T, R: Rng>(rng: &mut R, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// The filtered view, or the whole catalog when nothing matched.
///
/// Returns the chosen pool and whether the fallback kicked in.
pub fn pool_or_catalog<'a>(filtered: &'a [Entry], catalog: &'a [Entry]) -> (&'a [Entry], bool) {
    if filtered.is_empty() {
        (catalog, true)
    } else {
        (filtered, false)
    }
}
