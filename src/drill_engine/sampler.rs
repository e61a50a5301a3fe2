//! Bounded random sampling from a pool of entries.

use rand::Rng;

use crate::drill_engine::{
    error::{DrillError, Result},
    models::Entry,
};

/// Consecutive duplicate draws tolerated before a duplicate is accepted.
pub const MAX_SAMPLE_ATTEMPTS: usize = 100;

/// Draw `min(count, pool.len())` entries from `pool`.
///
/// Each pick is a uniform index into the pool; an index already used is
/// redrawn, up to [`MAX_SAMPLE_ATTEMPTS`] times, after which the duplicate is
/// kept. The output is in draw order.
///
/// The pool must be non-empty: substituting the full catalog for an empty
/// filtered view is the caller's job.
pub fn sample<R: Rng>(rng: &mut R, pool: &[Entry], count: usize) -> Result<Vec<Entry>> {
    if count == 0 {
        return Err(DrillError::InvalidCount(count));
    }
    if pool.is_empty() {
        return Err(DrillError::EmptyPool);
    }

    let n = count.min(pool.len());
    let mut used = vec![false; pool.len()];
    let mut picks = Vec::with_capacity(n);

    for _ in 0..n {
        let mut idx = rng.gen_range(0..pool.len());
        let mut attempts = 1;
        while used[idx] && attempts < MAX_SAMPLE_ATTEMPTS {
            idx = rng.gen_range(0..pool.len());
            attempts += 1;
        }
        if used[idx] {
            log::warn!(
                "sampler accepted duplicate entry {} after {} attempts",
                pool[idx].id, attempts
            );
        }
        used[idx] = true;
        picks.push(pool[idx].clone());
    }

    Ok(picks)
}

/// Pick a single entry uniformly at random.
pub fn pick_one<'a, R: Rng>(rng: &mut R, pool: &'a [Entry]) -> Result<&'a Entry> {
    if pool.is_empty() {
        return Err(DrillError::EmptyPool);
    }
    Ok(&pool[rng.gen_range(0..pool.len())])
}
