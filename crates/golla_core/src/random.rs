//! Shuffling and sampling
//!
//! All helpers take the random source explicitly and never mutate their
//! input slice.

use crate::error::RandomError;
use crate::rng::RandomSource;
use std::collections::HashSet;

/// Durstenfeld shuffle in place.
///
/// Walks from the last index down to 1, swapping each slot with a uniformly
/// chosen slot in `[0, i]`. Every permutation is equally likely as long as the
/// source is uniform.
pub fn shuffle_in_place<T, R>(items: &mut [T], rng: &mut R)
where
    R: RandomSource + ?Sized,
{
    for i in (1..items.len()).rev() {
        let j = rng.next_index(i + 1);
        items.swap(i, j);
    }
}

/// Returns a shuffled copy of `items`.
pub fn shuffle<T, R>(items: &[T], rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: RandomSource + ?Sized,
{
    let mut out = items.to_vec();
    shuffle_in_place(&mut out, rng);
    out
}

/// Picks `count` elements without replacement.
///
/// Takes the prefix of a fresh shuffle, so no slot is returned twice.
/// Duplicate values in `items` are distinct slots and may both be picked.
/// Asking for more than `items.len()` returns every element in random order.
pub fn sample_without_replacement<T, R>(items: &[T], count: usize, rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: RandomSource + ?Sized,
{
    let mut out = shuffle(items, rng);
    out.truncate(count.min(items.len()));
    out
}

/// Redraw allowance per requested value in [`sample_integer_range`].
pub const MAX_REDRAWS_PER_VALUE: usize = 32;

/// Draws distinct integers uniformly from the closed interval `[min, max]`.
///
/// **Cap policy:** when `count` exceeds the size of the interval the result is
/// capped at the interval size rather than failing, so `(1, 3, 10)` yields all
/// three values in random order. Callers that need exactly `count` values must
/// check the length themselves.
///
/// Uses rejection sampling: draw a candidate, keep it if unseen, redraw
/// otherwise. Redraws are bounded so a degenerate source (one that repeats
/// itself, like a constant [`crate::rng::SequenceRandom`]) can't stall the
/// loop: once [`MAX_REDRAWS_PER_VALUE`] redraws per requested value are used
/// up, a colliding draw steps forward (wrapping at `max`) to the nearest unseen
/// value instead. A uniform source practically never reaches that point.
///
/// # Errors
///
/// [`RandomError::InvalidRange`] when `max < min`.
pub fn sample_integer_range<R>(
    min: i64,
    max: i64,
    count: usize,
    rng: &mut R,
) -> Result<Vec<i64>, RandomError>
where
    R: RandomSource + ?Sized,
{
    if max < min {
        return Err(RandomError::InvalidRange { min, max });
    }

    // i128 keeps `max - min + 1` exact across the full i64 domain
    let span = max as i128 - min as i128 + 1;
    let target = (count as i128).min(span) as usize;

    let redraw_budget = target.saturating_mul(MAX_REDRAWS_PER_VALUE).max(64);
    let mut redraws = 0usize;
    let mut seen = HashSet::with_capacity(target.min(1024));
    let mut picked = Vec::with_capacity(target.min(1024));
    while picked.len() < target {
        let mut offset = ((rng.next_f64() * span as f64).floor() as i128).min(span - 1);
        if seen.contains(&((min as i128 + offset) as i64)) {
            if redraws < redraw_budget {
                redraws += 1;
                continue;
            }
            // Terminates: fewer than `target <= span` values are taken
            while seen.contains(&((min as i128 + offset) as i64)) {
                offset = (offset + 1) % span;
            }
        }
        let candidate = (min as i128 + offset) as i64;
        seen.insert(candidate);
        picked.push(candidate);
    }

    if redraws >= redraw_budget {
        tracing::warn!(min, max, count, redraws, "random source kept repeating, probed for unseen values");
    }

    if target < count {
        tracing::debug!(min, max, count, capped = target, "integer sample capped at range size");
    }
    Ok(picked)
}
