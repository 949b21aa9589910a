//! Roulette wheel spins
//!
//! The wheel is drawn with segment 0 starting at the top pointer and segments
//! running clockwise. Rotations are in degrees, clockwise positive.

use crate::error::RandomError;
use crate::rng::RandomSource;
use serde::{Deserialize, Serialize};

/// Minimum number of items a wheel needs before it can spin.
pub const MIN_WHEEL_ITEMS: usize = 2;

/// How far a spin travels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpinConfig {
    /// Full turns every spin makes before settling.
    pub min_turns: u32,
    /// Upper bound on additional random full turns.
    pub extra_turns: u32,
}

impl Default for SpinConfig {
    fn default() -> Self {
        Self {
            min_turns: 5,
            extra_turns: 3,
        }
    }
}

/// Outcome of a spin: who won and where the wheel stops.
#[derive(Debug, Clone, PartialEq)]
pub struct SpinPlan<T> {
    pub index: usize,
    pub winner: T,
    /// Absolute wheel rotation once the spin settles.
    pub rotation: f64,
}

/// Picks a winner and computes the rotation that lands its segment centre
/// under the pointer.
///
/// `current_rotation` is the wheel's rotation before the spin. The spin starts
/// counting turns from the next full turn at or after it, so the result is
/// always further clockwise by more than `max(min_turns, 1) - 1` full turns
/// and the animation never runs backwards.
pub fn plan_spin<T, R>(
    items: &[T],
    current_rotation: f64,
    rng: &mut R,
    config: &SpinConfig,
) -> Result<SpinPlan<T>, RandomError>
where
    T: Clone,
    R: RandomSource + ?Sized,
{
    if items.len() < MIN_WHEEL_ITEMS {
        return Err(RandomError::TooFewItems {
            required: MIN_WHEEL_ITEMS,
            actual: items.len(),
        });
    }

    let index = rng.next_index(items.len());
    let turns = config.min_turns.max(1) as usize + rng.next_index(config.extra_turns as usize + 1);

    let segment = segment_angle(items.len());
    let base = (current_rotation / 360.0).ceil() * 360.0;
    let rotation = base + 360.0 * turns as f64 - (index as f64 * segment + segment / 2.0);

    tracing::debug!(index, turns, rotation, "planned roulette spin");
    Ok(SpinPlan {
        index,
        winner: items[index].clone(),
        rotation,
    })
}

/// Angular width of one segment on a wheel of `len` items.
pub fn segment_angle(len: usize) -> f64 {
    360.0 / len.max(1) as f64
}

/// Which segment sits under the pointer at `rotation`.
pub fn segment_under_pointer(rotation: f64, len: usize) -> usize {
    let position = (-rotation).rem_euclid(360.0);
    let idx = (position / segment_angle(len)).floor() as usize;
    idx.min(len.saturating_sub(1))
}
