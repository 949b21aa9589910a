//! Golla Core
//!
//! Randomized decision helpers behind the picker modes:
//! - Random sources (thread, seeded, scripted)
//! - Shuffle and sampling without replacement
//! - Distinct integer draws from a range
//! - Round-robin team splitting
//! - Roulette spin planning
//!
//! Everything here is pure apart from the injected [`RandomSource`].

pub mod busy;
pub mod error;
pub mod names;
pub mod random;
pub mod rng;
pub mod roulette;
pub mod teams;

pub use busy::{BusyFlag, BusyGuard};
pub use error::RandomError;
pub use names::parse_names;
pub use random::{sample_integer_range, sample_without_replacement, shuffle, shuffle_in_place};
pub use rng::{RandomSource, SeededRandom, SequenceRandom, ThreadRandom};
pub use roulette::{plan_spin, SpinConfig, SpinPlan};
pub use teams::{format_teams, partition_into_teams};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
