//! At-most-one in-flight decision per mode
//!
//! Each mode (roulette, number pick, team split) owns a [`BusyFlag`]. Starting
//! a decision takes a [`BusyGuard`]; the flag clears when the guard drops,
//! including when the owning screen is torn down mid-animation.

use std::cell::Cell;

#[derive(Debug, Default)]
pub struct BusyFlag {
    busy: Cell<bool>,
}

impl BusyFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_busy(&self) -> bool {
        self.busy.get()
    }

    /// Marks the flag busy, or returns `None` if a decision is already running.
    pub fn try_begin(&self) -> Option<BusyGuard<'_>> {
        if self.busy.replace(true) {
            tracing::debug!("decision already in flight, ignoring request");
            return None;
        }
        Some(BusyGuard { flag: self })
    }
}

/// Clears its [`BusyFlag`] on drop.
#[derive(Debug)]
pub struct BusyGuard<'a> {
    flag: &'a BusyFlag,
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.flag.busy.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_busy_flag_single_flight() {
        let flag = BusyFlag::new();
        assert!(!flag.is_busy());

        let guard = flag.try_begin();
        assert!(guard.is_some());
        assert!(flag.is_busy());
        assert!(flag.try_begin().is_none());

        drop(guard);
        assert!(!flag.is_busy());
        assert!(flag.try_begin().is_some());
    }

    #[test]
    fn test_flags_are_per_mode() {
        let roulette = BusyFlag::new();
        let teams = BusyFlag::new();

        let _spinning = roulette.try_begin().unwrap();
        assert!(roulette.try_begin().is_none());

        // A running spin doesn't block the team splitter
        let splitting = teams.try_begin();
        assert!(splitting.is_some());
        assert!(teams.is_busy());
    }
}
