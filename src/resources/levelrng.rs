//! Seedable random source for level streaming decisions.
//!
//! Wraps [`fastrand::Rng`] so every streaming draw goes through one
//! resource that tests can seed for reproducible runs. The no-repeat
//! selection used by both streamers lives here as a bounded helper: the
//! source design resampled in an unbounded `do/while`, which never
//! terminates when every index is forbidden. Here the rejection loop has a
//! retry cap and falls back to a deterministic scan, so it returns `None`
//! exactly when no candidate exists.

use bevy_ecs::prelude::Resource;

/// Rejection draws attempted before switching to the fallback scan.
const MAX_DRAWS: usize = 32;

#[derive(Resource, Debug, Clone)]
pub struct LevelRng {
    rng: fastrand::Rng,
}

impl Default for LevelRng {
    fn default() -> Self {
        Self::new()
    }
}

impl LevelRng {
    /// Create a source seeded from ambient entropy.
    pub fn new() -> Self {
        Self {
            rng: fastrand::Rng::new(),
        }
    }

    /// Create a deterministic source from an explicit seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }

    /// Uniform index in `[0, len)`.
    pub fn index(&mut self, len: usize) -> usize {
        self.rng.usize(0..len)
    }

    /// Uniform float in `[lo, hi)`.
    pub fn range_f32(&mut self, lo: f32, hi: f32) -> f32 {
        lo + (hi - lo) * self.rng.f32()
    }

    /// Uniform draw over `[0, len)` excluding the given indices.
    ///
    /// `None` entries in `forbidden` are ignored, so callers can pass
    /// not-yet-set previous indices directly. Returns `None` only when
    /// every index in range is forbidden (or `len == 0`).
    pub fn pick_excluding(&mut self, len: usize, forbidden: &[Option<usize>]) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let banned = |index: usize| forbidden.iter().any(|f| *f == Some(index));
        for _ in 0..MAX_DRAWS {
            let index = self.rng.usize(0..len);
            if !banned(index) {
                return Some(index);
            }
        }
        // Retry budget exhausted; scan from a random start instead.
        let start = self.rng.usize(0..len);
        (0..len).map(|k| (start + k) % len).find(|&i| !banned(i))
    }
}
