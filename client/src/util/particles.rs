//! Floating background particle layout.
//!
//! Positions are drawn from a seeded RNG so the server-rendered markup and
//! the hydrated markup agree; motion itself is a CSS keyframe driven by the
//! per-particle custom properties produced here.

#[cfg(test)]
#[path = "particles_test.rs"]
mod particles_test;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

pub const DEFAULT_COUNT: usize = 30;
pub const DEFAULT_SEED: u64 = 0x4c55_584f_52;

const MIN_DURATION_S: f64 = 15.0;
const DURATION_SPREAD_S: f64 = 10.0;
const MAX_DELAY_S: f64 = 5.0;
const MAX_DRIFT_PX: f64 = 200.0;

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    /// Horizontal position, percent of viewport width.
    pub left_pct: f64,
    /// Vertical position, percent of viewport height.
    pub top_pct: f64,
    /// Vertical travel at the middle keyframe, negative is upward.
    pub drift_px: f64,
    pub duration_s: f64,
    pub delay_s: f64,
}

impl Particle {
    /// Inline style carrying the CSS custom properties for this particle.
    #[must_use]
    pub fn style(&self) -> String {
        format!(
            "left:{:.2}%;top:{:.2}%;--drift:{:.0}px;animation-duration:{:.2}s;animation-delay:{:.2}s",
            self.left_pct, self.top_pct, self.drift_px, self.duration_s, self.delay_s
        )
    }
}

/// Lay out `count` particles deterministically from `seed`.
#[must_use]
pub fn particle_field(count: usize, seed: u64) -> Vec<Particle> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..count)
        .map(|_| Particle {
            left_pct: rng.random_range(0.0..100.0),
            top_pct: rng.random_range(0.0..100.0),
            drift_px: -rng.random_range(0.0..MAX_DRIFT_PX),
            duration_s: MIN_DURATION_S + rng.random_range(0.0..DURATION_SPREAD_S),
            delay_s: rng.random_range(0.0..MAX_DELAY_S),
        })
        .collect()
}
