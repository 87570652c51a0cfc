//! Synthetic Reading Generation

use crate::{Reading, ReadingKind};
use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;
use tracing::debug;

/// Length of the trailing window timestamps are sampled from
pub const HISTORY_WINDOW_DAYS: i64 = 90;

/// Generator of synthetic biometric readings
///
/// Picks a category uniformly at random, draws the value from the
/// category's normal distribution clamped to its plausible range, and
/// spreads timestamps uniformly over the trailing 90-day window captured
/// at construction.
pub struct Synthesizer {
    /// Source of randomness
    rng: StdRng,
    /// End of the sampling window (generation time)
    now: DateTime<Utc>,
    /// Window length in seconds
    window_secs: i64,
}

impl Synthesizer {
    /// Create a synthesizer seeded from the operating system
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Create a deterministic synthesizer for tests (no OS entropy required)
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        let now = Utc::now();
        debug!(
            "Creating synthesizer over the {} days ending {}",
            HISTORY_WINDOW_DAYS, now
        );
        Self {
            rng,
            now,
            window_secs: Duration::days(HISTORY_WINDOW_DAYS).num_seconds(),
        }
    }

    /// Generate the next synthetic reading
    pub fn next_reading(&mut self) -> Reading {
        let kind = self.sample_kind();
        Reading {
            timestamp: self.sample_timestamp(),
            value: self.sample_value(kind),
            kind,
        }
    }

    /// Pick a category uniformly at random
    fn sample_kind(&mut self) -> ReadingKind {
        ReadingKind::ALL[self.rng.random_range(0..ReadingKind::ALL.len())]
    }

    /// Draw a clamped value from the category's normal distribution
    fn sample_value(&mut self, kind: ReadingKind) -> f64 {
        let z: f64 = self.rng.sample(StandardNormal);
        kind.clamp(kind.mean() + kind.std_dev() * z)
    }

    /// Draw a timestamp uniformly within the trailing window
    fn sample_timestamp(&mut self) -> DateTime<Utc> {
        let offset_secs = self.rng.random_range(0..self.window_secs);
        self.now - Duration::seconds(offset_secs)
    }
}

impl Default for Synthesizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Synthesizer {
    type Item = Reading;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_reading())
    }
}
