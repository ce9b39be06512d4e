//! Artificial latency for the List path.
//!
//! Each List call draws a sample in `[0, sample_range)` from a
//! [`RandomSource`]. When the sample is divisible by `divisor` the call is
//! held for one fixed `delay` before the backend is contacted. With the
//! defaults (100, 3, 3 s) roughly a third of List calls are delayed.

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::lifecycle::ShutdownSignal;

/// Source of uniform samples for the injector.
pub trait RandomSource: Send + Sync + fmt::Debug {
    /// Returns a uniform integer in `[0, bound)`. `bound` is never zero.
    fn next_below(&self, bound: u32) -> u32;
}

/// Samples from the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_below(&self, bound: u32) -> u32 {
        rand::rng().random_range(0..bound)
    }
}

/// Samples from a seeded generator, for reproducible runs.
#[derive(Debug)]
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    /// Creates a generator from `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_below(&self, bound: u32) -> u32 {
        self.rng
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .random_range(0..bound)
    }
}

/// Tunables for [`LatencyInjector`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyPolicy {
    /// Master switch.
    pub enabled: bool,
    /// Length of one injected delay.
    pub delay: Duration,
    /// A call is delayed when its sample is divisible by this. Zero never
    /// delays.
    pub divisor: u32,
    /// Exclusive upper bound of the sample.
    pub sample_range: u32,
}

impl Default for LatencyPolicy {
    fn default() -> Self {
        Self {
            enabled: true,
            delay: Duration::from_secs(3),
            divisor: 3,
            sample_range: 100,
        }
    }
}

impl LatencyPolicy {
    /// A policy that never delays.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }
}

/// What happened to a call passing through the injector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelayOutcome {
    /// The sample did not select this call.
    Skipped,
    /// The full delay elapsed.
    Completed,
    /// Shutdown cut the delay short; the call proceeds anyway.
    Interrupted,
}

/// Probabilistic delay injector.
#[derive(Debug, Clone)]
pub struct LatencyInjector {
    policy: LatencyPolicy,
    random: Arc<dyn RandomSource>,
}

impl LatencyInjector {
    /// Creates an injector drawing samples from `random`.
    #[must_use]
    pub fn new(policy: LatencyPolicy, random: Arc<dyn RandomSource>) -> Self {
        Self { policy, random }
    }

    /// An injector that never delays.
    #[must_use]
    pub fn disabled() -> Self {
        Self::new(LatencyPolicy::disabled(), Arc::new(ThreadRandom))
    }

    /// Returns the active policy.
    #[must_use]
    pub const fn policy(&self) -> &LatencyPolicy {
        &self.policy
    }

    /// Draws one sample and decides whether this call is delayed.
    #[must_use]
    pub fn should_delay(&self) -> bool {
        if !self.policy.enabled {
            return false;
        }
        let sample = self.random.next_below(self.policy.sample_range.max(1));
        sample
            .checked_rem(self.policy.divisor)
            .is_some_and(|rem| rem == 0)
    }

    /// Possibly holds the caller for one delay interval.
    ///
    /// The wait races against `shutdown`; an interrupted wait is logged and
    /// reported as [`DelayOutcome::Interrupted`], never as an error.
    pub async fn inject(&self, shutdown: &ShutdownSignal) -> DelayOutcome {
        if !self.should_delay() {
            return DelayOutcome::Skipped;
        }

        let delay_ms = u64::try_from(self.policy.delay.as_millis()).unwrap_or(u64::MAX);
        tracing::debug!(delay_ms, "injecting artificial latency");

        tokio::select! {
            () = tokio::time::sleep(self.policy.delay) => DelayOutcome::Completed,
            () = shutdown.triggered() => {
                tracing::warn!(delay_ms, "artificial latency interrupted by shutdown, proceeding");
                DelayOutcome::Interrupted
            }
        }
    }
}
