//! Performance monitoring utilities.
//!
//! Frame timing with rolling averages, plus RAII scope timers behind the
//! `profiling` cargo feature. The macros compile to nothing when the feature
//! is disabled, so instrumentation can stay on the hot paths permanently.
//!
//! Enable with:
//! ```sh
//! cargo build --features profiling
//! ```

use std::collections::VecDeque;
use std::time::{Duration, Instant};
use tracing::warn;

/// Target frame time for 60 FPS
pub const TARGET_FRAME_MS: f64 = 16.67;

/// Number of samples to keep for rolling averages
const SAMPLE_COUNT: usize = 60;

/// Warn when a frame exceeds this multiple of the target
const WARN_THRESHOLD: f64 = 2.0;

/// Profile a scope with the given name. Zero-cost when profiling is disabled.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name);
        #[cfg(not(feature = "profiling"))]
        let _ = $name;
    };
}

pub use profile_scope;

/// RAII timer that logs its scope's elapsed time on drop.
#[cfg(feature = "profiling")]
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
}

#[cfg(feature = "profiling")]
impl ScopedTimer {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            start: Instant::now(),
        }
    }
}

#[cfg(feature = "profiling")]
impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed = self.start.elapsed();
        tracing::trace!(scope = self.name, elapsed_us = elapsed.as_micros() as u64, "scope timing");
    }
}

/// Rolling frame-time tracker.
pub struct PerfMonitor {
    frame_times: VecDeque<Duration>,
    last_frame: Instant,
    frame_count: u64,
}

impl PerfMonitor {
    pub fn new() -> Self {
        Self {
            frame_times: VecDeque::with_capacity(SAMPLE_COUNT),
            last_frame: Instant::now(),
            frame_count: 0,
        }
    }

    /// Record the end of a frame. Call once per render pass.
    pub fn frame(&mut self) {
        let now = Instant::now();
        let elapsed = now - self.last_frame;
        self.last_frame = now;
        self.frame_count += 1;

        if self.frame_times.len() == SAMPLE_COUNT {
            self.frame_times.pop_front();
        }
        self.frame_times.push_back(elapsed);

        let ms = elapsed.as_secs_f64() * 1000.0;
        if ms > TARGET_FRAME_MS * WARN_THRESHOLD && self.frame_count > 1 {
            warn!(frame_ms = ms, "slow frame");
        }
    }

    /// Rolling average frame time in milliseconds.
    pub fn average_frame_ms(&self) -> f64 {
        if self.frame_times.is_empty() {
            return 0.0;
        }
        let total: Duration = self.frame_times.iter().sum();
        total.as_secs_f64() * 1000.0 / self.frame_times.len() as f64
    }

    pub fn fps(&self) -> f64 {
        let avg = self.average_frame_ms();
        if avg > 0.0 { 1000.0 / avg } else { 0.0 }
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

impl Default for PerfMonitor {
    fn default() -> Self {
        Self::new()
    }
}
