//! Run metrics and logging setup.
//!
//! Every completed year is reported through `tracing` with its census, so a
//! run can be followed without any report files enabled.

use crate::world::YearSummary;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Totals accumulated over one run.
pub struct Metrics {
    years: AtomicU64,
    births: AtomicU64,
    deaths: AtomicU64,
    eaten: AtomicU64,
    animals: AtomicU64,
    start_time: Instant,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    #[must_use]
    pub fn new() -> Self {
        Self {
            years: AtomicU64::new(0),
            births: AtomicU64::new(0),
            deaths: AtomicU64::new(0),
            eaten: AtomicU64::new(0),
            animals: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    /// Records a completed year and logs its census at info level.
    pub fn record_year(&self, summary: &YearSummary, duration: Duration) {
        self.years.fetch_add(1, Ordering::Relaxed);
        self.births
            .fetch_add(summary.births as u64, Ordering::Relaxed);
        self.deaths
            .fetch_add(summary.deaths as u64, Ordering::Relaxed);
        self.eaten.fetch_add(summary.eaten as u64, Ordering::Relaxed);
        let animals = summary.census.prey + summary.census.predators;
        self.animals.store(animals as u64, Ordering::Relaxed);

        tracing::info!(
            year = summary.year,
            prey = summary.census.prey,
            predators = summary.census.predators,
            food = summary.census.food,
            duration_ms = duration.as_millis() as u64,
            "Simulated year"
        );
    }

    #[must_use]
    pub fn years(&self) -> u64 {
        self.years.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn births(&self) -> u64 {
        self.births.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn deaths(&self) -> u64 {
        self.deaths.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn eaten(&self) -> u64 {
        self.eaten.load(Ordering::Relaxed)
    }

    /// Animals alive after the last recorded year.
    #[must_use]
    pub fn animals(&self) -> u64 {
        self.animals.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

/// Installs the global subscriber. `RUST_LOG` wins over `default_level`.
///
/// Calling it twice is harmless; the second call is ignored.
pub fn init_logging(default_level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .finish(),
    )
    .ok();
}
