//! Benchmark harness.
//!
//! Plays a configurable number of rounds (one game each), times them
//! against a per-round budget and streams the results to a `ResultSink`.
//! The engine itself never reads clocks or touches I/O; all of that lives
//! here.

pub mod config;
pub mod runner;
pub mod sink;
pub mod stats;

pub use config::{BenchConfig, ReportFormat};
pub use runner::{round_seed, run_benchmark, BenchReport, RoundOutcome, RoundResult};
pub use sink::{open_sink, JsonSink, ResultSink, TextSink};
pub use stats::BenchSummary;

use thiserror::Error;

use crate::core::EngineError;

/// Errors raised while running a benchmark.
#[derive(Debug, Error)]
pub enum BenchError {
    #[error("failed to write results: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode results: {0}")]
    Json(#[from] serde_json::Error),

    #[error("game failed: {0}")]
    Engine(#[from] EngineError),
}
