//! Benchmark execution: single-run timing and the sampling protocol

pub mod languages;
pub mod runner;
pub mod sampler;

pub use runner::{CommandRunnable, Runnable, Runner, TimedRun};
pub use sampler::{SampleOutcome, Sampler};
