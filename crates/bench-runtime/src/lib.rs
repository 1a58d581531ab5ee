// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # bench-runtime
//!
//! The measurement core: warm-up, single-bracket timed loop, and report.
//!
//! The benchmarking protocol is deliberately minimal:
//! - [`WarmupRunner`] primes the compute engine with W discarded forward
//!   passes so the timed phase sees steady-state cost only.
//! - [`TimedBenchmark`] reads the monotonic clock exactly twice — once
//!   before and once after K sequential forward passes. For sub-millisecond
//!   calls, per-iteration clock reads would rival the measured quantity;
//!   bracketing amortizes that overhead to a negligible fraction. The price
//!   is that only a mean is obtainable, which is the stated scope.
//! - [`BenchReport`] runs one extra prediction pass (outside both totals)
//!   and emits the two fixed output lines.
//!
//! # Type-State Pipeline
//! The run is a linear state machine enforced at compile time:
//! ```text
//! BenchPipeline<Loaded> → preprocess → <Preprocessed> → warm_up
//!     → <WarmedUp> → measure → <Measured> → report → BenchReport
//! ```
//! Each transition consumes the pipeline; any failure halts the run with a
//! stage-naming [`BenchError`]. There is no retry and no partial result — a
//! partial latency measurement is meaningless, not degraded.

mod config;
mod error;
#[cfg(test)]
pub(crate) mod testing;
mod measure;
mod metrics;
mod pipeline;
mod report;
mod warmup;

pub use config::BenchConfig;
pub use error::BenchError;
pub use measure::TimedBenchmark;
pub use metrics::LatencyMeasurement;
pub use pipeline::{BenchPipeline, Loaded, Measured, PipelineState, Preprocessed, WarmedUp};
pub use report::BenchReport;
pub use warmup::WarmupRunner;
