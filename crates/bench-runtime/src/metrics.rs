// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The latency measurement produced by the timed phase.

use std::time::Duration;

/// The result of one single-bracket timed measurement.
///
/// Derived, not stored: the benchmark prints it and exits. The average is
/// the only statistic — per-iteration timestamps are never taken, so
/// variance and tails are out of reach by design.
#[derive(Debug, Clone, serde::Serialize)]
pub struct LatencyMeasurement {
    /// Number of timed forward passes (always > 0).
    pub iterations: usize,
    /// Wall-clock time between the two bracketing clock reads.
    pub elapsed: Duration,
    /// Mean per-call latency in milliseconds.
    pub average_millis: f64,
}

impl LatencyMeasurement {
    /// Computes the measurement from a bracket and an iteration count.
    pub fn from_bracket(iterations: usize, elapsed: Duration) -> Self {
        let average_millis = elapsed.as_secs_f64() * 1000.0 / iterations as f64;
        Self {
            iterations,
            elapsed,
            average_millis,
        }
    }

    /// Total elapsed nanoseconds between the two clock reads.
    pub fn elapsed_nanos(&self) -> u128 {
        self.elapsed.as_nanos()
    }

    /// Returns a human-readable summary suitable for logs.
    pub fn summary(&self) -> String {
        format!(
            "{} iterations in {:.2}ms, avg {:.3}ms/call",
            self.iterations,
            self.elapsed.as_secs_f64() * 1000.0,
            self.average_millis,
        )
    }
}
