// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The single-bracket timed measurement loop.

use crate::{BenchError, LatencyMeasurement};
use model_artifact::ForwardModel;
use std::time::Instant;
use tensor_core::Tensor;

/// Times K sequential forward passes with one bracketing clock pair.
///
/// The monotonic clock is read exactly twice: once before the first pass
/// and once after the last. Per-iteration clock reads are deliberately
/// avoided — for sub-millisecond calls the read itself can rival the
/// measured quantity, and bracketing amortizes it across the whole loop.
/// The trade-off is accepted up front: only the mean is obtainable.
///
/// Execution is strictly sequential on the calling thread; no pass starts
/// before the previous one returns.
#[derive(Debug, Clone, Copy)]
pub struct TimedBenchmark {
    iterations: usize,
}

impl TimedBenchmark {
    /// Creates a benchmark over the given iteration count.
    pub fn new(iterations: usize) -> Self {
        Self { iterations }
    }

    /// Returns the configured iteration count.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Runs the timed loop and computes the mean per-call latency.
    ///
    /// Outputs are discarded; only time crosses the bracket.
    ///
    /// # Errors
    /// Returns [`BenchError::Config`] for a zero iteration count.
    /// Any failing pass aborts with [`BenchError::Measurement`] — a partial
    /// average is never reported.
    pub fn run(
        &self,
        model: &dyn ForwardModel,
        input: &Tensor,
    ) -> Result<LatencyMeasurement, BenchError> {
        if self.iterations == 0 {
            return Err(BenchError::Config(
                "timed_iterations must be >= 1".to_string(),
            ));
        }

        let t0 = Instant::now();
        for iteration in 0..self.iterations {
            model
                .forward(input)
                .map_err(|source| BenchError::Measurement { iteration, source })?;
        }
        let elapsed = t0.elapsed();

        let measurement = LatencyMeasurement::from_bracket(self.iterations, elapsed);
        tracing::info!("measured: {}", measurement.summary());
        Ok(measurement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{CountingModel, FailAfter};
    use tensor_core::Shape;

    #[test]
    fn test_measure_counts_and_positive_average() {
        let model = CountingModel::unit();
        let input = Tensor::zeros(Shape::nchw(1, 1, 28, 28));

        let m = TimedBenchmark::new(100).run(&model, &input).unwrap();
        assert_eq!(model.calls(), 100);
        assert_eq!(m.iterations, 100);
        assert!(m.average_millis.is_finite());
        assert!(m.average_millis > 0.0);
    }

    #[test]
    fn test_measure_zero_iterations_rejected() {
        let model = CountingModel::unit();
        let input = Tensor::zeros(Shape::nchw(1, 1, 28, 28));

        let err = TimedBenchmark::new(0).run(&model, &input).unwrap_err();
        assert!(matches!(err, BenchError::Config(_)));
        assert_eq!(model.calls(), 0);
    }

    #[test]
    fn test_measure_aborts_without_partial_result() {
        let model = FailAfter::new(5);
        let input = Tensor::zeros(Shape::nchw(1, 1, 28, 28));

        let err = TimedBenchmark::new(100).run(&model, &input).unwrap_err();
        assert!(matches!(err, BenchError::Measurement { iteration: 5, .. }));
    }

    #[test]
    fn test_measure_single_iteration() {
        let model = CountingModel::unit();
        let input = Tensor::zeros(Shape::nchw(1, 1, 28, 28));

        let m = TimedBenchmark::new(1).run(&model, &input).unwrap();
        assert_eq!(m.iterations, 1);
        assert!(m.average_millis > 0.0);
    }
}
