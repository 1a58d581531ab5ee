// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Final prediction pass and the fixed two-line report.

use crate::{BenchError, LatencyMeasurement};
use model_artifact::ForwardModel;
use std::fmt;
use tensor_core::Tensor;

/// The benchmark's complete, transient output.
///
/// Holds the measurement plus the predicted class obtained from one
/// additional forward pass. That pass is strictly separate from both the
/// warm-up and the timed totals — it is the (W+K+1)-th call, which keeps
/// `average_millis = elapsed / K` exact.
#[derive(Debug, Clone)]
pub struct BenchReport {
    /// Label prefixed to the latency line (e.g. "Rust").
    pub runtime_label: String,
    /// The timed-phase result.
    pub measurement: LatencyMeasurement,
    /// Argmax over the model's output vector for the benchmark input.
    pub predicted_class: usize,
}

impl BenchReport {
    /// Runs the prediction pass, computes the argmax, and assembles the
    /// report.
    ///
    /// # Errors
    /// Returns [`BenchError::Prediction`] if the forward pass fails or its
    /// output is not a usable score vector.
    pub fn finalize(
        model: &dyn ForwardModel,
        input: &Tensor,
        measurement: LatencyMeasurement,
        runtime_label: String,
    ) -> Result<Self, BenchError> {
        let output = model.forward(input).map_err(|e| BenchError::Prediction {
            reason: e.to_string(),
        })?;
        let predicted_class =
            tensor_core::argmax(&output.view()).map_err(|e| BenchError::Prediction {
                reason: e.to_string(),
            })?;

        tracing::debug!("prediction pass: class {predicted_class}");
        Ok(Self {
            runtime_label,
            measurement,
            predicted_class,
        })
    }

    /// Writes the two fixed output lines to stdout.
    pub fn print(&self) {
        println!("{self}");
    }
}

impl fmt::Display for BenchReport {
    /// The exact console contract: latency to three decimals, then the
    /// predicted class.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} CPU inference avg: {:.3} ms",
            self.runtime_label, self.measurement.average_millis,
        )?;
        write!(f, "Predicted digit: {}", self.predicted_class)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{CountingModel, FailAfter};
    use std::time::Duration;
    use tensor_core::Shape;

    fn measurement() -> LatencyMeasurement {
        LatencyMeasurement::from_bracket(4, Duration::from_millis(5))
    }

    #[test]
    fn test_finalize_runs_exactly_one_pass() {
        let model = CountingModel::unit();
        let input = Tensor::zeros(Shape::nchw(1, 1, 28, 28));

        let report =
            BenchReport::finalize(&model, &input, measurement(), "Rust".into()).unwrap();
        assert_eq!(model.calls(), 1);
        assert_eq!(report.predicted_class, 7);
    }

    #[test]
    fn test_display_two_lines_fixed_format() {
        let model = CountingModel::unit();
        let input = Tensor::zeros(Shape::nchw(1, 1, 28, 28));

        let report =
            BenchReport::finalize(&model, &input, measurement(), "Rust".into()).unwrap();
        let text = report.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "Rust CPU inference avg: 1.250 ms");
        assert_eq!(lines[1], "Predicted digit: 7");
    }

    #[test]
    fn test_finalize_propagates_forward_failure() {
        let model = FailAfter::new(0);
        let input = Tensor::zeros(Shape::nchw(1, 1, 28, 28));

        let err =
            BenchReport::finalize(&model, &input, measurement(), "Rust".into()).unwrap_err();
        assert!(matches!(err, BenchError::Prediction { .. }));
    }
}
