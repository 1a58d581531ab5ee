// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The benchmark pipeline with type-state–enforced ordering.
//!
//! ```text
//! BenchPipeline<Loaded>
//!     │  .preprocess()
//!     ▼
//! BenchPipeline<Preprocessed>
//!     │  .warm_up()
//!     ▼
//! BenchPipeline<WarmedUp>
//!     │  .measure()
//!     ▼
//! BenchPipeline<Measured>
//!     │  .report()
//!     ▼
//!   BenchReport
//! ```
//!
//! Each transition consumes the old value and returns a new one, so running
//! the timed phase before the warm-up — or reporting before measuring — is
//! a compile error, not a runtime surprise. The state machine is linear
//! with no cycles: a failure at any stage ends the run.

use crate::{
    BenchConfig, BenchError, BenchReport, LatencyMeasurement, TimedBenchmark, WarmupRunner,
};
use model_artifact::{ArtifactLoader, ForwardModel};
use preprocess::Preprocessor;
use tensor_core::Tensor;

// ── Type-state markers ─────────────────────────────────────────

/// Artifact is loaded; no input tensor exists yet.
#[derive(Debug)]
pub struct Loaded;

/// The input tensor is built and frozen.
#[derive(Debug)]
pub struct Preprocessed;

/// Warm-up passes are complete; the engine is at steady state.
#[derive(Debug)]
pub struct WarmedUp;

/// The timed phase has produced a measurement.
#[derive(Debug)]
pub struct Measured;

/// Sealed trait for pipeline states.
pub trait PipelineState: std::fmt::Debug {}
impl PipelineState for Loaded {}
impl PipelineState for Preprocessed {}
impl PipelineState for WarmedUp {}
impl PipelineState for Measured {}

// ── Pipeline ───────────────────────────────────────────────────

/// The benchmark run, parameterised by its current stage.
///
/// # Example
/// ```no_run
/// use bench_runtime::{BenchConfig, BenchPipeline};
///
/// # fn main() -> Result<(), bench_runtime::BenchError> {
/// let report = BenchPipeline::load(BenchConfig::default())?
///     .preprocess()?
///     .warm_up()?
///     .measure()?
///     .report()?;
/// report.print();
/// # Ok(())
/// # }
/// ```
pub struct BenchPipeline<S: PipelineState = Loaded> {
    config: BenchConfig,
    model: Box<dyn ForwardModel>,
    _state: std::marker::PhantomData<S>,
    // Populated as the pipeline advances:
    input: Option<Tensor>,
    measurement: Option<LatencyMeasurement>,
}

// ── Construction → Loaded ──────────────────────────────────────

impl BenchPipeline<Loaded> {
    /// Validates the configuration and loads the model artifact.
    ///
    /// Loading freezes the model into inference mode for the lifetime of
    /// the process; the returned pipeline owns it.
    pub fn load(config: BenchConfig) -> Result<Self, BenchError> {
        config.validate()?;
        let model = ArtifactLoader::load(&config.model_path, config.input_shape())?;
        tracing::info!(
            "pipeline loaded '{}' ({} classes, {} mode)",
            model.name(),
            model.output_classes(),
            model.mode().as_str(),
        );
        Ok(Self {
            config,
            model: Box::new(model),
            _state: std::marker::PhantomData,
            input: None,
            measurement: None,
        })
    }

    /// Builds a pipeline around an already-loaded model.
    ///
    /// This is the injection seam for tests and benches, where a
    /// deterministic in-memory model stands in for a real artifact.
    pub fn from_model(
        config: BenchConfig,
        model: Box<dyn ForwardModel>,
    ) -> Result<Self, BenchError> {
        config.validate()?;
        Ok(Self {
            config,
            model,
            _state: std::marker::PhantomData,
            input: None,
            measurement: None,
        })
    }

    /// Decodes, resizes, normalises, and reshapes the configured image.
    /// Transitions to `Preprocessed`.
    ///
    /// The resulting tensor is built once and reused, unmutated, by every
    /// subsequent forward pass.
    pub fn preprocess(self) -> Result<BenchPipeline<Preprocessed>, BenchError> {
        let pre = Preprocessor::new(self.config.target_size, self.config.target_size);
        let input = pre.prepare(&self.config.image_path)?;
        Ok(BenchPipeline {
            config: self.config,
            model: self.model,
            _state: std::marker::PhantomData,
            input: Some(input),
            measurement: None,
        })
    }
}

// ── Preprocessed → WarmedUp ────────────────────────────────────

impl BenchPipeline<Preprocessed> {
    /// Returns the frozen input tensor.
    pub fn input(&self) -> &Tensor {
        self.input.as_ref().expect("input exists in Preprocessed state")
    }

    /// Runs the discard-output priming loop. Transitions to `WarmedUp`.
    pub fn warm_up(self) -> Result<BenchPipeline<WarmedUp>, BenchError> {
        let runner = WarmupRunner::new(self.config.warmup_iterations);
        runner.run(self.model.as_ref(), self.input())?;
        Ok(BenchPipeline {
            config: self.config,
            model: self.model,
            _state: std::marker::PhantomData,
            input: self.input,
            measurement: None,
        })
    }
}

// ── WarmedUp → Measured ────────────────────────────────────────

impl BenchPipeline<WarmedUp> {
    /// Returns the frozen input tensor.
    pub fn input(&self) -> &Tensor {
        self.input.as_ref().expect("input exists in WarmedUp state")
    }

    /// Runs the single-bracket timed loop. Transitions to `Measured`.
    pub fn measure(self) -> Result<BenchPipeline<Measured>, BenchError> {
        let bench = TimedBenchmark::new(self.config.timed_iterations);
        let measurement = bench.run(self.model.as_ref(), self.input())?;
        Ok(BenchPipeline {
            config: self.config,
            model: self.model,
            _state: std::marker::PhantomData,
            input: self.input,
            measurement: Some(measurement),
        })
    }
}

// ── Measured → report ──────────────────────────────────────────

impl BenchPipeline<Measured> {
    /// Returns the timed-phase measurement.
    pub fn measurement(&self) -> &LatencyMeasurement {
        self.measurement
            .as_ref()
            .expect("measurement exists in Measured state")
    }

    /// Runs the separate prediction pass and assembles the final report.
    pub fn report(self) -> Result<BenchReport, BenchError> {
        let input = self.input.as_ref().expect("input exists in Measured state");
        let measurement = self
            .measurement
            .clone()
            .expect("measurement exists in Measured state");
        BenchReport::finalize(
            self.model.as_ref(),
            input,
            measurement,
            self.config.runtime_label.clone(),
        )
    }
}

// ── Shared accessors ───────────────────────────────────────────

impl<S: PipelineState> BenchPipeline<S> {
    /// Returns the run configuration.
    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    /// Returns the loaded model.
    pub fn model(&self) -> &dyn ForwardModel {
        self.model.as_ref()
    }
}

impl<S: PipelineState> std::fmt::Debug for BenchPipeline<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BenchPipeline")
            .field("state", &std::any::type_name::<S>())
            .field("model", &self.model.name())
            .field("has_input", &self.input.is_some())
            .field("has_measurement", &self.measurement.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{CountingModel, SharedCounting};
    use image::{GrayImage, Luma};
    use std::path::Path;
    use std::sync::Arc;

    fn write_png(path: &Path, value: u8) {
        GrayImage::from_pixel(28, 28, Luma([value]))
            .save(path)
            .unwrap();
    }

    fn config(image_path: &Path, warmup: usize, timed: usize) -> BenchConfig {
        BenchConfig {
            image_path: image_path.to_path_buf(),
            warmup_iterations: warmup,
            timed_iterations: timed,
            ..Default::default()
        }
    }

    #[test]
    fn test_full_pipeline_call_accounting() {
        let dir = tempfile::tempdir().unwrap();
        let image = dir.path().join("digit.png");
        write_png(&image, 0);

        let counter = Arc::new(CountingModel::unit());
        let model = Box::new(SharedCounting(Arc::clone(&counter)));
        let pipeline = BenchPipeline::from_model(config(&image, 2, 5), model).unwrap();
        let report = pipeline
            .preprocess()
            .unwrap()
            .warm_up()
            .unwrap()
            .measure()
            .unwrap()
            .report()
            .unwrap();

        // 2 warm-up + 5 timed + 1 prediction.
        assert_eq!(counter.calls(), 8);
        assert_eq!(report.predicted_class, 7);
        assert!(report.measurement.average_millis > 0.0);
        assert!(report.measurement.average_millis.is_finite());
        assert_eq!(report.measurement.iterations, 5);
    }

    #[test]
    fn test_black_image_scenario() {
        let dir = tempfile::tempdir().unwrap();
        let image = dir.path().join("black.png");
        write_png(&image, 0);

        let pipeline = BenchPipeline::from_model(
            config(&image, 2, 5),
            Box::new(CountingModel::unit()),
        )
        .unwrap();
        let preprocessed = pipeline.preprocess().unwrap();

        // Solid black → all-zero tensor of the contract shape.
        let input = preprocessed.input();
        assert_eq!(input.shape().dims(), &[1, 1, 28, 28]);
        assert!(input.as_slice().iter().all(|&v| v == 0.0));

        let report = preprocessed
            .warm_up()
            .unwrap()
            .measure()
            .unwrap()
            .report()
            .unwrap();
        assert!(report.measurement.average_millis > 0.0);
        assert_eq!(report.predicted_class, 7);
    }

    #[test]
    fn test_prediction_stable_across_iteration_counts() {
        let dir = tempfile::tempdir().unwrap();
        let image = dir.path().join("digit.png");
        write_png(&image, 200);

        let mut predictions = Vec::new();
        for timed in [1usize, 5, 50] {
            let pipeline = BenchPipeline::from_model(
                config(&image, 1, timed),
                Box::new(CountingModel::unit()),
            )
            .unwrap();
            let report = pipeline
                .preprocess()
                .unwrap()
                .warm_up()
                .unwrap()
                .measure()
                .unwrap()
                .report()
                .unwrap();
            predictions.push(report.predicted_class);
        }
        assert!(predictions.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn test_unreadable_image_fails_before_any_forward() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.png");

        let counter = Arc::new(CountingModel::unit());
        let pipeline = BenchPipeline::from_model(
            config(&missing, 10, 1000),
            Box::new(SharedCounting(Arc::clone(&counter))),
        )
        .unwrap();

        let err = pipeline.preprocess().unwrap_err();
        assert!(matches!(err, BenchError::Preprocess(_)));
        assert_eq!(counter.calls(), 0);
    }

    #[test]
    fn test_invalid_config_rejected_at_load() {
        let dir = tempfile::tempdir().unwrap();
        let image = dir.path().join("digit.png");
        write_png(&image, 0);

        let result = BenchPipeline::from_model(
            config(&image, 10, 0),
            Box::new(CountingModel::unit()),
        );
        assert!(matches!(result, Err(BenchError::Config(_))));
    }

    #[test]
    fn test_debug_format() {
        let dir = tempfile::tempdir().unwrap();
        let image = dir.path().join("digit.png");
        write_png(&image, 0);

        let pipeline = BenchPipeline::from_model(
            config(&image, 1, 1),
            Box::new(CountingModel::unit()),
        )
        .unwrap();
        let debug = format!("{pipeline:?}");
        assert!(debug.contains("BenchPipeline"));
        assert!(debug.contains("counting-stub"));
    }
}
