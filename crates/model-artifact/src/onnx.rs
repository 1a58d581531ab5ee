// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The ONNX-backed implementation of [`ForwardModel`].
//!
//! Loading pins the input fact to the benchmark's configured shape, runs
//! tract's optimization pass (the irreversible inference-only transition)
//! and derives the class count from the optimized output fact. After load,
//! the plan is immutable; every forward pass executes synchronously on the
//! calling thread.

use crate::{ExecutionMode, ForwardError, ForwardModel, LoadError};
use std::path::Path;
use tract_onnx::prelude::*;

/// The optimized, runnable plan tract produces for a fixed input fact.
type RunnableOnnx =
    RunnableModel<TypedFact, Box<dyn TypedOp>, Graph<TypedFact, Box<dyn TypedOp>>>;

/// A compiled ONNX model frozen into inference-only execution.
///
/// Produced by [`ArtifactLoader::load`]; use it through the
/// [`ForwardModel`] trait.
pub struct OnnxModel {
    plan: RunnableOnnx,
    input_shape: tensor_core::Shape,
    output_classes: usize,
    mode: ExecutionMode,
    name: String,
}

impl std::fmt::Debug for OnnxModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OnnxModel")
            .field("name", &self.name)
            .field("input_shape", &self.input_shape)
            .field("output_classes", &self.output_classes)
            .field("mode", &self.mode.as_str())
            .finish()
    }
}

/// Loads compiled model artifacts from disk.
///
/// # Example
/// ```no_run
/// use model_artifact::ArtifactLoader;
/// use tensor_core::Shape;
///
/// let model = ArtifactLoader::load(
///     "mnist_cnn.onnx".as_ref(),
///     Shape::nchw(1, 1, 28, 28),
/// ).unwrap();
/// ```
pub struct ArtifactLoader;

impl ArtifactLoader {
    /// Loads the artifact at `path` and compiles it for `input_shape`.
    ///
    /// Steps:
    /// 1. Check the file exists and is readable.
    /// 2. Parse the ONNX graph.
    /// 3. Pin the input fact to `f32` × `input_shape`.
    /// 4. Optimize into an inference-only plan (one-way transition).
    /// 5. Validate the output fact is a batch-1 f32 class-score vector.
    pub fn load(path: &Path, input_shape: tensor_core::Shape) -> Result<OnnxModel, LoadError> {
        if !path.exists() {
            return Err(LoadError::NotFound {
                path: path.to_path_buf(),
            });
        }
        // Surface permission problems as read errors, not engine noise.
        std::fs::File::open(path).map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let incompatible = |e: TractError| LoadError::Incompatible {
            path: path.to_path_buf(),
            reason: e.to_string(),
        };

        let plan = tract_onnx::onnx()
            .model_for_path(path)
            .map_err(incompatible)?
            .with_input_fact(
                0,
                InferenceFact::dt_shape(f32::datum_type(), input_shape.dims().to_vec()),
            )
            .map_err(incompatible)?
            .into_optimized()
            .map_err(incompatible)?
            .into_runnable()
            .map_err(incompatible)?;

        let output_classes = Self::resolve_output_classes(&plan, path)?;

        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "model".to_string());

        tracing::info!(
            "loaded '{name}': input {input_shape}, {output_classes} classes, inference mode",
        );

        Ok(OnnxModel {
            plan,
            input_shape,
            output_classes,
            mode: ExecutionMode::Inference,
            name,
        })
    }

    /// Extracts the class count from the optimized output fact.
    fn resolve_output_classes(plan: &RunnableOnnx, path: &Path) -> Result<usize, LoadError> {
        let fact = plan.model().output_fact(0).map_err(|e| LoadError::Incompatible {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        if fact.datum_type != f32::datum_type() {
            return Err(LoadError::Incompatible {
                path: path.to_path_buf(),
                reason: format!("expected f32 output, got {:?}", fact.datum_type),
            });
        }

        let dims = fact
            .shape
            .as_concrete()
            .ok_or_else(|| LoadError::Incompatible {
                path: path.to_path_buf(),
                reason: "output shape is not fully determined".to_string(),
            })?;

        let (classes, leading) = dims.split_last().ok_or_else(|| LoadError::Incompatible {
            path: path.to_path_buf(),
            reason: "output has rank 0".to_string(),
        })?;
        if leading.iter().any(|&d| d != 1) {
            return Err(LoadError::Incompatible {
                path: path.to_path_buf(),
                reason: format!("expected a batch-1 class-score output, got {dims:?}"),
            });
        }

        Ok(*classes)
    }
}

impl ForwardModel for OnnxModel {
    fn forward(&self, input: &tensor_core::Tensor) -> Result<tensor_core::Tensor, ForwardError> {
        // Boundary contract: exact shape match, checked before the engine
        // sees the buffer.
        if input.shape() != &self.input_shape {
            return Err(ForwardError::InputContract {
                expected: self.input_shape.clone(),
                actual: input.shape().clone(),
            });
        }

        let array = tract_ndarray::ArrayD::from_shape_vec(
            tract_ndarray::IxDyn(input.shape().dims()),
            input.as_slice().to_vec(),
        )
        .map_err(|e| ForwardError::Engine {
            reason: e.to_string(),
        })?;

        let outputs = self
            .plan
            .run(tvec!(Tensor::from(array).into()))
            .map_err(|e| ForwardError::Engine {
                reason: e.to_string(),
            })?;

        let value = outputs.first().ok_or_else(|| ForwardError::OutputContract {
            reason: "engine returned no outputs".to_string(),
        })?;
        let view = value
            .to_array_view::<f32>()
            .map_err(|e| ForwardError::OutputContract {
                reason: e.to_string(),
            })?;

        let shape = tensor_core::Shape::new(view.shape().to_vec());
        let data: Vec<f32> = view.iter().copied().collect();
        tensor_core::Tensor::from_f32(shape, data).map_err(|e| ForwardError::OutputContract {
            reason: e.to_string(),
        })
    }

    fn input_shape(&self) -> &tensor_core::Shape {
        &self.input_shape
    }

    fn output_classes(&self) -> usize {
        self.output_classes
    }

    fn mode(&self) -> ExecutionMode {
        self.mode
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.onnx");
        let result = ArtifactLoader::load(&path, tensor_core::Shape::nchw(1, 1, 28, 28));
        assert!(matches!(result, Err(LoadError::NotFound { .. })));
    }

    #[test]
    fn test_load_incompatible_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("junk.onnx");
        std::fs::write(&path, b"this is not an onnx graph").unwrap();

        let result = ArtifactLoader::load(&path, tensor_core::Shape::nchw(1, 1, 28, 28));
        assert!(matches!(result, Err(LoadError::Incompatible { .. })));
    }

    #[test]
    fn test_load_error_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.onnx");
        let err = ArtifactLoader::load(&path, tensor_core::Shape::nchw(1, 1, 28, 28))
            .unwrap_err();
        assert!(err.to_string().contains("missing.onnx"));
    }
}
