// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # model-artifact
//!
//! Loading of precompiled inference artifacts and the capability boundary
//! the benchmark talks to.
//!
//! The compute engine is deliberately opaque: the rest of the workspace only
//! sees [`ForwardModel`], a trait exposing exactly one operation —
//! `forward(tensor) -> tensor` — plus read-only metadata. The concrete
//! implementation wraps a `tract-onnx` plan that is optimized and frozen
//! into inference-only execution at load time; there is no way to re-enter
//! a training-like mode for the lifetime of the process (see
//! [`ExecutionMode`]).
//!
//! # Example
//! ```no_run
//! use model_artifact::{ArtifactLoader, ForwardModel};
//! use tensor_core::{Shape, Tensor};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let model = ArtifactLoader::load("mnist_cnn.onnx".as_ref(), Shape::nchw(1, 1, 28, 28))?;
//! let input = Tensor::zeros(model.input_shape().clone());
//! let scores = model.forward(&input)?;
//! println!("{} classes", scores.len());
//! # Ok(())
//! # }
//! ```

mod error;
mod model;
mod onnx;

pub use error::{ForwardError, LoadError};
pub use model::{ExecutionMode, ForwardModel};
pub use onnx::{ArtifactLoader, OnnxModel};
