// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # preprocess
//!
//! Deterministic image-to-tensor preprocessing for the inference benchmark.
//!
//! The pipeline is fixed and stage-ordered:
//! ```text
//! decode (grayscale) → resize (bilinear) → normalize (/255) → to_tensor (1,1,H,W)
//! ```
//! The same input file always yields the same tensor, so any run-to-run
//! variation in the benchmark comes from the compute engine, never from the
//! input.

mod error;
mod preprocessor;

pub use error::PreprocessError;
pub use preprocessor::Preprocessor;
