// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # tensor-core
//!
//! Tensor value types and shape contracts for the CPU inference benchmark.
//!
//! This crate provides:
//! - [`Tensor`] — an owned, f32, n-dimensional array in row-major layout.
//! - [`Shape`] — immutable shape descriptors, including the NCHW input shape
//!   the benchmark feeds to the model.
//! - [`DType`] — element types seen at the pipeline boundaries (f32 tensors,
//!   u8 pixel buffers).
//! - [`argmax`] — the class-selection op applied to the model output.
//!
//! # Design Goals
//! - The benchmark input is built once and never mutated; everything
//!   downstream works on [`TensorView`]s.
//! - Clean error types via `thiserror`.

mod dtype;
mod error;
mod ops;
mod shape;
mod tensor;

pub use dtype::DType;
pub use error::TensorError;
pub use ops::argmax;
pub use shape::Shape;
pub use tensor::{Tensor, TensorView};
