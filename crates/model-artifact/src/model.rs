// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The forward-pass capability trait and execution mode.

use crate::ForwardError;
use tensor_core::{Shape, Tensor};

/// The execution mode a loaded model runs in.
///
/// `Inference` is the only constructible mode: the loader freezes the model
/// during optimization and the flag travels with the returned value instead
/// of living in mutable global state. The transition is one-way for the
/// lifetime of the process — training-time behaviour (statistics updates,
/// regularization) does not exist in this runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionMode {
    /// Inference-only: weights are immutable, no training-time behaviour.
    Inference,
}

impl ExecutionMode {
    /// Returns a human-readable label.
    pub fn as_str(self) -> &'static str {
        match self {
            ExecutionMode::Inference => "inference",
        }
    }
}

/// A loaded, inference-only model: the one capability the benchmark needs.
///
/// Implementations are read-only with respect to their weights; repeated
/// [`forward`](ForwardModel::forward) calls on the same input must return
/// the same output. The benchmark holds the model behind a shared reference
/// and never requires `&mut`.
pub trait ForwardModel {
    /// Runs one forward pass, mapping an input tensor to a class-score
    /// tensor.
    ///
    /// # Errors
    /// Returns [`ForwardError::InputContract`] if `input` does not match
    /// [`input_shape`](ForwardModel::input_shape), and
    /// [`ForwardError::Engine`] / [`ForwardError::OutputContract`] if the
    /// underlying engine fails or produces a malformed output.
    fn forward(&self, input: &Tensor) -> Result<Tensor, ForwardError>;

    /// The exact input shape the model was compiled for.
    fn input_shape(&self) -> &Shape;

    /// Number of classes in the output score vector.
    fn output_classes(&self) -> usize;

    /// The execution mode fixed at load time.
    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Inference
    }

    /// A human-readable model name (for logs and the inspect command).
    fn name(&self) -> &str;
}
