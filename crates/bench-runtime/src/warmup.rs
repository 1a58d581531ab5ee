// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The discard-output priming loop.

use crate::BenchError;
use model_artifact::ForwardModel;
use tensor_core::Tensor;

/// Primes the compute engine before the timed phase.
///
/// Runs exactly `iterations` forward passes and discards every output: the
/// point is to force lazy initialization, cache warming, and operator
/// dispatch resolution so the timed loop measures steady-state cost only.
/// No timestamps are taken here.
#[derive(Debug, Clone, Copy)]
pub struct WarmupRunner {
    iterations: usize,
}

impl WarmupRunner {
    /// Creates a runner for the given pass count. Zero is legal and skips
    /// warm-up entirely.
    pub fn new(iterations: usize) -> Self {
        Self { iterations }
    }

    /// Returns the configured pass count.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Executes the priming loop.
    ///
    /// # Errors
    /// The first failing pass aborts immediately with
    /// [`BenchError::Warmup`]; the timed phase is never entered.
    pub fn run(&self, model: &dyn ForwardModel, input: &Tensor) -> Result<(), BenchError> {
        tracing::debug!("warm-up: {} passes", self.iterations);
        for iteration in 0..self.iterations {
            model
                .forward(input)
                .map_err(|source| BenchError::Warmup { iteration, source })?;
        }
        Ok(())
    }
}
