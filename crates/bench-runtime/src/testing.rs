// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Deterministic in-memory stand-ins for the opaque compute engine.
//!
//! Unit tests across this crate use these instead of a real artifact: they
//! count invocations (the call-accounting invariant) and return fixed score
//! vectors (the determinism invariant).

use model_artifact::{ForwardError, ForwardModel};
use std::sync::atomic::{AtomicUsize, Ordering};
use tensor_core::{Shape, Tensor};

/// A model returning a fixed score vector and counting its calls.
pub(crate) struct CountingModel {
    input_shape: Shape,
    scores: Vec<f32>,
    calls: AtomicUsize,
}

impl CountingModel {
    pub(crate) fn new(input_shape: Shape, scores: Vec<f32>) -> Self {
        Self {
            input_shape,
            scores,
            calls: AtomicUsize::new(0),
        }
    }

    /// The canonical stub: 28×28 input, 10 classes, argmax = 7.
    pub(crate) fn unit() -> Self {
        let mut scores = vec![0.01f32; 10];
        scores[7] = 0.9;
        Self::new(Shape::nchw(1, 1, 28, 28), scores)
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ForwardModel for CountingModel {
    fn forward(&self, input: &Tensor) -> Result<Tensor, ForwardError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if input.shape() != &self.input_shape {
            return Err(ForwardError::InputContract {
                expected: self.input_shape.clone(),
                actual: input.shape().clone(),
            });
        }
        let shape = Shape::new(vec![1, self.scores.len()]);
        Ok(Tensor::from_f32(shape, self.scores.clone()).expect("stub scores match shape"))
    }

    fn input_shape(&self) -> &Shape {
        &self.input_shape
    }

    fn output_classes(&self) -> usize {
        self.scores.len()
    }

    fn name(&self) -> &str {
        "counting-stub"
    }
}

/// A handle that shares a [`CountingModel`] with a consumer of
/// `Box<dyn ForwardModel>`, so the test can still read the call count
/// after handing the model off.
pub(crate) struct SharedCounting(pub(crate) std::sync::Arc<CountingModel>);

impl ForwardModel for SharedCounting {
    fn forward(&self, input: &Tensor) -> Result<Tensor, ForwardError> {
        self.0.forward(input)
    }

    fn input_shape(&self) -> &Shape {
        self.0.input_shape()
    }

    fn output_classes(&self) -> usize {
        self.0.output_classes()
    }

    fn name(&self) -> &str {
        self.0.name()
    }
}

/// A model that succeeds `ok_calls` times, then fails every call.
pub(crate) struct FailAfter {
    inner: CountingModel,
    ok_calls: usize,
}

impl FailAfter {
    pub(crate) fn new(ok_calls: usize) -> Self {
        Self {
            inner: CountingModel::unit(),
            ok_calls,
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.inner.calls()
    }
}

impl ForwardModel for FailAfter {
    fn forward(&self, input: &Tensor) -> Result<Tensor, ForwardError> {
        if self.inner.calls() >= self.ok_calls {
            self.inner.calls.fetch_add(1, Ordering::SeqCst);
            return Err(ForwardError::Engine {
                reason: "injected failure".to_string(),
            });
        }
        self.inner.forward(input)
    }

    fn input_shape(&self) -> &Shape {
        self.inner.input_shape()
    }

    fn output_classes(&self) -> usize {
        self.inner.output_classes()
    }

    fn name(&self) -> &str {
        "fail-after-stub"
    }
}
