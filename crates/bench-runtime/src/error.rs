// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for the benchmark runtime.
//!
//! Every variant names the stage that failed; this is what makes the CLI
//! diagnostics actionable without a stack trace.

use model_artifact::{ForwardError, LoadError};
use preprocess::PreprocessError;

/// Errors that can occur during a benchmark run.
#[derive(Debug, thiserror::Error)]
pub enum BenchError {
    /// The model artifact could not be loaded.
    #[error("load stage failed: {0}")]
    Load(#[from] LoadError),

    /// The input image could not be turned into a tensor.
    #[error("preprocess stage failed: {0}")]
    Preprocess(#[from] PreprocessError),

    /// A warm-up forward pass failed.
    #[error("warm-up stage failed at iteration {iteration}: {source}")]
    Warmup {
        iteration: usize,
        #[source]
        source: ForwardError,
    },

    /// A timed forward pass failed; no partial average is reported.
    #[error("measurement stage failed at iteration {iteration}: {source}")]
    Measurement {
        iteration: usize,
        #[source]
        source: ForwardError,
    },

    /// The final prediction pass or the argmax over its output failed.
    #[error("prediction stage failed: {reason}")]
    Prediction { reason: String },

    /// The configuration is unusable.
    #[error("configuration error: {0}")]
    Config(String),
}
