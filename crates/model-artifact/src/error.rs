// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for artifact loading and forward execution.

use std::path::PathBuf;
use tensor_core::Shape;

/// Errors that can occur while loading a compiled model artifact.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The artifact file does not exist.
    #[error("model artifact not found: '{path}'")]
    NotFound { path: PathBuf },

    /// The artifact file exists but cannot be read.
    #[error("cannot read model artifact '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The serialized format is not a loadable model, or the engine could
    /// not compile it for the requested input shape.
    #[error("incompatible model artifact '{path}': {reason}")]
    Incompatible { path: PathBuf, reason: String },
}

/// Errors raised by the compute engine's forward pass.
#[derive(Debug, thiserror::Error)]
pub enum ForwardError {
    /// The input tensor does not match the shape the model was compiled for.
    #[error("input contract violation: model expects {expected}, got {actual}")]
    InputContract { expected: Shape, actual: Shape },

    /// The engine produced an output that is not a single class-score vector.
    #[error("output contract violation: {reason}")]
    OutputContract { reason: String },

    /// The engine failed internally (unsupported operator, resource
    /// exhaustion, internal shape mismatch).
    #[error("compute engine failure: {reason}")]
    Engine { reason: String },
}
