// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for tensor construction and ops.

use crate::Shape;

/// Errors that can occur when building tensors or applying ops.
#[derive(Debug, thiserror::Error)]
pub enum TensorError {
    /// The provided buffer length does not match the element count implied by the shape.
    #[error("buffer size mismatch: shape {shape} implies {expected} elements, got {actual}")]
    BufferSizeMismatch {
        shape: Shape,
        expected: usize,
        actual: usize,
    },

    /// A tensor has the wrong shape for the requested operation.
    #[error("unsupported shape {shape} for {op}: {detail}")]
    UnsupportedShape {
        op: &'static str,
        shape: Shape,
        detail: &'static str,
    },

    /// The operation received an empty value vector.
    #[error("{op} is undefined on an empty tensor")]
    Empty { op: &'static str },
}
