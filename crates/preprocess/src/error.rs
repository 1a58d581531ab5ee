// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for the preprocessing pipeline.

use std::path::PathBuf;

/// Errors that can occur while turning an image file into a model input.
#[derive(Debug, thiserror::Error)]
pub enum PreprocessError {
    /// The image file is missing, unreadable, or not a decodable image.
    #[error("cannot decode image '{path}': {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Post-resize dimensions do not match the configured target.
    ///
    /// Defensive guard; not expected under correct configuration.
    #[error("shape mismatch after resize: expected {expected_width}x{expected_height}, got {actual_width}x{actual_height}")]
    Shape {
        expected_width: u32,
        expected_height: u32,
        actual_width: u32,
        actual_height: u32,
    },

    /// The normalised buffer does not fill the target tensor shape.
    #[error("tensor build failed: {source}")]
    Tensor {
        #[from]
        source: tensor_core::TensorError,
    },
}
