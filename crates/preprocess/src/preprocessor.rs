// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The image → tensor preprocessing stages.
//!
//! Each stage is public so tests can exercise them individually;
//! [`Preprocessor::prepare`] chains them in the fixed pipeline order.

use crate::PreprocessError;
use image::imageops::FilterType;
use image::GrayImage;
use std::path::Path;
use tensor_core::{Shape, Tensor};

/// Turns an image file into the model's (1, 1, H, W) f32 input tensor.
///
/// Construction fixes the target resolution; all four stages are
/// deterministic, so the produced tensor is identical across calls for the
/// same file.
///
/// # Example
/// ```no_run
/// use preprocess::Preprocessor;
///
/// let pre = Preprocessor::new(28, 28);
/// let input = pre.prepare("digit.png".as_ref()).unwrap();
/// assert_eq!(input.shape().dims(), &[1, 1, 28, 28]);
/// ```
#[derive(Debug, Clone)]
pub struct Preprocessor {
    target_width: u32,
    target_height: u32,
}

impl Preprocessor {
    /// Creates a preprocessor for the given target resolution.
    pub fn new(target_width: u32, target_height: u32) -> Self {
        Self {
            target_width,
            target_height,
        }
    }

    /// Returns the target `(width, height)`.
    pub fn target_size(&self) -> (u32, u32) {
        (self.target_width, self.target_height)
    }

    /// Returns the shape of the tensors this preprocessor produces.
    pub fn output_shape(&self) -> Shape {
        Shape::nchw(1, 1, self.target_height as usize, self.target_width as usize)
    }

    /// Decodes the file at `path` into an 8-bit grayscale pixel grid.
    pub fn decode(&self, path: &Path) -> Result<GrayImage, PreprocessError> {
        let img = image::open(path).map_err(|source| PreprocessError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
        let gray = img.to_luma8();
        tracing::debug!(
            "decoded '{}': {}x{} grayscale",
            path.display(),
            gray.width(),
            gray.height(),
        );
        Ok(gray)
    }

    /// Resizes a pixel grid to the target resolution.
    ///
    /// Uses bilinear interpolation (`FilterType::Triangle`), the same fixed
    /// policy for every input. Resizing is shape-correct by contract, not
    /// guaranteed bit-identical to other resize implementations.
    pub fn resize(&self, grid: &GrayImage) -> GrayImage {
        if grid.dimensions() == (self.target_width, self.target_height) {
            return grid.clone();
        }
        image::imageops::resize(
            grid,
            self.target_width,
            self.target_height,
            FilterType::Triangle,
        )
    }

    /// Normalises raw pixels into `[0.0, 1.0]` by dividing each by 255.
    ///
    /// Returns the row-major f32 buffer.
    pub fn normalize(&self, grid: &GrayImage) -> Vec<f32> {
        grid.as_raw().iter().map(|&p| f32::from(p) / 255.0).collect()
    }

    /// Reshapes a normalised buffer into the (1, 1, H, W) input tensor.
    ///
    /// # Errors
    /// Returns [`PreprocessError::Tensor`] if the buffer length does not
    /// match the target shape.
    pub fn to_tensor(&self, values: Vec<f32>) -> Result<Tensor, PreprocessError> {
        Ok(Tensor::from_f32(self.output_shape(), values)?)
    }

    /// Runs the full pipeline: decode → resize → normalize → to_tensor.
    ///
    /// # Errors
    /// Returns [`PreprocessError::Decode`] for unreadable input,
    /// [`PreprocessError::Shape`] if the resized grid does not match the
    /// target (defensive guard), and [`PreprocessError::Tensor`] if the
    /// buffer cannot fill the output shape.
    pub fn prepare(&self, path: &Path) -> Result<Tensor, PreprocessError> {
        let decoded = self.decode(path)?;
        let resized = self.resize(&decoded);

        // Guard the shape contract before building the tensor.
        let (w, h) = resized.dimensions();
        if (w, h) != (self.target_width, self.target_height) {
            return Err(PreprocessError::Shape {
                expected_width: self.target_width,
                expected_height: self.target_height,
                actual_width: w,
                actual_height: h,
            });
        }

        let values = self.normalize(&resized);
        let tensor = self.to_tensor(values)?;
        tracing::debug!(
            "prepared input tensor {} from '{}'",
            tensor.shape(),
            path.display(),
        );
        Ok(tensor)
    }
}

impl Default for Preprocessor {
    /// The benchmark's canonical 28×28 target.
    fn default() -> Self {
        Self::new(28, 28)
    }
}
