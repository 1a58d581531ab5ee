// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Core tensor type and view abstractions.

use crate::{DType, Shape, TensorError};

/// An owned, f32, n-dimensional tensor stored in contiguous memory.
///
/// `Tensor` is the single data carrier of the benchmark pipeline: the
/// preprocessor produces one as the model input, and the model returns one
/// as its class-score output.
///
/// # Memory Layout
/// Data is stored in row-major (C) order as a flat `f32` buffer, which is
/// the NCHW layout the model expects for rank-4 shapes.
#[derive(Debug, Clone, PartialEq)]
pub struct Tensor {
    shape: Shape,
    data: Vec<f32>,
}

impl Tensor {
    /// Creates a new tensor filled with zeros.
    ///
    /// # Examples
    /// ```
    /// use tensor_core::{Tensor, Shape};
    /// let t = Tensor::zeros(Shape::nchw(1, 1, 28, 28));
    /// assert_eq!(t.len(), 784);
    /// assert!(t.as_slice().iter().all(|&x| x == 0.0));
    /// ```
    pub fn zeros(shape: Shape) -> Self {
        let len = shape.num_elements();
        Self {
            shape,
            data: vec![0.0; len],
        }
    }

    /// Creates a tensor from a vector of `f32` values.
    ///
    /// Returns an error if the value count does not match the shape.
    ///
    /// # Examples
    /// ```
    /// use tensor_core::{Tensor, Shape};
    /// let t = Tensor::from_f32(Shape::vector(3), vec![0.1, 0.7, 0.2]).unwrap();
    /// assert_eq!(t.as_slice(), &[0.1, 0.7, 0.2]);
    /// ```
    pub fn from_f32(shape: Shape, values: Vec<f32>) -> Result<Self, TensorError> {
        let expected = shape.num_elements();
        if values.len() != expected {
            return Err(TensorError::BufferSizeMismatch {
                expected,
                actual: values.len(),
                shape,
            });
        }
        Ok(Self {
            shape,
            data: values,
        })
    }

    /// Returns the tensor's shape.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Returns the tensor's data type. Always [`DType::F32`].
    pub fn dtype(&self) -> DType {
        DType::F32
    }

    /// Returns an immutable view over this tensor's data.
    pub fn view(&self) -> TensorView<'_> {
        TensorView {
            shape: &self.shape,
            data: &self.data,
        }
    }

    /// Returns the flat element buffer.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the tensor holds no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the memory footprint of this tensor in bytes.
    pub fn size_bytes(&self) -> usize {
        self.shape.size_bytes(DType::F32)
    }

    /// Consumes the tensor, returning its flat element buffer.
    pub fn into_vec(self) -> Vec<f32> {
        self.data
    }
}

/// A borrowed, read-only view over a [`Tensor`]'s data.
///
/// Views are zero-copy and tied to the lifetime of the source tensor,
/// enforced by the borrow checker. The warm-up and timed loops only ever
/// hold views of the benchmark input.
#[derive(Debug, Clone, Copy)]
pub struct TensorView<'a> {
    shape: &'a Shape,
    data: &'a [f32],
}

impl<'a> TensorView<'a> {
    /// Creates a view from raw parts.
    pub fn from_parts(shape: &'a Shape, data: &'a [f32]) -> Self {
        Self { shape, data }
    }

    /// Returns the shape of the viewed tensor.
    pub fn shape(&self) -> &Shape {
        self.shape
    }

    /// Returns the flat element buffer.
    pub fn as_slice(&self) -> &[f32] {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeros() {
        let t = Tensor::zeros(Shape::nchw(1, 1, 2, 3));
        assert_eq!(t.len(), 6);
        assert_eq!(t.size_bytes(), 24);
        assert!(t.as_slice().iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_from_f32() {
        let data = vec![1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0];
        let t = Tensor::from_f32(Shape::new(vec![2, 3]), data.clone()).unwrap();
        assert_eq!(t.as_slice(), &data[..]);
        assert_eq!(t.shape().dims(), &[2, 3]);
    }

    #[test]
    fn test_from_f32_size_mismatch() {
        let result = Tensor::from_f32(Shape::vector(4), vec![1.0, 2.0]);
        assert!(matches!(
            result,
            Err(TensorError::BufferSizeMismatch {
                expected: 4,
                actual: 2,
                ..
            })
        ));
    }

    #[test]
    fn test_view_lifetime() {
        let t = Tensor::from_f32(Shape::vector(4), vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        let v = t.view();
        assert_eq!(v.shape(), &Shape::vector(4));
        assert_eq!(v.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_into_vec() {
        let t = Tensor::from_f32(Shape::vector(2), vec![0.5, 0.25]).unwrap();
        assert_eq!(t.into_vec(), vec![0.5, 0.25]);
    }
}
