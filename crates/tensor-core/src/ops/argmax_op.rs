// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Argmax over the class dimension.

use crate::{TensorError, TensorView};

/// Returns the index of the maximum value along the last (class) dimension.
///
/// The input must be a single score vector: either rank 1, or a higher-rank
/// tensor whose leading dimensions are all 1 (e.g. the `[1, 10]` output of a
/// batch-1 classifier). Ties resolve to the lowest index, matching the
/// behaviour of the usual argmax reductions.
///
/// # Errors
/// Returns [`TensorError::UnsupportedShape`] if a leading dimension exceeds 1.
/// Returns [`TensorError::Empty`] if the class dimension has no elements.
pub fn argmax(input: &TensorView<'_>) -> Result<usize, TensorError> {
    let dims = input.shape().dims();
    if dims.len() > 1 && dims[..dims.len() - 1].iter().any(|&d| d != 1) {
        return Err(TensorError::UnsupportedShape {
            op: "argmax",
            shape: input.shape().clone(),
            detail: "expected a single score vector (leading dims must be 1)",
        });
    }

    let scores = input.as_slice();
    if scores.is_empty() {
        return Err(TensorError::Empty { op: "argmax" });
    }

    let mut best = 0usize;
    for (i, &v) in scores.iter().enumerate() {
        if v > scores[best] {
            best = i;
        }
    }
    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Shape, Tensor};

    #[test]
    fn test_argmax_vector() {
        let t = Tensor::from_f32(Shape::vector(4), vec![0.1, 0.9, 0.3, 0.2]).unwrap();
        assert_eq!(argmax(&t.view()).unwrap(), 1);
    }

    #[test]
    fn test_argmax_batch_one_matrix() {
        // The usual classifier output shape: [1, num_classes].
        let t = Tensor::from_f32(
            Shape::new(vec![1, 5]),
            vec![-2.0, -0.5, -3.0, -0.1, -1.0],
        )
        .unwrap();
        assert_eq!(argmax(&t.view()).unwrap(), 3);
    }

    #[test]
    fn test_argmax_ties_resolve_low() {
        let t = Tensor::from_f32(Shape::vector(3), vec![1.0, 1.0, 0.0]).unwrap();
        assert_eq!(argmax(&t.view()).unwrap(), 0);
    }

    #[test]
    fn test_argmax_single_class() {
        let t = Tensor::from_f32(Shape::vector(1), vec![42.0]).unwrap();
        assert_eq!(argmax(&t.view()).unwrap(), 0);
    }

    #[test]
    fn test_argmax_rejects_real_batch() {
        let t = Tensor::zeros(Shape::new(vec![2, 5]));
        assert!(matches!(
            argmax(&t.view()),
            Err(TensorError::UnsupportedShape { op: "argmax", .. })
        ));
    }

    #[test]
    fn test_argmax_empty() {
        let t = Tensor::zeros(Shape::vector(0));
        assert!(matches!(argmax(&t.view()), Err(TensorError::Empty { .. })));
    }
}
