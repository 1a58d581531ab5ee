// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Tensor operations used by the benchmark reporter.

mod argmax_op;

pub use argmax_op::argmax;
