// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `infer-bench inspect` command: load an artifact and print its contract.

use model_artifact::{ArtifactLoader, ForwardModel};
use std::path::PathBuf;
use tensor_core::Shape;

pub fn execute(model_path: PathBuf, size: u32) -> anyhow::Result<()> {
    let input_shape = Shape::nchw(1, 1, size as usize, size as usize);
    let model = ArtifactLoader::load(&model_path, input_shape).map_err(|e| {
        anyhow::anyhow!("failed to load model from '{}': {e}", model_path.display())
    })?;

    println!("  Model:   {}", model.name());
    println!("  Input:   {}", model.input_shape());
    println!("  Classes: {}", model.output_classes());
    println!("  Mode:    {}", model.mode().as_str());
    Ok(())
}
