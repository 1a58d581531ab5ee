// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `infer-bench run` command: the full benchmark pipeline.
//!
//! ```text
//! BenchPipeline<Loaded> → preprocess → warm_up → measure → report
//! ```

use bench_runtime::{BenchConfig, BenchPipeline};
use std::path::PathBuf;

/// CLI-level overrides layered on top of the config file (or defaults).
pub struct Overrides {
    pub model: Option<PathBuf>,
    pub image: Option<PathBuf>,
    pub warmup: Option<usize>,
    pub iterations: Option<usize>,
    pub size: Option<u32>,
    pub label: Option<String>,
}

pub fn execute(config_file: Option<PathBuf>, overrides: Overrides) -> anyhow::Result<()> {
    let mut config = match config_file {
        Some(path) => BenchConfig::from_file(&path)
            .map_err(|e| anyhow::anyhow!("failed to load config '{}': {e}", path.display()))?,
        None => BenchConfig::default(),
    };

    if let Some(model) = overrides.model {
        config.model_path = model;
    }
    if let Some(image) = overrides.image {
        config.image_path = image;
    }
    if let Some(warmup) = overrides.warmup {
        config.warmup_iterations = warmup;
    }
    if let Some(iterations) = overrides.iterations {
        config.timed_iterations = iterations;
    }
    if let Some(size) = overrides.size {
        config.target_size = size;
    }
    if let Some(label) = overrides.label {
        config.runtime_label = label;
    }

    tracing::info!(
        "benchmark: model='{}' image='{}' warmup={} iterations={}",
        config.model_path.display(),
        config.image_path.display(),
        config.warmup_iterations,
        config.timed_iterations,
    );

    let report = BenchPipeline::load(config)?
        .preprocess()?
        .warm_up()?
        .measure()?
        .report()?;

    report.print();
    Ok(())
}
