// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Benchmark configuration loaded from TOML files or constructed
//! programmatically.
//!
//! # TOML Format
//! ```toml
//! model_path = "./mnist_cnn.onnx"
//! image_path = "./digit.png"
//! warmup_iterations = 10
//! timed_iterations = 1000
//! target_size = 28
//! runtime_label = "Rust"
//! ```

use std::path::{Path, PathBuf};
use tensor_core::Shape;

/// Configuration for a benchmark run.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct BenchConfig {
    /// Path to the compiled model artifact (ONNX).
    pub model_path: PathBuf,
    /// Path to the sample input image.
    pub image_path: PathBuf,
    /// Discarded priming passes before timing begins.
    #[serde(default = "default_warmup")]
    pub warmup_iterations: usize,
    /// Timed forward passes; the average is computed over exactly this many.
    #[serde(default = "default_timed")]
    pub timed_iterations: usize,
    /// Square target resolution the image is resized to.
    #[serde(default = "default_target_size")]
    pub target_size: u32,
    /// Label prefixed to the latency output line.
    #[serde(default = "default_label")]
    pub runtime_label: String,
}

fn default_warmup() -> usize {
    10
}

fn default_timed() -> usize {
    1000
}

fn default_target_size() -> u32 {
    28
}

fn default_label() -> String {
    "Rust".to_string()
}

impl BenchConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, super::BenchError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            super::BenchError::Config(format!("cannot read config '{}': {e}", path.display()))
        })?;
        Self::from_toml(&content)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, super::BenchError> {
        toml::from_str(toml_str)
            .map_err(|e| super::BenchError::Config(format!("TOML parse error: {e}")))
    }

    /// Serialises configuration to TOML.
    pub fn to_toml(&self) -> Result<String, super::BenchError> {
        toml::to_string_pretty(self)
            .map_err(|e| super::BenchError::Config(format!("TOML serialise error: {e}")))
    }

    /// The model input shape implied by this configuration.
    pub fn input_shape(&self) -> Shape {
        Shape::nchw(1, 1, self.target_size as usize, self.target_size as usize)
    }

    /// Rejects configurations the protocol cannot measure.
    ///
    /// A zero timed-iteration count has no defined average;
    /// `warmup_iterations = 0` is legal (warm-up is merely skipped).
    pub fn validate(&self) -> Result<(), super::BenchError> {
        if self.timed_iterations == 0 {
            return Err(super::BenchError::Config(
                "timed_iterations must be >= 1".to_string(),
            ));
        }
        if self.target_size == 0 {
            return Err(super::BenchError::Config(
                "target_size must be >= 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from("./mnist_cnn.onnx"),
            image_path: PathBuf::from("./digit.png"),
            warmup_iterations: default_warmup(),
            timed_iterations: default_timed(),
            target_size: default_target_size(),
            runtime_label: default_label(),
        }
    }
}
