// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # infer-bench
//!
//! Command-line interface for the infer-bench CPU latency harness.
//!
//! ## Usage
//! ```bash
//! # Benchmark a model on an image
//! infer-bench run --model ./mnist_cnn.onnx --image ./digit.png
//!
//! # Override the loop sizes
//! infer-bench run --model ./mnist_cnn.onnx --image ./digit.png --warmup 20 --iterations 5000
//!
//! # Inspect an artifact
//! infer-bench inspect --model ./mnist_cnn.onnx
//! ```

mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "infer-bench",
    about = "Single-threaded CPU inference latency benchmark",
    version,
    author
)]
struct Cli {
    /// Path to a TOML configuration file (CLI arguments override it).
    #[arg(short, long, global = true)]
    config: Option<std::path::PathBuf>,

    /// Enable verbose logging (repeat for more: -v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full benchmark: preprocess, warm up, measure, report.
    Run {
        /// Path to the model artifact.
        #[arg(short, long)]
        model: Option<std::path::PathBuf>,

        /// Path to the input image.
        #[arg(short, long)]
        image: Option<std::path::PathBuf>,

        /// Number of discarded warm-up passes.
        #[arg(short, long)]
        warmup: Option<usize>,

        /// Number of timed passes inside the single clock bracket.
        #[arg(short = 'n', long)]
        iterations: Option<usize>,

        /// Square side of the model input, in pixels.
        #[arg(short, long)]
        size: Option<u32>,

        /// Label prefixed to the latency line of the report.
        #[arg(short, long)]
        label: Option<String>,
    },

    /// Inspect a model artifact: print name, input shape, and class count.
    Inspect {
        /// Path to the model artifact.
        #[arg(short, long)]
        model: std::path::PathBuf,

        /// Square side of the model input, in pixels.
        #[arg(short, long, default_value_t = 28)]
        size: u32,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    commands::init_tracing(cli.verbose);

    match cli.command {
        Commands::Run {
            model,
            image,
            warmup,
            iterations,
            size,
            label,
        } => commands::run::execute(
            cli.config,
            commands::run::Overrides {
                model,
                image,
                warmup,
                iterations,
                size,
                label,
            },
        ),
        Commands::Inspect { model, size } => commands::inspect::execute(model, size),
    }
}
