//! Benchmark binary for dataproc processors.
//!
//! Usage:
//!     dataproc_bench [--len N] [--iterations N] [--seed N] [--pipeline JSON]
//!
//! Outputs a JSON array of benchmark results to stdout. Progress is logged to
//! stderr; set `RUST_LOG` to change verbosity.

use std::time::Instant;

use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use dp_core::{Data, Process};
use dp_transforms::{processors, Processor, ProcessorConfig, ProcessorPipeline};

#[derive(Debug, Parser)]
#[command(name = "dataproc_bench", about = "Time dataproc processors on synthetic data")]
struct Args {
    /// Number of values in the generated series.
    #[arg(long, default_value_t = 100_000)]
    len: usize,

    /// Timed runs per processor.
    #[arg(long, default_value_t = 100)]
    iterations: usize,

    /// Seed for the synthetic random walk.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Extra pipeline to time, as a JSON array of processor configurations,
    /// e.g. '[{"kind":"clip","lower":0.0},{"kind":"standardize"}]'.
    #[arg(long)]
    pipeline: Option<String>,
}

#[derive(Debug, Serialize)]
struct BenchmarkResult {
    name: String,
    values: usize,
    iterations: usize,
    total_time_ms: f64,
    avg_time_ms: f64,
    min_time_ms: f64,
    max_time_ms: f64,
    throughput_values_per_sec: f64,
}

/// Deterministic random walk driven by a 64-bit LCG.
fn random_walk(start: f64, volatility: f64, len: usize, seed: u64) -> Data<f64> {
    let mut state = seed;
    let mut value = start;

    (0..len)
        .map(|i| {
            if i > 0 {
                state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
                // Map to [-1, 1]
                let step = (state as f64 / u64::MAX as f64) * 2.0 - 1.0;
                value += step * volatility;
            }
            value
        })
        .collect()
}

fn benchmark(processor: &dyn Process<f64>, data: &Data<f64>, iterations: usize) -> BenchmarkResult {
    let name = processor.name();
    tracing::info!(processor = %name, iterations, "benchmarking");

    let mut times = Vec::with_capacity(iterations);

    for _ in 0..iterations {
        let start = Instant::now();
        let out = processor.process(data);
        let elapsed = start.elapsed().as_secs_f64() * 1000.0;
        debug_assert_eq!(out.len(), data.len());
        times.push(elapsed);
    }

    let total_time: f64 = times.iter().sum();
    let avg_time = total_time / iterations.max(1) as f64;
    let min_time = times.iter().copied().fold(f64::INFINITY, f64::min);
    let max_time = times.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let throughput = if avg_time > 0.0 {
        (data.len() as f64 / avg_time) * 1000.0
    } else {
        0.0
    };

    BenchmarkResult {
        name,
        values: data.len(),
        iterations,
        total_time_ms: total_time,
        avg_time_ms: avg_time,
        min_time_ms: min_time,
        max_time_ms: max_time,
        throughput_values_per_sec: throughput,
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let data = random_walk(100.0, 1.0, args.len, args.seed);
    tracing::info!(len = data.len(), seed = args.seed, "generated series");

    let factories: Vec<Processor<f64>> = vec![
        processors::scale(-1.0, 1.0),
        processors::percent_scale(),
        processors::standardize(),
        processors::clip(95.0, 105.0),
        processors::clip_lower(100.0),
        processors::clip_upper(100.0),
    ];

    let mut stages: Vec<Box<dyn Process<f64>>> = Vec::new();
    for processor in factories {
        stages.push(Box::new(processor));
    }
    stages.push(Box::new(
        ProcessorPipeline::new()
            .add(processors::clip(95.0, 105.0))
            .add(processors::standardize()),
    ));

    if let Some(json) = &args.pipeline {
        let configs: Vec<ProcessorConfig> = serde_json::from_str(json)?;
        let pipeline = ProcessorPipeline::from_configs(&configs)?;
        tracing::info!(pipeline = %pipeline.name(), "loaded custom pipeline");
        stages.push(Box::new(pipeline));
    }

    let results: Vec<BenchmarkResult> = stages
        .iter()
        .map(|stage| benchmark(stage.as_ref(), &data, args.iterations))
        .collect();

    println!("{}", serde_json::to_string(&results)?);
    Ok(())
}
