//! Lampiran - Payload Attachment Benchmark
//!
//! Sweep standar:
//! - Serialize: encode + write + flush per payload
//! - Deserialize: read file + decode + write hasil per file
//!
//! Report ke stdout, log diagnostik ke stderr (`RUST_LOG`, default `info`).

use anyhow::{Context, Result};
use std::io;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use lampiran::harness::sweep;
use lampiran::BenchConfig;

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).compact())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("🚀 Lampiran - embedded bytes vs trailer bytes");
    println!("=============================================\n");

    let config = BenchConfig::default();
    info!(dir = %config.work_dir.display(), seed = ?config.seed, "starting sweep");

    let start = Instant::now();
    let stdout = io::stdout();
    let results = sweep::run(&config, &mut stdout.lock()).context("benchmark run aborted")?;

    info!(
        points = results.len(),
        elapsed_s = start.elapsed().as_secs_f64(),
        "sweep complete"
    );
    println!("\n✅ All benchmarks complete!");
    Ok(())
}
