//! Top-level driver: iterasi matrix `(ops, size)` untuk kedua pipeline
//!
//! Report ditulis ke `report` (stdout di binary), log diagnostik ke tracing.

use rand::RngCore;
use std::fmt;
use std::fs::{self, File};
use std::io::Write;
use tracing::{debug, info};

use crate::config::{BenchConfig, SweepPoint};
use crate::error::{BenchError, BenchResult};
use crate::harness::payload::{bench_rng, generate_random_payloads};
use crate::harness::runner::{
    run_deserialize_benchmark, run_serialize_benchmark, DeserializeInputs, Measurement,
};
use crate::protocol::{Codec, EmbeddedCodec, TrailerCodec};

/// Pipeline yang diukur
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pipeline {
    Serialize,
    Deserialize,
}

impl fmt::Display for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Serialize => f.write_str("serialize"),
            Self::Deserialize => f.write_str("deserialize"),
        }
    }
}

/// Hasil satu konfigurasi untuk kedua strategi
#[derive(Debug, Clone, Copy)]
pub struct PointResult {
    pub pipeline: Pipeline,
    pub point: SweepPoint,
    pub embedded: Measurement,
    pub trailer: Measurement,
}

/// Jalankan seluruh sweep sesuai `config`
///
/// Error I/O atau decode pertama menghentikan run; tidak ada hasil parsial.
pub fn run<W: Write>(config: &BenchConfig, report: &mut W) -> BenchResult<Vec<PointResult>> {
    fs::create_dir_all(&config.work_dir).map_err(BenchError::file(&config.work_dir))?;

    let mut rng = bench_rng(config.seed);
    let mut results = Vec::new();

    if config.run_serialize {
        info!(points = config.serialize_sweep.len(), "serialize sweep");
        writeln!(report, "📊 Serialize Benchmark")?;
        for point in &config.serialize_sweep {
            results.push(serialize_point(config, &mut rng, point, report)?);
        }
    }

    if config.run_deserialize {
        info!(points = config.deserialize_sweep.len(), "deserialize sweep");
        writeln!(report, "📊 Deserialize Benchmark")?;
        for point in &config.deserialize_sweep {
            results.push(deserialize_point(config, &mut rng, point, report)?);
        }
    }

    if config.cleanup {
        fs::remove_dir_all(&config.work_dir).map_err(BenchError::file(&config.work_dir))?;
        debug!(dir = %config.work_dir.display(), "work dir removed");
    }

    Ok(results)
}

/// Satu konfigurasi serialize: kedua strategi menulis ke output yang sama
pub fn serialize_point<R: RngCore + ?Sized, W: Write>(
    config: &BenchConfig,
    rng: &mut R,
    point: &SweepPoint,
    report: &mut W,
) -> BenchResult<PointResult> {
    writeln!(report, "{}", point)?;
    debug!(ops = point.ops, bytes = point.payload_bytes(), "generating payloads");

    let payloads = generate_random_payloads(rng, point.ops, point.payload_bytes());

    let out_path = config.output_path();
    let mut out = File::create(&out_path).map_err(BenchError::file(&out_path))?;

    let embedded = run_serialize_benchmark(&EmbeddedCodec, &payloads, &mut out)?;
    report_line::<EmbeddedCodec, _>(report, &embedded)?;

    let trailer = run_serialize_benchmark(&TrailerCodec, &payloads, &mut out)?;
    report_line::<TrailerCodec, _>(report, &trailer)?;

    Ok(finish(Pipeline::Serialize, point, embedded, trailer))
}

/// Satu konfigurasi deserialize: siapkan file input, ukur, lalu bersihkan
pub fn deserialize_point<R: RngCore + ?Sized, W: Write>(
    config: &BenchConfig,
    rng: &mut R,
    point: &SweepPoint,
    report: &mut W,
) -> BenchResult<PointResult> {
    writeln!(report, "{}", point)?;
    debug!(ops = point.ops, bytes = point.payload_bytes(), "writing input files");

    let inputs = DeserializeInputs::prepare(config, rng, point.ops, point.payload_bytes())?;

    let out_path = config.output_path();
    let mut out = File::create(&out_path).map_err(BenchError::file(&out_path))?;

    let embedded = run_deserialize_benchmark(&EmbeddedCodec, &inputs.embedded, &mut out)?;
    report_line::<EmbeddedCodec, _>(report, &embedded)?;

    let trailer = run_deserialize_benchmark(&TrailerCodec, &inputs.trailer, &mut out)?;
    report_line::<TrailerCodec, _>(report, &trailer)?;

    if config.cleanup {
        inputs.remove()?;
    }

    Ok(finish(Pipeline::Deserialize, point, embedded, trailer))
}

fn report_line<C: Codec, W: Write>(report: &mut W, measurement: &Measurement) -> BenchResult<()> {
    writeln!(report, "{}", C::LABEL)?;
    writeln!(report, "{}", measurement.avg_millis())?;
    Ok(())
}

fn finish(
    pipeline: Pipeline,
    point: &SweepPoint,
    embedded: Measurement,
    trailer: Measurement,
) -> PointResult {
    info!(
        %pipeline,
        label = %point,
        embedded_ms = embedded.avg_millis(),
        trailer_ms = trailer.avg_millis(),
        "point done"
    );
    if let Some(ratio) = embedded.ratio_to(&trailer) {
        debug!(%pipeline, ratio, "embedded / trailer");
    }

    PointResult {
        pipeline,
        point: *point,
        embedded,
        trailer,
    }
}
