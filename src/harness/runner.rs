//! Timed serialize / deserialize loops
//!
//! Setiap loop diukur dengan wall-clock dari operasi pertama sampai terakhir.
//! Flush ikut di dalam region yang diukur. File handle hanya hidup selama
//! satu pass dan di-drop di setiap jalur keluar, termasuk saat error.

use bytes::Bytes;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::config::BenchConfig;
use crate::error::{BenchError, BenchResult};
use crate::harness::payload::random_payload;
use crate::protocol::{Codec, EmbeddedCodec, TrailerCodec};

/// Hasil satu loop benchmark
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    pub total: Duration,
    pub ops: usize,
}

impl Measurement {
    /// Rata-rata milidetik per operasi (0.0 jika tidak ada operasi)
    #[inline(always)]
    pub fn avg_millis(&self) -> f64 {
        if self.ops == 0 {
            return 0.0;
        }
        self.total.as_nanos() as f64 / 1_000_000.0 / self.ops as f64
    }

    /// Rasio latency `self` terhadap `baseline`
    pub fn ratio_to(&self, baseline: &Measurement) -> Option<f64> {
        let base = baseline.avg_millis();
        if base > 0.0 {
            Some(self.avg_millis() / base)
        } else {
            None
        }
    }
}

/// Encode setiap payload dan tulis ke `out`, flush setelah setiap write
pub fn run_serialize_benchmark<C: Codec, W: Write>(
    codec: &C,
    payloads: &[Bytes],
    out: &mut W,
) -> BenchResult<Measurement> {
    let start = Instant::now();
    for payload in payloads {
        let frame = codec.encode(payload);
        out.write_all(&frame)?;
        out.flush()?;
    }
    let total = start.elapsed();

    Ok(Measurement {
        total,
        ops: payloads.len(),
    })
}

/// Baca, decode, lalu tulis hasil decode setiap file ke `out`
///
/// Setiap file harus hasil `encode` dari codec yang sama.
pub fn run_deserialize_benchmark<C: Codec, W: Write>(
    codec: &C,
    files: &[PathBuf],
    out: &mut W,
) -> BenchResult<Measurement> {
    let start = Instant::now();
    for path in files {
        let frame = read_frame(path)?;
        let record = codec.decode(frame)?;
        codec.write_decoded(&record, out)?;
        out.flush()?;
    }
    let total = start.elapsed();

    Ok(Measurement {
        total,
        ops: files.len(),
    })
}

/// Isi penuh satu file sebagai frame
#[inline(always)]
pub fn read_frame(path: &Path) -> BenchResult<Bytes> {
    let buf = fs::read(path).map_err(BenchError::file(path))?;
    Ok(Bytes::from(buf))
}

/// Tulis satu frame ke file baru: create, write, flush, close
pub fn write_frame(path: &Path, frame: &[u8]) -> BenchResult<()> {
    let mut file = File::create(path).map_err(BenchError::file(path))?;
    file.write_all(frame).map_err(BenchError::file(path))?;
    file.flush().map_err(BenchError::file(path))?;
    Ok(())
}

/// File input untuk pipeline deserialize, satu pasang per index
#[derive(Debug, Default)]
pub struct DeserializeInputs {
    /// `<base><i>.with`
    pub embedded: Vec<PathBuf>,
    /// `<base><i>.without`
    pub trailer: Vec<PathBuf>,
}

impl DeserializeInputs {
    /// Generate `count` payload dan tulis masing-masing dengan kedua codec
    ///
    /// Payload dibuat satu per satu supaya konfigurasi besar tidak perlu
    /// menahan semua payload di memory sekaligus.
    pub fn prepare<R: rand::RngCore + ?Sized>(
        config: &BenchConfig,
        rng: &mut R,
        count: usize,
        size: usize,
    ) -> BenchResult<Self> {
        let mut inputs = Self {
            embedded: Vec::with_capacity(count),
            trailer: Vec::with_capacity(count),
        };

        for index in 0..count {
            let payload = random_payload(rng, size);
            inputs
                .embedded
                .push(write_input(&EmbeddedCodec, config, index, &payload)?);
            inputs
                .trailer
                .push(write_input(&TrailerCodec, config, index, &payload)?);
        }

        Ok(inputs)
    }

    /// Hapus semua file input
    pub fn remove(self) -> BenchResult<()> {
        for path in self.embedded.iter().chain(self.trailer.iter()) {
            fs::remove_file(path).map_err(BenchError::file(path))?;
        }
        Ok(())
    }
}

fn write_input<C: Codec>(
    codec: &C,
    config: &BenchConfig,
    index: usize,
    payload: &Bytes,
) -> BenchResult<PathBuf> {
    let path = config.input_path(index, C::SUFFIX);
    write_frame(&path, &codec.encode(payload))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harness::payload::{bench_rng, generate_random_payloads};
    use crate::protocol::{embedded, trailer, Record};

    fn config_in(dir: &Path) -> BenchConfig {
        BenchConfig {
            work_dir: dir.to_path_buf(),
            ..BenchConfig::default()
        }
    }

    #[test]
    fn test_avg_millis() {
        let m = Measurement {
            total: Duration::from_millis(50),
            ops: 10,
        };
        assert!((m.avg_millis() - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_avg_millis_zero_ops() {
        let m = Measurement {
            total: Duration::from_millis(50),
            ops: 0,
        };
        assert_eq!(m.avg_millis(), 0.0);
        assert_eq!(
            Measurement {
                total: Duration::from_millis(3),
                ops: 1
            }
            .ratio_to(&m),
            None
        );
    }

    #[test]
    fn test_serialize_writes_every_frame() {
        let payloads = generate_random_payloads(&mut bench_rng(Some(3)), 5, 100);
        let mut out: Vec<u8> = Vec::new();

        let m = run_serialize_benchmark(&TrailerCodec, &payloads, &mut out).unwrap();
        assert_eq!(m.ops, 5);

        let frame_len = trailer::LENGTH_HEADER_SIZE + 7 + 100;
        assert_eq!(out.len(), 5 * frame_len);
        for (chunk, payload) in out.chunks(frame_len).zip(&payloads) {
            let record = trailer::decode(Bytes::copy_from_slice(chunk)).unwrap();
            assert_eq!(record, Record::expected(payload.clone()));
        }
    }

    #[test]
    fn test_prepare_and_deserialize() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        let mut rng = bench_rng(Some(11));

        let inputs = DeserializeInputs::prepare(&config, &mut rng, 3, 256).unwrap();
        assert_eq!(inputs.embedded[2], dir.path().join("tmp2.with"));
        assert_eq!(inputs.trailer[0], dir.path().join("tmp0.without"));

        // Kedua file index yang sama membawa payload yang sama
        for (with, without) in inputs.embedded.iter().zip(&inputs.trailer) {
            let a = embedded::decode(read_frame(with).unwrap()).unwrap();
            let b = trailer::decode(read_frame(without).unwrap()).unwrap();
            assert_eq!(a, b);
        }

        let mut out: Vec<u8> = Vec::new();
        let m = run_deserialize_benchmark(&EmbeddedCodec, &inputs.embedded, &mut out).unwrap();
        assert_eq!(m.ops, 3);
        let m = run_deserialize_benchmark(&TrailerCodec, &inputs.trailer, &mut out).unwrap();
        assert_eq!(m.ops, 3);

        // embedded: 5 + 1 + 2 + 256 + 2, trailer tanpa length header: 7 + 256
        assert_eq!(out.len(), 3 * 266 + 3 * 263);

        inputs.remove().unwrap();
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_deserialize_wrong_codec_fails() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        let inputs = DeserializeInputs::prepare(&config, &mut bench_rng(Some(5)), 1, 8).unwrap();

        // Blob embedded dibaca sebagai trailer: length header jadi sangat besar
        let mut out: Vec<u8> = Vec::new();
        let result = run_deserialize_benchmark(&TrailerCodec, &inputs.embedded, &mut out);
        assert!(matches!(result, Err(BenchError::Decode(_))));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("tmp0.with");

        let result = run_deserialize_benchmark(&EmbeddedCodec, &[missing.clone()], &mut Vec::<u8>::new());
        match result {
            Err(BenchError::File { path, .. }) => assert_eq!(path, missing),
            other => panic!("expected file error, got {:?}", other),
        }
    }
}
