//! Benchmark configuration
//!
//! Semua parameter sweep adalah konstanta compile-time. Tidak ada CLI flag
//! atau file konfigurasi; `BenchConfig::default()` adalah run standar.

use std::fmt;
use std::path::PathBuf;

/// Direktori kerja untuk semua file benchmark
pub const WORK_DIR: &str = "lampiran_work";
/// Nama dasar file: `<base>` untuk output bersama, `<base><i>.<suffix>` untuk input
pub const BASE_NAME: &str = "tmp";

pub const RUN_SERIALIZE: bool = true;
pub const RUN_DESERIALIZE: bool = true;

/// Satuan ukuran payload (desimal, seperti label report)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeUnit {
    /// 1 kb = 1000 bytes
    Kb,
    /// 1 mb = 1_000_000 bytes
    Mb,
}

impl SizeUnit {
    #[inline(always)]
    pub const fn bytes(self) -> usize {
        match self {
            Self::Kb => 1_000,
            Self::Mb => 1_000_000,
        }
    }
}

impl fmt::Display for SizeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Kb => f.write_str("kb"),
            Self::Mb => f.write_str("mb"),
        }
    }
}

/// Satu titik di matrix `(operation_count, payload_size)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepPoint {
    /// Jumlah operasi (= jumlah payload)
    pub ops: usize,
    /// Ukuran payload dalam `unit`
    pub size: usize,
    pub unit: SizeUnit,
}

impl SweepPoint {
    pub const fn new(ops: usize, size: usize, unit: SizeUnit) -> Self {
        Self { ops, size, unit }
    }

    #[inline(always)]
    pub const fn payload_bytes(&self) -> usize {
        self.size * self.unit.bytes()
    }
}

impl fmt::Display for SweepPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "test on size ({}): {}", self.unit, self.size)
    }
}

/// Matrix standar, dipakai oleh kedua pipeline
pub const STANDARD_SWEEP: [SweepPoint; 6] = [
    SweepPoint::new(1000, 1, SizeUnit::Kb),
    SweepPoint::new(1000, 10, SizeUnit::Kb),
    SweepPoint::new(1000, 100, SizeUnit::Kb),
    SweepPoint::new(1000, 1000, SizeUnit::Kb),
    SweepPoint::new(100, 10, SizeUnit::Mb),
    SweepPoint::new(10, 100, SizeUnit::Mb),
];

/// Konfigurasi satu run
#[derive(Debug, Clone)]
pub struct BenchConfig {
    pub work_dir: PathBuf,
    pub base_name: String,
    pub run_serialize: bool,
    pub run_deserialize: bool,
    pub serialize_sweep: Vec<SweepPoint>,
    pub deserialize_sweep: Vec<SweepPoint>,
    /// `None` = seed dari entropy OS, sekali per proses
    pub seed: Option<u64>,
    /// Hapus file input setelah tiap konfigurasi dan work dir di akhir run
    pub cleanup: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            work_dir: PathBuf::from(WORK_DIR),
            base_name: BASE_NAME.to_string(),
            run_serialize: RUN_SERIALIZE,
            run_deserialize: RUN_DESERIALIZE,
            serialize_sweep: STANDARD_SWEEP.to_vec(),
            deserialize_sweep: STANDARD_SWEEP.to_vec(),
            seed: None,
            cleanup: true,
        }
    }
}

impl BenchConfig {
    /// File output bersama untuk satu konfigurasi
    pub fn output_path(&self) -> PathBuf {
        self.work_dir.join(&self.base_name)
    }

    /// File input ke-`index` untuk codec dengan `suffix`
    pub fn input_path(&self, index: usize, suffix: &str) -> PathBuf {
        self.work_dir
            .join(format!("{}{}.{}", self.base_name, index, suffix))
    }
}
