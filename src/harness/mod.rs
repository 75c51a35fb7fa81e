//! Benchmark harness
//!
//! Alur per konfigurasi:
//! - generate payload acak dari RNG milik harness
//! - jalankan encode/decode N kali dengan timing wall-clock
//! - report rata-rata milidetik per operasi

pub mod payload;
pub mod runner;
pub mod sweep;

pub use payload::{bench_rng, generate_random_payloads};
pub use runner::{run_deserialize_benchmark, run_serialize_benchmark, DeserializeInputs, Measurement};
pub use sweep::{Pipeline, PointResult};
