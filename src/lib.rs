//! Lampiran - Payload Attachment Benchmark
//!
//! Membandingkan dua cara menempelkan payload besar ke record kecil:
//! - Embedded: payload sebagai field `bytes` di dalam protobuf message
//! - Trailer: `[len u32 BE][protobuf {str, num}][payload mentah]`

pub mod config;
pub mod error;
pub mod harness;
pub mod protocol;

pub use config::{BenchConfig, SizeUnit, SweepPoint};
pub use error::{BenchError, BenchResult, DecodeError, DecodeResult};
pub use protocol::{Codec, EmbeddedCodec, Record, TrailerCodec};
