//! Error types untuk codec dan harness
//!
//! Dua kelas error, keduanya fatal:
//! - `DecodeError`: buffer bukan encoding valid dari schema
//! - `BenchError`: I/O gagal atau decode gagal di tengah benchmark

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Error saat decode satu frame
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("frame of {len} bytes is shorter than the 4-byte length header")]
    Truncated { len: usize },

    #[error("length header declares {declared} bytes but only {available} remain")]
    LengthOverflow { declared: usize, available: usize },

    #[error("malformed structured record: {0}")]
    Malformed(#[from] prost::DecodeError),
}

/// Error yang menghentikan seluruh run
#[derive(Error, Debug)]
pub enum BenchError {
    #[error("I/O error on {}: {source}", .path.display())]
    File { path: PathBuf, source: io::Error },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("decode failed: {0}")]
    Decode(#[from] DecodeError),
}

impl BenchError {
    /// Bungkus `io::Error` dengan path file yang sedang diproses
    pub fn file(path: impl Into<PathBuf>) -> impl FnOnce(io::Error) -> Self {
        let path = path.into();
        move |source| Self::File { path, source }
    }
}

pub type DecodeResult<T> = Result<T, DecodeError>;

pub type BenchResult<T> = Result<T, BenchError>;
