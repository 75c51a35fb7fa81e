//! Protocol Layer: dua cara menempelkan payload ke record kecil
//!
//! Prinsip desain:
//! - Embedded: payload ikut di-serialize sebagai field `bytes`
//! - Trailer: hanya `{str, num}` yang di-serialize, payload ditempel mentah
//! - Pure: encode/decode tidak punya side effect

pub mod embedded;
pub mod message;
pub mod trailer;

use bytes::Bytes;
use std::io::{self, Write};

use crate::error::DecodeResult;

pub use embedded::EmbeddedCodec;
pub use message::{EmbeddedRecord, HeaderRecord, Record, NUM, TEXT};
pub use trailer::{TrailerCodec, LENGTH_HEADER_SIZE};

/// Satu strategi encode/decode yang bisa di-benchmark harness
pub trait Codec {
    /// Label strategi di report
    const LABEL: &'static str;
    /// Suffix file input untuk pipeline deserialize
    const SUFFIX: &'static str;

    fn encode(&self, payload: &Bytes) -> Bytes;

    fn decode(&self, frame: Bytes) -> DecodeResult<Record>;

    /// Tulis field hasil decode ke output stream bersama
    fn write_decoded<W: Write>(&self, record: &Record, out: &mut W) -> io::Result<()>;
}
