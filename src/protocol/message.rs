//! Structured Record Schemas (protobuf)
//!
//! Layout embedded (satu blob):
//! ┌──────────────────────────────────────────────┐
//! │ str: string (1) │ payload: bytes (2) │ num: int32 (3) │
//! └──────────────────────────────────────────────┘
//!
//! Layout trailer (payload di luar schema):
//! ┌────────────────┬──────────────────────────┬─────────────────┐
//! │ len(blob): u32 │ str: string (1), num (2) │ payload (raw)   │
//! └────────────────┴──────────────────────────┴─────────────────┘
//!
//! Kedua schema lewat satu pasangan generic `encode_record` / `decode_record`.

use bytes::{Buf, Bytes};
use prost::Message;

use crate::error::DecodeResult;

/// Nilai `str` yang ditulis encoder
pub const TEXT: &str = "foo";
/// Nilai `num` yang ditulis encoder
pub const NUM: i32 = 42;

/// Record dengan payload sebagai field native
#[derive(Clone, PartialEq, Message)]
pub struct EmbeddedRecord {
    /// Field `str` di schema
    #[prost(string, tag = "1")]
    pub text: String,
    #[prost(bytes = "bytes", tag = "2")]
    pub payload: Bytes,
    #[prost(int32, tag = "3")]
    pub num: i32,
}

/// Record tanpa payload, dipakai sebagai blob di depan trailer
#[derive(Clone, PartialEq, Message)]
pub struct HeaderRecord {
    /// Field `str` di schema
    #[prost(string, tag = "1")]
    pub text: String,
    #[prost(int32, tag = "2")]
    pub num: i32,
}

impl EmbeddedRecord {
    pub fn new(payload: Bytes) -> Self {
        Self {
            text: TEXT.to_owned(),
            payload,
            num: NUM,
        }
    }
}

impl HeaderRecord {
    pub fn new() -> Self {
        Self {
            text: TEXT.to_owned(),
            num: NUM,
        }
    }
}

/// Hasil decode, sama untuk kedua codec
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub text: String,
    pub num: i32,
    pub payload: Bytes,
}

impl Record {
    /// Record yang diharapkan setelah round-trip `payload`
    pub fn expected(payload: Bytes) -> Self {
        Self {
            text: TEXT.to_owned(),
            num: NUM,
            payload,
        }
    }
}

impl From<EmbeddedRecord> for Record {
    fn from(record: EmbeddedRecord) -> Self {
        Self {
            text: record.text,
            num: record.num,
            payload: record.payload,
        }
    }
}

/// Serialize schema apa pun ke blob
#[inline(always)]
pub fn encode_record<M: Message>(record: &M) -> Vec<u8> {
    record.encode_to_vec()
}

/// Parse blob kembali ke schema `M`
///
/// Field `bytes` di-slice tanpa copy jika `buf` adalah `Bytes`.
#[inline(always)]
pub fn decode_record<M: Message + Default>(buf: impl Buf) -> DecodeResult<M> {
    Ok(M::decode(buf)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_blob_size() {
        // tag+len+"foo" (5) + tag+varint(42) (2)
        assert_eq!(encode_record(&HeaderRecord::new()).len(), 7);
    }

    #[test]
    fn test_embedded_overhead_one_byte() {
        let blob = encode_record(&EmbeddedRecord::new(Bytes::from_static(&[7])));
        assert_eq!(blob.len(), 10);
    }

    #[test]
    fn test_generic_roundtrip_both_schemas() {
        let header: HeaderRecord = decode_record(&encode_record(&HeaderRecord::new())[..]).unwrap();
        assert_eq!(header.text, TEXT);
        assert_eq!(header.num, NUM);

        let blob = Bytes::from(encode_record(&EmbeddedRecord::new(Bytes::from_static(b"abc"))));
        let embedded: EmbeddedRecord = decode_record(blob).unwrap();
        assert_eq!(Record::from(embedded), Record::expected(Bytes::from_static(b"abc")));
    }

    #[test]
    fn test_decode_garbage_fails() {
        // wire type 7 tidak valid
        let result: DecodeResult<HeaderRecord> = decode_record(&[0x0f, 0xff][..]);
        assert!(result.is_err());
    }
}
