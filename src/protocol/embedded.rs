//! Embedded-Field Codec
//!
//! Payload jadi field `bytes` di dalam satu protobuf message.
//! Encode meng-copy payload sekali ke blob, decode me-slice payload dari input.

use bytes::Bytes;
use std::io::{self, Write};

use super::message::{decode_record, encode_record, EmbeddedRecord, Record};
use super::Codec;
use crate::error::DecodeResult;

/// Serialize `{str, num, payload}` ke satu blob
#[inline(always)]
pub fn encode(payload: &Bytes) -> Bytes {
    Bytes::from(encode_record(&EmbeddedRecord::new(payload.clone())))
}

/// Parse blob hasil `encode`
#[inline(always)]
pub fn decode(frame: Bytes) -> DecodeResult<Record> {
    let record: EmbeddedRecord = decode_record(frame)?;
    Ok(record.into())
}

/// Strategi (a): payload di dalam schema
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedCodec;

impl Codec for EmbeddedCodec {
    const LABEL: &'static str = "build protocol buffer with bytes";
    const SUFFIX: &'static str = "with";

    fn encode(&self, payload: &Bytes) -> Bytes {
        encode(payload)
    }

    fn decode(&self, frame: Bytes) -> DecodeResult<Record> {
        decode(frame)
    }

    /// Tulis ulang record hasil decode sebagai satu message
    fn write_decoded<W: Write>(&self, record: &Record, out: &mut W) -> io::Result<()> {
        let message = EmbeddedRecord {
            text: record.text.clone(),
            payload: record.payload.clone(),
            num: record.num,
        };
        out.write_all(&encode_record(&message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::message::{NUM, TEXT};

    #[test]
    fn test_encode_decode_single() {
        let payload = Bytes::from_static(b"Hello, payload!");
        let decoded = decode(encode(&payload)).unwrap();

        assert_eq!(decoded.text, TEXT);
        assert_eq!(decoded.num, NUM);
        assert_eq!(decoded.payload, payload);
    }

    #[test]
    fn test_empty_payload() {
        let decoded = decode(encode(&Bytes::new())).unwrap();
        assert_eq!(decoded, Record::expected(Bytes::new()));
    }

    #[test]
    fn test_truncated_blob_fails() {
        let frame = encode(&Bytes::from(vec![0xAB; 300]));
        let cut = frame.slice(..frame.len() - 10);
        assert!(decode(cut).is_err());
    }

    #[test]
    fn test_write_decoded_reproduces_frame() {
        let payload = Bytes::from(vec![1, 2, 3, 4, 5]);
        let frame = encode(&payload);
        let record = decode(frame.clone()).unwrap();

        let mut out: Vec<u8> = Vec::new();
        EmbeddedCodec.write_decoded(&record, &mut out).unwrap();
        assert_eq!(out, frame.as_ref());
    }
}
