//! Length-Prefixed Trailer Codec
//!
//! Frame: `[len(blob): u32 BE][blob {str, num}][payload raw]`
//!
//! Blob tidak pernah memuat payload, jadi ukurannya konstan.
//! Decode mengembalikan payload sebagai slice dari frame (zero-copy).

use bytes::{Buf, BufMut, Bytes, BytesMut};
use std::io::{self, Write};

use super::message::{decode_record, encode_record, HeaderRecord, Record};
use super::Codec;
use crate::error::{DecodeError, DecodeResult};

/// Ukuran length header di depan blob
pub const LENGTH_HEADER_SIZE: usize = 4;

/// Bangun frame `header ++ blob ++ payload`
#[inline(always)]
pub fn encode(payload: &Bytes) -> Bytes {
    let blob = encode_record(&HeaderRecord::new());
    debug_assert!(blob.len() <= u32::MAX as usize);

    let mut frame = BytesMut::with_capacity(LENGTH_HEADER_SIZE + blob.len() + payload.len());
    frame.put_u32(blob.len() as u32);
    frame.put_slice(&blob);
    frame.put_slice(payload);
    frame.freeze()
}

/// Pisahkan frame menjadi record dan payload
#[inline(always)]
pub fn decode(mut frame: Bytes) -> DecodeResult<Record> {
    if frame.len() < LENGTH_HEADER_SIZE {
        return Err(DecodeError::Truncated { len: frame.len() });
    }

    let declared = frame.get_u32() as usize;
    if declared > frame.len() {
        return Err(DecodeError::LengthOverflow {
            declared,
            available: frame.len(),
        });
    }

    let blob = frame.split_to(declared);
    let header: HeaderRecord = decode_record(blob)?;

    Ok(Record {
        text: header.text,
        num: header.num,
        payload: frame,
    })
}

/// Panjang blob yang tercatat di length header
#[inline(always)]
pub fn blob_len(frame: &[u8]) -> DecodeResult<usize> {
    match frame.get(..LENGTH_HEADER_SIZE) {
        Some(mut header) => Ok(header.get_u32() as usize),
        None => Err(DecodeError::Truncated { len: frame.len() }),
    }
}

/// Strategi (b): payload ditempel setelah blob
#[derive(Debug, Clone, Copy, Default)]
pub struct TrailerCodec;

impl Codec for TrailerCodec {
    const LABEL: &'static str = "append bytes to the end";
    const SUFFIX: &'static str = "without";

    fn encode(&self, payload: &Bytes) -> Bytes {
        encode(payload)
    }

    fn decode(&self, frame: Bytes) -> DecodeResult<Record> {
        decode(frame)
    }

    /// Tulis blob header lalu payload, tanpa length header
    fn write_decoded<W: Write>(&self, record: &Record, out: &mut W) -> io::Result<()> {
        let header = HeaderRecord {
            text: record.text.clone(),
            num: record.num,
        };
        out.write_all(&encode_record(&header))?;
        out.write_all(&record.payload)
    }
}
