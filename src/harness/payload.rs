//! Random payload generation
//!
//! RNG dimiliki harness dan di-seed sekali per proses, lalu dipinjam
//! oleh setiap pemanggilan generator.

use bytes::Bytes;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

/// RNG untuk satu run benchmark
///
/// `Some(seed)` memberi payload deterministik (dipakai test),
/// `None` mengambil seed dari entropy OS.
pub fn bench_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// `count` payload acak, masing-masing tepat `size` bytes
pub fn generate_random_payloads<R: RngCore + ?Sized>(
    rng: &mut R,
    count: usize,
    size: usize,
) -> Vec<Bytes> {
    (0..count).map(|_| random_payload(rng, size)).collect()
}

/// Satu payload acak
#[inline(always)]
pub fn random_payload<R: RngCore + ?Sized>(rng: &mut R, size: usize) -> Bytes {
    let mut buf = vec![0u8; size];
    rng.fill_bytes(&mut buf);
    Bytes::from(buf)
}
