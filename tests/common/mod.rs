#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const PAYLOAD_LEN: usize = 1000;

/// Signature shared by every converter under test.
pub type Utoa = fn(u64, &mut [u8]) -> &str;

/// Values in `0..1000`, with 950 and 0 forced at the front.
pub fn create_payload(len: usize, seed: u64) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut payload: Vec<u64> = (0..len).map(|_| rng.gen_range(0..1000)).collect();
    payload[0] = 950;
    payload[1] = 0;
    payload
}

/// Values spread over the whole `u64` range, one per bit length.
pub fn create_wide_payload(seed: u64) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..64)
        .flat_map(|bits| {
            let hi = u64::MAX >> (63 - bits);
            let lo = hi >> 1;
            let mut rng = StdRng::seed_from_u64(rng.gen());
            (0..32).map(move |_| rng.gen_range(lo..=hi))
        })
        .collect()
}

/// Powers of ten and their neighbours, where carries ripple furthest.
pub fn decimal_boundaries() -> Vec<u64> {
    let mut values = vec![0, 1, u64::MAX - 1, u64::MAX];
    let mut p = 10u64;
    loop {
        values.extend_from_slice(&[p - 1, p, p + 1]);
        match p.checked_mul(10) {
            Some(next) => p = next,
            None => break,
        }
    }
    values
}

/// Asserts that both converters render every value identically.
pub fn verify_correctness(values: &[u64], expected: Utoa, actual: Utoa) {
    for &n in values {
        let mut buf1 = [0u8; 21];
        let mut buf2 = [0u8; 21];
        let s1 = expected(n, &mut buf1);
        let s2 = actual(n, &mut buf2);
        assert_eq!(s1, s2, "conversion is incorrect for {}", n);
    }
}

pub fn table_utoa(n: u64, buf: &mut [u8]) -> &str {
    nibble_utoa::convert(n, buf)
}
