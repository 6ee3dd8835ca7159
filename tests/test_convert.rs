mod common;

use nibble_utoa::baseline::{fmt_utoa, loop_utoa};
use nibble_utoa::{convert, convert_with, try_convert, Buffer, ErrorKind, Integer, Tables32};

use crate::common::*;

#[test]
fn test_scenarios() {
    let test_cases: &[(&str, u64)] = &[
        ("0", 0),
        ("9", 9),
        ("15", 15),
        ("16", 16),
        ("950", 950),
        ("4096", 4096),
        ("1000000", 1_000_000),
        ("18446744073709551615", u64::MAX),
    ];

    for (expected, input) in test_cases {
        let mut buf = [0xffu8; 21];
        let s = convert(*input, &mut buf);
        assert_eq!(*expected, s);
        // terminated right after the digits
        assert_eq!(buf[expected.len()], 0);
    }
}

#[test]
fn test_max_of_every_width() {
    let mut buf = [0u8; 21];
    assert_eq!(convert(u8::MAX, &mut buf), "255");
    assert_eq!(convert(u16::MAX, &mut buf), "65535");
    assert_eq!(convert(u32::MAX, &mut buf), "4294967295");
    assert_eq!(convert(u64::MAX, &mut buf), "18446744073709551615");
    assert_eq!(convert(usize::MAX, &mut buf), usize::MAX.to_string());
}

#[test]
fn test_tight_buffers() {
    let mut buf = [0u8; 4];
    assert_eq!(convert(255u8, &mut buf), "255");
    let mut buf = [0u8; 6];
    assert_eq!(convert(65_535u16, &mut buf), "65535");
    let mut buf = [0u8; 11];
    assert_eq!(convert(4_294_967_295u32, &mut buf), "4294967295");
    let mut buf = [0u8; 21];
    assert_eq!(convert(u64::MAX, &mut buf), "18446744073709551615");
}

#[test]
fn test_every_u16_matches_fmt() {
    let mut buf = [0u8; 6];
    for n in 0..=u16::MAX {
        assert_eq!(convert(n, &mut buf), n.to_string());
    }
    let mut buf = [0u8; 4];
    for n in 0..=u8::MAX {
        assert_eq!(convert(n, &mut buf), n.to_string());
    }
}

#[test]
fn test_random_u32_matches_fmt() {
    use rand::{rngs::StdRng, Rng, SeedableRng};

    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut buf = [0u8; 11];
    for _ in 0..100_000 {
        let n: u32 = rng.gen();
        assert_eq!(convert(n, &mut buf), n.to_string());
    }
}

#[test]
fn test_u64_matches_oracles() {
    let mut values = create_payload(PAYLOAD_LEN, 1);
    values.extend(create_wide_payload(2));
    values.extend(decimal_boundaries());

    verify_correctness(&values, fmt_utoa, table_utoa);
    verify_correctness(&values, fmt_utoa, loop_utoa);
}

#[test]
fn test_no_leading_zeros() {
    let mut values = create_wide_payload(3);
    values.extend(decimal_boundaries());

    let mut buf = [0u8; 21];
    for n in values {
        let s = convert(n, &mut buf);
        if n == 0 {
            assert_eq!(s, "0");
        } else {
            assert!(!s.starts_with('0'), "{} rendered as {}", n, s);
        }
    }
}

#[test]
fn test_explicit_tables() {
    let tables = Tables32::build();
    let mut buf = [0u8; 11];
    assert_eq!(convert_with(950u32, &tables, &mut buf), "950");
    assert_eq!(convert_with(0u32, &tables, &mut buf), "0");
    assert_eq!(convert_with(u32::MAX, &tables, &mut buf), "4294967295");
}

#[test]
fn test_try_convert_capacity() {
    let mut buf = [0u8; 20];
    let err = try_convert(1u64, &mut buf).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Capacity { len: 21, cap: 20 });
    assert_eq!(
        err.to_string(),
        "attempted to write 21 bytes into a buffer with capacity 20"
    );

    let mut buf = [0u8; 11];
    assert_eq!(try_convert(7u32, &mut buf).unwrap(), "7");
}

#[test]
#[cfg_attr(not(any(debug_assertions, feature = "checked")), ignore)]
#[should_panic]
fn test_short_buffer_is_a_contract_failure() {
    let mut buf = [0u8; 10];
    convert(1u32, &mut buf);
}

#[test]
fn test_buffer() {
    let mut buf = Buffer::default();
    assert!(buf.is_empty());

    assert_eq!(buf.format(950u64), "950");
    assert_eq!(buf.len(), 3);
    assert_eq!(buf.as_bytes(), b"950");

    assert_eq!(buf.format(0u8), "0");
    assert_eq!(buf.as_str(), "0");

    buf.format(u64::MAX);
    assert_eq!(buf.to_array_string().as_str(), "18446744073709551615");
    assert_eq!(format!("{:?}", buf), "\"18446744073709551615\"");
}

#[test]
fn test_buf_len() {
    assert_eq!(<u8 as Integer>::BUF_LEN, 4);
    assert_eq!(<u16 as Integer>::BUF_LEN, 6);
    assert_eq!(<u32 as Integer>::BUF_LEN, 11);
    assert_eq!(<u64 as Integer>::BUF_LEN, 21);
}
