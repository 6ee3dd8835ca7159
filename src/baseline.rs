//! Conventional converters used as correctness oracles and benchmark baselines.

use core::fmt::{self, Write};
use core::str;

/// Division-loop conversion that writes backward from the end of `buf`.
///
/// The last byte of `buf` receives the NUL terminator and the digits are
/// written right before it, so the returned string generally does not start
/// at `buf[0]`.
pub fn loop_utoa(mut n: u64, buf: &mut [u8]) -> &str {
    contract_assert!(!buf.is_empty(), "no room for the terminator");

    let end = buf.len() - 1;
    buf[end] = 0;

    let mut curr = end;
    loop {
        contract_assert!(curr > 0, "buffer of {} bytes is too short", buf.len());
        curr -= 1;
        buf[curr] = (n % 10) as u8 + b'0';
        n /= 10;
        if n == 0 {
            break;
        }
    }

    // SAFETY: every byte in `buf[curr..end]` is an ASCII digit.
    unsafe { str::from_utf8_unchecked(&buf[curr..end]) }
}

/// Conversion through `core::fmt`, written to the start of `buf` and
/// NUL-terminated.
pub fn fmt_utoa(n: u64, buf: &mut [u8]) -> &str {
    let len = {
        let mut writer = SliceWriter { buf: &mut *buf, pos: 0 };
        let res = write!(writer, "{}", n);
        contract_assert!(res.is_ok(), "buffer of {} bytes is too short", writer.buf.len());
        writer.pos
    };

    contract_assert!(len < buf.len(), "no room for the terminator");
    buf[len] = 0;

    // SAFETY: `u64` formats to ASCII digits only.
    unsafe { str::from_utf8_unchecked(&buf[..len]) }
}

struct SliceWriter<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl Write for SliceWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let bytes = s.as_bytes();
        let end = self.pos + bytes.len();
        if end > self.buf.len() {
            return Err(fmt::Error);
        }
        self.buf[self.pos..end].copy_from_slice(bytes);
        self.pos = end;
        Ok(())
    }
}
