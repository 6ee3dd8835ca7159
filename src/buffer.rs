use core::str;

use arrayvec::ArrayString;

use crate::constants::{MAX_BUF_LEN, U64_MAX_LEN};
use crate::itoa::Integer;

/// <b><u>A key type</u></b>. Represents a stack-allocated buffer you can use to get a
/// decimal `&str` without heap allocation.
///
/// # Example
/// ```
/// use nibble_utoa::Buffer;
///
/// let mut buf = Buffer::new();
/// assert_eq!(buf.format(18_446_744_073_709_551_615u64), "18446744073709551615");
/// assert_eq!(buf.len(), 20);
/// ```
#[derive(Copy, Clone)]
pub struct Buffer {
    inner: [u8; MAX_BUF_LEN],
    len: usize,
}

impl Buffer {
    /// Constructs a new, empty buffer.
    #[inline(always)]
    pub const fn new() -> Buffer {
        Buffer {
            inner: [0; MAX_BUF_LEN],
            len: 0,
        }
    }

    /// Writes `n` into the buffer, replacing its contents, and returns the digits.
    #[cfg(feature = "std")]
    #[inline]
    pub fn format<N: Integer>(&mut self, n: N) -> &str {
        self.len = crate::convert(n, &mut self.inner).len();
        self.as_str()
    }

    /// Like [`format`](Self::format), with an explicit table set.
    #[inline]
    pub fn format_with<N: Integer>(&mut self, n: N, tables: &N::Tables) -> &str {
        self.len = crate::convert_with(n, tables, &mut self.inner).len();
        self.as_str()
    }

    /// Returns a `&[u8]` view of the digits.
    #[inline(always)]
    pub fn as_bytes(&self) -> &[u8] {
        &self.inner[..self.len]
    }

    /// Returns a `&str` view of the digits.
    #[inline(always)]
    pub fn as_str(&self) -> &str {
        // SAFETY: only the converters write to `inner`, and they emit ASCII digits.
        unsafe { str::from_utf8_unchecked(self.as_bytes()) }
    }

    /// Returns the number of digits.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if nothing has been formatted yet.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Copies the digits into an owned, fixed-capacity string.
    pub fn to_array_string(&self) -> ArrayString<U64_MAX_LEN> {
        let mut s = ArrayString::new();
        s.push_str(self.as_str());
        s
    }
}

impl Default for Buffer {
    fn default() -> Buffer {
        Buffer::new()
    }
}

impl AsRef<str> for Buffer {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl core::fmt::Debug for Buffer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:?}", self.as_str())
    }
}
