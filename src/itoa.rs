use crate::error::Error;

/// An unsigned integer that can be written by a nibble table set.
///
/// This trait is sealed and cannot be implemented for types outside of this crate.
pub trait Integer: crate::private::Sealed + Copy {
    /// Table set sized for this integer width.
    type Tables: 'static + Sync;

    /// Maximum number of decimal digits.
    const MAX_LEN: usize;

    /// Bytes a buffer needs: every digit plus the terminator.
    const BUF_LEN: usize = Self::MAX_LEN + 1;

    /// Write integer to buffer using `tables`
    fn write_with<'a>(self, tables: &Self::Tables, buf: &'a mut [u8]) -> &'a str;

    /// The process-wide table set for this width.
    #[cfg(feature = "std")]
    fn tables() -> &'static Self::Tables;
}

/// Format an integer to the start of `buf` with an explicit table set.
///
/// `buf` must hold at least [`Integer::BUF_LEN`] bytes.
#[inline]
pub fn convert_with<'a, N>(n: N, tables: &N::Tables, buf: &'a mut [u8]) -> &'a str
where
    N: Integer,
{
    contract_assert!(
        buf.len() >= N::BUF_LEN,
        "buffer of {} bytes is shorter than {}",
        buf.len(),
        N::BUF_LEN
    );
    n.write_with(tables, buf)
}

/// Format an integer to the start of `buf` with the process-wide table set.
///
/// `buf` must hold at least [`Integer::BUF_LEN`] bytes.
///
/// # Example
///
/// ```
/// let mut buf = [0u8; 21];
/// assert_eq!(nibble_utoa::convert(950u64, &mut buf), "950");
/// assert_eq!(&buf[..4], b"950\0");
/// ```
#[cfg(feature = "std")]
#[inline]
pub fn convert<N>(n: N, buf: &mut [u8]) -> &str
where
    N: Integer,
{
    convert_with(n, N::tables(), buf)
}

/// Like [`convert`], but reports a short buffer as an error.
#[cfg(feature = "std")]
pub fn try_convert<N>(n: N, buf: &mut [u8]) -> Result<&str, Error>
where
    N: Integer,
{
    try_convert_with(n, N::tables(), buf)
}

/// Like [`convert_with`], but reports a short buffer as an error.
pub fn try_convert_with<'a, N>(n: N, tables: &N::Tables, buf: &'a mut [u8]) -> Result<&'a str, Error>
where
    N: Integer,
{
    if buf.len() < N::BUF_LEN {
        return Err(Error::capacity(N::BUF_LEN, buf.len()));
    }
    Ok(n.write_with(tables, buf))
}

mod integers;
