use core::fmt;

/// This crate's error type.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub struct Error {
    kind: ErrorKind,
}

impl Error {
    /// Constructs a capacity error: `len` bytes were needed, the buffer has `cap`.
    pub(crate) const fn capacity(len: usize, cap: usize) -> Error {
        Error {
            kind: ErrorKind::Capacity { len, cap },
        }
    }

    /// Returns the [`ErrorKind`].
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error { kind }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.kind, f)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// The kinds of errors this crate can report.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The output buffer cannot hold the digits plus the terminator byte.
    Capacity {
        /// Bytes required.
        len: usize,
        /// Bytes available.
        cap: usize,
    },
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Capacity { len, cap } => write!(
                f,
                "attempted to write {} bytes into a buffer with capacity {}",
                len, cap
            ),
        }
    }
}
