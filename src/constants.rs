// Want this to be as large as the largest possible string representation of any type
// that implements Integer, which is currently u64 (or usize on 64-bit targets).
// 20 digits + 1 terminator byte
pub(crate) const MAX_BUF_LEN: usize = U64_MAX_LEN + 1;

/// Number of distinct values a nibble can take, i.e. entries per table.
pub const NIBBLE_VALUES: usize = 16;

pub(crate) const U8_MAX_LEN: usize = 3;
pub(crate) const U16_MAX_LEN: usize = 5;
pub(crate) const U32_MAX_LEN: usize = 10;
pub(crate) const U64_MAX_LEN: usize = 20;

// One round per nibble of the integer width.
pub(crate) const U8_ROUNDS: usize = 8 / 4;
pub(crate) const U16_ROUNDS: usize = 16 / 4;
pub(crate) const U32_ROUNDS: usize = 32 / 4;
pub(crate) const U64_ROUNDS: usize = 64 / 4;
