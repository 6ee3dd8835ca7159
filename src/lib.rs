/*!
A Rust crate for turning unsigned integers into decimal strings without dividing on the
hot path.

# Picture it

Every unsigned integer is a sum of its nibbles scaled by powers of 16:

```text
0x3B6 = 3 * 16^2 + 11 * 16^1 + 6 * 16^0 = 768 + 176 + 6 = 950
```

nibble-utoa precomputes, once per process, the decimal digits of `v * 16^p` for every
nibble value `v` and every nibble position `p` of the integer width. A conversion then
adds up one precomputed digit array per nibble, slot by slot and without carrying, and
propagates all carries in a single right-to-left pass at the end.

```text
position 2, nibble  3:   0 7 6 8
position 1, nibble 11:   0 1 7 6
position 0, nibble  6:   0 0 0 6
                        ---------
slot sums:               0 8 13 20  ->  carry  ->  0 9 5 0  ->  "950"
```

# Example

```rust
use nibble_utoa::{convert, Buffer};

// Caller-supplied storage: digits, then a NUL terminator.
let mut buf = [0u8; 21];
assert_eq!(convert(u64::MAX, &mut buf), "18446744073709551615");
assert_eq!(buf[20], 0);

// Or let `Buffer` own the storage.
let mut buf = Buffer::new();
assert_eq!(buf.format(0u8), "0");
assert_eq!(buf.format(65_535u16), "65535");
```

# Table sets

Each integer width gets its own table set, with the round count (nibbles per conversion)
and the digit width sized together:

| Type  | Table set    | Rounds | Digits |
|-------|--------------|--------|--------|
| `u8`  | [`Tables8`]  | 2      | 3      |
| `u16` | [`Tables16`] | 4      | 5      |
| `u32` | [`Tables32`] | 8      | 10     |
| `u64` | [`Tables64`] | 16     | 20     |

With the `std` feature the process-wide sets are built lazily on first use (or eagerly
through [`initialize`]) and are never mutated afterwards. Without it, build a set with
[`NibbleTables::build`] and pass it to [`convert_with`].

# Contracts

A buffer shorter than [`Integer::BUF_LEN`] is a caller bug. It is asserted in debug
builds and, with the `checked` feature, in release builds too; [`try_convert`] reports
it as an [`Error`] instead.

# Features

* `std` (default): process-wide table sets, [`std::error::Error`] for [`Error`] and
  `tracing` events while tables are built.
* `checked`: keep contract assertions in release builds.
*/

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(
    missing_debug_implementations,
    missing_docs,
    trivial_casts,
    unused_extern_crates,
    unused_import_braces
)]

#[macro_use]
mod macros;

pub mod baseline;
mod bcd;
mod buffer;
mod constants;
mod error;
mod itoa;
mod tables;

pub use crate::bcd::DigitAccumulator;
pub use crate::buffer::Buffer;
pub use crate::constants::NIBBLE_VALUES;
pub use crate::error::{Error, ErrorKind};
#[cfg(feature = "std")]
pub use crate::itoa::{convert, try_convert};
pub use crate::itoa::{convert_with, try_convert_with, Integer};
#[cfg(feature = "std")]
pub use crate::tables::initialize;
pub use crate::tables::{NibbleTables, Tables16, Tables32, Tables64, Tables8};

/// `true` when contract assertions are compiled into this build.
pub const CONTRACTS_CHECKED: bool = cfg!(any(debug_assertions, feature = "checked"));

mod private {
    pub trait Sealed {}
}
