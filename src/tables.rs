//! Precomputed decimal expansions of every nibble at every hex position.

use crate::bcd::DigitAccumulator;
use crate::constants::*;

#[cfg(feature = "std")]
use lazy_static::lazy_static;

/// `R` tables of 16 accumulators, each `W` decimal digits wide.
///
/// `tables[p][v]` holds the decimal expansion of `v * 16^p`. Summing the
/// entries picked by the nibbles of an integer yields its decimal digits
/// without a single division on the conversion path.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NibbleTables<const R: usize, const W: usize> {
    tables: [[DigitAccumulator<W>; NIBBLE_VALUES]; R],
}

/// Table set for `u8`: 2 rounds, 3 digits.
pub type Tables8 = NibbleTables<U8_ROUNDS, U8_MAX_LEN>;
/// Table set for `u16`: 4 rounds, 5 digits.
pub type Tables16 = NibbleTables<U16_ROUNDS, U16_MAX_LEN>;
/// Table set for `u32`: 8 rounds, 10 digits.
pub type Tables32 = NibbleTables<U32_ROUNDS, U32_MAX_LEN>;
/// Table set for `u64`: 16 rounds, 20 digits.
pub type Tables64 = NibbleTables<U64_ROUNDS, U64_MAX_LEN>;

impl<const R: usize, const W: usize> NibbleTables<R, W> {
    /// The number of nibbles consumed per conversion.
    pub const ROUNDS: usize = R;

    /// The digit width of every entry.
    pub const WIDTH: usize = W;

    /// Builds every table.
    ///
    /// The largest entry, `15 * 16^(R-1)`, must fit in both `u64` and `W`
    /// decimal digits.
    pub fn build() -> Self {
        contract_assert!(R <= U64_ROUNDS, "{} rounds exceed a 64-bit integer", R);

        let mut tables = [[DigitAccumulator::zero(); NIBBLE_VALUES]; R];
        for (position, table) in tables.iter_mut().enumerate() {
            let factor = 1_u64 << (4 * position);
            #[cfg(feature = "std")]
            tracing::debug!(position, factor, width = W, "building nibble table");
            for (nibble, entry) in table.iter_mut().enumerate() {
                entry.load(nibble as u64 * factor);
            }
        }

        #[cfg(feature = "std")]
        tracing::debug!(rounds = R, width = W, "nibble tables ready");

        Self { tables }
    }

    /// Returns the expansion of `nibble * 16^position`.
    #[inline]
    pub fn lookup(&self, position: usize, nibble: usize) -> &DigitAccumulator<W> {
        debug_assert!(position < R);
        debug_assert!(nibble < NIBBLE_VALUES);
        &self.tables[position][nibble]
    }

    /// Writes the decimal representation of `number` to the start of `buf`,
    /// followed by a NUL terminator, and returns the digits.
    ///
    /// `number` must fit in `4 * R` bits and `buf` must hold at least
    /// `W + 1` bytes.
    #[inline]
    pub fn convert<'a>(&self, mut number: u64, buf: &'a mut [u8]) -> &'a str {
        contract_assert!(
            number.checked_shr(4 * R as u32).unwrap_or(0) == 0,
            "{} does not fit in {} nibbles",
            number,
            R
        );

        let mut sum = DigitAccumulator::<W>::zero();
        for round in 0..R {
            let nibble = (number & 0xf) as usize;
            sum.add(self.lookup(round, nibble));
            number >>= 4;
        }

        sum.extract(buf)
    }
}

#[cfg(feature = "std")]
lazy_static! {
    pub(crate) static ref TABLES8: Tables8 = Tables8::build();
    pub(crate) static ref TABLES16: Tables16 = Tables16::build();
    pub(crate) static ref TABLES32: Tables32 = Tables32::build();
    pub(crate) static ref TABLES64: Tables64 = Tables64::build();
}

/// Builds every process-wide table set now instead of on first use.
#[cfg(feature = "std")]
pub fn initialize() {
    lazy_static::initialize(&TABLES8);
    lazy_static::initialize(&TABLES16);
    lazy_static::initialize(&TABLES32);
    lazy_static::initialize(&TABLES64);
}
