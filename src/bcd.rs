//! Unpacked BCD accumulator.

use core::str;

/// A fixed-width decimal number with one digit per byte.
///
/// Slots are stored most significant first. Between [`add`][Self::add] and
/// [`extract`][Self::extract] a slot may hold a value above 9; the carry is
/// only propagated when the accumulator is normalized.
///
/// A slot receives at most one single-digit value per addition, so `u8`
/// slots tolerate 25 additions of arbitrary digits (plus the carry of the
/// normalization pass) before they could overflow. A value too wide for `W`
/// slots makes [`extract`][Self::extract] panic.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub struct DigitAccumulator<const W: usize> {
    digits: [u8; W],
}

impl<const W: usize> DigitAccumulator<W> {
    /// The number of decimal slots.
    pub const WIDTH: usize = W;

    /// Returns the all-zero accumulator.
    pub const fn zero() -> Self {
        Self { digits: [0; W] }
    }

    /// Creates an accumulator holding the decimal digits of `value`.
    pub fn from_value(value: u64) -> Self {
        let mut acc = Self::zero();
        acc.load(value);
        acc
    }

    /// Replaces the contents with the decimal digits of `value`.
    ///
    /// `value` must fit in `W` decimal digits.
    pub fn load(&mut self, mut value: u64) {
        for slot in self.digits.iter_mut().rev() {
            *slot = (value % 10) as u8;
            value /= 10;
        }
        contract_assert!(value == 0, "value does not fit in {} decimal digits", W);
    }

    /// Adds `other` slot by slot, without carrying.
    #[inline]
    pub fn add(&mut self, other: &Self) {
        for (slot, digit) in self.digits.iter_mut().zip(other.digits.iter()) {
            *slot += *digit;
        }
    }

    /// Propagates carries from the least significant slot upwards so every
    /// slot ends up in `[0, 9]`.
    #[inline]
    pub fn normalize(&mut self) {
        for idx in (1..W).rev() {
            let carry = self.digits[idx] / 10;
            self.digits[idx] %= 10;
            self.digits[idx - 1] += carry;
        }
        contract_assert!(W == 0 || self.digits[0] <= 9, "decimal overflow in leading slot");
    }

    /// Reports whether every slot holds a single decimal digit.
    pub fn is_normalized(&self) -> bool {
        self.digits.iter().all(|&d| d <= 9)
    }

    /// Returns the raw slots, most significant first.
    pub const fn digits(&self) -> &[u8; W] {
        &self.digits
    }

    /// Normalizes, then writes the digits without leading zeros followed by
    /// a NUL terminator to the start of `buf`.
    ///
    /// At least one digit is always written, so zero renders as `"0"`.
    /// `buf` must hold at least `W + 1` bytes.
    #[inline]
    pub fn extract<'a>(&mut self, buf: &'a mut [u8]) -> &'a str {
        contract_assert!(
            buf.len() > W,
            "buffer of {} bytes cannot hold {} digits and a terminator",
            buf.len(),
            W
        );

        self.normalize();

        // Checked in every build: the bytes below must be ASCII digits, and
        // at least one digit must be written.
        assert!(W > 0, "an accumulator without slots has no digits");
        assert!(self.digits[0] <= 9, "decimal overflow in leading slot");

        // Stop one slot early so the last digit is always kept.
        let last = W.saturating_sub(1);
        let start = self.digits[..last]
            .iter()
            .position(|&d| d != 0)
            .unwrap_or(last);

        let len = W - start;
        for (dst, digit) in buf.iter_mut().zip(&self.digits[start..]) {
            *dst = *digit + b'0';
        }
        buf[len] = 0;

        // SAFETY: after `normalize` every slot past the first is `< 10`, and the
        // first was asserted above, so every byte in `buf[..len]` is an ASCII digit.
        unsafe { str::from_utf8_unchecked(&buf[..len]) }
    }
}

impl<const W: usize> Default for DigitAccumulator<W> {
    fn default() -> Self {
        Self::zero()
    }
}
