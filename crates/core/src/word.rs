// Copyright 2025 Irreducible Inc.
//! [`Word`] related definitions.

use std::{
	fmt,
	ops::{BitAnd, BitOr, BitXor, Not, Shl, Shr},
};

/// [`Word`] is a 64-bit limb and is the fundamental digit of every multi-limb integer. All
/// arithmetic in this crate is expressed on it.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word(pub u64);

impl Word {
	/// All zero bit pattern, zero, nil, null.
	pub const ZERO: Word = Word(0);
	/// 1.
	pub const ONE: Word = Word(1);
	/// All bits set to one.
	pub const ALL_ONE: Word = Word(u64::MAX);
	/// Most Significant Bit is set to one, all other bits are zero.
	pub const MSB_ONE: Word = Word(0x8000000000000000);
}

impl fmt::Debug for Word {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Word({:#018x})", self.0)
	}
}

impl BitAnd for Word {
	type Output = Self;

	fn bitand(self, rhs: Self) -> Self::Output {
		Word(self.0 & rhs.0)
	}
}

impl BitOr for Word {
	type Output = Self;

	fn bitor(self, rhs: Self) -> Self::Output {
		Word(self.0 | rhs.0)
	}
}

impl BitXor for Word {
	type Output = Self;

	fn bitxor(self, rhs: Self) -> Self::Output {
		Word(self.0 ^ rhs.0)
	}
}

impl Shl<u32> for Word {
	type Output = Self;

	fn shl(self, rhs: u32) -> Self::Output {
		Word(self.0 << rhs)
	}
}

impl Shr<u32> for Word {
	type Output = Self;

	fn shr(self, rhs: u32) -> Self::Output {
		Word(self.0 >> rhs)
	}
}

impl Not for Word {
	type Output = Self;

	fn not(self) -> Self::Output {
		Word(!self.0)
	}
}

impl Word {
	/// Creates a new `Word` from a 64-bit unsigned integer.
	pub fn from_u64(value: u64) -> Word {
		Word(value)
	}

	/// Returns the integer value as a 64-bit unsigned integer.
	pub fn as_u64(self) -> u64 {
		self.0
	}

	/// Extracts the bit at position `n` as `Word::ZERO` or `Word::ONE`.
	///
	/// Equivalent to `(self / 2^n) mod 2`.
	pub fn bit(self, n: u32) -> Word {
		assert!(n < 64, "bit position n={n} out of range");
		(self >> n) & Word::ONE
	}

	/// Reduces a carry (or borrow) vector, as returned by [`Word::iadd_cin_cout`] and
	/// [`Word::isub_bin_bout`], to the carry out of the whole word.
	pub fn carry_bit(self) -> Word {
		self >> 63
	}

	/// Unsigned integer multiplication.
	///
	/// Multiplies two 64-bit unsigned integers and returns the 128-bit result split into high and
	/// low 64-bit words, respectively.
	pub fn imul(self, rhs: Word) -> (Word, Word) {
		let Word(lhs) = self;
		let Word(rhs) = rhs;
		let result = (lhs as u128) * (rhs as u128);

		let hi = (result >> 64) as u64;
		let lo = result as u64;
		(Word(hi), Word(lo))
	}

	/// Performs 64-bit addition with carry input bit.
	///
	/// cin is a carry-in from the previous addition. Since it can only affect the LSB only, the cin
	/// could be 1 if there is carry over, or 0 otherwise.
	///
	/// Returns (sum, carry_out) where ith carry_out bit is set to one if there is a carry out at
	/// that bit position.
	pub fn iadd_cin_cout(self, rhs: Word, cin: Word) -> (Word, Word) {
		debug_assert!(cin == Word::ZERO || cin == Word::ONE, "cin must be 0 or 1");
		let Word(lhs) = self;
		let Word(rhs) = rhs;
		let Word(cin) = cin;
		let sum = lhs.wrapping_add(rhs).wrapping_add(cin);
		let cout = (lhs & rhs) | ((lhs ^ rhs) & !sum);
		(Word(sum), Word(cout))
	}

	/// Performs 64-bit subtraction with borrow input bit.
	///
	/// bin is a borrow-in from the previous subtraction. Since it can only affect the LSB only, the
	/// bin could be 1 if there is borrow over, or 0 otherwise.
	///
	/// Returns (diff, borrow_out) where ith borrow_out bit is set to one if there is a borrow out
	/// at that bit position.
	pub fn isub_bin_bout(self, rhs: Word, bin: Word) -> (Word, Word) {
		debug_assert!(bin == Word::ZERO || bin == Word::ONE, "bin must be 0 or 1");
		let Word(lhs) = self;
		let Word(rhs) = rhs;
		let Word(bin) = bin;
		let diff = lhs.wrapping_sub(rhs).wrapping_sub(bin);
		let bout = (!lhs & rhs) | (!(lhs ^ rhs) & diff);
		(Word(diff), Word(bout))
	}

	/// Integer addition.
	///
	/// Wraps around on overflow.
	pub fn wrapping_add(self, rhs: Word) -> Word {
		Word(self.0.wrapping_add(rhs.0))
	}

	/// Integer subtraction.
	///
	/// Wraps around on overflow.
	pub fn wrapping_sub(self, rhs: Word) -> Word {
		Word(self.0.wrapping_sub(rhs.0))
	}
}

#[cfg(test)]
mod tests {
	use proptest::prelude::*;

	use super::*;

	#[test]
	fn test_constants() {
		assert_eq!(Word::ZERO, Word(0));
		assert_eq!(Word::ONE, Word(1));
		assert_eq!(Word::ALL_ONE, Word(0xFFFFFFFFFFFFFFFF));
		assert_eq!(Word::MSB_ONE, Word(0x8000000000000000));
	}

	#[test]
	fn test_bit_extraction_edges() {
		assert_eq!(Word::MSB_ONE.bit(63), Word::ONE);
		assert_eq!(Word::MSB_ONE.bit(62), Word::ZERO);
		assert_eq!(Word::ONE.bit(0), Word::ONE);
		assert_eq!(Word::ALL_ONE.carry_bit(), Word::ONE);
		assert_eq!(Word(0x7FFFFFFFFFFFFFFF).carry_bit(), Word::ZERO);
	}

	#[test]
	#[should_panic(expected = "out of range")]
	fn test_bit_position_out_of_range() {
		Word::ONE.bit(64);
	}

	#[test]
	fn test_imul_max() {
		// (2^64 - 1)^2 = 2^128 - 2^65 + 1
		let (hi, lo) = Word::ALL_ONE.imul(Word::ALL_ONE);
		assert_eq!(hi, Word(0xFFFFFFFFFFFFFFFE));
		assert_eq!(lo, Word::ONE);
	}

	proptest! {
		#[test]
		fn prop_bit(val in any::<u64>(), n in 0u32..64) {
			let w = Word(val);
			assert_eq!(w.bit(n).0, (val / (1u64 << n)) % 2);
		}

		#[test]
		fn prop_imul(a in any::<u64>(), b in any::<u64>()) {
			let wa = Word(a);
			let wb = Word(b);
			let (hi, lo) = wa.imul(wb);

			// Check against native 128-bit multiplication
			let result = (a as u128) * (b as u128);
			assert_eq!(hi.0, (result >> 64) as u64);
			assert_eq!(lo.0, result as u64);

			// Multiplication by 0 gives 0
			let (hi0, lo0) = wa.imul(Word::ZERO);
			assert_eq!(hi0, Word::ZERO);
			assert_eq!(lo0, Word::ZERO);

			// Multiplication by 1 is identity
			let (hi1, lo1) = wa.imul(Word::ONE);
			assert_eq!(hi1, Word::ZERO);
			assert_eq!(lo1, wa);

			// Commutative
			let (hi_reversed, lo_reversed) = wb.imul(wa);
			assert_eq!(hi, hi_reversed);
			assert_eq!(lo, lo_reversed);
		}

		#[test]
		fn prop_iadd_cin_cout(a in any::<u64>(), b in any::<u64>(), cin in 0u64..=1) {
			let (sum, cout) = Word(a).iadd_cin_cout(Word(b), Word(cin));

			let wide = a as u128 + b as u128 + cin as u128;
			assert_eq!(sum.0, wide as u64);
			assert_eq!(cout.carry_bit().0, (wide >> 64) as u64);

			// Carry computation: cout at each bit position
			let expected_cout = (a & b) | ((a ^ b) & !sum.0);
			assert_eq!(cout.0, expected_cout);
		}

		#[test]
		fn prop_isub_bin_bout(a in any::<u64>(), b in any::<u64>(), bin in 0u64..=1) {
			let (diff, bout) = Word(a).isub_bin_bout(Word(b), Word(bin));

			assert_eq!(diff.0, a.wrapping_sub(b).wrapping_sub(bin));
			let borrowed = (a as u128) < (b as u128 + bin as u128);
			assert_eq!(bout.carry_bit(), if borrowed { Word::ONE } else { Word::ZERO });

			// Borrow computation: bout = (!a & b) | (!(a ^ b) & diff)
			let expected_bout = (!a & b) | (!(a ^ b) & diff.0);
			assert_eq!(bout.0, expected_bout);
		}

		#[test]
		fn prop_wrapping_add_sub_inverse(a in any::<u64>(), b in any::<u64>()) {
			let wa = Word(a);
			let wb = Word(b);
			assert_eq!(wa.wrapping_add(wb).wrapping_sub(wb), wa);
		}
	}
}
