// Copyright 2025 Irreducible Inc.
//! Fixed-width unsigned integers made of [`Word`] limbs.

use std::{cmp::Ordering, fmt, fmt::Write as _, str::FromStr};

use crate::{
	consts::{DECIMAL_CHUNK, DECIMAL_CHUNK_DIGITS, LIMB_SIZE_BITS, OPERAND_LIMBS, PRODUCT_LIMBS},
	div::divide,
	error::ArithError,
	word::Word,
};

/// Unsigned integer of `N` 64-bit limbs.
///
/// - Limbs are stored in little-endian order (index 0 = least significant)
/// - The represented value is `Σ limbs[i] * 2^(64 * i)`
/// - The width is fixed: every value in `[0, 2^(64 * N))` is representable and nothing else is
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Uint<const N: usize> {
	/// Little-endian limbs.
	pub limbs: [Word; N],
}

/// 128-bit operand or divisor.
pub type U128 = Uint<OPERAND_LIMBS>;

/// 256-bit product or quotient.
pub type U256 = Uint<PRODUCT_LIMBS>;

/// Splits a 128-bit value into its `(high, low)` limbs.
///
/// `high = value / 2^64` and `low = value mod 2^64`.
pub fn split_u128(value: u128) -> (Word, Word) {
	(Word((value >> 64) as u64), Word(value as u64))
}

impl<const N: usize> Uint<N> {
	/// Bit width of the type.
	pub const BITS: usize = N * LIMB_SIZE_BITS;

	/// Zero.
	pub const ZERO: Self = Self {
		limbs: [Word::ZERO; N],
	};

	/// One.
	pub const ONE: Self = {
		let mut limbs = [Word::ZERO; N];
		limbs[0] = Word::ONE;
		Self { limbs }
	};

	/// `2^(64 * N) - 1`.
	pub const MAX: Self = Self {
		limbs: [Word::ALL_ONE; N],
	};

	/// Creates a value from little-endian limbs.
	pub const fn from_limbs(limbs: [Word; N]) -> Self {
		Self { limbs }
	}

	/// Little-endian limbs of the value.
	pub fn limbs(&self) -> &[Word; N] {
		&self.limbs
	}

	/// Creates a value whose lowest limb is `value`.
	pub fn from_u64(value: u64) -> Self {
		let mut limbs = [Word::ZERO; N];
		limbs[0] = Word(value);
		Self { limbs }
	}

	/// Creates a value from little-endian limbs of any length.
	///
	/// Limbs beyond the `N`th must be zero.
	///
	/// # Errors
	/// [`ArithError::OperandOutOfRange`] if the value needs more than `N` limbs.
	pub fn try_from_limbs(limbs: &[Word]) -> Result<Self, ArithError> {
		let (head, tail) = limbs.split_at(limbs.len().min(N));
		if tail.iter().any(|&limb| limb != Word::ZERO) {
			return Err(ArithError::OperandOutOfRange { bits: Self::BITS });
		}
		let mut out = [Word::ZERO; N];
		out[..head.len()].copy_from_slice(head);
		Ok(Self { limbs: out })
	}

	/// Converts to a width of `M` limbs, zero-extending or narrowing.
	///
	/// # Errors
	/// [`ArithError::OperandOutOfRange`] if narrowing would drop a nonzero limb.
	pub fn resize<const M: usize>(&self) -> Result<Uint<M>, ArithError> {
		Uint::<M>::try_from_limbs(&self.limbs)
	}

	/// Whether every limb is zero.
	pub fn is_zero(&self) -> bool {
		self.limbs.iter().all(|&limb| limb == Word::ZERO)
	}

	/// Returns the bit at position `i`, counting from the least significant bit.
	///
	/// # Panics
	/// - Panics if `i >= Self::BITS`
	pub fn bit(&self, i: usize) -> bool {
		assert!(i < Self::BITS, "bit index {i} out of range for {} bits", Self::BITS);
		self.limbs[i / LIMB_SIZE_BITS].bit((i % LIMB_SIZE_BITS) as u32) == Word::ONE
	}

	/// Number of significant bits; zero for zero.
	pub fn bit_len(&self) -> usize {
		self.limbs
			.iter()
			.rposition(|&limb| limb != Word::ZERO)
			.map_or(0, |top| {
				top * LIMB_SIZE_BITS + LIMB_SIZE_BITS - self.limbs[top].0.leading_zeros() as usize
			})
	}

	/// Adds with carry propagation across limbs.
	///
	/// Returns the sum modulo `2^(64 * N)` and whether a carry left the top limb.
	pub fn overflowing_add(&self, rhs: &Self) -> (Self, bool) {
		let mut limbs = [Word::ZERO; N];
		let mut carry = Word::ZERO;
		for i in 0..N {
			let (sum, cout) = self.limbs[i].iadd_cin_cout(rhs.limbs[i], carry);
			limbs[i] = sum;
			carry = cout.carry_bit();
		}
		(Self { limbs }, carry == Word::ONE)
	}

	/// Subtracts with borrow propagation across limbs.
	///
	/// Returns the difference modulo `2^(64 * N)` and whether the top limb borrowed.
	pub fn overflowing_sub(&self, rhs: &Self) -> (Self, bool) {
		let mut limbs = [Word::ZERO; N];
		let mut borrow = Word::ZERO;
		for i in 0..N {
			let (diff, bout) = self.limbs[i].isub_bin_bout(rhs.limbs[i], borrow);
			limbs[i] = diff;
			borrow = bout.carry_bit();
		}
		(Self { limbs }, borrow == Word::ONE)
	}

	/// Multiplies by a single limb.
	///
	/// Returns the low `N` limbs of the product and the overflow limb above them.
	pub fn mul_limb(&self, rhs: Word) -> (Self, Word) {
		let mut limbs = [Word::ZERO; N];
		let mut carry = Word::ZERO;
		for i in 0..N {
			let (hi, lo) = self.limbs[i].imul(rhs);
			let (sum, cout) = lo.iadd_cin_cout(carry, Word::ZERO);
			limbs[i] = sum;
			// hi <= 2^64 - 2, so absorbing the carry cannot wrap.
			carry = hi.wrapping_add(cout.carry_bit());
		}
		(Self { limbs }, carry)
	}
}

impl U128 {
	/// Decomposes a native 128-bit value into `(low, high)` limbs.
	pub fn from_u128(value: u128) -> Self {
		let (hi, lo) = split_u128(value);
		Self { limbs: [lo, hi] }
	}

	/// Reassembles the native 128-bit value.
	pub fn to_u128(&self) -> u128 {
		let [lo, hi] = self.limbs;
		((hi.as_u64() as u128) << 64) | lo.as_u64() as u128
	}
}

impl<const N: usize> Default for Uint<N> {
	fn default() -> Self {
		Self::ZERO
	}
}

impl<const N: usize> From<u64> for Uint<N> {
	fn from(value: u64) -> Self {
		Self::from_u64(value)
	}
}

impl From<u128> for U128 {
	fn from(value: u128) -> Self {
		Self::from_u128(value)
	}
}

impl From<U128> for u128 {
	fn from(value: U128) -> Self {
		value.to_u128()
	}
}

impl From<U128> for U256 {
	fn from(value: U128) -> Self {
		let [lo, hi] = value.limbs;
		Self {
			limbs: [lo, hi, Word::ZERO, Word::ZERO],
		}
	}
}

impl TryFrom<U256> for U128 {
	type Error = ArithError;

	fn try_from(value: U256) -> Result<Self, Self::Error> {
		value.resize()
	}
}

impl<const N: usize> Ord for Uint<N> {
	fn cmp(&self, other: &Self) -> Ordering {
		self.limbs.iter().rev().cmp(other.limbs.iter().rev())
	}
}

impl<const N: usize> PartialOrd for Uint<N> {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl<const N: usize> FromStr for Uint<N> {
	type Err = ArithError;

	/// Parses a decimal string, or a hexadecimal one when prefixed with `0x`.
	///
	/// Underscores are accepted as digit separators.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let (digits, radix) = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
			Some(hex) => (hex, 16),
			None => (s, 10),
		};

		let mut value = Self::ZERO;
		let mut seen_digit = false;
		for c in digits.chars() {
			if c == '_' {
				continue;
			}
			let digit = c
				.to_digit(radix)
				.ok_or(ArithError::InvalidDigit { digit: c, radix })?;
			let (scaled, overflow) = value.mul_limb(Word(radix as u64));
			let (sum, carry) = scaled.overflowing_add(&Self::from_u64(digit as u64));
			if overflow != Word::ZERO || carry {
				return Err(ArithError::OperandOutOfRange { bits: Self::BITS });
			}
			value = sum;
			seen_digit = true;
		}

		if !seen_digit {
			return Err(ArithError::Empty);
		}
		Ok(value)
	}
}

impl<const N: usize> fmt::Display for Uint<N> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let chunk = U128::from_u64(DECIMAL_CHUNK);

		// Base-10^19 digits, least significant first.
		let mut chunks = Vec::new();
		let mut rest = *self;
		loop {
			let (quotient, remainder) = divide(&rest, &chunk).expect("DECIMAL_CHUNK is nonzero");
			chunks.push(remainder.limbs[0].as_u64());
			if quotient.is_zero() {
				break;
			}
			rest = quotient;
		}

		let mut out = String::with_capacity(chunks.len() * DECIMAL_CHUNK_DIGITS);
		let mut iter = chunks.iter().rev();
		if let Some(top) = iter.next() {
			write!(out, "{top}")?;
		}
		for chunk in iter {
			write!(out, "{chunk:0width$}", width = DECIMAL_CHUNK_DIGITS)?;
		}
		f.pad_integral(true, "", &out)
	}
}

fn write_hex<const N: usize>(
	value: &Uint<N>,
	f: &mut fmt::Formatter<'_>,
	upper: bool,
) -> fmt::Result {
	let mut out = String::new();
	let mut significant = value
		.limbs
		.iter()
		.rev()
		.skip_while(|&&limb| limb == Word::ZERO);
	match significant.next() {
		Some(top) if upper => write!(out, "{:X}", top.0)?,
		Some(top) => write!(out, "{:x}", top.0)?,
		None => out.push('0'),
	}
	for limb in significant {
		if upper {
			write!(out, "{:016X}", limb.0)?;
		} else {
			write!(out, "{:016x}", limb.0)?;
		}
	}
	f.pad_integral(true, "0x", &out)
}

impl<const N: usize> fmt::LowerHex for Uint<N> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write_hex(self, f, false)
	}
}

impl<const N: usize> fmt::UpperHex for Uint<N> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write_hex(self, f, true)
	}
}

impl<const N: usize> fmt::Debug for Uint<N> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "U{}({:#x})", Self::BITS, self)
	}
}
