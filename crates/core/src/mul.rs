// Copyright 2025 Irreducible Inc.
//! Schoolbook multiplication of two 128-bit operands into a 256-bit product.
//!
//! Each operand is split into a `(high, low)` limb pair, the four cross terms are computed as
//! 64×64→128 partial products, and the halves of those are summed column by column:
//!
//! ```text
//! limb 0: lo(ll)
//! limb 1: hi(ll) + lo(lh) + lo(hl)
//! limb 2: hi(lh) + hi(hl) + lo(hh) + carry
//! limb 3: hi(hh) + carry
//! ```

use crate::{
	error::ArithError,
	uint::{U128, U256},
	word::Word,
};

/// The four cross terms of a 2-limb by 2-limb multiplication.
///
/// Each term is stored as its `(high, low)` limbs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartialProducts {
	/// `a_low * b_low`
	pub ll: (Word, Word),
	/// `a_low * b_high`
	pub lh: (Word, Word),
	/// `a_high * b_low`
	pub hl: (Word, Word),
	/// `a_high * b_high`
	pub hh: (Word, Word),
}

impl PartialProducts {
	/// Cross-multiplies the limbs of `a` and `b`.
	pub fn new(a: &U128, b: &U128) -> Self {
		let [a_lo, a_hi] = a.limbs;
		let [b_lo, b_hi] = b.limbs;
		Self {
			ll: a_lo.imul(b_lo),
			lh: a_lo.imul(b_hi),
			hl: a_hi.imul(b_lo),
			hh: a_hi.imul(b_hi),
		}
	}
}

/// Multiplies two 128-bit values into their exact 256-bit product.
///
/// # Panics
/// - Panics if a carry escapes the top limb. This cannot happen for 128-bit operands.
pub fn multiply(a: &U128, b: &U128) -> U256 {
	let PartialProducts {
		ll: (ll_hi, ll_lo),
		lh: (lh_hi, lh_lo),
		hl: (hl_hi, hl_lo),
		hh: (hh_hi, hh_lo),
	} = PartialProducts::new(a, b);

	let (s1, c1a) = lh_lo.iadd_cin_cout(hl_lo, Word::ZERO);
	let (limb1, c1b) = s1.iadd_cin_cout(ll_hi, Word::ZERO);
	// At most 2.
	let carry1 = c1a.carry_bit().wrapping_add(c1b.carry_bit());

	let (s2, c2a) = lh_hi.iadd_cin_cout(hl_hi, Word::ZERO);
	let (s2, c2b) = s2.iadd_cin_cout(hh_lo, Word::ZERO);
	let (limb2, c2c) = s2.iadd_cin_cout(carry1, Word::ZERO);
	let carry2 = c2a
		.carry_bit()
		.wrapping_add(c2b.carry_bit())
		.wrapping_add(c2c.carry_bit());

	let (limb3, c3) = hh_hi.iadd_cin_cout(carry2, Word::ZERO);
	assert_eq!(c3.carry_bit(), Word::ZERO, "carry escaped the top limb of a 128x128-bit product");

	U256::from_limbs([ll_lo, limb1, limb2, limb3])
}

/// [`multiply`] on native 128-bit operands.
pub fn multiply_u128(a: u128, b: u128) -> U256 {
	multiply(&U128::from_u128(a), &U128::from_u128(b))
}

/// [`multiply`] on operands given as little-endian limb slices of any length.
///
/// # Errors
/// [`ArithError::OperandOutOfRange`] if either operand is not below `2^128`.
pub fn multiply_limbs(a: &[Word], b: &[Word]) -> Result<U256, ArithError> {
	let a = U128::try_from_limbs(a)?;
	let b = U128::try_from_limbs(b)?;
	Ok(multiply(&a, &b))
}
