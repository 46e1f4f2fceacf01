// Copyright 2025 Irreducible Inc.
//! Routines for checking the results of [`multiply`][`crate::mul::multiply`] and
//! [`divide`][`crate::div::divide`].
//!
//! The checks recompute through a generic column-wise multiplication that shares no code path
//! with the fixed-width multiplier.

use crate::{
	uint::{U128, U256, Uint},
	word::Word,
};

/// Multiply two arbitrary-length limb slices using textbook algorithm.
///
/// Limbs are little-endian. The result has `a.len() + b.len()` limbs to accommodate the full
/// product without overflow.
pub fn textbook_mul(a: &[Word], b: &[Word]) -> Vec<Word> {
	// The accumulator has exactly a.len() + b.len() columns to hold all partial products
	let mut accumulator = vec![vec![]; a.len() + b.len()];
	for (i, &ai) in a.iter().enumerate() {
		for (j, &bj) in b.iter().enumerate() {
			let (hi, lo) = ai.imul(bj);
			let k = i + j;
			accumulator[k].push(lo);
			accumulator[k + 1].push(hi);
		}
	}
	compute_stack_adds(&accumulator)
}

/// Sums every column of limbs, carrying the column overflow count into the next column.
fn compute_stack_adds(accumulator: &[Vec<Word>]) -> Vec<Word> {
	let mut out = Vec::with_capacity(accumulator.len());
	let mut carry = Word::ZERO;
	for column in accumulator {
		let mut sum = carry;
		let mut next_carry = Word::ZERO;
		for &term in column {
			let (partial, cout) = sum.iadd_cin_cout(term, Word::ZERO);
			sum = partial;
			next_carry = next_carry.wrapping_add(cout.carry_bit());
		}
		out.push(sum);
		carry = next_carry;
	}
	debug_assert_eq!(carry, Word::ZERO, "product overflowed its column count");
	out
}

/// Verifies that `product == a * b`.
pub fn verify_product(a: &U128, b: &U128, product: &U256) -> Result<(), String> {
	let expected = textbook_mul(&a.limbs, &b.limbs);
	if expected[..] != product.limbs[..] {
		let expected = U256::try_from_limbs(&expected).map_err(|e| e.to_string())?;
		return Err(format!("product mismatch: {a} * {b} = {product} (expected {expected})"));
	}
	Ok(())
}

/// Verifies that `dividend == quotient * divisor + remainder` and `remainder < divisor`.
pub fn verify_division<const N: usize>(
	dividend: &Uint<N>,
	divisor: &U128,
	quotient: &Uint<N>,
	remainder: &U128,
) -> Result<(), String> {
	if remainder >= divisor {
		return Err(format!("remainder {remainder} is not below divisor {divisor}"));
	}

	let scaled = textbook_mul(&quotient.limbs, &divisor.limbs);
	let scaled = Uint::<N>::try_from_limbs(&scaled)
		.map_err(|e| format!("quotient {quotient} * divisor {divisor}: {e}"))?;
	let remainder_wide = remainder
		.resize::<N>()
		.map_err(|e| format!("remainder {remainder}: {e}"))?;

	let (reassembled, carry) = scaled.overflowing_add(&remainder_wide);
	if carry || reassembled != *dividend {
		return Err(format!(
			"division mismatch: {quotient} * {divisor} + {remainder} != {dividend}"
		));
	}
	Ok(())
}
