// Copyright 2025 Irreducible Inc.
//! Restoring bit-serial long division by a 128-bit divisor.
//!
//! The dividend is consumed one bit at a time, most significant limb and bit first. Each step
//! shifts the bit into the running remainder and subtracts the divisor whenever it fits, emitting
//! one quotient bit. A 256-bit dividend takes exactly 256 steps.

use crate::{
	consts::LIMB_SIZE_BITS,
	error::ArithError,
	uint::{U128, U256, Uint},
	word::Word,
};

/// Computes `r * 2 + bit`.
///
/// Returns the low `N` limbs of the result and the bit pushed out of the top limb.
fn shift_in<const N: usize>(r: &Uint<N>, bit: Word) -> (Uint<N>, Word) {
	let mut limbs = [Word::ZERO; N];
	let mut carry = bit;
	for i in 0..N {
		limbs[i] = (r.limbs[i] << 1) | carry;
		carry = r.limbs[i].carry_bit();
	}
	(Uint::from_limbs(limbs), carry)
}

/// Divides an `N`-limb dividend by a 128-bit divisor.
///
/// Returns `(quotient, remainder)` with `dividend == quotient * divisor + remainder` and
/// `remainder < divisor`.
///
/// # Errors
/// [`ArithError::InvalidDivisor`] if `divisor` is zero.
pub fn divide<const N: usize>(
	dividend: &Uint<N>,
	divisor: &U128,
) -> Result<(Uint<N>, U128), ArithError> {
	if divisor.is_zero() {
		return Err(ArithError::InvalidDivisor);
	}

	let mut quotient = [Word::ZERO; N];
	let mut r = U128::ZERO;
	for limb_idx in (0..N).rev() {
		let limb = dividend.limbs[limb_idx];
		let mut q_limb = Word::ZERO;
		for bit_idx in (0..LIMB_SIZE_BITS as u32).rev() {
			let (shifted, overflow) = shift_in(&r, limb.bit(bit_idx));
			let (reduced, borrow) = shifted.overflowing_sub(divisor);
			// An overflow bit puts r at or above 2^128, past any divisor. The wrapped difference is
			// then exact since r < 2 * divisor.
			if overflow == Word::ONE || !borrow {
				r = reduced;
				q_limb = q_limb | (Word::ONE << bit_idx);
			} else {
				r = shifted;
			}
		}
		quotient[limb_idx] = q_limb;
	}

	debug_assert!(r < *divisor);
	Ok((Uint::from_limbs(quotient), r))
}

/// Divides a 256-bit product by a 128-bit divisor.
///
/// See [`divide`].
pub fn divide_u256(dividend: &U256, divisor: &U128) -> Result<(U256, U128), ArithError> {
	divide(dividend, divisor)
}

#[cfg(test)]
mod tests {
	use proptest::prelude::*;
	use rand::{Rng, SeedableRng, rngs::StdRng};

	use super::*;
	use crate::test_utils::to_num_biguint;

	fn random_u256(rng: &mut impl Rng) -> U256 {
		U256::from_limbs(std::array::from_fn(|_| Word(rng.random())))
	}

	fn check_against_reference(dividend: &U256, divisor: &U128) {
		let (quotient, remainder) = divide_u256(dividend, divisor).unwrap();

		let p = to_num_biguint(dividend);
		let d = to_num_biguint(divisor);
		assert_eq!(to_num_biguint(&quotient), &p / &d, "{dividend} / {divisor}");
		assert_eq!(to_num_biguint(&remainder), &p % &d, "{dividend} % {divisor}");
		assert!(remainder < *divisor);
	}

	#[test]
	fn test_shift_in() {
		let r = U128::from_limbs([Word::MSB_ONE, Word::MSB_ONE]);
		let (shifted, out) = shift_in(&r, Word::ONE);
		assert_eq!(shifted.limbs, [Word::ONE, Word::ONE]);
		assert_eq!(out, Word::ONE);
	}

	#[test]
	fn test_divide_by_zero() {
		assert_eq!(divide_u256(&U256::MAX, &U128::ZERO), Err(ArithError::InvalidDivisor));
		assert_eq!(divide(&U128::ZERO, &U128::ZERO), Err(ArithError::InvalidDivisor));
	}

	#[test]
	fn test_zero_dividend() {
		let d = U128::from_u128(155890697699702184675385932277532475881);
		assert_eq!(divide_u256(&U256::ZERO, &d).unwrap(), (U256::ZERO, U128::ZERO));
	}

	#[test]
	fn test_unit_divisor() {
		let mut rng = StdRng::seed_from_u64(1);
		for _ in 0..16 {
			let p = random_u256(&mut rng);
			assert_eq!(divide_u256(&p, &U128::ONE).unwrap(), (p, U128::ZERO));
		}
	}

	#[test]
	fn test_divisor_larger_than_dividend() {
		let p = U256::from_u64(41);
		let d = U128::from_u64(42);
		assert_eq!(divide_u256(&p, &d).unwrap(), (U256::ZERO, U128::from_u64(41)));
	}

	#[test]
	fn test_max_divisor() {
		// (2^256 - 1) = (2^128 + 1) * (2^128 - 1)
		let (quotient, remainder) = divide_u256(&U256::MAX, &U128::MAX).unwrap();
		assert_eq!(quotient.limbs, [Word::ONE, Word::ZERO, Word::ONE, Word::ZERO]);
		assert_eq!(remainder, U128::ZERO);
	}

	#[test]
	fn test_remainder_overflow_path() {
		// Divisors with the top bit set force r * 2 + bit past 2^128.
		let mut rng = StdRng::seed_from_u64(2);
		for _ in 0..256 {
			let divisor = U128::from_u128(rng.random::<u128>() | (1 << 127));
			check_against_reference(&random_u256(&mut rng), &divisor);
		}
	}

	#[test]
	fn test_random_against_reference() {
		let mut rng = StdRng::seed_from_u64(3);
		for _ in 0..1000 {
			let divisor = U128::from_u128(rng.random::<u128>() >> rng.random_range(0..128u32));
			if divisor.is_zero() {
				continue;
			}
			check_against_reference(&random_u256(&mut rng), &divisor);
		}
	}

	proptest! {
		#[test]
		fn prop_divide_u128_matches_native(p in any::<u128>(), d in 1u128..=u128::MAX) {
			let (quotient, remainder) = divide(&U128::from_u128(p), &U128::from_u128(d)).unwrap();
			prop_assert_eq!(quotient.to_u128(), p / d);
			prop_assert_eq!(remainder.to_u128(), p % d);
		}

		#[test]
		fn prop_divide_u256(limbs in any::<[u64; 4]>(), d in 1u128..=u128::MAX) {
			let dividend = U256::from_limbs(limbs.map(Word));
			check_against_reference(&dividend, &U128::from_u128(d));
		}

		#[test]
		fn prop_divide_small_divisor(limbs in any::<[u64; 4]>(), d in 1u64..=u64::MAX) {
			let dividend = U256::from_limbs(limbs.map(Word));
			check_against_reference(&dividend, &U128::from_u64(d));
		}
	}
}
