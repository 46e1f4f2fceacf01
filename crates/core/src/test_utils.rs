// Copyright 2025 Irreducible Inc.
//! Conversions to `num_bigint`, the independent reference used by the tests.

use crate::uint::Uint;

/// Returns a BigUint from u64 limbs with little-endian ordering
pub fn num_biguint_from_u64_limbs<I>(limbs: I) -> num_bigint::BigUint
where
	I: IntoIterator,
	I::Item: std::borrow::Borrow<u64>,
	I::IntoIter: ExactSizeIterator,
{
	use std::borrow::Borrow;

	let iter = limbs.into_iter();
	// Each u64 becomes two u32s (low word first for little-endian)
	let mut digits = Vec::with_capacity(iter.len() * 2);
	for item in iter {
		let double_digit = *item.borrow();
		digits.push(double_digit as u32);
		digits.push((double_digit >> 32) as u32);
	}
	num_bigint::BigUint::new(digits)
}

pub fn to_num_biguint<const N: usize>(value: &Uint<N>) -> num_bigint::BigUint {
	num_biguint_from_u64_limbs(value.limbs.iter().map(|limb| limb.as_u64()))
}
