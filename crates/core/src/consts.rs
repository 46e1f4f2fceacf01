// Copyright 2025 Irreducible Inc.
//! Fixed widths of the limb arithmetic.

/// Computes the base-2 logarithm of a value, panicking if it's not a power of 2.
const fn checked_log_2(val: usize) -> usize {
	assert!(val.is_power_of_two(), "Value is not a power of 2");
	val.ilog2() as usize
}

/// A limb is a 64-bit word.
pub const LIMB_SIZE_BYTES: usize = 8;

/// A limb is a 64-bit word.
pub const LIMB_SIZE_BITS: usize = LIMB_SIZE_BYTES * 8;

/// log2 of [`LIMB_SIZE_BITS`].
pub const LOG_LIMB_SIZE_BITS: usize = checked_log_2(LIMB_SIZE_BITS);

/// Number of limbs in a multiplication operand or a divisor (128 bits).
pub const OPERAND_LIMBS: usize = 2;

/// Number of limbs in a product or a quotient (256 bits).
pub const PRODUCT_LIMBS: usize = 2 * OPERAND_LIMBS;

/// The largest power of ten that fits in a single limb.
///
/// Decimal rendering peels off this many digits per division.
pub const DECIMAL_CHUNK: u64 = 10_000_000_000_000_000_000;

/// Number of decimal digits in [`DECIMAL_CHUNK`].
pub const DECIMAL_CHUNK_DIGITS: usize = 19;
