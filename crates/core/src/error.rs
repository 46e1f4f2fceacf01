// Copyright 2025 Irreducible Inc.
//! Hosts error definitions for the core crate.

/// Limb arithmetic error.
///
/// Only recoverable input problems are reported here. Broken internal invariants, such as a carry
/// escaping the top limb of a product, panic instead.
#[allow(missing_docs)] // errors are self-documenting
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArithError {
	#[error("division by zero")]
	InvalidDivisor,
	#[error("value does not fit in {bits} bits")]
	OperandOutOfRange { bits: usize },
	#[error("invalid digit {digit:?} for radix {radix}")]
	InvalidDigit { digit: char, radix: u32 },
	#[error("cannot parse integer from empty string")]
	Empty,
}
