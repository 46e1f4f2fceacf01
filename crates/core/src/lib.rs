// Copyright 2025 Irreducible Inc.
//! Multi-precision unsigned arithmetic over 64-bit limbs.
//!
//! Most importantly it hosts the 128×128→256-bit [limb multiplier][`mul::multiply`] and the
//! [bit-serial divider][`div::divide`] that takes such a product apart again. Neither relies on
//! an integer type wider than a single 64×64-bit partial product.

#![warn(missing_docs)]

pub mod consts;
pub mod div;
pub mod error;
pub mod mul;
pub mod uint;
pub mod verify;
pub mod word;

#[cfg(test)]
mod test_utils;

pub use div::{divide, divide_u256};
pub use error::ArithError;
pub use mul::{multiply, multiply_limbs, multiply_u128};
pub use uint::{U128, U256, Uint};
pub use word::Word;
