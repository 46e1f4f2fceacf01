// Copyright 2025 Irreducible Inc.
use anyhow::{Context, Result};
use limb256_core::{
	U128, divide_u256, multiply,
	verify::{verify_division, verify_product},
};

const OPERAND_A: &str = "44604940582656816551270015030630754342";
const OPERAND_B: &str = "26697901239309924063484575321349938637";
const DIVISOR: &str = "155890697699702184675385932277532475881";

/// Multiplies two fixed 128-bit operands, divides the product by a fixed 128-bit divisor, checks
/// both results, and prints them. Takes no arguments.
fn main() -> Result<()> {
	let _tracing_guard = tracing_profile::init_tracing().ok();

	let a: U128 = OPERAND_A.parse().context("Failed to parse operand a")?;
	let b: U128 = OPERAND_B.parse().context("Failed to parse operand b")?;
	let d: U128 = DIVISOR.parse().context("Failed to parse divisor")?;

	let product = multiply(&a, &b);
	tracing::debug!("{a:#x} * {b:#x} = {product:#x}");
	verify_product(&a, &b, &product)
		.map_err(anyhow::Error::msg)
		.context("Product check failed")?;

	let (quotient, remainder) = divide_u256(&product, &d).context("Division failed")?;
	tracing::debug!("{product:#x} / {d:#x} = {quotient:#x} rem {remainder:#x}");
	verify_division(&product, &d, &quotient, &remainder)
		.map_err(anyhow::Error::msg)
		.context("Division check failed")?;

	println!("product   = {product}");
	println!("quotient  = {quotient}");
	println!("remainder = {remainder}");

	tracing::info!("Verified {}-bit product and division", product.bit_len());
	Ok(())
}
