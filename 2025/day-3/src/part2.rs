use miette::*;

use crate::total_output_joltage;

/// The safety override needs twelve batteries on in every bank.
pub const BATTERIES_PER_BANK: usize = 12;

#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> Result<String> {
    let total_joltage = total_output_joltage(input, BATTERIES_PER_BANK)?;
    Ok(total_joltage.to_string())
}
