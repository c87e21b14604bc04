pub mod bank;
pub mod part1;
pub mod part2;
pub mod selector;

use miette::*;
use num_bigint::BigUint;
use tracing::{info, warn};
use tracing_subscriber::filter::{EnvFilter, LevelFilter};

use crate::bank::{parse_lines, Bank};
use crate::selector::select_max_subsequence;

/// Log filter for the binaries: `RUST_LOG` when set, `info` otherwise.
pub fn log_filter() -> EnvFilter {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default();
    parse_log_filter(&directives)
}

fn parse_log_filter(directives: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse_lossy(directives)
}

/// Largest joltage of every usable bank in `input`, in input order, turning on
/// exactly `k` batteries per bank.
///
/// Blank lines are ignored. Lines that are not a bank, or are shorter than `k`,
/// are reported and skipped.
pub fn joltages(input: &str, k: usize) -> Result<Vec<BigUint>> {
    let lines = parse_lines(input)?;
    let mut joltages = Vec::with_capacity(lines.len());

    for (index, line) in lines.into_iter().enumerate() {
        if line.is_empty() {
            continue;
        }

        let bank = match Bank::new(line).and_then(|bank| bank.ensure_selectable(k).map(|_| bank)) {
            Ok(bank) => bank,
            Err(error) => {
                warn!(line = index + 1, %error, "skipping bank");
                continue;
            }
        };

        if let Some(joltage) = select_max_subsequence(&bank, k) {
            info!(%bank, %joltage, "max joltage");
            joltages.push(joltage);
        }
    }

    Ok(joltages)
}

/// Sum of the largest joltage of every usable bank.
pub fn total_output_joltage(input: &str, k: usize) -> Result<BigUint> {
    Ok(joltages(input, k)?.into_iter().sum())
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    const EXAMPLE: &str = "987654321111111
811111111111119
234234234234278
818181911112111";

    #[test]
    fn selections_with_different_counts_add_up() {
        let total: BigUint = [("29", 1), ("1234", 2)]
            .into_iter()
            .map(|(s, k)| select_max_subsequence(&Bank::new(s).unwrap(), k).unwrap())
            .sum();
        assert_eq!(total, BigUint::from(43u32));
    }

    #[rstest]
    #[case(2, &[98, 89, 78, 92])]
    #[case(12, &[987654321111, 811111111119, 434234234278, 888911112111])]
    fn joltage_per_bank(#[case] k: usize, #[case] expected: &[u64]) -> Result<()> {
        let expected: Vec<BigUint> = expected.iter().copied().map(BigUint::from).collect();
        assert_eq!(joltages(EXAMPLE, k)?, expected);
        Ok(())
    }

    #[test]
    fn skips_malformed_and_short_banks() -> Result<()> {
        let input = "29\n\n12x4\n7\n1234\r\n \n";
        assert_eq!(
            joltages(input, 2)?,
            vec![BigUint::from(29u32), BigUint::from(34u32)]
        );
        assert_eq!(total_output_joltage(input, 2)?, BigUint::from(63u32));
        Ok(())
    }

    #[test]
    fn empty_input_sums_to_zero() -> Result<()> {
        assert_eq!(total_output_joltage("", 12)?, BigUint::from(0u32));
        assert_eq!(total_output_joltage("\n\n", 12)?, BigUint::from(0u32));
        Ok(())
    }

    #[rstest]
    #[case("", LevelFilter::INFO)]
    #[case("debug", LevelFilter::DEBUG)]
    #[case("error", LevelFilter::ERROR)]
    fn log_level_defaults_to_info(#[case] directives: &str, #[case] expected: LevelFilter) {
        assert_eq!(parse_log_filter(directives).max_level_hint(), Some(expected));
    }

    #[test]
    fn zero_batteries_selects_nothing() -> Result<()> {
        assert!(joltages(EXAMPLE, 0)?.is_empty());
        Ok(())
    }
}
