use std::fmt;

use chumsky::prelude::*;
use miette::*;
use thiserror::Error;

/// Reasons a line of input cannot be used as a battery bank.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum BankError {
    #[error("bank is empty")]
    #[diagnostic(
        code(bank::empty),
        help("a bank needs at least one battery digit")
    )]
    Empty,

    #[error("unexpected {found:?} at offset {position}")]
    #[diagnostic(
        code(bank::non_digit),
        help("banks may only contain the digits 0-9")
    )]
    NonDigit { found: char, position: usize },

    #[error("cannot turn on {k} batteries in a bank of {len}")]
    #[diagnostic(
        code(bank::selection_out_of_range),
        help("the number of batteries to turn on must be between 1 and the bank length")
    )]
    SelectionOutOfRange { k: usize, len: usize },
}

/// A validated, non-empty row of battery joltage digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bank<'a>(&'a str);

impl<'a> Bank<'a> {
    pub fn new(line: &'a str) -> Result<Self, BankError> {
        if line.is_empty() {
            return Err(BankError::Empty);
        }

        if let Some((position, found)) = line.char_indices().find(|(_, c)| !c.is_ascii_digit()) {
            return Err(BankError::NonDigit { found, position });
        }

        Ok(Self(line))
    }

    pub fn as_str(&self) -> &'a str {
        self.0
    }

    /// ASCII digit bytes, `b'0'..=b'9'`.
    pub fn digits(&self) -> &'a [u8] {
        self.0.as_bytes()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Checks that exactly `k` batteries can be picked out of this bank.
    pub fn ensure_selectable(&self, k: usize) -> Result<(), BankError> {
        if k == 0 || k > self.len() {
            return Err(BankError::SelectionOutOfRange { k, len: self.len() });
        }
        Ok(())
    }
}

impl<'a> TryFrom<&'a str> for Bank<'a> {
    type Error = BankError;

    fn try_from(line: &'a str) -> Result<Self, Self::Error> {
        Self::new(line)
    }
}

impl fmt::Display for Bank<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Splits the puzzle input into raw lines.
///
/// Validation is left to [`Bank::new`] so that a single malformed line can be
/// skipped instead of failing the whole input.
fn parser<'a>() -> impl Parser<'a, &'a str, Vec<&'a str>, extra::Err<Rich<'a, char>>> {
    none_of("\r\n")
        .repeated()
        .to_slice()
        .separated_by(text::newline())
        .allow_trailing()
        .collect()
}

pub fn parse_lines(input: &str) -> miette::Result<Vec<&str>> {
    parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))
}
