use num_bigint::BigUint;
use num_traits::Zero;

use crate::bank::Bank;

/// Picks `k` digits out of `bank`, keeping their relative order, so that they
/// read as the largest possible number.
///
/// At every step we may jump the cursor forward as long as enough digits are
/// left behind it to finish the selection. Inside that reachable window we jump
/// to the largest digit, taking the earliest one on ties so no skip is wasted.
///
/// Each of the `k` steps rescans its window, so this is `O(n * k)`. See
/// [`select_max_digits_stack`] for the linear version.
///
/// Returns `None` when `k` is zero or larger than the bank.
pub fn select_max_digits(bank: &Bank<'_>, k: usize) -> Option<Vec<u8>> {
    let digits = bank.digits();
    let n = digits.len();

    if k == 0 || k > n {
        return None;
    }

    let to_skip = n - k;
    let mut selected = Vec::with_capacity(k);
    let mut skipped = 0;
    let mut i = 0;

    while selected.len() < k {
        let remaining = k - selected.len();
        let available = n - i;
        let can_skip = available - remaining;

        if skipped < to_skip && can_skip > 0 {
            // max_by_key keeps the last of equal maxima, so scan backwards
            // to land on the first one.
            let jump = digits[i..=i + can_skip]
                .iter()
                .enumerate()
                .rev()
                .max_by_key(|&(_, digit)| digit)
                .map_or(0, |(offset, _)| offset);

            skipped += jump;
            i += jump;
        }

        selected.push(digits[i]);
        i += 1;
    }

    Some(selected)
}

/// Same selection as [`select_max_digits`], built with a decreasing stack in
/// `O(n)`.
///
/// Smaller digits are popped while a larger one arrives and there are still
/// removals left. Whatever remains past `k` is trailing surplus.
pub fn select_max_digits_stack(bank: &Bank<'_>, k: usize) -> Option<Vec<u8>> {
    let digits = bank.digits();
    let n = digits.len();

    if k == 0 || k > n {
        return None;
    }

    let mut to_remove = n - k;
    let mut stack: Vec<u8> = Vec::with_capacity(n);

    for &digit in digits {
        while to_remove > 0 && stack.last().is_some_and(|&top| top < digit) {
            stack.pop();
            to_remove -= 1;
        }
        stack.push(digit);
    }

    stack.truncate(k);
    Some(stack)
}

/// Largest number formed by `k` in-order digits of `bank`.
pub fn select_max_subsequence(bank: &Bank<'_>, k: usize) -> Option<BigUint> {
    select_max_digits(bank, k).map(|digits| to_number(&digits))
}

/// [`select_max_subsequence`] backed by [`select_max_digits_stack`].
pub fn select_max_subsequence_stack(bank: &Bank<'_>, k: usize) -> Option<BigUint> {
    select_max_digits_stack(bank, k).map(|digits| to_number(&digits))
}

/// Reads ASCII digits as a base 10 number. Leading zeros are dropped.
fn to_number(digits: &[u8]) -> BigUint {
    digits.iter().fold(BigUint::zero(), |acc, &digit| {
        acc * 10u32 + u32::from(digit - b'0')
    })
}
