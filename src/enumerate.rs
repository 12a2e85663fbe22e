//! Canonical enumeration of weight classes.
//!
//! # Order
//!
//! The sequence for a class `(d, n)` is defined by the split rule: words
//! are grouped by the weight `h` carried by the high sub-word, `h`
//! ascending over `[max(0, d-k), min(j, d)]`; within a group the high
//! parts advance in their own canonical order as the outer loop and the
//! low parts as the inner loop, each word assembled as `(high << k) | low`.
//!
//! This order is the addressing scheme the ranker navigates, so it is part
//! of the contract, not an implementation detail.
//!
//! Sequences are lazy and restartable: each `enumerate_*` call builds a
//! fresh [`Words`] from the start, and no state is shared between calls.

use std::fmt;

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::error::{Error, Result};
use crate::weight::split;

/// A lazy, finite sequence of words in canonical order.
pub struct Words {
    d: usize,
    n: usize,
    bounded: bool,
    inner: Box<dyn Iterator<Item = BigUint>>,
}

impl fmt::Debug for Words {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Words")
            .field("d", &self.d)
            .field("n", &self.n)
            .field("bounded", &self.bounded)
            .finish()
    }
}

impl Iterator for Words {
    type Item = BigUint;

    fn next(&mut self) -> Option<BigUint> {
        self.inner.next()
    }
}

/// Enumerate all n-bit words with exactly `d` set bits, in canonical order.
///
/// Yields `exact_count(d, n)` distinct words. Fails with
/// [`Error::InvalidRange`] unless `0 <= d <= n`.
pub fn enumerate_exact(d: usize, n: usize) -> Result<Words> {
    if d > n {
        return Err(Error::InvalidRange(d, n));
    }
    Ok(Words {
        d,
        n,
        bounded: false,
        inner: exact_words(d, n),
    })
}

/// Enumerate all n-bit words with at most `d` set bits: the concatenation
/// of the exact classes `0..=d` in ascending weight.
///
/// Yields `bounded_count(d, n)` distinct words. Fails with
/// [`Error::InvalidRange`] unless `0 <= d <= n`.
pub fn enumerate_bounded(d: usize, n: usize) -> Result<Words> {
    if d > n {
        return Err(Error::InvalidRange(d, n));
    }
    Ok(Words {
        d,
        n,
        bounded: true,
        inner: Box::new((0..=d).flat_map(move |w| exact_words(w, n))),
    })
}

/// Recursive body; callers guarantee `d <= n`.
fn exact_words(d: usize, n: usize) -> Box<dyn Iterator<Item = BigUint>> {
    // n = 0 holds the single empty word; n = 1 holds 0 or 1 by weight.
    if n <= 1 {
        let word = if d == 0 { BigUint::zero() } else { BigUint::one() };
        return Box::new(std::iter::once(word));
    }
    let (j, k) = split(n);
    let lo = d.saturating_sub(k);
    let hi = j.min(d);
    Box::new((lo..=hi).flat_map(move |h| {
        exact_words(h, j).flat_map(move |high| {
            let shifted = high << k;
            exact_words(d - h, k).map(move |low| &shifted | low)
        })
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect_u32(words: Words) -> Vec<u32> {
        words
            .map(|w| {
                let digits = w.to_u32_digits();
                if digits.is_empty() {
                    0
                } else {
                    digits[0]
                }
            })
            .collect()
    }

    #[test]
    fn test_canonical_order_two_of_three() {
        // j = 1, k = 2: group h = 0 holds 011; group h = 1 crosses the
        // high bit with the weight-1 low words 01, 10.
        let got = collect_u32(enumerate_exact(2, 3).unwrap());
        assert_eq!(got, vec![0b011, 0b101, 0b110]);
    }

    #[test]
    fn test_canonical_order_two_of_four() {
        let got = collect_u32(enumerate_exact(2, 4).unwrap());
        assert_eq!(got, vec![0b0011, 0b0101, 0b0110, 0b1001, 0b1010, 0b1100]);
    }

    #[test]
    fn test_zero_weight_class_is_singleton() {
        for n in [0usize, 1, 2, 7, 64, 130] {
            let got: Vec<BigUint> = enumerate_exact(0, n).unwrap().collect();
            assert_eq!(got, vec![BigUint::zero()]);
        }
    }

    #[test]
    fn test_full_weight_class_is_all_ones() {
        let got: Vec<BigUint> = enumerate_exact(5, 5).unwrap().collect();
        assert_eq!(got, vec![BigUint::from(31u32)]);
    }

    #[test]
    fn test_bounded_is_concatenation_by_weight() {
        let got = collect_u32(enumerate_bounded(3, 3).unwrap());
        assert_eq!(got, vec![0, 0b001, 0b010, 0b100, 0b011, 0b101, 0b110, 0b111]);
    }

    #[test]
    fn test_sequences_restart_from_scratch() {
        let first = collect_u32(enumerate_exact(2, 6).unwrap());
        let second = collect_u32(enumerate_exact(2, 6).unwrap());
        assert_eq!(first, second);
        assert_eq!(first.len(), 15);
    }

    #[test]
    fn test_invalid_class_rejected() {
        assert!(enumerate_exact(2, 1).is_err());
        assert!(enumerate_bounded(5, 4).is_err());
    }
}
