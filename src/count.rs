//! Weight-class cardinalities.
//!
//! # Theory
//!
//! The number of n-bit words with exactly d set bits is the binomial
//! coefficient $\binom{n}{d}$, computed here by the multiplicative
//! recurrence
//!
//! $$\binom{n}{0} = 1, \qquad \binom{n}{k} = \binom{n}{k-1}\cdot\frac{n-k+1}{k}$$
//!
//! where every division is exact: after multiplying by $n-k+1$ the running
//! product is $k! \binom{n}{k}/(k-1)!\cdot(k-1)! = k\binom{n}{k}$, always
//! divisible by $k$. The bounded count is the partial row sum
//! $\sum_{k=0}^{d} \binom{n}{k}$, which closes to $2^n$ at $d = n$.
//!
//! Counts grow exponentially in $n$ ($\binom{n}{n/2} \sim 2^n/\sqrt{n}$), so
//! everything is `BigUint`. Results are memoized per thread by `(d, n)`;
//! the cache is invisible to callers.

use std::cell::RefCell;
use std::collections::HashMap;

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::error::{Error, Result};

thread_local! {
    static BINOMIAL_CACHE: RefCell<HashMap<(usize, usize), BigUint>> =
        RefCell::new(HashMap::new());
}

/// Return the number of n-bit words with exactly `d` set bits, $\binom{n}{d}$.
///
/// Fails with [`Error::InvalidRange`] unless `0 <= d <= n`.
pub fn exact_count(d: usize, n: usize) -> Result<BigUint> {
    if d > n {
        return Err(Error::InvalidRange(d, n));
    }
    Ok(binomial(d, n))
}

/// Return the number of n-bit words with at most `d` set bits,
/// $\sum_{k=0}^{d} \binom{n}{k}$.
///
/// Fails with [`Error::InvalidRange`] unless `0 <= d <= n`.
pub fn bounded_count(d: usize, n: usize) -> Result<BigUint> {
    if d > n {
        return Err(Error::InvalidRange(d, n));
    }
    if d == n {
        // Full row: the whole power set of n bit positions.
        return Ok(BigUint::one() << n);
    }
    let mut sum = BigUint::zero();
    for k in 0..=d {
        sum += binomial(k, n);
    }
    Ok(sum)
}

/// $\binom{n}{d}$ without range validation; zero when `d > n`.
///
/// Memoized by `(d, n)`. Internal callers construct arguments that are
/// already in range, but the zero case keeps the function total.
pub(crate) fn binomial(d: usize, n: usize) -> BigUint {
    if d > n {
        return BigUint::zero();
    }
    BINOMIAL_CACHE.with(|cache| {
        if let Some(hit) = cache.borrow().get(&(d, n)) {
            return hit.clone();
        }
        let mut acc = BigUint::one();
        for k in 1..=d {
            // Exact at every step: acc holds k * C(n, k) after the multiply.
            acc = acc * (n - k + 1) / k;
        }
        cache.borrow_mut().insert((d, n), acc.clone());
        acc
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_count_small_values() {
        assert_eq!(exact_count(0, 0).unwrap(), BigUint::from(1u32));
        assert_eq!(exact_count(2, 4).unwrap(), BigUint::from(6u32));
        assert_eq!(exact_count(2, 5).unwrap(), BigUint::from(10u32));
        assert_eq!(exact_count(3, 5).unwrap(), BigUint::from(10u32));
        assert_eq!(exact_count(5, 5).unwrap(), BigUint::from(1u32));
    }

    #[test]
    fn test_exact_count_exceeds_machine_words() {
        // C(256, 128) has 76 decimal digits; fixed-width arithmetic cannot
        // hold it, exact division must still come out whole.
        let c = exact_count(128, 256).unwrap();
        assert!(c.bits() > 128);
        // Pascal identity as an independent check.
        let up = exact_count(127, 255).unwrap() + exact_count(128, 255).unwrap();
        assert_eq!(c, up);
    }

    #[test]
    fn test_bounded_count_closes_to_power_set() {
        assert_eq!(bounded_count(3, 3).unwrap(), BigUint::from(8u32));
        for n in 0..=20 {
            assert_eq!(bounded_count(n, n).unwrap(), BigUint::one() << n);
        }
    }

    #[test]
    fn test_bounded_count_partial_sums() {
        // n = 5: 1, 6, 16, 26, 31, 32
        let expected = [1u32, 6, 16, 26, 31, 32];
        for (d, &e) in expected.iter().enumerate() {
            assert_eq!(bounded_count(d, 5).unwrap(), BigUint::from(e));
        }
    }

    #[test]
    fn test_invalid_range_rejected() {
        assert!(matches!(
            exact_count(4, 3),
            Err(Error::InvalidRange(4, 3))
        ));
        assert!(matches!(
            bounded_count(1, 0),
            Err(Error::InvalidRange(1, 0))
        ));
        // d == n is the largest valid weight, not an error.
        assert!(exact_count(3, 3).is_ok());
    }
}
