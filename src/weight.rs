//! Hamming weight and the high/low split rule.
//!
//! The weight oracle is the linear baseline everything else is measured
//! against: the combinatorial algorithms never count bits at runtime, they
//! derive weights structurally, and tests use `weight` to check them.
//!
//! The split rule is the single decomposition shared by the counter, the
//! enumerator, and the ranker: a length-n word is a high sub-word of
//! $j = \lfloor n/2 \rfloor$ bits stacked on a low sub-word of
//! $k = \lceil n/2 \rceil$ bits, assembled as `(high << k) | low`.

use num_bigint::BigUint;

/// Return the Hamming weight (number of set bits) of `word`.
pub fn weight(word: &BigUint) -> u64 {
    word.count_ones()
}

/// Split a word length into `(j, k)`: high-part and low-part bit lengths.
///
/// `j + k == n`, with the low part taking the extra bit when `n` is odd.
pub(crate) fn split(n: usize) -> (usize, usize) {
    let j = n / 2;
    (j, n - j)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_small_words() {
        assert_eq!(weight(&BigUint::from(0u32)), 0);
        assert_eq!(weight(&BigUint::from(1u32)), 1);
        assert_eq!(weight(&BigUint::from(0b1011u32)), 3);
        assert_eq!(weight(&BigUint::from(u64::MAX)), 64);
    }

    #[test]
    fn test_weight_wide_words() {
        // 2^200 has a single set bit, 2^200 - 1 has two hundred.
        let w = BigUint::from(1u32) << 200;
        assert_eq!(weight(&w), 1);
        assert_eq!(weight(&(w - 1u32)), 200);
    }

    #[test]
    fn test_split_covers_length() {
        for n in 0..=65 {
            let (j, k) = split(n);
            assert_eq!(j + k, n);
            assert!(k == j || k == j + 1);
        }
        assert_eq!(split(7), (3, 4));
        assert_eq!(split(8), (4, 4));
    }
}
