//! # Weight-Indexed Words
//!
//! *Counting, enumerating, and addressing binary words by Hamming weight.*
//!
//! ## Intuition First
//!
//! Picture every n-bit word laid out on shelves, one shelf per Hamming
//! weight. Shelf d holds exactly $\binom{n}{d}$ words, and the books on a
//! shelf stand in one fixed, canonical order. This crate answers three
//! questions about those shelves without ever building them: how many books
//! a shelf holds, which book stands at position i, and at which position a
//! given book stands. For n in the hundreds a shelf outgrows the
//! observable universe, so the answers must come from arithmetic, not from
//! walking the shelf.
//!
//! ## The Problem
//!
//! Subsets of a fixed universe appear everywhere — constant-weight codes,
//! compact subset indices, weight-bounded search frontiers — and the naive
//! tools do not scale:
//! - **Enumeration**: generating all $\binom{n}{d}$ words to find the i-th
//!   one is exponential in n.
//! - **Fixed-width arithmetic**: $\binom{256}{128}$ has 76 decimal digits;
//!   no machine word holds it, and floating point silently destroys the
//!   exactness that indexing depends on.
//!
//! ## Historical Context
//!
//! ```text
//! 1654  Pascal      The arithmetic triangle: C(n,k) by recurrence
//! 1887  Macaulay    Representing integers as sums of binomials
//! 1960  Lehmer      Ranking and unranking combinatorial objects by machine
//! 1966  Beckenbach  "Applied Combinatorial Mathematics": the combinatorial
//!                   number system in its modern form
//! 1972  Schalkwijk  Enumerative coding of constant-weight binary sequences
//! 1973  Cover       Enumerative source encoding: rank = sum of skipped counts
//! ```
//!
//! Cover's observation is the heart of the ranker: the rank of an object is
//! the number of objects that precede it, and that number decomposes into
//! sub-problem cardinalities you can compute directly.
//!
//! ## Mathematical Formulation
//!
//! A length-n word splits into a high part of $j = \lfloor n/2 \rfloor$
//! bits and a low part of $k = \lceil n/2 \rceil$ bits. A word of weight d
//! assigns weight h to its high part, with
//! $h \in [\max(0, d-k), \min(j, d)]$, giving
//!
//! $$\binom{n}{d} = \sum_{h} \binom{j}{h} \binom{k}{d-h}$$
//!
//! (the Vandermonde convolution). The canonical order sorts by h, then by
//! high-part rank, then by low-part rank; ranks navigate the same sum by
//! quotient and remainder against group sizes.
//!
//! The fundamental operations are:
//! - `exact_count(d, n)` / `bounded_count(d, n)`: class cardinalities.
//! - `enumerate_exact(d, n)` / `enumerate_bounded(d, n)`: the canonical
//!   sequence itself, lazily.
//! - `unrank_exact(i, d, n)` / `unrank_bounded(i, d, n)`: position → word.
//! - `rank_exact(w, d, n)` / `rank_bounded(w, d, n)`: word → position.
//!
//! ## Complexity Analysis
//!
//! - **Counting**: $O(d)$ big-integer steps, memoized by (d, n).
//! - **Rank/unrank**: $O(\log n)$ split levels, each scanning at most
//!   $O(n)$ candidate groups of memoized binomials.
//! - **Enumeration**: output-linear; each word costs amortized shift-or
//!   work over the split tree.
//!
//! ## What Could Go Wrong
//!
//! 1. **Inexact division**: the multiplicative binomial recurrence divides
//!    at every step. The division is provably exact over the integers, but
//!    only if it *is* integer division — one float sneaks in and large
//!    classes silently corrupt.
//! 2. **Order drift**: rank and enumeration must agree bit-for-bit on the
//!    canonical order. Any "optimization" that reorders the h-groups or
//!    swaps the loop nesting breaks every stored index.
//! 3. **Allocator limits**: words, counts, and ranks are arbitrary
//!    precision; a large enough n exhausts memory, and the global
//!    allocator aborts rather than truncating.
//!
//! ## Implementation Notes
//!
//! All operations are pure and thread-safe (the count memo is
//! thread-local). Sequences are restartable values, not shared iterators.
//!
//! ## References
//!
//! - Cover, T. M. (1973). "Enumerative source encoding."
//! - Schalkwijk, J. P. M. (1972). "An algorithm for source coding."
//! - Knuth, D. E. *TAOCP* Vol. 4A, §7.2.1.3 (generating all combinations).

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod count;
pub mod enumerate;
pub mod error;
pub mod rank;
pub mod weight;

pub use count::{bounded_count, exact_count};
pub use enumerate::{enumerate_bounded, enumerate_exact, Words};
pub use error::{Error, Result};
pub use rank::{rank_bounded, rank_exact, unrank_bounded, unrank_exact};
pub use weight::weight;
