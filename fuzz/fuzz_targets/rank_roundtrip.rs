#![no_main]
use libfuzzer_sys::fuzz_target;
use num_bigint::BigUint;
use wbits::{
    bounded_count, exact_count, rank_bounded, rank_exact, unrank_bounded, unrank_exact, weight,
};

fuzz_target!(|data: (u8, u8, u64)| {
    let (n_raw, d_raw, i_raw) = data;

    // Clamp the raw input into a valid weight class.
    let n = (n_raw % 48) as usize;
    let d = if n == 0 { 0 } else { (d_raw as usize) % (n + 1) };

    let count = exact_count(d, n).unwrap();
    let i = BigUint::from(i_raw) % &count;

    let word = unrank_exact(&i, d, n).unwrap();
    assert_eq!(weight(&word), d as u64);
    assert!(word < (BigUint::from(1u32) << n) || n == 0);
    assert_eq!(rank_exact(&word, d, n).unwrap(), i);

    let bounded = bounded_count(d, n).unwrap();
    let i = BigUint::from(i_raw) % &bounded;
    let word = unrank_bounded(&i, d, n).unwrap();
    assert!(weight(&word) <= d as u64);
    assert_eq!(rank_bounded(&word, d, n).unwrap(), i);

    // Out-of-range ranks must fail, never wrap.
    assert!(unrank_exact(&count, d, n).is_err());
    assert!(unrank_bounded(&bounded, d, n).is_err());
});
