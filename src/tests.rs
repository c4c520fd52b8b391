//! Property-based tests using quickcheck.
//!
//! Every operation is checked against num-bigint's arbitrary-precision
//! integers; byte strings of any length are fair inputs, so the
//! properties double as leading-zero-invariance checks.

use ethnum::U256;
use num_bigint::BigUint;
use quickcheck_macros::quickcheck;

use crate::bytes::is_zero;
use crate::digits;
use crate::{
    add, barrett_reducer_factor, divide, equal, greater_than, less_than, mod_barrett_reduce,
    modexp_barrett_reduce, multiply, subtract,
};

fn value(bytes: &[u8]) -> BigUint {
    BigUint::from_bytes_be(bytes)
}

fn zero() -> BigUint {
    BigUint::from(0u32)
}

/// Moduli Barrett accepts: nonzero, not a power of two.
fn admissible_modulus(m: &[u8]) -> bool {
    let v = value(m);
    v != zero() && v.count_ones() != 1
}

// ============================================================================
// Addition and subtraction
// ============================================================================

#[quickcheck]
fn add_matches_reference(a: Vec<u8>, b: Vec<u8>) -> bool {
    value(&add(&a, &b)) == value(&a) + value(&b)
}

#[quickcheck]
fn add_output_is_limb_aligned_or_one_over(a: Vec<u8>, b: Vec<u8>) -> bool {
    let len = add(&a, &b).len();
    len % 64 == 0 || len % 64 == 1
}

#[quickcheck]
fn subtract_matches_reference(a: Vec<u8>, b: Vec<u8>) -> bool {
    let (hi, lo) = if value(&a) >= value(&b) { (a, b) } else { (b, a) };
    value(&subtract(&hi, &lo)) == value(&hi) - value(&lo)
}

#[quickcheck]
fn subtract_undoes_add(a: Vec<u8>, b: Vec<u8>) -> bool {
    value(&subtract(&add(&a, &b), &b)) == value(&a)
}

#[quickcheck]
fn subtract_self_is_zero(a: Vec<u8>) -> bool {
    value(&subtract(&a, &a)) == zero()
}

// ============================================================================
// Comparators
// ============================================================================

#[quickcheck]
fn comparators_match_reference(a: Vec<u8>, b: Vec<u8>) -> bool {
    equal(&a, &b) == (value(&a) == value(&b))
        && less_than(&a, &b) == (value(&a) < value(&b))
        && greater_than(&a, &b) == (value(&a) > value(&b))
}

#[quickcheck]
fn comparator_trichotomy(a: Vec<u8>, b: Vec<u8>) -> bool {
    let hits = [equal(&a, &b), less_than(&a, &b), greater_than(&a, &b)];
    hits.iter().filter(|&&hit| hit).count() == 1
}

// ============================================================================
// Multiplication
// ============================================================================

#[quickcheck]
fn multiply_matches_reference(a: Vec<u8>, b: Vec<u8>) -> bool {
    value(&multiply(&a, &b)) == value(&a) * value(&b)
}

#[quickcheck]
fn multiply_associates(a: Vec<u8>, b: Vec<u8>, c: Vec<u8>) -> bool {
    value(&multiply(&multiply(&a, &b), &c)) == value(&multiply(&a, &multiply(&b, &c)))
}

// ============================================================================
// Division
// ============================================================================

#[quickcheck]
fn divide_matches_reference(u: Vec<u8>, v: Vec<u8>) -> bool {
    if is_zero(&v) {
        return true;
    }
    value(&divide(&u, &v)) == value(&u) / value(&v)
}

#[quickcheck]
fn divide_identity_holds(u: Vec<u8>, v: Vec<u8>) -> bool {
    if is_zero(&v) {
        return true;
    }
    let q = value(&divide(&u, &v));
    let (big_u, big_v) = (value(&u), value(&v));
    let prod = &q * &big_v;
    prod <= big_u && big_u - prod < big_v
}

#[quickcheck]
fn divide_by_larger_is_zero(u: Vec<u8>, v: Vec<u8>) -> bool {
    if value(&u) >= value(&v) {
        return true;
    }
    value(&divide(&u, &v)) == zero()
}

// ============================================================================
// Leading-zero invariance
// ============================================================================

#[quickcheck]
fn padding_never_changes_results(a: Vec<u8>, b: Vec<u8>, pad_a: u8, pad_b: u8) -> bool {
    let mut wide_a = vec![0u8; pad_a as usize % 40];
    wide_a.extend_from_slice(&a);
    let mut wide_b = vec![0u8; pad_b as usize % 40];
    wide_b.extend_from_slice(&b);

    value(&add(&wide_a, &wide_b)) == value(&add(&a, &b))
        && value(&multiply(&wide_a, &wide_b)) == value(&multiply(&a, &b))
        && less_than(&wide_a, &wide_b) == less_than(&a, &b)
        && (is_zero(&b) || value(&divide(&wide_a, &wide_b)) == value(&divide(&a, &b)))
}

// ============================================================================
// Digit codec and digit primitives
// ============================================================================

#[quickcheck]
fn digit_codec_roundtrips(v: Vec<u8>) -> bool {
    let decoded = digits::to_digits(&v);
    decoded[0] == U256::ZERO && value(&digits::from_digits(&decoded)) == value(&v)
}

fn digit_of(bytes: &[u8]) -> U256 {
    let take = bytes.len().min(32);
    let mut raw = [0u8; 32];
    raw[32 - take..].copy_from_slice(&bytes[..take]);
    U256::from_be_bytes(raw)
}

fn digit_value(d: U256) -> BigUint {
    BigUint::from_bytes_be(&d.to_be_bytes())
}

#[quickcheck]
fn mul_wide_matches_reference(a: Vec<u8>, b: Vec<u8>) -> bool {
    let (a, b) = (digit_of(&a), digit_of(&b));
    let (hi, lo) = digits::mul_wide(a, b);
    (digit_value(hi) << 256usize) + digit_value(lo) == digit_value(a) * digit_value(b)
}

#[quickcheck]
fn div_wide_matches_reference(hi: Vec<u8>, lo: Vec<u8>, d: Vec<u8>) -> bool {
    let (hi, lo, d) = (digit_of(&hi), digit_of(&lo), digit_of(&d));
    if hi >= d {
        return true; // also skips d == 0
    }
    let (q, r) = digits::div_wide(hi, lo, d);
    let dividend = (digit_value(hi) << 256usize) + digit_value(lo);
    digit_value(q) == &dividend / digit_value(d) && digit_value(r) == dividend % digit_value(d)
}

// ============================================================================
// Barrett reduction and modexp
// ============================================================================

#[quickcheck]
fn barrett_factor_matches_reference(m: Vec<u8>) -> bool {
    if !admissible_modulus(&m) {
        return true;
    }
    let factor = barrett_reducer_factor(&m);
    value(&factor) == (BigUint::from(1u32) << (16 * m.len())) / value(&m)
}

#[quickcheck]
fn barrett_reduce_matches_reference(a: Vec<u8>, m: Vec<u8>) -> bool {
    if !admissible_modulus(&m) {
        return true;
    }
    let big_m = value(&m);
    let a = (value(&a) % (&big_m * &big_m)).to_bytes_be();
    let factor = barrett_reducer_factor(&m);
    value(&mod_barrett_reduce(&a, &m, &factor)) == value(&a) % big_m
}

#[quickcheck]
fn modexp_matches_reference(base: Vec<u8>, exp: u16, m: Vec<u8>) -> bool {
    if !admissible_modulus(&m) {
        return true;
    }
    let big_m = value(&m);
    let base = (value(&base) % (&big_m * &big_m)).to_bytes_be();
    let factor = barrett_reducer_factor(&m);
    let result = modexp_barrett_reduce(&base, &exp.to_be_bytes(), &m, &factor);
    value(&result) == value(&base).modpow(&BigUint::from(exp), &big_m)
}

#[quickcheck]
fn modexp_zero_exponent_is_one(base: Vec<u8>, m: Vec<u8>) -> bool {
    if !admissible_modulus(&m) {
        return true;
    }
    let big_m = value(&m);
    let base = (value(&base) % (&big_m * &big_m)).to_bytes_be();
    let factor = barrett_reducer_factor(&m);
    value(&modexp_barrett_reduce(&base, &[], &m, &factor)) == BigUint::from(1u32)
}
