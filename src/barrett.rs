//! Barrett reduction and modular exponentiation.
//!
//! The reduction trades the division in `a mod m` for two multiplies
//! against a precomputed reciprocal factor, which is what makes
//! repeated reductions against a fixed modulus (modexp) affordable.

use crate::arith::{less_than, subtract};
use crate::bytes::is_zero;
use crate::div::divide;
use crate::mul::multiply;

/// Precompute the Barrett factor `μ = ⌊2^(16·|m|) / m⌋`.
///
/// The factor is tied to the byte length of `m` as passed; reduction
/// must see the same encoding of `m`. The modulus must be nonzero and
/// must not be a power of two.
pub fn barrett_reducer_factor(m: &[u8]) -> Vec<u8> {
    assert!(!is_zero(m), "modulus is zero");
    assert!(!is_power_of_two(m), "modulus is a power of two");
    let shift = 2 * m.len();
    let mut radix = vec![0u8; shift + 1];
    radix[0] = 1;
    divide(&radix, m)
}

/// `a mod m` for `a < m²`, using a precomputed factor.
///
/// `q = ⌊a·μ / 2^(8k)⌋` with `k = 2·|m|` - the low `k` bytes of the
/// product are simply dropped - underestimates `⌊a/m⌋` by at most one,
/// so `a - q·m` needs at most one correcting subtraction of `m`.
pub fn mod_barrett_reduce(a: &[u8], m: &[u8], factor: &[u8]) -> Vec<u8> {
    assert!(!is_zero(m), "modulus is zero");
    assert!(!is_power_of_two(m), "modulus is a power of two");
    assert!(
        less_than(a, &multiply(m, m)),
        "operand must be below the squared modulus"
    );
    let shift = 2 * m.len();
    let t = multiply(a, factor);
    let q = if t.len() > shift {
        t[..t.len() - shift].to_vec()
    } else {
        vec![0]
    };
    let r = subtract(a, &multiply(&q, m));
    if less_than(&r, m) { r } else { subtract(&r, m) }
}

/// `base^exp mod m` by big-endian square-and-multiply; every
/// intermediate product goes through one Barrett reduction.
///
/// `exp = 0` yields `1`; `base = 0` with a nonzero exponent yields `0`.
pub fn modexp_barrett_reduce(base: &[u8], exp: &[u8], m: &[u8], factor: &[u8]) -> Vec<u8> {
    let base = mod_barrett_reduce(base, m, factor);
    let mut acc: Vec<u8> = vec![1];
    for byte in exp {
        for bit in (0..8).rev() {
            acc = mod_barrett_reduce(&multiply(&acc, &acc), m, factor);
            if byte >> bit & 1 == 1 {
                acc = mod_barrett_reduce(&multiply(&acc, &base), m, factor);
            }
        }
    }
    acc
}

/// A byte string encodes a power of two exactly when one byte is a
/// power of two and every other byte is zero.
fn is_power_of_two(v: &[u8]) -> bool {
    let mut found = false;
    for &byte in v {
        if byte == 0 {
            continue;
        }
        if found || !byte.is_power_of_two() {
            return false;
        }
        found = true;
    }
    found
}
