//! Addition, subtraction and comparison over big-endian byte strings.

use std::cmp::Ordering;

use crate::bytes::{enclosing_multiple, is_zero, pad};
use crate::limb::{self, BIG_LIMB_BYTES};

/// `a + b`.
///
/// Operands are aligned to a multiple of the 64-byte limb width and
/// added limb by limb, least significant first. Each step splits a
/// 513-bit sum into its low limb and carry twice - once for `a + b`,
/// once for folding in the incoming carry - so the running carry stays
/// a small counter (at most 2). A nonzero final carry becomes one
/// extra leading byte.
pub fn add(a: &[u8], b: &[u8]) -> Vec<u8> {
    let width = enclosing_multiple(a.len().max(b.len()), BIG_LIMB_BYTES);
    let a = pad(a, width);
    let b = pad(b, width);

    let mut out = vec![0u8; width];
    let mut carry: u64 = 0;
    for i in (0..width / BIG_LIMB_BYTES).rev() {
        let range = i * BIG_LIMB_BYTES..(i + 1) * BIG_LIMB_BYTES;
        let x = limb::load(&a[range.clone()]);
        let y = limb::load(&b[range.clone()]);
        let (sum, carry_s) = limb::add(&x, &y);
        let (sum, carry_t) = limb::add_word(&sum, carry);
        limb::store(&sum, &mut out[range]);
        carry = carry_s + carry_t;
    }
    if carry == 0 {
        return out;
    }
    let mut widened = Vec::with_capacity(width + 1);
    widened.push(carry as u8);
    widened.extend_from_slice(&out);
    widened
}

/// `a - b`, assuming `a >= b`.
///
/// Computed as `a + (!b + 1)` over the common padded width; the
/// two's-complement overflow shows up as one extra leading byte on the
/// sum and is dropped. Callers own the precondition: for `a < b` the
/// returned bytes are unspecified garbage.
pub fn subtract(a: &[u8], b: &[u8]) -> Vec<u8> {
    // 0 - 0
    if is_zero(a) {
        return a.to_vec();
    }
    // a - 0
    if is_zero(b) {
        return a.to_vec();
    }
    let width = enclosing_multiple(a.len().max(b.len()), BIG_LIMB_BYTES);
    let a = pad(a, width);
    let b = pad(b, width);
    if a == b {
        return vec![0u8; width];
    }
    let complement: Vec<u8> = b.iter().map(|&byte| !byte).collect();
    let negated = add(&complement, &[1]);
    let sum = add(&a, &negated);
    sum[1..].to_vec()
}

/// Three-way value comparison after aligning both operands to a common
/// limb width. Equal-length big-endian strings order lexicographically
/// exactly as their values do.
fn cmp_bytes(a: &[u8], b: &[u8]) -> Ordering {
    let width = enclosing_multiple(a.len().max(b.len()), BIG_LIMB_BYTES);
    pad(a, width).cmp(&pad(b, width))
}

/// Value equality, regardless of leading zero bytes.
pub fn equal(a: &[u8], b: &[u8]) -> bool {
    cmp_bytes(a, b) == Ordering::Equal
}

/// `a < b` as integer values.
pub fn less_than(a: &[u8], b: &[u8]) -> bool {
    cmp_bytes(a, b) == Ordering::Less
}

/// `a > b` as integer values.
pub fn greater_than(a: &[u8], b: &[u8]) -> bool {
    cmp_bytes(a, b) == Ordering::Greater
}
