//! Karatsuba multiplication.

use crate::arith::{add, subtract};
use crate::bytes::{enclosing_multiple, pad};
use crate::limb::{self, BIG_LIMB_BYTES};

/// `x * y`.
///
/// Recursive Karatsuba over the limb-aligned width:
///
/// ```text
///   x = xl·2^(8·sh) + xr        y = yl·2^(8·sh) + yr
///
///   p1 = xl·yl
///   p2 = xr·yr
///   p3 = (xl + xr)·(yl + yr)
///   p4 = p3 - p1 - p2                    (the cross terms)
///
///   x·y = p1·2^(16·sh) + p4·2^(8·sh) + p2
/// ```
///
/// Shifts are zero-byte concatenation; the recursion bottoms out in
/// the 64-byte widening multiply of the limb primitive. The operand
/// sums feeding `p3` can run one byte over the half width, which costs
/// at most two extra recursion levels before they collapse back under
/// a single limb.
pub fn multiply(x: &[u8], y: &[u8]) -> Vec<u8> {
    let width = enclosing_multiple(x.len().max(y.len()), BIG_LIMB_BYTES);
    let x = pad(x, width);
    let y = pad(y, width);

    if width <= BIG_LIMB_BYTES {
        return mul_base(&x, &y);
    }

    let first_half = width / 2;
    let second_half = width - first_half;
    let (x_left, x_right) = x.split_at(first_half);
    let (y_left, y_right) = y.split_at(first_half);

    let p1 = multiply(x_left, y_left);
    let p2 = multiply(x_right, y_right);
    let p3 = multiply(&add(x_left, x_right), &add(y_left, y_right));
    let p4 = subtract(&subtract(&p3, &p1), &p2);

    let shifted_p1 = shift_bytes(p1, 2 * second_half);
    let shifted_p4 = shift_bytes(p4, second_half);
    add(&add(&shifted_p1, &shifted_p4), &p2)
}

/// Multiply by `256^count`: append that many zero bytes.
fn shift_bytes(mut value: Vec<u8>, count: usize) -> Vec<u8> {
    value.resize(value.len() + count, 0);
    value
}

/// Base case: one limb per operand, full 1024-bit product.
fn mul_base(x: &[u8], y: &[u8]) -> Vec<u8> {
    if x.is_empty() {
        return Vec::new();
    }
    let prod = limb::mul(&limb::load(x), &limb::load(y));
    let mut out = vec![0u8; 2 * BIG_LIMB_BYTES];
    limb::store(&prod, &mut out);
    out
}
