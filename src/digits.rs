//! Base-2^256 digit vectors and double-digit arithmetic.
//!
//! Division works over vectors of 256-bit digits (`ethnum::U256`),
//! big-endian digit order, with one zero sentinel digit at index 0 -
//! the slot the normalization step scribbles into. The helpers below
//! supply the 512-bit intermediates the digit loops need: a widening
//! multiply, a two-digit-by-one-digit division, and add/sub over
//! `(hi, lo)` pairs.

use ethnum::U256;

use crate::bytes::pad_as_multiple;

/// Width of one division digit in bytes.
pub(crate) const DIGIT_BYTES: usize = 32;

/// Decode a byte string into big-endian digits behind a zero sentinel.
///
/// The most significant real digit lands at index 1; the vector for a
/// k-digit integer has length k + 1.
pub(crate) fn to_digits(num: &[u8]) -> Vec<U256> {
    let padded = pad_as_multiple(num, DIGIT_BYTES);
    let mut digits = Vec::with_capacity(padded.len() / DIGIT_BYTES + 1);
    digits.push(U256::ZERO);
    for chunk in padded.chunks_exact(DIGIT_BYTES) {
        let mut raw = [0u8; DIGIT_BYTES];
        raw.copy_from_slice(chunk);
        digits.push(U256::from_be_bytes(raw));
    }
    digits
}

/// Serialize digits back to bytes: plain 32-byte big-endian
/// concatenation, sentinel included when the caller kept one.
pub(crate) fn from_digits(digits: &[U256]) -> Vec<u8> {
    let mut out = Vec::with_capacity(digits.len() * DIGIT_BYTES);
    for digit in digits {
        out.extend_from_slice(&digit.to_be_bytes());
    }
    out
}

fn to_words(v: U256) -> [u64; 4] {
    let (hi, lo) = v.into_words();
    [lo as u64, (lo >> 64) as u64, hi as u64, (hi >> 64) as u64]
}

fn from_words(words: &[u64]) -> U256 {
    let lo = (words[1] as u128) << 64 | words[0] as u128;
    let hi = (words[3] as u128) << 64 | words[2] as u128;
    U256::from_words(hi, lo)
}

/// Full widening digit multiply: 256 × 256 → 512 bits as `(hi, lo)`.
pub(crate) fn mul_wide(a: U256, b: U256) -> (U256, U256) {
    let a = to_words(a);
    let b = to_words(b);
    let mut prod = [0u64; 8];
    for i in 0..4 {
        let mut carry = 0u128;
        for j in 0..4 {
            let t = (a[i] as u128) * (b[j] as u128) + (prod[i + j] as u128) + carry;
            prod[i + j] = t as u64;
            carry = t >> 64;
        }
        prod[i + 4] = carry as u64;
    }
    (from_words(&prod[4..]), from_words(&prod[..4]))
}

/// `(hi·2^256 + lo) / d` with remainder, requiring `hi < d` so the
/// quotient fits one digit.
///
/// Restoring binary long division: the remainder shifts up one bit at
/// a time and `d` is subtracted whenever it fits. `rem < d` on entry
/// to an iteration bounds the shifted remainder below `2d`, so one
/// conditional subtract restores the invariant even when the shift
/// carries out of 256 bits.
pub(crate) fn div_wide(hi: U256, lo: U256, d: U256) -> (U256, U256) {
    debug_assert!(hi < d, "quotient would overflow a digit");
    if hi == U256::ZERO {
        return (lo / d, lo % d);
    }
    let mut rem = hi;
    let mut quot = U256::ZERO;
    for i in (0..256u32).rev() {
        let shifted_out = rem >> 255u32;
        rem = (rem << 1u32) | ((lo >> i) & U256::ONE);
        if shifted_out != U256::ZERO || rem >= d {
            rem = rem.wrapping_sub(d);
            quot |= U256::ONE << i;
        }
    }
    (quot, rem)
}

/// `(hi, lo) + b` over 512 bits. Overflow past the high digit cannot
/// occur at the call sites: every operand stays below `B² - B`.
pub(crate) fn add_wide_digit(pair: (U256, U256), b: U256) -> (U256, U256) {
    let (lo, carried) = pair.1.overflowing_add(b);
    let hi = if carried { pair.0 + U256::ONE } else { pair.0 };
    (hi, lo)
}

/// `a - b` over 512 bits, requiring `a >= b`.
pub(crate) fn sub_wide(a: (U256, U256), b: (U256, U256)) -> (U256, U256) {
    let (lo, borrowed) = a.1.overflowing_sub(b.1);
    let borrow = if borrowed { U256::ONE } else { U256::ZERO };
    (a.0 - b.0 - borrow, lo)
}
