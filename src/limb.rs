//! The 64-byte big-limb arithmetic primitive.
//!
//! Addition and multiplication chunk their operands into 64-byte
//! big-endian limbs, each held as eight `u64` words in little-endian
//! word order. The widening multiply produces the full 1024-bit
//! product; addition reports its carry instead of wrapping. Everything
//! is portable carry-chain code: `u128` partial products and
//! `overflowing_add`, nothing else.

/// Width of one big limb in bytes.
pub(crate) const BIG_LIMB_BYTES: usize = 64;

/// Words per big limb.
pub(crate) const LIMB_WORDS: usize = BIG_LIMB_BYTES / 8;

/// Load a 64-byte big-endian chunk into words, least significant word
/// first.
pub(crate) fn load(bytes: &[u8]) -> [u64; LIMB_WORDS] {
    debug_assert_eq!(bytes.len(), BIG_LIMB_BYTES);
    let mut words = [0u64; LIMB_WORDS];
    for (word, chunk) in words.iter_mut().zip(bytes.rchunks_exact(8)) {
        let mut raw = [0u8; 8];
        raw.copy_from_slice(chunk);
        *word = u64::from_be_bytes(raw);
    }
    words
}

/// Store words (least significant first) as big-endian bytes.
///
/// `out` must hold exactly `8 * words.len()` bytes.
pub(crate) fn store(words: &[u64], out: &mut [u8]) {
    debug_assert_eq!(out.len(), 8 * words.len());
    for (word, chunk) in words.iter().zip(out.rchunks_exact_mut(8)) {
        chunk.copy_from_slice(&word.to_be_bytes());
    }
}

/// Limb addition with carry chain: `a + b -> (sum, carry)`.
pub(crate) fn add(a: &[u64; LIMB_WORDS], b: &[u64; LIMB_WORDS]) -> ([u64; LIMB_WORDS], u64) {
    let mut sum = [0u64; LIMB_WORDS];
    let mut carry = false;
    for i in 0..LIMB_WORDS {
        let (s, c1) = a[i].overflowing_add(b[i]);
        let (s, c2) = s.overflowing_add(carry as u64);
        sum[i] = s;
        carry = c1 || c2;
    }
    (sum, carry as u64)
}

/// Add a single word into a limb: `a + w -> (sum, carry)`.
pub(crate) fn add_word(a: &[u64; LIMB_WORDS], w: u64) -> ([u64; LIMB_WORDS], u64) {
    let mut sum = *a;
    let mut carry = w;
    for word in sum.iter_mut() {
        if carry == 0 {
            break;
        }
        let (s, c) = word.overflowing_add(carry);
        *word = s;
        carry = c as u64;
    }
    (sum, carry)
}

/// Full widening multiply: 512 × 512 → 1024 bits.
///
/// Schoolbook rows with a `u128` accumulator; a partial product plus
/// the accumulated word plus the running carry stays below `2^128`.
pub(crate) fn mul(a: &[u64; LIMB_WORDS], b: &[u64; LIMB_WORDS]) -> [u64; 2 * LIMB_WORDS] {
    let mut prod = [0u64; 2 * LIMB_WORDS];
    for i in 0..LIMB_WORDS {
        let mut carry = 0u128;
        for j in 0..LIMB_WORDS {
            let t = (a[i] as u128) * (b[j] as u128) + (prod[i + j] as u128) + carry;
            prod[i + j] = t as u64;
            carry = t >> 64;
        }
        prod[i + LIMB_WORDS] = carry as u64;
    }
    prod
}
