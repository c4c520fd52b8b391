//! Euclidean division: Knuth's Algorithm D in base 2^256.

use ethnum::U256;

use crate::arith::less_than;
use crate::bytes::is_zero;
use crate::digits::{add_wide_digit, div_wide, from_digits, mul_wide, sub_wide, to_digits};

/// `⌊u / v⌋` for `v != 0`.
///
/// Both operands are decoded into base-2^256 digit vectors behind a
/// zero sentinel. Single-digit divisors take the short-division path;
/// everything else runs Algorithm D: normalize so the divisor's
/// leading digit is at least half the base, estimate each quotient
/// digit from the top three dividend digits, multiply-subtract with an
/// explicit signed borrow, and back off by one with an add-back when
/// the estimate overshot.
pub fn divide(u: &[u8], v: &[u8]) -> Vec<u8> {
    assert!(!is_zero(v), "division by zero");
    if is_zero(u) || less_than(u, v) {
        return vec![0];
    }

    let mut u_digits = to_digits(u);
    let mut v_digits = to_digits(v);

    // Drop the divisor's leading zero digits so index 1 holds its true
    // most significant digit. u >= v then guarantees u decodes to at
    // least as many digits.
    let leading = v_digits[1..]
        .iter()
        .take_while(|digit| **digit == U256::ZERO)
        .count();
    v_digits.drain(1..1 + leading);

    let n = v_digits.len() - 1;
    assert!(n >= 1, "divisor decoded to no digits");

    if n == 1 {
        return divide_word(&mut u_digits, v_digits[1]);
    }

    let m = u_digits.len() - v_digits.len();

    // D2: scale both operands so the divisor's leading digit reaches
    // B/2; the dividend's overflow digit lands in its sentinel slot.
    let norm = reciprocal(v_digits[1]);
    multiply_word(&mut u_digits, m + n, norm);
    multiply_word(&mut v_digits, n, norm);
    let v_1 = v_digits[1];
    let v_2 = v_digits[2];

    let mut quotient = Vec::with_capacity(m + 1);
    for j in 0..=m {
        let u_j = u_digits[j];
        let u_j1 = u_digits[j + 1];

        // D3: estimate the quotient digit from B·u[j] + u[j+1] and the
        // divisor's top digit, clamped to B - 1, then refine against
        // the second divisor digit until the estimate stops overshooting.
        let mut qhat = if u_j >= v_1 {
            U256::MAX
        } else {
            div_wide(u_j, u_j1, v_1).0
        };
        loop {
            let test = add_wide_digit(mul_wide(qhat, v_1), mul_wide(qhat, v_2).0);
            if test <= (u_j, u_j1) {
                break;
            }
            qhat -= U256::ONE;
        }

        // D4: subtract qhat·v from the dividend window, tracking the
        // running borrow as an explicit (magnitude, sign) pair. A
        // negative partial result writes B - (p mod B) and carries
        // ⌈p/B⌉ upward.
        let mut c = U256::ZERO;
        let mut c_is_neg = false;
        for i in (1..=n).rev() {
            let u_ji = u_digits[j + i];
            let qv = mul_wide(qhat, v_digits[i]);
            if c_is_neg {
                let t = add_wide_digit(qv, c);
                if (U256::ZERO, u_ji) >= t {
                    u_digits[j + i] = u_ji - t.1;
                    c = U256::ZERO;
                    c_is_neg = false;
                } else {
                    let p = sub_wide(t, (U256::ZERO, u_ji));
                    u_digits[j + i] = p.1.wrapping_neg();
                    c = borrow_of(p);
                    c_is_neg = true;
                }
            } else {
                let (s_lo, s_carry) = u_ji.overflowing_add(c);
                let s = (if s_carry { U256::ONE } else { U256::ZERO }, s_lo);
                if s >= qv {
                    let p = sub_wide(s, qv);
                    u_digits[j + i] = p.1;
                    c = p.0;
                    c_is_neg = false;
                } else {
                    let p = sub_wide(qv, s);
                    u_digits[j + i] = p.1.wrapping_neg();
                    c = borrow_of(p);
                    c_is_neg = true;
                }
            }
        }

        // D5/D6: a leftover borrow larger than the window's top digit
        // means qhat was one too large; back off and restore v.
        if c_is_neg && c > u_j {
            qhat -= U256::ONE;
            add_back(&mut u_digits[j..], &v_digits, n);
        }

        quotient.push(qhat);
    }

    from_digits(&quotient)
}

/// `⌊B / (d + 1)⌋` - the D2 normalization factor.
fn reciprocal(d: U256) -> U256 {
    if d == U256::MAX {
        U256::ONE
    } else {
        div_wide(U256::ONE, U256::ZERO, d + U256::ONE).0
    }
}

/// Borrow carried upward after a negative partial result `p`:
/// `⌊p/B⌋`, plus one unless `p mod B` was zero.
fn borrow_of(p: (U256, U256)) -> U256 {
    if p.1 == U256::ZERO { p.0 } else { p.0 + U256::ONE }
}

/// D6 add-back: `v` went once too often into the window; add it back
/// into positions 1..=n. The final carry out cancels the outstanding
/// borrow and is dropped.
fn add_back(window: &mut [U256], v: &[U256], n: usize) {
    let mut carry = false;
    for i in (1..=n).rev() {
        let (sum, c1) = window[i].overflowing_add(v[i]);
        let (sum, c2) = sum.overflowing_add(if carry { U256::ONE } else { U256::ZERO });
        window[i] = sum;
        carry = c1 || c2;
    }
}

/// In-place single-digit scale of `digits[1..=count]`; the final carry
/// lands in the sentinel slot.
fn multiply_word(digits: &mut [U256], count: usize, d: U256) {
    let mut carry = U256::ZERO;
    for i in (1..=count).rev() {
        let (hi, lo) = mul_wide(d, digits[i]);
        let (lo, carried) = lo.overflowing_add(carry);
        digits[i] = lo;
        carry = if carried { hi + U256::ONE } else { hi };
    }
    digits[0] = carry;
}

/// Single-digit long division over the whole vector, most significant
/// digit first. The quotient reuses the vector, sentinel included; the
/// remainder is dropped.
fn divide_word(digits: &mut [U256], v: U256) -> Vec<u8> {
    let mut rem = U256::ZERO;
    for digit in digits.iter_mut() {
        let (q, r) = div_wide(rem, *digit, v);
        *digit = q;
        rem = r;
    }
    from_digits(digits)
}
