//! Concrete end-to-end scenarios pinned as snapshots.

use bigbytes::{add, barrett_reducer_factor, divide, modexp_barrett_reduce, multiply, subtract};

/// Hex rendering with leading zero bytes dropped, so snapshots pin
/// values rather than padded widths.
fn trimmed_hex(bytes: &[u8]) -> String {
    match bytes.iter().position(|&b| b != 0) {
        Some(start) => bytes[start..].iter().map(|b| format!("{b:02x}")).collect(),
        None => "0".to_string(),
    }
}

#[test]
fn add_with_zero_keeps_value() {
    let sum = add(&[0xff, 0xff, 0xff, 0xff], &[0x00, 0x00, 0x00, 0x00]);
    insta::assert_snapshot!(trimmed_hex(&sum), @"ffffffff");
}

#[test]
fn subtract_equal_operands_is_all_zero_bytes() {
    let diff = subtract(&[0xff, 0xff, 0xff, 0xff], &[0xff, 0xff, 0xff, 0xff]);
    // equal operands come back as the full padded width of zero bytes
    assert_eq!(diff.len(), 64);
    insta::assert_snapshot!(trimmed_hex(&diff), @"0");
}

#[test]
fn multiply_single_bytes() {
    insta::assert_snapshot!(trimmed_hex(&multiply(&[0x02], &[0x03])), @"06");
}

#[test]
fn divide_round_trip_and_smaller_dividend() {
    insta::assert_snapshot!(trimmed_hex(&divide(&[0x01, 0x00], &[0x10])), @"10");
    insta::assert_snapshot!(trimmed_hex(&divide(&[0x05], &[0x0a])), @"0");
}

#[test]
fn modexp_two_to_the_tenth_mod_eleven() {
    let m = [0x0b];
    let factor = barrett_reducer_factor(&m);
    let pow = modexp_barrett_reduce(&[0x02], &[0x0a], &m, &factor);
    insta::assert_snapshot!(trimmed_hex(&pow), @"01");
}
