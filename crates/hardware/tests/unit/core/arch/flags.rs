//! # Flags Register Tests
//!
//! `CMP` leaves exactly one of Equal, Greater, or Less set.

use ls8_core::core::arch::flags::Flags;
use proptest::prelude::*;

#[test]
fn test_flags_start_clear() {
    let flags = Flags::new();
    assert_eq!(flags.bits(), 0);
    assert!(!flags.equal() && !flags.greater() && !flags.less());
}

#[test]
fn test_compare_equal() {
    let mut flags = Flags::new();
    flags.compare(5, 5);
    assert_eq!(flags.bits(), 0b0000_0001);
    assert!(flags.equal());
}

#[test]
fn test_compare_greater() {
    let mut flags = Flags::new();
    flags.compare(9, 5);
    assert_eq!(flags.bits(), 0b0000_0010);
    assert!(flags.greater());
}

#[test]
fn test_compare_less() {
    let mut flags = Flags::new();
    flags.compare(0, 255);
    assert_eq!(flags.bits(), 0b0000_0100);
    assert!(flags.less());
}

#[test]
fn test_compare_replaces_previous_result() {
    let mut flags = Flags::new();
    flags.compare(1, 2);
    flags.compare(2, 2);
    assert!(flags.equal());
    assert!(!flags.less());
}

proptest! {
    #[test]
    fn prop_compare_sets_exactly_one_flag(a: u8, b: u8) {
        let mut flags = Flags::new();
        flags.compare(a, b);
        prop_assert_eq!(flags.bits().count_ones(), 1);
        prop_assert_eq!(flags.equal(), a == b);
        prop_assert_eq!(flags.greater(), a > b);
        prop_assert_eq!(flags.less(), a < b);
    }
}
