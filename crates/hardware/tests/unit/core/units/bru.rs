//! # Branch Resolution Tests

use ls8_core::core::arch::flags::Flags;
use ls8_core::core::units::bru::{BranchCond, resolve};
use rstest::rstest;

fn flags_after(a: u8, b: u8) -> Flags {
    let mut flags = Flags::new();
    flags.compare(a, b);
    flags
}

#[rstest]
#[case(BranchCond::Always, flags_after(1, 2), (0x40, true))]
#[case(BranchCond::Equal, flags_after(2, 2), (0x40, true))]
#[case(BranchCond::Equal, flags_after(1, 2), (0x12, false))]
#[case(BranchCond::NotEqual, flags_after(1, 2), (0x40, true))]
#[case(BranchCond::NotEqual, flags_after(2, 2), (0x12, false))]
#[case(BranchCond::NotEqual, Flags::new(), (0x40, true))]
fn test_resolve(#[case] cond: BranchCond, #[case] flags: Flags, #[case] expected: (u8, bool)) {
    assert_eq!(resolve(cond, flags, 0x10, 0x40), expected);
}

#[test]
fn test_fallthrough_wraps() {
    assert_eq!(resolve(BranchCond::Equal, Flags::new(), 0xFF, 0x40), (0x01, false));
}
