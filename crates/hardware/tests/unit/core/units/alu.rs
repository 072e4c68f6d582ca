//! # ALU Tests
//!
//! Unmasked results from [`Alu::execute`] and the 8-bit write-back mask.

use ls8_core::core::units::alu::{Alu, AluOp};
use proptest::prelude::*;
use rstest::rstest;

#[rstest]
#[case(AluOp::Add, 3, 4, 7)]
#[case(AluOp::Add, 255, 255, 510)]
#[case(AluOp::Mul, 8, 9, 72)]
#[case(AluOp::Mul, 255, 255, 65025)]
#[case(AluOp::Inc, 255, 0, 256)]
#[case(AluOp::Inc, 10, 99, 11)]
fn test_alu_unmasked(#[case] op: AluOp, #[case] a: u8, #[case] b: u8, #[case] expected: u16) {
    assert_eq!(Alu::execute(op, a, b), expected);
}

#[rstest]
#[case(0, 255)]
#[case(1, 0)]
#[case(128, 127)]
fn test_alu_dec_wraps(#[case] a: u8, #[case] expected: u8) {
    assert_eq!(Alu::mask(Alu::execute(AluOp::Dec, a, 0)), expected);
}

#[test]
fn test_mask_keeps_low_byte() {
    assert_eq!(Alu::mask(0x0000), 0x00);
    assert_eq!(Alu::mask(0x00FF), 0xFF);
    assert_eq!(Alu::mask(0x0100), 0x00);
    assert_eq!(Alu::mask(0xFE2C), 0x2C);
}

proptest! {
    #[test]
    fn prop_add_is_modulo_256(a: u8, b: u8) {
        prop_assert_eq!(Alu::mask(Alu::execute(AluOp::Add, a, b)), a.wrapping_add(b));
    }

    #[test]
    fn prop_mul_is_modulo_256(a: u8, b: u8) {
        prop_assert_eq!(Alu::mask(Alu::execute(AluOp::Mul, a, b)), a.wrapping_mul(b));
    }

    #[test]
    fn prop_inc_dec_inverse(a: u8) {
        let up = Alu::mask(Alu::execute(AluOp::Inc, a, 0));
        prop_assert_eq!(Alu::mask(Alu::execute(AluOp::Dec, up, 0)), a);
    }
}
