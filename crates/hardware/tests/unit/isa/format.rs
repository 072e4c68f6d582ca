//! # Format Bit Tests
//!
//! The high nibble of every opcode describes its width, ALU class, and
//! whether it sets PC.

use ls8_core::isa::decode::Opcode;
use ls8_core::isa::instruction::{Format, Instruction, InstructionBits};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case(Opcode::Nop, 0, false, false)]
#[case(Opcode::Hlt, 0, false, false)]
#[case(Opcode::Ret, 0, false, true)]
#[case(Opcode::Push, 1, false, false)]
#[case(Opcode::Call, 1, false, true)]
#[case(Opcode::Jmp, 1, false, true)]
#[case(Opcode::Jne, 1, false, true)]
#[case(Opcode::Inc, 1, true, false)]
#[case(Opcode::Ldi, 2, false, false)]
#[case(Opcode::Ld, 2, false, false)]
#[case(Opcode::Add, 2, true, false)]
#[case(Opcode::Cmp, 2, true, false)]
fn test_format_bits(
    #[case] op: Opcode,
    #[case] operands: u8,
    #[case] alu: bool,
    #[case] sets_pc: bool,
) {
    let byte = op.byte();
    assert_eq!(byte.operand_count(), operands);
    assert_eq!(byte.is_alu(), alu);
    assert_eq!(byte.sets_pc(), sets_pc);
    assert_eq!(
        Format::of(byte),
        Format {
            operand_count: operands,
            is_alu: alu,
            sets_pc,
        }
    );
}

#[test]
fn test_width_counts_opcode_and_operands() {
    assert_eq!(Format::of(Opcode::Hlt.byte()).width(), 1);
    assert_eq!(Format::of(Opcode::Prn.byte()).width(), 2);
    assert_eq!(Format::of(Opcode::Mul.byte()).width(), 3);
}

#[test]
fn test_write_back_opcodes_have_alu_bit() {
    for op in [Opcode::Add, Opcode::Mul, Opcode::Inc, Opcode::Dec] {
        assert!(op.byte().is_alu(), "{} lacks the ALU bit", op.mnemonic());
    }
}

#[test]
fn test_every_opcode_width_fits_window() {
    for op in Opcode::ALL {
        assert!(Format::of(op.byte()).width() <= 3, "{}", op.mnemonic());
    }
}

#[test]
fn test_instruction_format() {
    let inst = Instruction::new(0b1010_0010, 0, 1);
    assert_eq!(inst.format().operand_count, 2);
    assert!(inst.format().is_alu);
}
