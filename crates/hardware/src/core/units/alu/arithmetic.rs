//! ALU arithmetic operations.
//!
//! Results are returned at full 16-bit width. Truncation to a register byte
//! is the fetch-decode-execute loop's job, driven by the opcode's ALU bit.

use super::AluOp;

/// Executes an arithmetic operation on two register values.
///
/// `INC` and `DEC` ignore `b`. `DEC` of zero yields `0xFFFF`, whose low byte
/// is the expected `0xFF`.
pub const fn execute(op: AluOp, a: u8, b: u8) -> u16 {
    let a = a as u16;
    let b = b as u16;
    match op {
        AluOp::Add => a + b,
        AluOp::Mul => a * b,
        AluOp::Inc => a + 1,
        AluOp::Dec => a.wrapping_sub(1),
    }
}
