//! Instruction Disassembler for LS-8.
//!
//! Converts a fetched instruction window into a human-readable mnemonic
//! string for debug tracing, state dumps, and test diagnostics.
//!
//! # Usage
//!
//! ```
//! use ls8_core::isa::disasm::disassemble;
//! assert_eq!(disassemble(0b1000_0010, 0, 8), "LDI R0, 8");
//! assert_eq!(disassemble(0b1010_0010, 0, 1), "MUL R0, R1");
//! assert_eq!(disassemble(0b0000_0010, 0, 0), "??? 0b00000010");
//! ```

use crate::isa::decode::{Opcode, decode};

/// Disassembles one instruction window into a string.
///
/// Only the operands the instruction actually consumes are rendered. Unknown
/// bytes render as `???` followed by the byte in binary.
///
/// # Arguments
///
/// * `opcode` - The raw opcode byte.
/// * `a` - The first operand byte.
/// * `b` - The second operand byte.
pub fn disassemble(opcode: u8, a: u8, b: u8) -> String {
    let Some(op) = decode(opcode) else {
        return format!("??? {opcode:#010b}");
    };
    let name = op.mnemonic();

    match op {
        Opcode::Nop | Opcode::Hlt | Opcode::Ret | Opcode::Iret => name.to_string(),

        Opcode::Ldi => format!("{name} R{a}, {b}"),

        Opcode::Push
        | Opcode::Pop
        | Opcode::Prn
        | Opcode::Pra
        | Opcode::Call
        | Opcode::Int
        | Opcode::Jmp
        | Opcode::Jeq
        | Opcode::Jne
        | Opcode::Jgt
        | Opcode::Jlt
        | Opcode::Jle
        | Opcode::Jge
        | Opcode::Inc
        | Opcode::Dec
        | Opcode::Not => format!("{name} R{a}"),

        Opcode::Ld
        | Opcode::St
        | Opcode::Add
        | Opcode::Sub
        | Opcode::Mul
        | Opcode::Div
        | Opcode::Mod
        | Opcode::Cmp
        | Opcode::And
        | Opcode::Or
        | Opcode::Xor
        | Opcode::Shl
        | Opcode::Shr => format!("{name} R{a}, R{b}"),
    }
}
