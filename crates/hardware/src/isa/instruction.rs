//! Instruction encoding and format utilities.
//!
//! Every LS-8 opcode carries its own format in the high bits, independent of
//! which instruction it is:
//!
//! ```text
//!  7 6 | 5   | 4       | 3 2 1 0
//!  ops | alu | sets_pc | identifier
//! ```
//!
//! Extracting these bits is pure mask-and-shift arithmetic and never consults
//! the opcode table in [`crate::isa::decode`].

use crate::common::constants::{
    ALU_MASK, OPERAND_COUNT_MASK, OPERAND_COUNT_SHIFT, SETS_PC_MASK,
};

/// Trait for extracting format fields from an opcode byte.
pub trait InstructionBits {
    /// Number of operand bytes the instruction consumes (bits 7-6).
    fn operand_count(&self) -> u8;

    /// Whether the result in register A is masked to 8 bits after execution (bit 5).
    fn is_alu(&self) -> bool;

    /// Whether the instruction updates PC itself (bit 4).
    fn sets_pc(&self) -> bool;
}

impl InstructionBits for u8 {
    #[inline(always)]
    fn operand_count(&self) -> u8 {
        (self & OPERAND_COUNT_MASK) >> OPERAND_COUNT_SHIFT
    }

    #[inline(always)]
    fn is_alu(&self) -> bool {
        self & ALU_MASK != 0
    }

    #[inline(always)]
    fn sets_pc(&self) -> bool {
        self & SETS_PC_MASK != 0
    }
}

/// The three format bits of an opcode, decoded once per cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Format {
    /// Operand bytes following the opcode (0-2).
    pub operand_count: u8,
    /// Register A is masked to 8 bits after the handler runs.
    pub is_alu: bool,
    /// The handler owns the PC update; the default advance is skipped.
    pub sets_pc: bool,
}

impl Format {
    /// Decodes the format bits of `opcode`.
    #[inline]
    pub fn of(opcode: u8) -> Self {
        Self {
            operand_count: opcode.operand_count(),
            is_alu: opcode.is_alu(),
            sets_pc: opcode.sets_pc(),
        }
    }

    /// Bytes the default PC advance moves past: the opcode plus its operands.
    #[inline]
    pub const fn width(self) -> u8 {
        1 + self.operand_count
    }
}

/// A fetched instruction window: opcode and both operand bytes.
///
/// Operands are always fetched even when the instruction ignores them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Instruction {
    /// Raw opcode byte.
    pub opcode: u8,
    /// First operand byte (usually a register index).
    pub a: u8,
    /// Second operand byte (a register index or an immediate).
    pub b: u8,
}

impl Instruction {
    /// Builds an instruction window from its three bytes.
    pub const fn new(opcode: u8, a: u8, b: u8) -> Self {
        Self { opcode, a, b }
    }

    /// Format bits of this instruction's opcode.
    #[inline]
    pub fn format(self) -> Format {
        Format::of(self.opcode)
    }
}
