//! Global Machine Constants.
//!
//! This module defines machine-wide constants used across the interpreter. It includes:
//! 1. **Sizing Constants:** Memory size and register count.
//! 2. **Format Constants:** Masks and shifts for the format bits carried by every opcode.
//! 3. **Flag Constants:** Bit positions of the condition flags set by `CMP`.

/// Number of addressable memory cells.
pub const MEMORY_SIZE: usize = 256;

/// Number of general-purpose registers.
pub const REGISTER_COUNT: usize = 8;

/// Bit mask for the operand-count field (bits 7-6).
pub const OPERAND_COUNT_MASK: u8 = 0b1100_0000;

/// Shift that aligns the operand-count field to bit 0.
pub const OPERAND_COUNT_SHIFT: u32 = 6;

/// Bit mask for the ALU flag (bit 5).
pub const ALU_MASK: u8 = 0b0010_0000;

/// Bit mask for the sets-PC flag (bit 4).
pub const SETS_PC_MASK: u8 = 0b0001_0000;

/// Mask applied to every ALU result before it is written back.
pub const BYTE_MASK: u16 = 0xFF;

/// Equal flag (bit 0 of FL).
pub const FLAG_EQUAL: u8 = 0b0000_0001;

/// Greater-than flag (bit 1 of FL).
pub const FLAG_GREATER: u8 = 0b0000_0010;

/// Less-than flag (bit 2 of FL).
pub const FLAG_LESS: u8 = 0b0000_0100;

/// Distance a conditional jump skips when it falls through (its own opcode and operand).
pub const BRANCH_FALLTHROUGH: u8 = 2;
