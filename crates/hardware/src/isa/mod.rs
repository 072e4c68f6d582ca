//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the opcode bytes, the format-bit decoder, the opcode decoder, and
//! the disassembler for the LS-8 instruction set.

/// Register conventions (stack pointer).
pub mod abi;

/// Opcode byte to [`decode::Opcode`] decoding.
pub mod decode;

/// Instruction disassembler for debug tracing and diagnostics.
pub mod disasm;

/// Instruction window and format-bit extraction.
pub mod instruction;

/// Raw opcode byte constants.
pub mod opcodes;
