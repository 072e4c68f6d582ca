//! LS-8 architectural state.
//!
//! This module contains the storage elements the instruction set operates on:
//! 1. **Flags:** The `FL` condition register written by `CMP`.
//! 2. **GPRs:** The eight 8-bit general-purpose registers.
//! 3. **RAM:** The flat 256-byte memory shared by program, data, and stack.

/// Condition flags register.
pub mod flags;

/// General-Purpose Register file implementation.
pub mod gpr;

/// Main memory.
pub mod ram;
