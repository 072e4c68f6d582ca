//! LS-8 General-Purpose Register File.
//!
//! This module implements the eight 8-bit registers `R0`-`R7`. It performs the following:
//! 1. **Storage:** Maintains the register cells.
//! 2. **Stack Pointer Access:** Convenience accessors for `R7`, the conventional SP.
//! 3. **Debugging:** Provides utilities for dumping the complete register state.
//!
//! Register indices come straight from operand bytes, so they are reduced
//! modulo the register count rather than trusted.

use crate::common::constants::REGISTER_COUNT;
use crate::isa::abi::REG_SP;

/// General-Purpose Register file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Gpr {
    regs: [u8; REGISTER_COUNT],
}

impl Gpr {
    /// Creates a register file with every register set to zero.
    pub const fn new() -> Self {
        Self {
            regs: [0; REGISTER_COUNT],
        }
    }

    /// Reads a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index; only the low three bits are significant.
    pub const fn read(&self, idx: usize) -> u8 {
        self.regs[idx % REGISTER_COUNT]
    }

    /// Writes a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index; only the low three bits are significant.
    /// * `val` - The value to write.
    pub const fn write(&mut self, idx: usize, val: u8) {
        self.regs[idx % REGISTER_COUNT] = val;
    }

    /// Current stack pointer (`R7`).
    pub const fn sp(&self) -> u8 {
        self.read(REG_SP)
    }

    /// Sets the stack pointer (`R7`).
    pub const fn set_sp(&mut self, val: u8) {
        self.write(REG_SP, val);
    }

    /// Snapshot of all registers, `R0` first.
    pub const fn as_array(&self) -> [u8; REGISTER_COUNT] {
        self.regs
    }

    /// Dumps the contents of all registers to stderr.
    pub fn dump(&self) {
        for (i, pair) in self.regs.chunks(2).enumerate() {
            eprintln!(
                "R{} = {:#04x}  R{} = {:#04x}",
                i * 2,
                pair[0],
                i * 2 + 1,
                pair[1]
            );
        }
    }
}
