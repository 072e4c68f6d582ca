//! Memory and Stack Access Helpers.
//!
//! This module provides the interface between the CPU and RAM. It performs the following:
//! 1. **Fetch:** Reads the three-byte instruction window at PC.
//! 2. **Data Access:** Byte reads and writes by address.
//! 3. **Stack Discipline:** `PUSH`/`POP` against the stack pointer in `R7`.
//!
//! The stack grows downward; SP always addresses the most recently pushed byte.
//! Nothing checks for overflow or underflow: SP wraps around the address space
//! and may run into program memory.

use std::io::Write;

use super::Cpu;
use crate::isa::instruction::Instruction;

impl<W: Write> Cpu<W> {
    /// Reads the byte at `addr`.
    #[inline]
    pub const fn ram_read(&self, addr: u8) -> u8 {
        self.ram.read(addr)
    }

    /// Writes `val` to the byte at `addr`.
    #[inline]
    pub const fn ram_write(&mut self, addr: u8, val: u8) {
        self.ram.write(addr, val);
    }

    /// Fetches the instruction window at PC: opcode and both operand bytes.
    pub const fn fetch(&self) -> Instruction {
        Instruction::new(
            self.ram_read(self.pc),
            self.ram_read(self.pc.wrapping_add(1)),
            self.ram_read(self.pc.wrapping_add(2)),
        )
    }

    /// Decrements SP, then stores `val` at the new SP.
    pub const fn push(&mut self, val: u8) {
        let sp = self.regs.sp().wrapping_sub(1);
        self.regs.set_sp(sp);
        self.ram_write(sp, val);
    }

    /// Loads the byte at SP, then increments SP.
    pub const fn pop(&mut self) -> u8 {
        let sp = self.regs.sp();
        let val = self.ram_read(sp);
        self.regs.set_sp(sp.wrapping_add(1));
        val
    }
}
