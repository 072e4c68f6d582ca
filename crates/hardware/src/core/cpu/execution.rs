//! Main Execution Loop.
//!
//! This module implements the fetch-decode-execute cycle. Each cycle:
//! 1. **Fetch:** Reads the opcode and both operand bytes at PC.
//! 2. **Decode:** Extracts the format bits and maps the opcode onto [`crate::isa::decode::Opcode`].
//! 3. **Execute:** Runs the handler, which reports an [`Effect`].
//! 4. **Write-back:** Masks ALU results to 8 bits and stores them in register A.
//! 5. **Advance:** Moves PC past the instruction unless the opcode sets PC itself.
//!
//! The halt condition is only re-checked between cycles.

use std::fmt::Write as _;
use std::io::Write;

use super::dispatch::Effect;
use super::{Cpu, RunState};
use crate::common::ExecError;
use crate::core::units::alu::Alu;
use crate::isa::decode::decode;
use crate::isa::disasm::disassemble;

impl<W: Write> Cpu<W> {
    /// Executes a single instruction.
    ///
    /// Does nothing once the machine has halted.
    ///
    /// # Errors
    ///
    /// [`ExecError::UnknownOpcode`] if the byte at PC is not an instruction,
    /// [`ExecError::UnimplementedOpcode`] for declared opcodes without an
    /// implementation, and [`ExecError::Output`] if printing fails.
    pub fn step(&mut self) -> Result<(), ExecError> {
        if self.is_halted() {
            return Ok(());
        }

        let inst = self.fetch();
        let format = inst.format();

        if self.trace {
            eprintln!("{}", self.trace_line());
        }

        let op = decode(inst.opcode).ok_or(ExecError::UnknownOpcode {
            pc: self.pc,
            opcode: inst.opcode,
        })?;

        tracing::trace!(
            pc = self.pc,
            opcode = inst.opcode,
            "{}",
            disassemble(inst.opcode, inst.a, inst.b)
        );

        match self.execute(op, inst)? {
            Effect::Next => {}
            // Only ALU-format opcodes produce a write-back; the mask lives here
            // rather than in each handler.
            Effect::WriteBack(wide) => {
                debug_assert!(format.is_alu, "{op:?} wrote back without the ALU bit");
                self.regs.write(usize::from(inst.a), Alu::mask(wide));
            }
            Effect::Jump(target) => self.pc = target,
            Effect::Halt => self.state = RunState::Halted,
        }

        if !format.sets_pc {
            self.pc = self.pc.wrapping_add(format.width());
        }

        self.stats.record(op);
        Ok(())
    }

    /// Runs until `HLT` or a fatal error, then flushes program output.
    ///
    /// # Errors
    ///
    /// Any error from [`Cpu::step`], plus [`ExecError::InstructionLimit`] when a
    /// configured budget runs out before the program halts. A flush failure is
    /// reported as [`ExecError::Output`] only if execution itself succeeded.
    pub fn run(&mut self) -> Result<(), ExecError> {
        let halted = self.run_until_halt();
        let flushed = self.output.flush();
        // An execution error outranks a failed flush.
        let result = halted.and(flushed.map_err(ExecError::from));
        match &result {
            Ok(()) => tracing::debug!(
                instructions = self.stats.instructions_retired,
                "machine halted"
            ),
            Err(err) => tracing::debug!(pc = self.pc, %err, "execution aborted"),
        }
        result
    }

    fn run_until_halt(&mut self) -> Result<(), ExecError> {
        while self.state == RunState::Running {
            if let Some(limit) = self.max_instructions
                && self.stats.instructions_retired >= limit
            {
                return Err(ExecError::InstructionLimit { limit });
            }
            self.step()?;
        }
        Ok(())
    }

    /// Formats the machine state at PC as a trace line.
    ///
    /// `TRACE: PC | OP A B | R0 R1 R2 R3 R4 R5 R6 R7`, all two-digit upper-case hex.
    pub fn trace_line(&self) -> String {
        let inst = self.fetch();
        let mut line = format!(
            "TRACE: {:02X} | {:02X} {:02X} {:02X} |",
            self.pc, inst.opcode, inst.a, inst.b
        );
        for reg in self.regs.as_array() {
            let _ = write!(line, " {reg:02X}");
        }
        line
    }
}
