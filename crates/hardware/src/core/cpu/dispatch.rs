//! Instruction Semantics.
//!
//! One match arm per [`Opcode`]. Handlers read and write machine state but never
//! touch PC or the run state directly: they report an [`Effect`] and the loop
//! in [`super::execution`] applies it. Declared-but-unimplemented opcodes have
//! explicit arms that fail with [`ExecError::UnimplementedOpcode`].

use std::io::Write;

use super::Cpu;
use crate::common::ExecError;
use crate::core::units::alu::{Alu, AluOp};
use crate::core::units::bru::{self, BranchCond};
use crate::isa::decode::Opcode;
use crate::isa::instruction::Instruction;

/// What the loop must do after a handler returns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Nothing beyond the default PC advance.
    Next,
    /// Unmasked ALU result destined for register A.
    WriteBack(u16),
    /// Set PC to this address.
    Jump(u8),
    /// Enter the halted state.
    Halt,
}

impl<W: Write> Cpu<W> {
    /// Executes the semantics of `op` for the fetched window `inst`.
    ///
    /// # Errors
    ///
    /// [`ExecError::UnimplementedOpcode`] for declared opcodes without an
    /// implementation, and [`ExecError::Output`] if printing fails.
    pub fn execute(&mut self, op: Opcode, inst: Instruction) -> Result<Effect, ExecError> {
        let a = usize::from(inst.a);
        let b = usize::from(inst.b);

        let effect = match op {
            Opcode::Nop => Effect::Next,
            Opcode::Hlt => Effect::Halt,

            Opcode::Ldi => {
                self.regs.write(a, inst.b);
                Effect::Next
            }
            Opcode::Ld => {
                let val = self.ram_read(self.regs.read(b));
                self.regs.write(a, val);
                Effect::Next
            }

            Opcode::Add => self.alu(AluOp::Add, a, b),
            Opcode::Mul => self.alu(AluOp::Mul, a, b),
            Opcode::Inc => self.alu(AluOp::Inc, a, b),
            Opcode::Dec => self.alu(AluOp::Dec, a, b),
            Opcode::Cmp => {
                self.flags.compare(self.regs.read(a), self.regs.read(b));
                Effect::Next
            }

            Opcode::Push => {
                self.push(self.regs.read(a));
                Effect::Next
            }
            Opcode::Pop => {
                let val = self.pop();
                self.regs.write(a, val);
                Effect::Next
            }
            Opcode::Call => {
                self.push(self.pc.wrapping_add(inst.format().width()));
                Effect::Jump(self.regs.read(a))
            }
            Opcode::Ret => Effect::Jump(self.pop()),

            Opcode::Jmp => self.branch(BranchCond::Always, a),
            Opcode::Jeq => self.branch(BranchCond::Equal, a),
            Opcode::Jne => self.branch(BranchCond::NotEqual, a),

            Opcode::Prn => {
                write!(self.output, "{}", self.regs.read(a))?;
                Effect::Next
            }
            Opcode::Pra => {
                write!(self.output, "{}", char::from(self.regs.read(a)))?;
                Effect::Next
            }

            Opcode::Sub
            | Opcode::Div
            | Opcode::Mod
            | Opcode::And
            | Opcode::Or
            | Opcode::Xor
            | Opcode::Not
            | Opcode::Shl
            | Opcode::Shr
            | Opcode::St
            | Opcode::Jgt
            | Opcode::Jlt
            | Opcode::Jle
            | Opcode::Jge
            | Opcode::Int
            | Opcode::Iret => {
                return Err(ExecError::UnimplementedOpcode {
                    opcode: inst.opcode,
                });
            }
        };

        Ok(effect)
    }

    const fn alu(&self, op: AluOp, a: usize, b: usize) -> Effect {
        Effect::WriteBack(Alu::execute(op, self.regs.read(a), self.regs.read(b)))
    }

    fn branch(&mut self, cond: BranchCond, a: usize) -> Effect {
        let (target, taken) = bru::resolve(cond, self.flags, self.pc, self.regs.read(a));
        if cond != BranchCond::Always {
            self.stats.record_branch(taken);
        }
        Effect::Jump(target)
    }
}
