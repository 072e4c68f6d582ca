//! Execution statistics collection and reporting.
//!
//! This module tracks what a run did. It provides:
//! 1. **Totals:** Retired instructions and host throughput.
//! 2. **Instruction mix:** Counts by category (ALU, load, stack, branch, I/O, other).
//! 3. **Control flow:** Taken versus not-taken jumps.

use std::fmt;
use std::time::Instant;

use crate::isa::decode::Opcode;

/// Instruction categories used for the instruction mix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InstClass {
    /// Register arithmetic and `CMP`.
    Alu,
    /// `LDI` and `LD`.
    Load,
    /// `PUSH` and `POP`.
    Stack,
    /// Jumps, `CALL`, and `RET`.
    Branch,
    /// `PRN` and `PRA`.
    Io,
    /// `NOP` and `HLT`.
    Other,
}

impl InstClass {
    /// Category of an implemented opcode.
    pub const fn of(op: Opcode) -> Self {
        match op {
            Opcode::Add | Opcode::Mul | Opcode::Inc | Opcode::Dec | Opcode::Cmp => Self::Alu,
            Opcode::Ldi | Opcode::Ld => Self::Load,
            Opcode::Push | Opcode::Pop => Self::Stack,
            Opcode::Call | Opcode::Ret | Opcode::Jmp | Opcode::Jeq | Opcode::Jne => Self::Branch,
            Opcode::Prn | Opcode::Pra => Self::Io,
            _ => Self::Other,
        }
    }
}

/// Execution statistics tracking the instruction mix of a run.
#[derive(Clone, Debug)]
pub struct ExecStats {
    start_time: Instant,
    /// Number of instructions that completed.
    pub instructions_retired: u64,
    /// ALU instructions retired.
    pub inst_alu: u64,
    /// Load instructions retired.
    pub inst_load: u64,
    /// Stack instructions retired.
    pub inst_stack: u64,
    /// Jump, call, and return instructions retired.
    pub inst_branch: u64,
    /// Output instructions retired.
    pub inst_io: u64,
    /// `NOP` and `HLT` retired.
    pub inst_other: u64,
    /// Conditional jumps that transferred control.
    pub branches_taken: u64,
    /// Conditional jumps that fell through.
    pub branches_not_taken: u64,
}

impl Default for ExecStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            instructions_retired: 0,
            inst_alu: 0,
            inst_load: 0,
            inst_stack: 0,
            inst_branch: 0,
            inst_io: 0,
            inst_other: 0,
            branches_taken: 0,
            branches_not_taken: 0,
        }
    }
}

impl ExecStats {
    /// Records one retired instruction.
    pub const fn record(&mut self, op: Opcode) {
        self.instructions_retired += 1;
        match InstClass::of(op) {
            InstClass::Alu => self.inst_alu += 1,
            InstClass::Load => self.inst_load += 1,
            InstClass::Stack => self.inst_stack += 1,
            InstClass::Branch => self.inst_branch += 1,
            InstClass::Io => self.inst_io += 1,
            InstClass::Other => self.inst_other += 1,
        }
    }

    /// Records the outcome of a conditional jump.
    pub const fn record_branch(&mut self, taken: bool) {
        if taken {
            self.branches_taken += 1;
        } else {
            self.branches_not_taken += 1;
        }
    }

    /// Prints the statistics report to stderr.
    pub fn print(&self) {
        eprint!("{self}");
    }
}

impl fmt::Display for ExecStats {
    #[allow(clippy::cast_precision_loss)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let seconds = self.start_time.elapsed().as_secs_f64();
        let total = self.instructions_retired.max(1) as f64;
        let pct = |n: u64| (n as f64 / total) * 100.0;

        writeln!(f, "==========================================================")?;
        writeln!(f, "LS-8 EXECUTION STATISTICS")?;
        writeln!(f, "==========================================================")?;
        writeln!(f, "host_seconds             {seconds:.4} s")?;
        writeln!(f, "sim_insts                {}", self.instructions_retired)?;
        writeln!(f, "----------------------------------------------------------")?;
        writeln!(f, "INSTRUCTION MIX")?;
        for (name, n) in [
            ("alu", self.inst_alu),
            ("load", self.inst_load),
            ("stack", self.inst_stack),
            ("branch", self.inst_branch),
            ("io", self.inst_io),
            ("other", self.inst_other),
        ] {
            writeln!(f, "  {name:<22} {n} ({:.2}%)", pct(n))?;
        }
        writeln!(f, "----------------------------------------------------------")?;
        writeln!(f, "CONTROL FLOW")?;
        writeln!(f, "  branches.taken         {}", self.branches_taken)?;
        writeln!(f, "  branches.not_taken     {}", self.branches_not_taken)
    }
}
