//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which serves as the container for the
//! entire machine state. It coordinates the following:
//! 1. **State Management:** Maintains registers, program counter, flags, and the run state.
//! 2. **Memory:** Owns the 256-byte RAM shared by program, data, and stack.
//! 3. **Output:** Holds the sink that `PRN` and `PRA` write to.
//! 4. **Observability:** Instruction tracing and execution statistics.

/// Per-opcode instruction semantics.
pub mod dispatch;

/// Fetch-decode-execute loop.
pub mod execution;

/// Memory and stack access helpers.
pub mod memory;

use std::io::{self, Write};

use crate::common::LoadError;
use crate::common::constants::MEMORY_SIZE;
use crate::config::Config;
use crate::core::arch::flags::Flags;
use crate::core::arch::gpr::Gpr;
use crate::core::arch::ram::Ram;
use crate::stats::ExecStats;

/// Whether the fetch-decode-execute loop should keep going.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RunState {
    /// Cycles execute until `HLT`.
    #[default]
    Running,
    /// `HLT` was executed; no further cycles run.
    Halted,
}

/// Main CPU structure containing all machine state.
///
/// `W` is the sink for program output; it defaults to stdout.
#[derive(Debug)]
pub struct Cpu<W: Write = io::Stdout> {
    /// General-purpose registers `R0`-`R7`.
    pub regs: Gpr,
    /// Main memory.
    pub ram: Ram,
    /// Program Counter.
    pub pc: u8,
    /// Condition flags written by `CMP`.
    pub flags: Flags,
    /// Running or halted.
    pub state: RunState,
    /// Write a `TRACE:` line to stderr before each instruction.
    pub trace: bool,
    /// Instruction budget; `None` runs until halt.
    pub max_instructions: Option<u64>,
    /// Execution statistics.
    pub stats: ExecStats,
    output: W,
}

impl Cpu<io::Stdout> {
    /// Creates a CPU that prints program output to stdout.
    pub fn new(config: &Config) -> Self {
        Self::with_output(config, io::stdout())
    }
}

impl<W: Write> Cpu<W> {
    /// Creates a CPU writing program output to `output`.
    ///
    /// # Arguments
    ///
    /// * `config` - Machine configuration.
    /// * `output` - Destination for `PRN`/`PRA` output.
    pub fn with_output(config: &Config, output: W) -> Self {
        let mut regs = Gpr::new();
        if let Some(sp) = config.general.initial_sp {
            regs.set_sp(sp);
        }

        Self {
            regs,
            ram: Ram::new(),
            pc: 0,
            flags: Flags::new(),
            state: RunState::Running,
            trace: config.general.trace_instructions,
            max_instructions: config.general.max_instructions,
            stats: ExecStats::default(),
            output,
        }
    }

    /// Places a program image in memory starting at address 0.
    ///
    /// # Errors
    ///
    /// [`LoadError::ProgramTooLarge`] if the image does not fit in memory.
    pub fn load_image(&mut self, image: &[u8]) -> Result<(), LoadError> {
        if image.len() > MEMORY_SIZE {
            return Err(LoadError::ProgramTooLarge {
                len: image.len(),
                capacity: MEMORY_SIZE,
            });
        }
        self.ram.load_image(image);
        tracing::debug!(bytes = image.len(), "program image loaded");
        Ok(())
    }

    /// Whether `HLT` has executed.
    pub fn is_halted(&self) -> bool {
        self.state == RunState::Halted
    }

    /// Execution statistics gathered so far.
    pub const fn stats(&self) -> &ExecStats {
        &self.stats
    }

    /// The program output sink.
    pub const fn output(&self) -> &W {
        &self.output
    }

    /// Consumes the CPU and returns its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Dumps the current CPU state (PC, flags, and registers) to stderr.
    pub fn dump_state(&self) {
        let window = self.fetch();
        eprintln!(
            "PC = {:#04x}  FL = {:#010b}  next: {}",
            self.pc,
            self.flags.bits(),
            crate::isa::disasm::disassemble(window.opcode, window.a, window.b)
        );
        self.regs.dump();
    }
}
