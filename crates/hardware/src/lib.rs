//! LS-8 interpreter library.
//!
//! This crate implements the LS-8, a small 8-bit teaching computer, with the following:
//! 1. **Core:** Eight 8-bit registers, 256 bytes of RAM, PC, flags, and the fetch-decode-execute loop.
//! 2. **ISA:** Opcode constants, format-bit and opcode decoding, and a disassembler.
//! 3. **Simulation:** Program text loader, configuration, and execution statistics.
//!
//! ```
//! use ls8_core::{Config, Cpu};
//! use ls8_core::sim::loader::parse_program;
//!
//! let image = parse_program(
//!     "10000010\n00000000\n00001000\n\
//!      10000010\n00000001\n00001001\n\
//!      10100010\n00000000\n00000001\n\
//!      01000111\n00000000\n\
//!      00000001\n",
//! )?;
//! let mut cpu = Cpu::with_output(&Config::default(), Vec::new());
//! cpu.load_image(&image)?;
//! cpu.run()?;
//! assert_eq!(cpu.output().as_slice(), b"72");
//! # Ok::<(), ls8_core::Error>(())
//! ```

/// Common types and constants (errors, format masks, machine sizes).
pub mod common;
/// Interpreter configuration (tracing, initial SP, instruction budget).
pub mod config;
/// CPU core (architectural state, execution loop, execution units).
pub mod core;
/// Instruction set (opcodes, decode, disassembly).
pub mod isa;
/// Program loader and load-then-run helper.
pub mod sim;
/// Execution statistics collection and reporting.
pub mod stats;

/// Crate-wide error and result types.
pub use crate::common::{Error, ExecError, LoadError, Result};
/// Root configuration type; use `Config::default()` or load it from JSON.
pub use crate::config::Config;
/// Main CPU type; holds registers, memory, flags, and statistics.
pub use crate::core::Cpu;
