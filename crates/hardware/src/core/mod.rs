//! Core processor implementation.
//!
//! This module contains the CPU state container and its fetch-decode-execute
//! loop, the architectural storage (registers, flags, RAM), and the execution
//! units the instruction handlers delegate to.

/// Architectural state (flags, register file, RAM).
pub mod arch;

/// CPU core implementation and execution loop.
pub mod cpu;

/// Execution units (ALU, branch resolution).
pub mod units;

pub use self::cpu::Cpu;
