//! Execution units.
//!
//! This module contains the functional units the instruction handlers
//! delegate to: the ALU for arithmetic and the branch resolution unit for
//! flag-conditioned jumps.

/// Arithmetic Logic Unit for integer operations.
pub mod alu;

/// Branch Resolution Unit for conditional and unconditional jumps.
pub mod bru;
