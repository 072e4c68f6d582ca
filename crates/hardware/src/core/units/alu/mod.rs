//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the integer ALU behind the register-register
//! instructions the engine supports. The remaining ALU-class opcodes (`SUB`,
//! `DIV`, `MOD`, `AND`, `OR`, `XOR`, `NOT`, `SHL`, `SHR`) are rejected during
//! dispatch and never reach this unit.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Mul, Inc, Dec

/// Integer arithmetic operations (add, multiply, increment, decrement).
pub mod arithmetic;

use crate::common::constants::BYTE_MASK;

/// Operation selector for the ALU.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AluOp {
    /// `a + b`
    Add,
    /// `a * b`
    Mul,
    /// `a + 1`
    Inc,
    /// `a - 1`
    Dec,
}

/// Arithmetic Logic Unit (ALU) for 8-bit integer operations.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an ALU operation.
    ///
    /// # Arguments
    ///
    /// * `op` - The ALU operation to perform
    /// * `a`  - Register A value
    /// * `b`  - Register B value (ignored by unary operations)
    ///
    /// # Returns
    ///
    /// The unmasked result. Pass it through [`Alu::mask`] before writing a register.
    ///
    /// # Examples
    ///
    /// ```
    /// use ls8_core::core::units::alu::{Alu, AluOp};
    ///
    /// assert_eq!(Alu::execute(AluOp::Mul, 8, 9), 72);
    /// assert_eq!(Alu::execute(AluOp::Add, 200, 100), 300);
    /// assert_eq!(Alu::mask(Alu::execute(AluOp::Add, 200, 100)), 44);
    /// assert_eq!(Alu::mask(Alu::execute(AluOp::Dec, 0, 0)), 255);
    /// ```
    pub const fn execute(op: AluOp, a: u8, b: u8) -> u16 {
        arithmetic::execute(op, a, b)
    }

    /// Truncates a wide ALU result to a register byte.
    #[inline]
    pub const fn mask(wide: u16) -> u8 {
        (wide & BYTE_MASK) as u8
    }
}
