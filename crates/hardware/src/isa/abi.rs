//! LS-8 register conventions.
//!
//! Register roles that programs follow by convention; the hardware does not
//! enforce them.

/// Register R7, the stack pointer.
pub const REG_SP: usize = 7;
