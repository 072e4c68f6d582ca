//! Branch Resolution Unit (BRU).
//!
//! Resolves register-indirect jumps against the `FL` register. A jump either
//! goes to its target or falls through past its own two bytes.

use crate::common::constants::BRANCH_FALLTHROUGH;
use crate::core::arch::flags::Flags;

/// Condition tested by a jump instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BranchCond {
    /// `JMP`: always taken.
    Always,
    /// `JEQ`: taken when the Equal flag is set.
    Equal,
    /// `JNE`: taken when the Equal flag is clear.
    NotEqual,
}

impl BranchCond {
    /// Whether the branch is taken for the given flags.
    pub const fn taken(self, flags: Flags) -> bool {
        match self {
            Self::Always => true,
            Self::Equal => flags.equal(),
            Self::NotEqual => !flags.equal(),
        }
    }
}

/// Computes the next PC for a jump at `pc` to `target`.
///
/// Returns the PC and whether the branch was taken.
pub const fn resolve(cond: BranchCond, flags: Flags, pc: u8, target: u8) -> (u8, bool) {
    if cond.taken(flags) {
        (target, true)
    } else {
        (pc.wrapping_add(BRANCH_FALLTHROUGH), false)
    }
}
