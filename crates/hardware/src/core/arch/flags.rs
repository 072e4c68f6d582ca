//! Condition flags register (`FL`).
//!
//! Only `CMP` writes the flags, and it always rewrites all of them: exactly one
//! of Equal, Greater, or Less is set afterwards. Conditional jumps read them.

use std::cmp::Ordering;

use crate::common::constants::{FLAG_EQUAL, FLAG_GREATER, FLAG_LESS};

/// The `FL` register.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Flags(u8);

impl Flags {
    /// Flags register with no bits set.
    pub const fn new() -> Self {
        Self(0)
    }

    /// Raw register value.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Clears the register and sets the single bit describing `a` relative to `b`.
    pub fn compare(&mut self, a: u8, b: u8) {
        self.0 = match a.cmp(&b) {
            Ordering::Equal => FLAG_EQUAL,
            Ordering::Greater => FLAG_GREATER,
            Ordering::Less => FLAG_LESS,
        };
    }

    /// Equal flag.
    pub const fn equal(self) -> bool {
        self.0 & FLAG_EQUAL != 0
    }

    /// Greater-than flag.
    pub const fn greater(self) -> bool {
        self.0 & FLAG_GREATER != 0
    }

    /// Less-than flag.
    pub const fn less(self) -> bool {
        self.0 & FLAG_LESS != 0
    }
}
