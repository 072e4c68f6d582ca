//! Flat 256-byte main memory.
//!
//! Addresses are single bytes, so every address is in range and arithmetic on
//! addresses wraps around the top of memory.

use crate::common::constants::MEMORY_SIZE;

/// Main memory: program, data, and stack share one address space.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ram {
    cells: [u8; MEMORY_SIZE],
}

impl Default for Ram {
    fn default() -> Self {
        Self::new()
    }
}

impl Ram {
    /// Creates zero-filled memory.
    pub const fn new() -> Self {
        Self {
            cells: [0; MEMORY_SIZE],
        }
    }

    /// Reads the cell at `addr`.
    #[inline]
    pub const fn read(&self, addr: u8) -> u8 {
        self.cells[addr as usize]
    }

    /// Writes `val` to the cell at `addr`.
    #[inline]
    pub const fn write(&mut self, addr: u8, val: u8) {
        self.cells[addr as usize] = val;
    }

    /// Copies `bytes` into memory starting at address 0.
    ///
    /// Callers check that the image fits; any excess is ignored.
    pub fn load_image(&mut self, bytes: &[u8]) {
        for (cell, byte) in self.cells.iter_mut().zip(bytes) {
            *cell = *byte;
        }
    }

    /// The whole address space as a slice.
    pub const fn as_slice(&self) -> &[u8] {
        &self.cells
    }
}
