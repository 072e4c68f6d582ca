//! Simulation utilities and program loading.
//!
//! Provides the loader that turns LS-8 program text into a memory image and
//! places it at address 0.

pub mod loader;
