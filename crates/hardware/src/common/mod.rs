//! Common utilities and types used throughout the interpreter.
//!
//! This module provides the building blocks shared by the ISA, the core, and the
//! loader. It includes:
//! 1. **Constants:** Machine sizing, opcode format masks, and flag bits.
//! 2. **Error Handling:** Execution and load error types.

/// Common constants used throughout the interpreter.
pub mod constants;

/// Error types for loading and execution.
pub mod error;

pub use error::{Error, ExecError, LoadError, Result};
