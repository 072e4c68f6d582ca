//! Error definitions.
//!
//! This module defines the error handling for the interpreter. It provides:
//! 1. **Execution Errors:** Fatal conditions raised by the fetch-decode-execute loop.
//! 2. **Load Errors:** Malformed or unreadable program files.
//! 3. **Crate Error:** A single type wrapping both for callers that drive load and run together.

use std::io;
use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal conditions raised while executing a program.
///
/// Every variant aborts the run; there is no instruction-level recovery.
#[derive(Debug, Error)]
pub enum ExecError {
    /// The fetched byte is not a member of the instruction set.
    ///
    /// Carries the address it was fetched from and the byte itself.
    #[error("Invalid opcode at {pc:02x}: {opcode:08b}")]
    UnknownOpcode {
        /// Address of the offending byte.
        pc: u8,
        /// The raw opcode byte.
        opcode: u8,
    },

    /// The opcode is part of the instruction set but has no implementation.
    #[error("Unimplemented opcode {opcode:08b}")]
    UnimplementedOpcode {
        /// The raw opcode byte.
        opcode: u8,
    },

    /// The configured instruction budget ran out before the program halted.
    #[error("instruction limit of {limit} reached without halting")]
    InstructionLimit {
        /// The configured limit.
        limit: u64,
    },

    /// Writing `PRN`/`PRA` output failed.
    #[error("failed to write program output: {0}")]
    Output(#[from] io::Error),
}

/// Failures while reading a program file into memory.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The program file could not be read.
    #[error("could not read program file '{}': {source}", path.display())]
    Io {
        /// Path that was opened.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// A non-comment line is not a base-2 byte literal.
    #[error("line {line}: '{text}' is not a binary byte literal")]
    Parse {
        /// One-based line number in the source file.
        line: usize,
        /// The offending text after comment stripping.
        text: String,
        /// Underlying parse failure.
        #[source]
        source: ParseIntError,
    },

    /// The program does not fit in memory.
    #[error("program is {len} bytes but memory holds only {capacity}")]
    ProgramTooLarge {
        /// Number of bytes in the program.
        len: usize,
        /// Memory capacity in bytes.
        capacity: usize,
    },
}

/// Any failure from loading or running a program.
#[derive(Debug, Error)]
pub enum Error {
    /// Loading failed before execution started.
    #[error(transparent)]
    Load(#[from] LoadError),
    /// Execution aborted.
    #[error(transparent)]
    Exec(#[from] ExecError),
}

/// Result alias for operations that may fail with the crate [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
