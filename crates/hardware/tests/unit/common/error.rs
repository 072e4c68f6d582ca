//! # Error Tests
//!
//! Display strings and conversions for the crate error types.

use std::io;
use std::path::PathBuf;

use ls8_core::{Error, ExecError, LoadError};
use pretty_assertions::assert_eq;

#[test]
fn test_unknown_opcode_display() {
    let err = ExecError::UnknownOpcode {
        pc: 0x1F,
        opcode: 0b0000_0010,
    };
    assert_eq!(err.to_string(), "Invalid opcode at 1f: 00000010");
}

#[test]
fn test_unimplemented_opcode_display() {
    let err = ExecError::UnimplementedOpcode {
        opcode: 0b1010_0001,
    };
    assert_eq!(err.to_string(), "Unimplemented opcode 10100001");
}

#[test]
fn test_instruction_limit_display_names_limit() {
    let err = ExecError::InstructionLimit { limit: 500 };
    assert!(err.to_string().contains("500"));
}

#[test]
fn test_output_error_from_io() {
    let err: ExecError = io::Error::new(io::ErrorKind::BrokenPipe, "closed").into();
    assert!(matches!(err, ExecError::Output(_)));
}

#[test]
fn test_parse_error_display() {
    let source = u8::from_str_radix("xyz", 2).unwrap_err();
    let err = LoadError::Parse {
        line: 2,
        text: "xyz".to_string(),
        source,
    };
    assert_eq!(err.to_string(), "line 2: 'xyz' is not a binary byte literal");
}

#[test]
fn test_io_error_display_names_path() {
    let err = LoadError::Io {
        path: PathBuf::from("missing.ls8"),
        source: io::Error::new(io::ErrorKind::NotFound, "not found"),
    };
    assert!(err.to_string().contains("missing.ls8"));
}

#[test]
fn test_crate_error_is_transparent() {
    let exec = ExecError::UnknownOpcode { pc: 0, opcode: 2 };
    let expected = exec.to_string();
    let err: Error = exec.into();
    assert_eq!(err.to_string(), expected);

    let load = LoadError::ProgramTooLarge {
        len: 300,
        capacity: 256,
    };
    let expected = load.to_string();
    let err: Error = load.into();
    assert_eq!(err.to_string(), expected);
}
