//! # Decoder Tests
//!
//! Exactly the 34 architectural opcodes decode, and each decodes back to its
//! own byte.

use std::collections::HashSet;

use ls8_core::isa::decode::{Opcode, decode};
use pretty_assertions::assert_eq;

#[test]
fn test_exactly_34_bytes_decode() {
    let decoded = (0..=u8::MAX).filter_map(decode).count();
    assert_eq!(decoded, 34);
}

#[test]
fn test_decode_matches_byte() {
    for op in Opcode::ALL {
        assert_eq!(decode(op.byte()), Some(op), "{}", op.mnemonic());
    }
}

#[test]
fn test_opcode_bytes_are_distinct() {
    let bytes: HashSet<u8> = Opcode::ALL.iter().map(|op| op.byte()).collect();
    assert_eq!(bytes.len(), Opcode::ALL.len());
}

#[test]
fn test_known_bytes() {
    assert_eq!(decode(0b1000_0010), Some(Opcode::Ldi));
    assert_eq!(decode(0b0100_0111), Some(Opcode::Prn));
    assert_eq!(decode(0b1010_0010), Some(Opcode::Mul));
    assert_eq!(decode(0b0000_0001), Some(Opcode::Hlt));
    assert_eq!(decode(0b0000_0000), Some(Opcode::Nop));
}

#[test]
fn test_unknown_bytes() {
    assert_eq!(decode(0b0000_0010), None);
    assert_eq!(decode(0xFF), None);
    assert_eq!(decode(0b1010_0101), None);
}

#[test]
fn test_implemented_set() {
    let implemented: Vec<&str> = Opcode::ALL
        .iter()
        .filter(|op| op.is_implemented())
        .map(|op| op.mnemonic())
        .collect();
    assert_eq!(implemented.len(), 18);
    for name in ["ADD", "CALL", "CMP", "HLT", "JEQ", "LD", "LDI", "PRA", "RET"] {
        assert!(implemented.contains(&name), "{name} missing");
    }
    for name in ["SUB", "ST", "JGT", "INT", "IRET"] {
        assert!(!implemented.contains(&name), "{name} unexpectedly implemented");
    }
}
