//! LS-8 Instruction Decoder.
//!
//! Maps an opcode byte onto the closed [`Opcode`] set. Every member of the
//! architecture decodes, including the ones the engine does not implement;
//! only bytes outside the instruction set yield `None`.

use crate::isa::opcodes;

/// Every instruction defined by the LS-8 architecture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Opcode {
    /// `NOP`
    Nop,
    /// `HLT`
    Hlt,
    /// `RET`
    Ret,
    /// `IRET`
    Iret,
    /// `PUSH reg`
    Push,
    /// `POP reg`
    Pop,
    /// `PRN reg`
    Prn,
    /// `PRA reg`
    Pra,
    /// `CALL reg`
    Call,
    /// `INT reg`
    Int,
    /// `JMP reg`
    Jmp,
    /// `JEQ reg`
    Jeq,
    /// `JNE reg`
    Jne,
    /// `JGT reg`
    Jgt,
    /// `JLT reg`
    Jlt,
    /// `JLE reg`
    Jle,
    /// `JGE reg`
    Jge,
    /// `INC reg`
    Inc,
    /// `DEC reg`
    Dec,
    /// `NOT reg`
    Not,
    /// `LDI reg, imm`
    Ldi,
    /// `LD regA, regB`
    Ld,
    /// `ST regA, regB`
    St,
    /// `ADD regA, regB`
    Add,
    /// `SUB regA, regB`
    Sub,
    /// `MUL regA, regB`
    Mul,
    /// `DIV regA, regB`
    Div,
    /// `MOD regA, regB`
    Mod,
    /// `CMP regA, regB`
    Cmp,
    /// `AND regA, regB`
    And,
    /// `OR regA, regB`
    Or,
    /// `XOR regA, regB`
    Xor,
    /// `SHL regA, regB`
    Shl,
    /// `SHR regA, regB`
    Shr,
}

impl Opcode {
    /// All members of the instruction set, in opcode-byte order.
    pub const ALL: [Self; 34] = [
        Self::Nop,
        Self::Hlt,
        Self::Ret,
        Self::Iret,
        Self::Push,
        Self::Pop,
        Self::Prn,
        Self::Pra,
        Self::Call,
        Self::Int,
        Self::Jmp,
        Self::Jeq,
        Self::Jne,
        Self::Jgt,
        Self::Jlt,
        Self::Jle,
        Self::Jge,
        Self::Inc,
        Self::Dec,
        Self::Not,
        Self::Ldi,
        Self::Ld,
        Self::St,
        Self::Add,
        Self::Sub,
        Self::Mul,
        Self::Div,
        Self::Mod,
        Self::Cmp,
        Self::And,
        Self::Or,
        Self::Xor,
        Self::Shl,
        Self::Shr,
    ];

    /// Raw opcode byte of this instruction.
    pub const fn byte(self) -> u8 {
        match self {
            Self::Nop => opcodes::NOP,
            Self::Hlt => opcodes::HLT,
            Self::Ret => opcodes::RET,
            Self::Iret => opcodes::IRET,
            Self::Push => opcodes::PUSH,
            Self::Pop => opcodes::POP,
            Self::Prn => opcodes::PRN,
            Self::Pra => opcodes::PRA,
            Self::Call => opcodes::CALL,
            Self::Int => opcodes::INT,
            Self::Jmp => opcodes::JMP,
            Self::Jeq => opcodes::JEQ,
            Self::Jne => opcodes::JNE,
            Self::Jgt => opcodes::JGT,
            Self::Jlt => opcodes::JLT,
            Self::Jle => opcodes::JLE,
            Self::Jge => opcodes::JGE,
            Self::Inc => opcodes::INC,
            Self::Dec => opcodes::DEC,
            Self::Not => opcodes::NOT,
            Self::Ldi => opcodes::LDI,
            Self::Ld => opcodes::LD,
            Self::St => opcodes::ST,
            Self::Add => opcodes::ADD,
            Self::Sub => opcodes::SUB,
            Self::Mul => opcodes::MUL,
            Self::Div => opcodes::DIV,
            Self::Mod => opcodes::MOD,
            Self::Cmp => opcodes::CMP,
            Self::And => opcodes::AND,
            Self::Or => opcodes::OR,
            Self::Xor => opcodes::XOR,
            Self::Shl => opcodes::SHL,
            Self::Shr => opcodes::SHR,
        }
    }

    /// Assembly mnemonic, upper case.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Nop => "NOP",
            Self::Hlt => "HLT",
            Self::Ret => "RET",
            Self::Iret => "IRET",
            Self::Push => "PUSH",
            Self::Pop => "POP",
            Self::Prn => "PRN",
            Self::Pra => "PRA",
            Self::Call => "CALL",
            Self::Int => "INT",
            Self::Jmp => "JMP",
            Self::Jeq => "JEQ",
            Self::Jne => "JNE",
            Self::Jgt => "JGT",
            Self::Jlt => "JLT",
            Self::Jle => "JLE",
            Self::Jge => "JGE",
            Self::Inc => "INC",
            Self::Dec => "DEC",
            Self::Not => "NOT",
            Self::Ldi => "LDI",
            Self::Ld => "LD",
            Self::St => "ST",
            Self::Add => "ADD",
            Self::Sub => "SUB",
            Self::Mul => "MUL",
            Self::Div => "DIV",
            Self::Mod => "MOD",
            Self::Cmp => "CMP",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Xor => "XOR",
            Self::Shl => "SHL",
            Self::Shr => "SHR",
        }
    }

    /// Whether the engine has an implementation for this instruction.
    ///
    /// The rest are declared by the architecture and fail with
    /// [`ExecError::UnimplementedOpcode`](crate::common::ExecError::UnimplementedOpcode).
    pub const fn is_implemented(self) -> bool {
        matches!(
            self,
            Self::Nop
                | Self::Hlt
                | Self::Ret
                | Self::Push
                | Self::Pop
                | Self::Prn
                | Self::Pra
                | Self::Call
                | Self::Jmp
                | Self::Jeq
                | Self::Jne
                | Self::Inc
                | Self::Dec
                | Self::Ldi
                | Self::Ld
                | Self::Add
                | Self::Mul
                | Self::Cmp
        )
    }
}

/// Decodes an opcode byte into an [`Opcode`].
///
/// Returns `None` for bytes that are not part of the instruction set.
pub const fn decode(byte: u8) -> Option<Opcode> {
    let op = match byte {
        opcodes::NOP => Opcode::Nop,
        opcodes::HLT => Opcode::Hlt,
        opcodes::RET => Opcode::Ret,
        opcodes::IRET => Opcode::Iret,
        opcodes::PUSH => Opcode::Push,
        opcodes::POP => Opcode::Pop,
        opcodes::PRN => Opcode::Prn,
        opcodes::PRA => Opcode::Pra,
        opcodes::CALL => Opcode::Call,
        opcodes::INT => Opcode::Int,
        opcodes::JMP => Opcode::Jmp,
        opcodes::JEQ => Opcode::Jeq,
        opcodes::JNE => Opcode::Jne,
        opcodes::JGT => Opcode::Jgt,
        opcodes::JLT => Opcode::Jlt,
        opcodes::JLE => Opcode::Jle,
        opcodes::JGE => Opcode::Jge,
        opcodes::INC => Opcode::Inc,
        opcodes::DEC => Opcode::Dec,
        opcodes::NOT => Opcode::Not,
        opcodes::LDI => Opcode::Ldi,
        opcodes::LD => Opcode::Ld,
        opcodes::ST => Opcode::St,
        opcodes::ADD => Opcode::Add,
        opcodes::SUB => Opcode::Sub,
        opcodes::MUL => Opcode::Mul,
        opcodes::DIV => Opcode::Div,
        opcodes::MOD => Opcode::Mod,
        opcodes::CMP => Opcode::Cmp,
        opcodes::AND => Opcode::And,
        opcodes::OR => Opcode::Or,
        opcodes::XOR => Opcode::Xor,
        opcodes::SHL => Opcode::Shl,
        opcodes::SHR => Opcode::Shr,
        _ => return None,
    };
    Some(op)
}
