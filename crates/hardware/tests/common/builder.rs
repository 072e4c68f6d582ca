use ls8_core::isa::opcodes::{
    ADD, CALL, CMP, DEC, HLT, INC, JEQ, JMP, JNE, LD, LDI, MUL, NOP, POP, PRA, PRN, PUSH, RET,
};

/// Assembles an LS-8 program one instruction at a time.
///
/// Every method consumes and returns the builder so programs read as a chain.
#[derive(Debug, Default, Clone)]
pub struct ProgramBuilder {
    bytes: Vec<u8>,
}

impl ProgramBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends raw bytes.
    pub fn raw(mut self, bytes: &[u8]) -> Self {
        self.bytes.extend_from_slice(bytes);
        self
    }

    /// Pads with zero bytes (`NOP`) up to `addr`.
    pub fn pad_to(mut self, addr: usize) -> Self {
        assert!(addr >= self.bytes.len(), "pad_to({addr}) moves backwards");
        self.bytes.resize(addr, NOP);
        self
    }

    pub fn nop(self) -> Self {
        self.raw(&[NOP])
    }

    pub fn hlt(self) -> Self {
        self.raw(&[HLT])
    }

    pub fn ret(self) -> Self {
        self.raw(&[RET])
    }

    pub fn ldi(self, reg: u8, imm: u8) -> Self {
        self.raw(&[LDI, reg, imm])
    }

    pub fn ld(self, a: u8, b: u8) -> Self {
        self.raw(&[LD, a, b])
    }

    pub fn add(self, a: u8, b: u8) -> Self {
        self.raw(&[ADD, a, b])
    }

    pub fn mul(self, a: u8, b: u8) -> Self {
        self.raw(&[MUL, a, b])
    }

    pub fn cmp(self, a: u8, b: u8) -> Self {
        self.raw(&[CMP, a, b])
    }

    pub fn inc(self, reg: u8) -> Self {
        self.raw(&[INC, reg])
    }

    pub fn dec(self, reg: u8) -> Self {
        self.raw(&[DEC, reg])
    }

    pub fn push(self, reg: u8) -> Self {
        self.raw(&[PUSH, reg])
    }

    pub fn pop(self, reg: u8) -> Self {
        self.raw(&[POP, reg])
    }

    pub fn call(self, reg: u8) -> Self {
        self.raw(&[CALL, reg])
    }

    pub fn jmp(self, reg: u8) -> Self {
        self.raw(&[JMP, reg])
    }

    pub fn jeq(self, reg: u8) -> Self {
        self.raw(&[JEQ, reg])
    }

    pub fn jne(self, reg: u8) -> Self {
        self.raw(&[JNE, reg])
    }

    pub fn prn(self, reg: u8) -> Self {
        self.raw(&[PRN, reg])
    }

    pub fn pra(self, reg: u8) -> Self {
        self.raw(&[PRA, reg])
    }

    pub fn build(self) -> Vec<u8> {
        self.bytes
    }

    /// Renders the program in the loader's text format, one binary byte per line.
    pub fn to_source(&self) -> String {
        self.bytes.iter().map(|b| format!("{b:08b}\n")).collect()
    }
}
