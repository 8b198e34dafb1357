//! Opcode catalog.
//!
//! Two fixed 256-entry tables map an opcode byte to its descriptor: one for
//! the main instruction set and one for the instructions that follow the
//! `0xCB` prefix. Both are built at compile time from the regular structure
//! of the LR35902 encoding. Cycle costs are in M-cycles; conditional control
//! flow stores the not-taken cost and the effect adds the taken surcharge.

use std::fmt;

/// 8-bit operand slot in the standard register encoding
/// (0=B, 1=C, 2=D, 3=E, 4=H, 5=L, 6=(HL), 7=A).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reg8 {
    B,
    C,
    D,
    E,
    H,
    L,
    HlInd,
    A,
}

impl Reg8 {
    pub const fn from_index(index: u8) -> Self {
        match index & 0x07 {
            0 => Reg8::B,
            1 => Reg8::C,
            2 => Reg8::D,
            3 => Reg8::E,
            4 => Reg8::H,
            5 => Reg8::L,
            6 => Reg8::HlInd,
            _ => Reg8::A,
        }
    }

    const fn is_memory(self) -> bool {
        matches!(self, Reg8::HlInd)
    }
}

/// Register pairs addressed by the 16-bit load/arithmetic group.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reg16 {
    BC,
    DE,
    HL,
    SP,
}

impl Reg16 {
    const fn from_index(index: u8) -> Self {
        match index & 0x03 {
            0 => Reg16::BC,
            1 => Reg16::DE,
            2 => Reg16::HL,
            _ => Reg16::SP,
        }
    }
}

/// Register pairs addressed by PUSH/POP.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StackReg {
    BC,
    DE,
    HL,
    AF,
}

impl StackReg {
    const fn from_index(index: u8) -> Self {
        match index & 0x03 {
            0 => StackReg::BC,
            1 => StackReg::DE,
            2 => StackReg::HL,
            _ => StackReg::AF,
        }
    }
}

/// Memory operand of `LD (rr),A` / `LD A,(rr)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Indirect {
    BC,
    DE,
    HlInc,
    HlDec,
}

impl Indirect {
    const fn from_index(index: u8) -> Self {
        match index & 0x03 {
            0 => Indirect::BC,
            1 => Indirect::DE,
            2 => Indirect::HlInc,
            _ => Indirect::HlDec,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cond {
    NZ,
    Z,
    NC,
    C,
}

impl Cond {
    const fn from_index(index: u8) -> Self {
        match index & 0x03 {
            0 => Cond::NZ,
            1 => Cond::Z,
            2 => Cond::NC,
            _ => Cond::C,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AluOp {
    Add,
    Adc,
    Sub,
    Sbc,
    And,
    Xor,
    Or,
    Cp,
}

impl AluOp {
    const fn from_index(index: u8) -> Self {
        match index & 0x07 {
            0 => AluOp::Add,
            1 => AluOp::Adc,
            2 => AluOp::Sub,
            3 => AluOp::Sbc,
            4 => AluOp::And,
            5 => AluOp::Xor,
            6 => AluOp::Or,
            _ => AluOp::Cp,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShiftOp {
    Rlc,
    Rrc,
    Rl,
    Rr,
    Sla,
    Sra,
    Swap,
    Srl,
}

impl ShiftOp {
    const fn from_index(index: u8) -> Self {
        match index & 0x07 {
            0 => ShiftOp::Rlc,
            1 => ShiftOp::Rrc,
            2 => ShiftOp::Rl,
            3 => ShiftOp::Rr,
            4 => ShiftOp::Sla,
            5 => ShiftOp::Sra,
            6 => ShiftOp::Swap,
            _ => ShiftOp::Srl,
        }
    }
}

/// What an instruction does once its operand bytes have been fetched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    Nop,
    Stop,
    Halt,
    Di,
    Ei,
    /// Switches the next fetch to the prefixed table.
    Prefix,

    LdR8R8(Reg8, Reg8),
    LdR8D8(Reg8),
    LdR16D16(Reg16),
    LdIndA(Indirect),
    LdAInd(Indirect),
    LdA16Sp,
    LdhA8A,
    LdhAA8,
    LdhCA,
    LdhAC,
    LdA16A,
    LdAA16,
    LdHlSpR8,
    LdSpHl,

    Inc8(Reg8),
    Dec8(Reg8),
    Inc16(Reg16),
    Dec16(Reg16),
    AddHl(Reg16),
    AddSpR8,
    Alu(AluOp, Reg8),
    AluD8(AluOp),
    Rlca,
    Rrca,
    Rla,
    Rra,
    Daa,
    Cpl,
    Scf,
    Ccf,

    Jr(Option<Cond>),
    Jp(Option<Cond>),
    JpHl,
    Call(Option<Cond>),
    Ret(Option<Cond>),
    Reti,
    Rst(u8),
    Push(StackReg),
    Pop(StackReg),

    Shift(ShiftOp, Reg8),
    Bit(u8, Reg8),
    Res(u8, Reg8),
    Set(u8, Reg8),
}

/// Immutable catalog record for one opcode byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Opcode {
    /// Instruction length in bytes, including the opcode byte itself.
    pub length: u8,
    /// Canonical cost in M-cycles (not-taken cost for conditional branches).
    pub cycles: u8,
    pub effect: Effect,
}

/// A table entry: either a defined instruction or an unmapped byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slot {
    Op(Opcode),
    Unmapped,
}

impl Slot {
    #[inline]
    pub fn opcode(&self) -> Option<&Opcode> {
        match self {
            Slot::Op(op) => Some(op),
            Slot::Unmapped => None,
        }
    }
}

/// Which table the next fetched byte is resolved against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DispatchMode {
    #[default]
    Normal,
    Prefixed,
}

pub static MAIN_TABLE: [Slot; 256] = build_main_table();
pub static PREFIXED_TABLE: [Slot; 256] = build_prefixed_table();

/// Resolve `byte` against the table selected by `mode`.
#[inline]
pub fn lookup(mode: DispatchMode, byte: u8) -> Option<&'static Opcode> {
    match mode {
        DispatchMode::Normal => MAIN_TABLE[byte as usize].opcode(),
        DispatchMode::Prefixed => PREFIXED_TABLE[byte as usize].opcode(),
    }
}

const fn op(length: u8, cycles: u8, effect: Effect) -> Slot {
    Slot::Op(Opcode {
        length,
        cycles,
        effect,
    })
}

const fn build_main_table() -> [Slot; 256] {
    let mut table = [Slot::Unmapped; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = main_slot(i as u8);
        i += 1;
    }
    table
}

const fn build_prefixed_table() -> [Slot; 256] {
    let mut table = [Slot::Unmapped; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = prefixed_slot(i as u8);
        i += 1;
    }
    table
}

const fn main_slot(byte: u8) -> Slot {
    let x = byte >> 6;
    let y = (byte >> 3) & 0x07;
    let z = byte & 0x07;
    let p = y >> 1;

    match byte {
        0x00 => op(1, 1, Effect::Nop),
        0x08 => op(3, 5, Effect::LdA16Sp),
        0x10 => op(2, 1, Effect::Stop),
        0x18 => op(2, 3, Effect::Jr(None)),
        0x20 | 0x28 | 0x30 | 0x38 => op(2, 2, Effect::Jr(Some(Cond::from_index(y - 4)))),
        0x07 => op(1, 1, Effect::Rlca),
        0x0F => op(1, 1, Effect::Rrca),
        0x17 => op(1, 1, Effect::Rla),
        0x1F => op(1, 1, Effect::Rra),
        0x27 => op(1, 1, Effect::Daa),
        0x2F => op(1, 1, Effect::Cpl),
        0x37 => op(1, 1, Effect::Scf),
        0x3F => op(1, 1, Effect::Ccf),
        0x76 => op(1, 1, Effect::Halt),

        0xC3 => op(3, 4, Effect::Jp(None)),
        0xC2 | 0xCA | 0xD2 | 0xDA => op(3, 3, Effect::Jp(Some(Cond::from_index(y)))),
        0xE9 => op(1, 1, Effect::JpHl),
        0xCD => op(3, 6, Effect::Call(None)),
        0xC4 | 0xCC | 0xD4 | 0xDC => op(3, 3, Effect::Call(Some(Cond::from_index(y)))),
        0xC9 => op(1, 4, Effect::Ret(None)),
        0xC0 | 0xC8 | 0xD0 | 0xD8 => op(1, 2, Effect::Ret(Some(Cond::from_index(y)))),
        0xD9 => op(1, 4, Effect::Reti),
        0xCB => op(1, 1, Effect::Prefix),
        0xF3 => op(1, 1, Effect::Di),
        0xFB => op(1, 1, Effect::Ei),

        0xE0 => op(2, 3, Effect::LdhA8A),
        0xF0 => op(2, 3, Effect::LdhAA8),
        0xE2 => op(1, 2, Effect::LdhCA),
        0xF2 => op(1, 2, Effect::LdhAC),
        0xEA => op(3, 4, Effect::LdA16A),
        0xFA => op(3, 4, Effect::LdAA16),
        0xE8 => op(2, 4, Effect::AddSpR8),
        0xF8 => op(2, 3, Effect::LdHlSpR8),
        0xF9 => op(1, 2, Effect::LdSpHl),

        // Hardware opcode holes.
        0xD3 | 0xDB | 0xDD | 0xE3 | 0xE4 | 0xEB | 0xEC | 0xED | 0xF4 | 0xFC | 0xFD => {
            Slot::Unmapped
        }

        _ => match x {
            0 => match z {
                1 => {
                    if y & 1 == 0 {
                        op(3, 3, Effect::LdR16D16(Reg16::from_index(p)))
                    } else {
                        op(1, 2, Effect::AddHl(Reg16::from_index(p)))
                    }
                }
                2 => {
                    if y & 1 == 0 {
                        op(1, 2, Effect::LdIndA(Indirect::from_index(p)))
                    } else {
                        op(1, 2, Effect::LdAInd(Indirect::from_index(p)))
                    }
                }
                3 => {
                    if y & 1 == 0 {
                        op(1, 2, Effect::Inc16(Reg16::from_index(p)))
                    } else {
                        op(1, 2, Effect::Dec16(Reg16::from_index(p)))
                    }
                }
                4 => {
                    let r = Reg8::from_index(y);
                    op(1, if r.is_memory() { 3 } else { 1 }, Effect::Inc8(r))
                }
                5 => {
                    let r = Reg8::from_index(y);
                    op(1, if r.is_memory() { 3 } else { 1 }, Effect::Dec8(r))
                }
                6 => {
                    let r = Reg8::from_index(y);
                    op(2, if r.is_memory() { 3 } else { 2 }, Effect::LdR8D8(r))
                }
                _ => Slot::Unmapped,
            },
            1 => {
                let dst = Reg8::from_index(y);
                let src = Reg8::from_index(z);
                let cycles = if dst.is_memory() || src.is_memory() { 2 } else { 1 };
                op(1, cycles, Effect::LdR8R8(dst, src))
            }
            2 => {
                let src = Reg8::from_index(z);
                op(
                    1,
                    if src.is_memory() { 2 } else { 1 },
                    Effect::Alu(AluOp::from_index(y), src),
                )
            }
            _ => match z {
                1 if y & 1 == 0 => op(1, 3, Effect::Pop(StackReg::from_index(p))),
                5 if y & 1 == 0 => op(1, 4, Effect::Push(StackReg::from_index(p))),
                6 => op(2, 2, Effect::AluD8(AluOp::from_index(y))),
                7 => op(1, 4, Effect::Rst(y * 8)),
                _ => Slot::Unmapped,
            },
        },
    }
}

/// Prefixed costs exclude the M-cycle already charged to the `0xCB` byte.
const fn prefixed_slot(byte: u8) -> Slot {
    let x = byte >> 6;
    let y = (byte >> 3) & 0x07;
    let r = Reg8::from_index(byte);
    let rmw_cycles = if r.is_memory() { 3 } else { 1 };

    match x {
        0 => op(1, rmw_cycles, Effect::Shift(ShiftOp::from_index(y), r)),
        1 => op(1, if r.is_memory() { 2 } else { 1 }, Effect::Bit(y, r)),
        2 => op(1, rmw_cycles, Effect::Res(y, r)),
        _ => op(1, rmw_cycles, Effect::Set(y, r)),
    }
}

impl fmt::Display for Reg8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Reg8::B => "B",
            Reg8::C => "C",
            Reg8::D => "D",
            Reg8::E => "E",
            Reg8::H => "H",
            Reg8::L => "L",
            Reg8::HlInd => "(HL)",
            Reg8::A => "A",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Reg16 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Reg16::BC => "BC",
            Reg16::DE => "DE",
            Reg16::HL => "HL",
            Reg16::SP => "SP",
        };
        f.write_str(name)
    }
}

impl fmt::Display for StackReg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StackReg::BC => "BC",
            StackReg::DE => "DE",
            StackReg::HL => "HL",
            StackReg::AF => "AF",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Indirect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Indirect::BC => "(BC)",
            Indirect::DE => "(DE)",
            Indirect::HlInc => "(HL+)",
            Indirect::HlDec => "(HL-)",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Cond {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Cond::NZ => "NZ",
            Cond::Z => "Z",
            Cond::NC => "NC",
            Cond::C => "C",
        };
        f.write_str(name)
    }
}

impl AluOp {
    fn mnemonic(self) -> &'static str {
        match self {
            AluOp::Add => "ADD A,",
            AluOp::Adc => "ADC A,",
            AluOp::Sub => "SUB ",
            AluOp::Sbc => "SBC A,",
            AluOp::And => "AND ",
            AluOp::Xor => "XOR ",
            AluOp::Or => "OR ",
            AluOp::Cp => "CP ",
        }
    }
}

impl ShiftOp {
    fn mnemonic(self) -> &'static str {
        match self {
            ShiftOp::Rlc => "RLC",
            ShiftOp::Rrc => "RRC",
            ShiftOp::Rl => "RL",
            ShiftOp::Rr => "RR",
            ShiftOp::Sla => "SLA",
            ShiftOp::Sra => "SRA",
            ShiftOp::Swap => "SWAP",
            ShiftOp::Srl => "SRL",
        }
    }
}

fn with_cond(f: &mut fmt::Formatter<'_>, name: &str, cond: Option<Cond>, rest: &str) -> fmt::Result {
    match (cond, rest.is_empty()) {
        (Some(cc), true) => write!(f, "{name} {cc}"),
        (Some(cc), false) => write!(f, "{name} {cc},{rest}"),
        (None, true) => f.write_str(name),
        (None, false) => write!(f, "{name} {rest}"),
    }
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Effect::Nop => f.write_str("NOP"),
            Effect::Stop => f.write_str("STOP"),
            Effect::Halt => f.write_str("HALT"),
            Effect::Di => f.write_str("DI"),
            Effect::Ei => f.write_str("EI"),
            Effect::Prefix => f.write_str("PREFIX CB"),
            Effect::LdR8R8(dst, src) => write!(f, "LD {dst},{src}"),
            Effect::LdR8D8(dst) => write!(f, "LD {dst},d8"),
            Effect::LdR16D16(dst) => write!(f, "LD {dst},d16"),
            Effect::LdIndA(dst) => write!(f, "LD {dst},A"),
            Effect::LdAInd(src) => write!(f, "LD A,{src}"),
            Effect::LdA16Sp => f.write_str("LD (a16),SP"),
            Effect::LdhA8A => f.write_str("LDH (a8),A"),
            Effect::LdhAA8 => f.write_str("LDH A,(a8)"),
            Effect::LdhCA => f.write_str("LD (C),A"),
            Effect::LdhAC => f.write_str("LD A,(C)"),
            Effect::LdA16A => f.write_str("LD (a16),A"),
            Effect::LdAA16 => f.write_str("LD A,(a16)"),
            Effect::LdHlSpR8 => f.write_str("LD HL,SP+r8"),
            Effect::LdSpHl => f.write_str("LD SP,HL"),
            Effect::Inc8(r) => write!(f, "INC {r}"),
            Effect::Dec8(r) => write!(f, "DEC {r}"),
            Effect::Inc16(rr) => write!(f, "INC {rr}"),
            Effect::Dec16(rr) => write!(f, "DEC {rr}"),
            Effect::AddHl(rr) => write!(f, "ADD HL,{rr}"),
            Effect::AddSpR8 => f.write_str("ADD SP,r8"),
            Effect::Alu(alu, r) => write!(f, "{}{r}", alu.mnemonic()),
            Effect::AluD8(alu) => write!(f, "{}d8", alu.mnemonic()),
            Effect::Rlca => f.write_str("RLCA"),
            Effect::Rrca => f.write_str("RRCA"),
            Effect::Rla => f.write_str("RLA"),
            Effect::Rra => f.write_str("RRA"),
            Effect::Daa => f.write_str("DAA"),
            Effect::Cpl => f.write_str("CPL"),
            Effect::Scf => f.write_str("SCF"),
            Effect::Ccf => f.write_str("CCF"),
            Effect::Jr(cond) => with_cond(f, "JR", cond, "r8"),
            Effect::Jp(cond) => with_cond(f, "JP", cond, "a16"),
            Effect::JpHl => f.write_str("JP (HL)"),
            Effect::Call(cond) => with_cond(f, "CALL", cond, "a16"),
            Effect::Ret(cond) => with_cond(f, "RET", cond, ""),
            Effect::Reti => f.write_str("RETI"),
            Effect::Rst(vector) => write!(f, "RST {vector:02X}H"),
            Effect::Push(rr) => write!(f, "PUSH {rr}"),
            Effect::Pop(rr) => write!(f, "POP {rr}"),
            Effect::Shift(shift, r) => write!(f, "{} {r}", shift.mnemonic()),
            Effect::Bit(bit, r) => write!(f, "BIT {bit},{r}"),
            Effect::Res(bit, r) => write!(f, "RES {bit},{r}"),
            Effect::Set(bit, r) => write!(f, "SET {bit},{r}"),
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.effect, f)
    }
}
