use super::{Bus, Cond, Cpu, Flags, Reg16, Reg8};

impl Cpu {
    /// Read an 8-bit register, or the byte at (HL).
    #[inline]
    pub(super) fn read_reg8<B: Bus>(&mut self, bus: &mut B, reg: Reg8) -> u8 {
        match reg {
            Reg8::B => self.regs.b,
            Reg8::C => self.regs.c,
            Reg8::D => self.regs.d,
            Reg8::E => self.regs.e,
            Reg8::H => self.regs.h,
            Reg8::L => self.regs.l,
            Reg8::HlInd => bus.read8(self.regs.hl()),
            Reg8::A => self.regs.a,
        }
    }

    #[inline]
    pub(super) fn write_reg8<B: Bus>(&mut self, bus: &mut B, reg: Reg8, value: u8) {
        match reg {
            Reg8::B => self.regs.b = value,
            Reg8::C => self.regs.c = value,
            Reg8::D => self.regs.d = value,
            Reg8::E => self.regs.e = value,
            Reg8::H => self.regs.h = value,
            Reg8::L => self.regs.l = value,
            Reg8::HlInd => bus.write8(self.regs.hl(), value),
            Reg8::A => self.regs.a = value,
        }
    }

    #[inline]
    pub(super) fn read_reg16(&self, reg: Reg16) -> u16 {
        match reg {
            Reg16::BC => self.regs.bc(),
            Reg16::DE => self.regs.de(),
            Reg16::HL => self.regs.hl(),
            Reg16::SP => self.regs.sp,
        }
    }

    #[inline]
    pub(super) fn write_reg16(&mut self, reg: Reg16, value: u16) {
        match reg {
            Reg16::BC => self.regs.set_bc(value),
            Reg16::DE => self.regs.set_de(value),
            Reg16::HL => self.regs.set_hl(value),
            Reg16::SP => self.regs.sp = value,
        }
    }

    /// Push high byte then low byte, decrementing SP before each write.
    #[inline]
    pub(super) fn push_u16<B: Bus>(&mut self, bus: &mut B, value: u16) {
        let [hi, lo] = value.to_be_bytes();
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        bus.write8(self.regs.sp, hi);
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        bus.write8(self.regs.sp, lo);
    }

    /// Pop low byte then high byte, incrementing SP after each read.
    #[inline]
    pub(super) fn pop_u16<B: Bus>(&mut self, bus: &mut B) -> u16 {
        let lo = bus.read8(self.regs.sp);
        self.regs.sp = self.regs.sp.wrapping_add(1);
        let hi = bus.read8(self.regs.sp);
        self.regs.sp = self.regs.sp.wrapping_add(1);
        u16::from_le_bytes([lo, hi])
    }

    #[inline]
    pub(super) fn condition(&self, cond: Option<Cond>) -> bool {
        let f = self.regs.f;
        match cond {
            None => true,
            Some(Cond::NZ) => !f.zero(),
            Some(Cond::Z) => f.zero(),
            Some(Cond::NC) => !f.carry(),
            Some(Cond::C) => f.carry(),
        }
    }

    #[inline]
    pub(super) fn set_flags(&mut self, flags: Flags) {
        self.regs.f = flags;
    }
}

/// Little-endian 16-bit immediate from the operand bytes.
#[inline]
pub(super) fn imm16(operands: [u8; 2]) -> u16 {
    u16::from_le_bytes(operands)
}

/// Sign-extend a relative displacement byte.
#[inline]
pub(super) fn displacement(raw: u8) -> i16 {
    if raw > 127 {
        raw as i16 - 256
    } else {
        raw as i16
    }
}
