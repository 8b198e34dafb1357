use crate::cpu::{AluOp, Cpu, Flags, Reg16};

/// Direction and carry handling of the four accumulator rotates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum RotateA {
    LeftCircular,
    RightCircular,
    LeftThroughCarry,
    RightThroughCarry,
}

impl Cpu {
    pub(super) fn exec_alu(&mut self, op: AluOp, value: u8) {
        match op {
            AluOp::Add => self.alu_add(value, false),
            AluOp::Adc => self.alu_add(value, true),
            AluOp::Sub => self.regs.a = self.alu_sub(value, false),
            AluOp::Sbc => self.regs.a = self.alu_sub(value, true),
            AluOp::And => {
                self.regs.a &= value;
                self.set_flags(Flags::zero_only(self.regs.a) | Flags::HALF_CARRY);
            }
            AluOp::Xor => {
                self.regs.a ^= value;
                self.set_flags(Flags::zero_only(self.regs.a));
            }
            AluOp::Or => {
                self.regs.a |= value;
                self.set_flags(Flags::zero_only(self.regs.a));
            }
            // Compare is a subtraction whose result is discarded.
            AluOp::Cp => {
                self.alu_sub(value, false);
            }
        }
    }

    /// 9-bit addition into A. Half-carry is `(A ^ operand ^ old A) & 0x10`
    /// with A already holding the result.
    fn alu_add(&mut self, value: u8, use_carry: bool) {
        let a = self.regs.a;
        let carry_in = (use_carry && self.regs.f.carry()) as u16;
        let sum = a as u16 + value as u16 + carry_in;
        let result = sum as u8;
        self.regs.a = result;

        let mut flags = Flags::zero_only(result);
        flags.set(Flags::CARRY, sum > 0xFF);
        flags.set(Flags::HALF_CARRY, (result ^ value ^ a) & 0x10 != 0);
        self.set_flags(flags);
    }

    /// Subtraction from A with flags; returns the result without storing it.
    fn alu_sub(&mut self, value: u8, use_carry: bool) -> u8 {
        let a = self.regs.a;
        let carry_in = (use_carry && self.regs.f.carry()) as i16;
        let diff = a as i16 - value as i16 - carry_in;
        let result = diff as u8;

        let mut flags = Flags::zero_only(result) | Flags::SUBTRACT;
        flags.set(Flags::CARRY, diff < 0);
        flags.set(Flags::HALF_CARRY, (a ^ value ^ result) & 0x10 != 0);
        self.set_flags(flags);
        result
    }

    /// `ADD HL,rr`: Z is preserved, N cleared, H from bit 11, C from bit 15.
    pub(super) fn exec_add_hl(&mut self, reg: Reg16) {
        let hl = self.regs.hl();
        let value = self.read_reg16(reg);
        let (result, carry) = hl.overflowing_add(value);
        self.regs.set_hl(result);

        let mut flags = self.regs.f & Flags::ZERO;
        flags.set(Flags::HALF_CARRY, (hl & 0x0FFF) + (value & 0x0FFF) > 0x0FFF);
        flags.set(Flags::CARRY, carry);
        self.set_flags(flags);
    }

    pub(super) fn exec_add_sp_r8(&mut self, imm: u8) {
        self.regs.sp = self.alu_add16_signed(self.regs.sp, imm);
    }

    /// SP plus a signed byte, as used by `ADD SP,r8` and `LD HL,SP+r8`.
    /// H and C come from the unsigned low-byte addition; Z and N are cleared.
    pub(crate) fn alu_add16_signed(&mut self, base: u16, imm: u8) -> u16 {
        let result = base.wrapping_add_signed(imm as i8 as i16);

        let mut flags = Flags::empty();
        flags.set(Flags::HALF_CARRY, (base & 0x0F) + (imm as u16 & 0x0F) > 0x0F);
        flags.set(Flags::CARRY, (base & 0xFF) + imm as u16 > 0xFF);
        self.set_flags(flags);
        result
    }

    /// RLCA/RRCA/RLA/RRA: like the prefixed rotates but Z is always cleared.
    pub(super) fn exec_rotate_a(&mut self, rotate: RotateA) {
        let a = self.regs.a;
        let carry_in = self.regs.f.carry();
        let (result, carry_out) = match rotate {
            RotateA::LeftCircular => (a.rotate_left(1), a & 0x80 != 0),
            RotateA::RightCircular => (a.rotate_right(1), a & 0x01 != 0),
            RotateA::LeftThroughCarry => ((a << 1) | carry_in as u8, a & 0x80 != 0),
            RotateA::RightThroughCarry => ((a >> 1) | ((carry_in as u8) << 7), a & 0x01 != 0),
        };
        self.regs.a = result;
        self.set_flags(if carry_out {
            Flags::CARRY
        } else {
            Flags::empty()
        });
    }

    pub(super) fn exec_daa(&mut self) {
        let f = self.regs.f;
        let mut a = self.regs.a;
        let mut carry = f.carry();

        if !f.subtract() {
            if carry || a > 0x99 {
                a = a.wrapping_add(0x60);
                carry = true;
            }
            if f.half_carry() || (a & 0x0F) > 0x09 {
                a = a.wrapping_add(0x06);
            }
        } else {
            if carry {
                a = a.wrapping_sub(0x60);
            }
            if f.half_carry() {
                a = a.wrapping_sub(0x06);
            }
        }

        self.regs.a = a;
        let mut flags = Flags::zero_only(a) | (f & Flags::SUBTRACT);
        flags.set(Flags::CARRY, carry);
        self.set_flags(flags);
    }

    pub(super) fn exec_cpl(&mut self) {
        self.regs.a = !self.regs.a;
        self.regs.f |= Flags::SUBTRACT | Flags::HALF_CARRY;
    }

    pub(super) fn exec_scf(&mut self) {
        self.regs.f = (self.regs.f & Flags::ZERO) | Flags::CARRY;
    }

    pub(super) fn exec_ccf(&mut self) {
        let carry = self.regs.f.carry();
        let mut flags = self.regs.f & Flags::ZERO;
        flags.set(Flags::CARRY, !carry);
        self.set_flags(flags);
    }
}
