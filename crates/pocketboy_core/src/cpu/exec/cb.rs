use crate::cpu::{Bus, Cpu, Flags, Reg8, ShiftOp};

impl Cpu {
    /// Prefixed rotates, shifts and SWAP. Z reflects the result, N and H are
    /// cleared, C receives the bit shifted out (SWAP clears it).
    pub(super) fn exec_shift<B: Bus>(&mut self, bus: &mut B, op: ShiftOp, reg: Reg8) {
        let value = self.read_reg8(bus, reg);
        let carry_in = self.regs.f.carry() as u8;

        let (result, carry_out) = match op {
            ShiftOp::Rlc => (value.rotate_left(1), value & 0x80 != 0),
            ShiftOp::Rrc => (value.rotate_right(1), value & 0x01 != 0),
            ShiftOp::Rl => ((value << 1) | carry_in, value & 0x80 != 0),
            ShiftOp::Rr => ((value >> 1) | (carry_in << 7), value & 0x01 != 0),
            ShiftOp::Sla => (value << 1, value & 0x80 != 0),
            ShiftOp::Sra => ((value >> 1) | (value & 0x80), value & 0x01 != 0),
            ShiftOp::Swap => (value.rotate_left(4), false),
            ShiftOp::Srl => (value >> 1, value & 0x01 != 0),
        };

        self.write_reg8(bus, reg, result);
        let mut flags = Flags::zero_only(result);
        flags.set(Flags::CARRY, carry_out);
        self.set_flags(flags);
    }

    /// `BIT b,r`: Z set when the bit is clear, H set, N cleared, C kept.
    pub(super) fn exec_bit<B: Bus>(&mut self, bus: &mut B, bit: u8, reg: Reg8) {
        let value = self.read_reg8(bus, reg);
        let mut flags = (self.regs.f & Flags::CARRY) | Flags::HALF_CARRY;
        flags.set(Flags::ZERO, value & (1 << bit) == 0);
        self.set_flags(flags);
    }
}
