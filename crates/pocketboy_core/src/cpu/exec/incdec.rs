use crate::cpu::{Bus, Cpu, Flags, Reg16, Reg8};

impl Cpu {
    /// `INC r`: wraps mod 256 and replaces F entirely, leaving only the zero
    /// bit (0x80 or 0x00). Carry is not preserved.
    pub(super) fn exec_inc8<B: Bus>(&mut self, bus: &mut B, reg: Reg8) {
        let result = self.read_reg8(bus, reg).wrapping_add(1);
        self.write_reg8(bus, reg, result);
        self.set_flags(Flags::zero_only(result));
    }

    /// `DEC r`: same flag rule as `INC r`.
    pub(super) fn exec_dec8<B: Bus>(&mut self, bus: &mut B, reg: Reg8) {
        let result = self.read_reg8(bus, reg).wrapping_sub(1);
        self.write_reg8(bus, reg, result);
        self.set_flags(Flags::zero_only(result));
    }

    /// `INC rr`: the low byte wraps and carries into the high byte. No flags.
    pub(super) fn exec_inc16(&mut self, reg: Reg16) {
        let value = self.read_reg16(reg).wrapping_add(1);
        self.write_reg16(reg, value);
    }

    pub(super) fn exec_dec16(&mut self, reg: Reg16) {
        let value = self.read_reg16(reg).wrapping_sub(1);
        self.write_reg16(reg, value);
    }
}
