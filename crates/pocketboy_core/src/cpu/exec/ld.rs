use crate::cpu::helpers::imm16;
use crate::cpu::{Bus, Cpu, Indirect, Reg16, Reg8};

impl Cpu {
    pub(super) fn exec_ld_r8_r8<B: Bus>(&mut self, bus: &mut B, dst: Reg8, src: Reg8) {
        let value = self.read_reg8(bus, src);
        self.write_reg8(bus, dst, value);
    }

    pub(super) fn exec_ld_r16_d16(&mut self, dst: Reg16, operands: [u8; 2]) {
        self.write_reg16(dst, imm16(operands));
    }

    /// Resolve a `(BC)/(DE)/(HL+)/(HL-)` operand, applying the HL
    /// post-increment or post-decrement.
    fn indirect_address(&mut self, operand: Indirect) -> u16 {
        match operand {
            Indirect::BC => self.regs.bc(),
            Indirect::DE => self.regs.de(),
            Indirect::HlInc => {
                let hl = self.regs.hl();
                self.regs.set_hl(hl.wrapping_add(1));
                hl
            }
            Indirect::HlDec => {
                let hl = self.regs.hl();
                self.regs.set_hl(hl.wrapping_sub(1));
                hl
            }
        }
    }

    pub(super) fn exec_ld_indirect_a<B: Bus>(&mut self, bus: &mut B, dst: Indirect) {
        let addr = self.indirect_address(dst);
        bus.write8(addr, self.regs.a);
    }

    pub(super) fn exec_ld_a_indirect<B: Bus>(&mut self, bus: &mut B, src: Indirect) {
        let addr = self.indirect_address(src);
        self.regs.a = bus.read8(addr);
    }

    pub(super) fn exec_ld_a16_sp<B: Bus>(&mut self, bus: &mut B, operands: [u8; 2]) {
        let addr = imm16(operands);
        let [lo, hi] = self.regs.sp.to_le_bytes();
        bus.write8(addr, lo);
        bus.write8(addr.wrapping_add(1), hi);
    }

    pub(super) fn exec_ld_a16_a<B: Bus>(&mut self, bus: &mut B, operands: [u8; 2]) {
        bus.write8(imm16(operands), self.regs.a);
    }

    pub(super) fn exec_ld_a_a16<B: Bus>(&mut self, bus: &mut B, operands: [u8; 2]) {
        self.regs.a = bus.read8(imm16(operands));
    }

    pub(super) fn exec_ld_hl_sp_r8(&mut self, imm: u8) {
        let result = self.alu_add16_signed(self.regs.sp, imm);
        self.regs.set_hl(result);
    }
}
