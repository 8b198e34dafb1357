use crate::cpu::helpers::{displacement, imm16};
use crate::cpu::{Bus, Cond, Cpu};

impl Cpu {
    /// `JR [cc],r8`. The displacement is relative to the address after the
    /// operand byte, which is where PC already points.
    pub(super) fn exec_jr(&mut self, cond: Option<Cond>, raw: u8) {
        if self.condition(cond) {
            let offset = displacement(raw);
            self.regs.pc = self.regs.pc.wrapping_add_signed(offset);
            if cond.is_some() {
                self.regs.m += 1;
            }
        }
    }

    pub(super) fn exec_jp(&mut self, cond: Option<Cond>, operands: [u8; 2]) {
        if self.condition(cond) {
            self.regs.pc = imm16(operands);
            if cond.is_some() {
                self.regs.m += 1;
            }
        }
    }

    pub(super) fn exec_call<B: Bus>(&mut self, bus: &mut B, cond: Option<Cond>, operands: [u8; 2]) {
        if self.condition(cond) {
            let ret = self.regs.pc;
            self.push_u16(bus, ret);
            self.regs.pc = imm16(operands);
            if cond.is_some() {
                self.regs.m += 3;
            }
        }
    }

    pub(super) fn exec_ret<B: Bus>(&mut self, bus: &mut B, cond: Option<Cond>) {
        if self.condition(cond) {
            self.regs.pc = self.pop_u16(bus);
            if cond.is_some() {
                self.regs.m += 3;
            }
        }
    }
}
