use crate::cpu::{Bus, Cpu, StackReg};

impl Cpu {
    pub(super) fn exec_push<B: Bus>(&mut self, bus: &mut B, reg: StackReg) {
        let value = match reg {
            StackReg::BC => self.regs.bc(),
            StackReg::DE => self.regs.de(),
            StackReg::HL => self.regs.hl(),
            StackReg::AF => self.regs.af(),
        };
        self.push_u16(bus, value);
    }

    pub(super) fn exec_pop<B: Bus>(&mut self, bus: &mut B, reg: StackReg) {
        let value = self.pop_u16(bus);
        match reg {
            StackReg::BC => self.regs.set_bc(value),
            StackReg::DE => self.regs.set_de(value),
            StackReg::HL => self.regs.set_hl(value),
            StackReg::AF => self.regs.set_af(value),
        }
    }

    pub(super) fn exec_rst<B: Bus>(&mut self, bus: &mut B, vector: u8) {
        let ret = self.regs.pc;
        self.push_u16(bus, ret);
        self.regs.pc = vector as u16;
    }
}
