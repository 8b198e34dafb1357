mod alu;
mod cb;
mod control;
mod incdec;
mod ld;
mod stack;

use super::{Bus, Cpu, DispatchMode, Effect};
use alu::RotateA;

impl Cpu {
    /// Apply an instruction's effect. PC already points past the operand
    /// bytes and `regs.m` holds the catalog cost; conditional effects add
    /// their taken surcharge to it.
    pub(super) fn execute<B: Bus>(&mut self, bus: &mut B, effect: Effect, operands: [u8; 2]) {
        match effect {
            Effect::Nop => {}
            Effect::Stop => {
                log::debug!("STOP at 0x{:04X} treated as NOP", self.regs.pc.wrapping_sub(2));
            }
            Effect::Halt => self.halted = true,
            // Interrupt dispatch is not modelled; IME is only recorded.
            Effect::Di => self.ime = false,
            Effect::Ei => self.ime = true,
            Effect::Prefix => self.mode = DispatchMode::Prefixed,

            Effect::LdR8R8(dst, src) => self.exec_ld_r8_r8(bus, dst, src),
            Effect::LdR8D8(dst) => self.write_reg8(bus, dst, operands[0]),
            Effect::LdR16D16(dst) => self.exec_ld_r16_d16(dst, operands),
            Effect::LdIndA(dst) => self.exec_ld_indirect_a(bus, dst),
            Effect::LdAInd(src) => self.exec_ld_a_indirect(bus, src),
            Effect::LdA16Sp => self.exec_ld_a16_sp(bus, operands),
            Effect::LdhA8A => bus.write8(0xFF00 | operands[0] as u16, self.regs.a),
            Effect::LdhAA8 => self.regs.a = bus.read8(0xFF00 | operands[0] as u16),
            Effect::LdhCA => bus.write8(0xFF00 | self.regs.c as u16, self.regs.a),
            Effect::LdhAC => self.regs.a = bus.read8(0xFF00 | self.regs.c as u16),
            Effect::LdA16A => self.exec_ld_a16_a(bus, operands),
            Effect::LdAA16 => self.exec_ld_a_a16(bus, operands),
            Effect::LdHlSpR8 => self.exec_ld_hl_sp_r8(operands[0]),
            Effect::LdSpHl => self.regs.sp = self.regs.hl(),

            Effect::Inc8(reg) => self.exec_inc8(bus, reg),
            Effect::Dec8(reg) => self.exec_dec8(bus, reg),
            Effect::Inc16(reg) => self.exec_inc16(reg),
            Effect::Dec16(reg) => self.exec_dec16(reg),
            Effect::AddHl(reg) => self.exec_add_hl(reg),
            Effect::AddSpR8 => self.exec_add_sp_r8(operands[0]),
            Effect::Alu(op, src) => {
                let value = self.read_reg8(bus, src);
                self.exec_alu(op, value);
            }
            Effect::AluD8(op) => self.exec_alu(op, operands[0]),
            Effect::Rlca => self.exec_rotate_a(RotateA::LeftCircular),
            Effect::Rrca => self.exec_rotate_a(RotateA::RightCircular),
            Effect::Rla => self.exec_rotate_a(RotateA::LeftThroughCarry),
            Effect::Rra => self.exec_rotate_a(RotateA::RightThroughCarry),
            Effect::Daa => self.exec_daa(),
            Effect::Cpl => self.exec_cpl(),
            Effect::Scf => self.exec_scf(),
            Effect::Ccf => self.exec_ccf(),

            Effect::Jr(cond) => self.exec_jr(cond, operands[0]),
            Effect::Jp(cond) => self.exec_jp(cond, operands),
            Effect::JpHl => self.regs.pc = self.regs.hl(),
            Effect::Call(cond) => self.exec_call(bus, cond, operands),
            Effect::Ret(cond) => self.exec_ret(bus, cond),
            Effect::Reti => {
                self.regs.pc = self.pop_u16(bus);
                self.ime = true;
            }
            Effect::Rst(vector) => self.exec_rst(bus, vector),
            Effect::Push(reg) => self.exec_push(bus, reg),
            Effect::Pop(reg) => self.exec_pop(bus, reg),

            Effect::Shift(op, reg) => self.exec_shift(bus, op, reg),
            Effect::Bit(bit, reg) => self.exec_bit(bus, bit, reg),
            Effect::Res(bit, reg) => {
                let value = self.read_reg8(bus, reg) & !(1 << bit);
                self.write_reg8(bus, reg, value);
            }
            Effect::Set(bit, reg) => {
                let value = self.read_reg8(bus, reg) | (1 << bit);
                self.write_reg8(bus, reg, value);
            }
        }
    }
}
