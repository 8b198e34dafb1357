mod catalog;
mod exec;
mod helpers;
mod regs;

pub use catalog::{
    lookup, AluOp, Cond, DispatchMode, Effect, Indirect, Opcode, Reg16, Reg8, ShiftOp, Slot,
    StackReg, MAIN_TABLE, PREFIXED_TABLE,
};
pub use regs::{Flags, Registers};

use crate::{CoreError, Result};

/// Abstraction over the DMG address space as seen by the CPU.
///
/// The CPU only ever reads and writes bytes; everything a byte access
/// triggers (bank switching, tile cache refresh, DMA) happens behind this
/// trait.
pub trait Bus {
    fn read8(&mut self, addr: u16) -> u8;
    fn write8(&mut self, addr: u16, value: u8);

    /// Advance bus-side peripherals by the M-cycles the last instruction
    /// consumed. Called exactly once per executed step.
    fn tick(&mut self, _m_cycles: u8) {}

    /// Called with the program counter before every fetch. The DMG bus uses
    /// it to retire the boot overlay once PC reaches 0x0100.
    fn observe_pc(&mut self, _pc: u16) {}

    /// Whether any enabled interrupt is requested (`IE & IF & 0x1F != 0`).
    /// Only used to wake the CPU from HALT; no vectoring is performed.
    fn interrupt_pending(&mut self) -> bool {
        false
    }
}

/// The DMG CPU core: register set, interrupt master enable, the one-shot
/// prefix latch and the running M-cycle clock.
#[derive(Clone, Debug, Default)]
pub struct Cpu {
    pub regs: Registers,
    pub ime: bool,
    pub halted: bool,
    /// Total M-cycles consumed since power-on.
    pub clock: u64,
    mode: DispatchMode,
}

impl Cpu {
    /// A CPU positioned at 0x0000, ready to run a boot image.
    pub fn new() -> Self {
        Self::default()
    }

    /// A CPU in the state the boot image leaves behind at 0x0100.
    pub fn post_boot() -> Self {
        Self {
            regs: Registers::post_boot(),
            ..Self::default()
        }
    }

    /// Table the next fetch will be resolved against.
    pub fn dispatch_mode(&self) -> DispatchMode {
        self.mode
    }

    /// Fetch, decode and execute one instruction, then advance the bus by
    /// the cycles it consumed.
    ///
    /// Returns the M-cycles consumed. An opcode byte that is unmapped in the
    /// active table is fatal; PC is left pointing at it.
    pub fn step<B: Bus>(&mut self, bus: &mut B) -> Result<u8> {
        bus.observe_pc(self.regs.pc);

        if self.halted {
            if bus.interrupt_pending() {
                self.halted = false;
            } else {
                self.finish(bus, 1);
                return Ok(1);
            }
        }

        let pc = self.regs.pc;
        let byte = bus.read8(pc);
        let mode = std::mem::take(&mut self.mode);

        let Some(opcode) = catalog::lookup(mode, byte) else {
            let prefixed = mode == DispatchMode::Prefixed;
            log::error!(
                "unknown {}opcode 0x{byte:02X} at PC=0x{pc:04X} (SP=0x{sp:04X} AF=0x{af:04X} BC=0x{bc:04X} DE=0x{de:04X} HL=0x{hl:04X})",
                if prefixed { "prefixed " } else { "" },
                sp = self.regs.sp,
                af = self.regs.af(),
                bc = self.regs.bc(),
                de = self.regs.de(),
                hl = self.regs.hl(),
            );
            return Err(CoreError::UnknownOpcode {
                opcode: byte,
                pc,
                prefixed,
            });
        };

        self.regs.pc = pc.wrapping_add(1);
        let mut operands = [0u8; 2];
        for operand in operands.iter_mut().take(opcode.length as usize - 1) {
            *operand = bus.read8(self.regs.pc);
            self.regs.pc = self.regs.pc.wrapping_add(1);
        }

        log::trace!("0x{pc:04X}: {opcode} {operands:02X?}");

        self.regs.m = opcode.cycles;
        self.execute(bus, opcode.effect, operands);

        let cycles = self.regs.m;
        self.finish(bus, cycles);
        Ok(cycles)
    }

    fn finish<B: Bus>(&mut self, bus: &mut B, cycles: u8) {
        self.regs.m = cycles;
        self.clock = self.clock.wrapping_add(cycles as u64);
        bus.tick(cycles);
    }
}

#[cfg(test)]
mod tests;
