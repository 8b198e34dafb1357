use crate::cpu::Bus;

use super::{GameBoyBus, INT_VBLANK};

impl Bus for GameBoyBus {
    #[inline]
    fn read8(&mut self, addr: u16) -> u8 {
        self.read8_mmio(addr)
    }

    #[inline]
    fn write8(&mut self, addr: u16, value: u8) {
        self.write8_mmio(addr, value)
    }

    fn tick(&mut self, m_cycles: u8) {
        if self.ppu.step(m_cycles) {
            self.if_reg |= INT_VBLANK;
            self.frame_ready = true;
        }
    }

    fn observe_pc(&mut self, pc: u16) {
        if self.boot_active && pc == 0x0100 {
            self.boot_active = false;
            log::info!("Boot image finished; cartridge mapped at 0x0000");
        }
    }

    fn interrupt_pending(&mut self) -> bool {
        self.ie_reg & self.if_reg & 0x1F != 0
    }
}
