use super::GameBoyBus;
use crate::machine::video::registers::DMA;

/// Address decode for the whole 64 KiB map. Every CPU access and the DMA
/// source reads go through here.
impl GameBoyBus {
    pub(super) fn read8_mmio(&mut self, addr: u16) -> u8 {
        match addr {
            // Boot overlay shadows the cartridge header area until it retires.
            0x0000..=0x00FF if self.boot_active => self.boot_image[addr as usize],

            // Cartridge ROM: bank 0 and the switchable bank.
            0x0000..=0x7FFF => self.cartridge.rom_read(addr),

            0x8000..=0x9FFF => self.ppu.read_vram(addr - 0x8000),

            // External cartridge RAM, gated by the bank controller.
            0xA000..=0xBFFF => self.cartridge.ram_read(addr),

            0xC000..=0xDFFF => self.wram[(addr - 0xC000) as usize],

            // Echo RAM: 0xE000..0xFDFF mirrors 0xC000..0xDDFF.
            0xE000..=0xFDFF => self.wram[(addr - 0xE000) as usize],

            0xFE00..=0xFEFF => self.ppu.read_oam(addr - 0xFE00),

            0xFF0F => self.if_reg,

            // Joypad, serial, timer and sound are not modelled.
            0xFF00..=0xFF3F => 0,

            0xFF40..=0xFF7F => self.ppu.read_register(addr),

            0xFF80..=0xFFFE => self.hram[(addr - 0xFF80) as usize],

            0xFFFF => self.ie_reg,
        }
    }

    pub(super) fn write8_mmio(&mut self, addr: u16, value: u8) {
        match addr {
            // ROM is read-only; writes program the bank controller.
            0x0000..=0x7FFF => self.cartridge.rom_write(addr, value),

            // VRAM writes refresh the tile cache synchronously.
            0x8000..=0x9FFF => self.ppu.write_vram(addr - 0x8000, value),

            0xA000..=0xBFFF => self.cartridge.ram_write(addr, value),

            0xC000..=0xDFFF => self.wram[(addr - 0xC000) as usize] = value,

            0xE000..=0xFDFF => self.wram[(addr - 0xE000) as usize] = value,

            // OAM writes refresh one sprite record; offsets past 0x9F are dropped.
            0xFE00..=0xFEFF => self.ppu.write_oam(addr - 0xFE00, value),

            0xFF0F => self.if_reg = value,

            // Unmodelled peripherals swallow writes.
            0xFF00..=0xFF3F => {}

            0xFF40..=0xFF7F => {
                self.ppu.write_register(addr, value);
                if addr == DMA {
                    self.do_oam_dma(value);
                }
            }

            0xFF80..=0xFFFE => self.hram[(addr - 0xFF80) as usize] = value,

            0xFFFF => self.ie_reg = value,
        }
    }
}
