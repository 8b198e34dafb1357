use super::GameBoyBus;
use crate::machine::video::OAM_SIZE;

impl GameBoyBus {
    /// OAM DMA: copy 160 bytes from `value << 8` into OAM through the normal
    /// read and OAM write paths, so every sprite record is refreshed.
    /// The transfer completes immediately.
    pub(super) fn do_oam_dma(&mut self, value: u8) {
        let base = (value as u16) << 8;
        log::debug!("OAM DMA from 0x{base:04X}");
        for i in 0..OAM_SIZE as u16 {
            let byte = self.read8_mmio(base.wrapping_add(i));
            self.ppu.write_oam(i, byte);
        }
    }
}
