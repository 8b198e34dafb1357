use super::cartridge::Cartridge;
use super::video::Ppu;
use crate::BOOT_IMAGE_SIZE;

mod dma;
mod mmio;
mod traits;

const WRAM_SIZE: usize = 0x2000;
const HRAM_SIZE: usize = 0x7F;

/// Interrupt flag bit raised on VBlank entry.
pub(crate) const INT_VBLANK: u8 = 0x01;

/// The DMG address space: every CPU byte access is decoded here and routed
/// to the boot overlay, the cartridge, internal RAM, the video controller or
/// the interrupt latches.
pub(crate) struct GameBoyBus {
    boot_image: [u8; BOOT_IMAGE_SIZE],
    /// Overlay visibility. Cleared for good the first time PC reaches 0x0100.
    boot_active: bool,
    cartridge: Cartridge,
    wram: [u8; WRAM_SIZE],
    hram: [u8; HRAM_SIZE],
    pub(crate) ppu: Ppu,
    pub(crate) if_reg: u8,
    pub(crate) ie_reg: u8,
    /// Latched when the video controller enters VBlank; drained by
    /// `GameBoy::step_frame`.
    frame_ready: bool,
}

impl GameBoyBus {
    pub(super) fn new(cartridge: Cartridge, boot_image: Option<[u8; BOOT_IMAGE_SIZE]>) -> Self {
        let boot_active = boot_image.is_some();
        Self {
            boot_image: boot_image.unwrap_or([0; BOOT_IMAGE_SIZE]),
            boot_active,
            cartridge,
            wram: [0; WRAM_SIZE],
            hram: [0; HRAM_SIZE],
            ppu: Ppu::new(),
            if_reg: 0,
            ie_reg: 0,
            frame_ready: false,
        }
    }

    #[inline]
    pub(crate) fn boot_active(&self) -> bool {
        self.boot_active
    }

    pub(crate) fn cartridge(&self) -> &Cartridge {
        &self.cartridge
    }

    /// Report and clear the VBlank latch.
    #[inline]
    pub(super) fn take_frame_ready(&mut self) -> bool {
        std::mem::take(&mut self.frame_ready)
    }
}
