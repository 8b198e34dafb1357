use super::{Lcdc, Ppu};

pub(crate) const LCDC: u16 = 0xFF40;
pub(crate) const STAT: u16 = 0xFF41;
pub(crate) const SCY: u16 = 0xFF42;
pub(crate) const SCX: u16 = 0xFF43;
pub(crate) const LY: u16 = 0xFF44;
pub(crate) const LYC: u16 = 0xFF45;
pub(crate) const DMA: u16 = 0xFF46;
pub(crate) const BGP: u16 = 0xFF47;
pub(crate) const OBP0: u16 = 0xFF48;
pub(crate) const OBP1: u16 = 0xFF49;

/// Intensity for each 2-bit shade: white, light grey, dark grey, black.
const SHADES: [u8; 4] = [255, 192, 96, 0];

/// Expand a palette register into the intensities for colour indices 0-3.
pub(super) fn decode_palette(value: u8) -> [u8; 4] {
    std::array::from_fn(|i| SHADES[((value >> (i * 2)) & 0x03) as usize])
}

impl Ppu {
    /// Read from the LCD register window 0xFF40-0xFF7F.
    pub(crate) fn read_register(&self, addr: u16) -> u8 {
        match addr {
            LCDC => self.lcdc.bits(),
            STAT => {
                let coincidence = if self.line == self.lyc { 0x04 } else { 0x00 };
                self.mode as u8 | coincidence
            }
            SCY => self.scy,
            SCX => self.scx,
            LY => self.line,
            LYC => self.lyc,
            _ => self.regs[(addr.wrapping_sub(LCDC) & 0x3F) as usize],
        }
    }

    /// Write to the LCD register window. The DMA trigger is only recorded
    /// here; the copy itself needs the whole address space and is performed
    /// by the bus.
    pub(crate) fn write_register(&mut self, addr: u16, value: u8) {
        self.regs[(addr.wrapping_sub(LCDC) & 0x3F) as usize] = value;

        match addr {
            LCDC => {
                let lcdc = Lcdc::from_bits_truncate(value);
                if lcdc != self.lcdc {
                    log::debug!("LCDC 0x{:02X} -> 0x{:02X}", self.lcdc.bits(), lcdc.bits());
                }
                self.lcdc = lcdc;
            }
            SCY => self.scy = value,
            SCX => self.scx = value,
            LYC => self.lyc = value,
            BGP => self.bg_palette = decode_palette(value),
            OBP0 => self.obj_palettes[0] = decode_palette(value),
            OBP1 => self.obj_palettes[1] = decode_palette(value),
            _ => {}
        }
    }

    #[cfg(test)]
    pub(crate) fn bg_palette(&self) -> [u8; 4] {
        self.bg_palette
    }

    #[cfg(test)]
    pub(crate) fn obj_palette(&self, index: usize) -> [u8; 4] {
        self.obj_palettes[index & 1]
    }
}
