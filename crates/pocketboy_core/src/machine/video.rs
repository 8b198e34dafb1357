//! Video controller.
//!
//! Owns VRAM, OAM and the caches derived from them, the LCD register file
//! and the scanline mode state machine. Lines are composited into an RGB24
//! framebuffer at the end of each line's VRAM-read phase.

pub(crate) mod registers;
mod render;
mod tiles;
mod timing;

use bitflags::bitflags;
use pocketboy_common::Color;

use crate::{SCREEN_HEIGHT, SCREEN_WIDTH};

#[cfg(test)]
pub(crate) use timing::FRAME_CYCLES;

pub(crate) const VRAM_SIZE: usize = 0x2000;
pub(crate) const OAM_SIZE: usize = 0xA0;
pub(crate) const SPRITE_COUNT: usize = 40;
pub(crate) const MAX_SPRITES_PER_LINE: usize = 10;

const TILE_COUNT: usize = 512;
const REGISTER_FILE_SIZE: usize = 0x40;
const BYTES_PER_PIXEL: usize = 3;
/// Framebuffer bytes per scanline.
pub(crate) const LINE_STRIDE: usize = SCREEN_WIDTH * BYTES_PER_PIXEL;

/// Decoded tile: 8 rows of 8 two-bit colour indices.
type Tile = [[u8; 8]; 8];

/// Scanline mode. Discriminants are the values reported in STAT bits 0-1.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    HBlank = 0,
    VBlank = 1,
    #[default]
    OamRead = 2,
    VramRead = 3,
}

bitflags! {
    /// LCDC bits consumed by the renderer.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct Lcdc: u8 {
        const DISPLAY_ON = 0x80;
        /// Unsigned tile data at 0x8000; clear selects signed at 0x8800.
        const TILE_DATA_UNSIGNED = 0x10;
        const BG_MAP_HIGH = 0x08;
        const TALL_SPRITES = 0x04;
        const SPRITES_ON = 0x02;
        const BG_ON = 0x01;
    }
}

bitflags! {
    /// OAM attribute byte (entry byte 3).
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct SpriteFlags: u8 {
        const BEHIND_BG = 0x80;
        const Y_FLIP = 0x40;
        const X_FLIP = 0x20;
        const PALETTE1 = 0x10;
    }
}

/// Sprite-attribute record decoded from one 4-byte OAM entry.
///
/// Positions are screen coordinates: OAM Y minus 16 and OAM X minus 8, so a
/// zeroed entry sits fully off-screen at (-8, -16).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sprite {
    pub y: i16,
    pub x: i16,
    pub tile: u8,
    pub flags: SpriteFlags,
}

impl Default for Sprite {
    fn default() -> Self {
        Self {
            y: -16,
            x: -8,
            tile: 0,
            flags: SpriteFlags::empty(),
        }
    }
}

impl Sprite {
    /// Drawn over non-zero background pixels.
    #[inline]
    pub fn has_priority(&self) -> bool {
        !self.flags.contains(SpriteFlags::BEHIND_BG)
    }
}

pub(crate) struct Ppu {
    vram: Box<[u8; VRAM_SIZE]>,
    oam: [u8; OAM_SIZE],
    /// Raw bytes last written to 0xFF40-0xFF7F.
    regs: [u8; REGISTER_FILE_SIZE],
    tiles: Box<[Tile; TILE_COUNT]>,
    sprites: [Sprite; SPRITE_COUNT],

    lcdc: Lcdc,
    scy: u8,
    scx: u8,
    lyc: u8,
    bg_palette: [u8; 4],
    obj_palettes: [[u8; 4]; 2],

    mode: Mode,
    mode_clock: u16,
    line: u8,
    scan_offset: usize,
    /// Background colour indices of the line being composited.
    scanrow: [u8; SCREEN_WIDTH],
    framebuffer: Vec<u8>,
}

impl Default for Ppu {
    fn default() -> Self {
        Self::new()
    }
}

impl Ppu {
    pub(crate) fn new() -> Self {
        Self {
            vram: Box::new([0; VRAM_SIZE]),
            oam: [0; OAM_SIZE],
            regs: [0; REGISTER_FILE_SIZE],
            tiles: Box::new([[[0; 8]; 8]; TILE_COUNT]),
            sprites: [Sprite::default(); SPRITE_COUNT],
            lcdc: Lcdc::empty(),
            scy: 0,
            scx: 0,
            lyc: 0,
            bg_palette: registers::decode_palette(0x00),
            obj_palettes: [registers::decode_palette(0x00); 2],
            mode: Mode::OamRead,
            mode_clock: 0,
            line: 0,
            scan_offset: 0,
            scanrow: [0; SCREEN_WIDTH],
            framebuffer: vec![0xFF; LINE_STRIDE * SCREEN_HEIGHT],
        }
    }

    #[inline]
    pub(crate) fn mode(&self) -> Mode {
        self.mode
    }

    #[inline]
    pub(crate) fn line(&self) -> u8 {
        self.line
    }

    /// RGB24, `SCREEN_WIDTH * SCREEN_HEIGHT * 3` bytes.
    #[inline]
    pub(crate) fn framebuffer(&self) -> &[u8] {
        &self.framebuffer
    }

    #[inline]
    pub(crate) fn sprite(&self, index: usize) -> Option<&Sprite> {
        self.sprites.get(index)
    }

    #[inline]
    fn put_pixel(&mut self, column: usize, shade: u8) {
        let (r, g, b) = Color::gray(shade).rgb();
        let base = self.scan_offset + column * BYTES_PER_PIXEL;
        if let Some(px) = self.framebuffer.get_mut(base..base + BYTES_PER_PIXEL) {
            px.copy_from_slice(&[r, g, b]);
        }
    }
}
