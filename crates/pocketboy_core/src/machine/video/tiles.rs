use super::{Ppu, Sprite, SpriteFlags, OAM_SIZE, SPRITE_COUNT, TILE_COUNT, VRAM_SIZE};

impl Ppu {
    #[inline]
    pub(crate) fn read_vram(&self, offset: u16) -> u8 {
        self.vram[offset as usize % VRAM_SIZE]
    }

    /// Store a VRAM byte and re-decode the tile row it belongs to.
    pub(crate) fn write_vram(&mut self, offset: u16, value: u8) {
        let offset = offset as usize % VRAM_SIZE;
        self.vram[offset] = value;
        self.update_tile_row(offset);
    }

    /// A tile row is encoded by the byte pair at an even offset: the first
    /// byte holds bit 0 of each pixel, the second bit 1, leftmost pixel in
    /// bit 7.
    fn update_tile_row(&mut self, offset: usize) {
        let base = offset & !1;
        let tile = (base >> 4) % TILE_COUNT;
        let row = (base >> 1) & 7;
        let (lo, hi) = (self.vram[base], self.vram[base + 1]);

        for (x, pixel) in self.tiles[tile][row].iter_mut().enumerate() {
            let mask = 0x80 >> x;
            *pixel = u8::from(lo & mask != 0) | (u8::from(hi & mask != 0) << 1);
        }
    }

    #[inline]
    pub(crate) fn tile_row(&self, tile: usize, row: usize) -> [u8; 8] {
        self.tiles[tile % TILE_COUNT][row & 7]
    }

    /// OAM offsets at or past 0xA0 read as 0.
    #[inline]
    pub(crate) fn read_oam(&self, offset: u16) -> u8 {
        self.oam.get(offset as usize).copied().unwrap_or(0)
    }

    /// Store an OAM byte and refresh the sprite record it belongs to.
    /// Offsets at or past 0xA0 are ignored.
    pub(crate) fn write_oam(&mut self, offset: u16, value: u8) {
        let offset = offset as usize;
        if offset >= OAM_SIZE {
            return;
        }
        self.oam[offset] = value;

        let index = offset >> 2;
        if index >= SPRITE_COUNT {
            return;
        }
        let sprite: &mut Sprite = &mut self.sprites[index];
        match offset & 3 {
            0 => sprite.y = value as i16 - 16,
            1 => sprite.x = value as i16 - 8,
            2 => sprite.tile = value,
            _ => sprite.flags = SpriteFlags::from_bits_truncate(value),
        }
    }
}
