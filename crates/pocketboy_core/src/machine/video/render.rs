use super::{Lcdc, Ppu, SpriteFlags, MAX_SPRITES_PER_LINE, SPRITE_COUNT};
use crate::SCREEN_WIDTH;

const BG_MAP_LOW: usize = 0x1800;
const BG_MAP_HIGH: usize = 0x1C00;

impl Ppu {
    /// Composite the current line into the framebuffer. Does nothing while
    /// the display is off.
    pub(super) fn render_line(&mut self) {
        if !self.lcdc.contains(Lcdc::DISPLAY_ON) {
            return;
        }

        if self.lcdc.contains(Lcdc::BG_ON) {
            self.render_background();
        } else {
            self.scanrow = [0; SCREEN_WIDTH];
            for column in 0..SCREEN_WIDTH {
                self.put_pixel(column, self.bg_palette[0]);
            }
        }

        if self.lcdc.contains(Lcdc::SPRITES_ON) {
            self.render_sprites();
        }
    }

    /// Map a background tile number to a tile cache index. In signed mode
    /// numbers 0-127 address the block at 0x9000.
    #[inline]
    fn bg_tile_index(&self, raw: u8) -> usize {
        if !self.lcdc.contains(Lcdc::TILE_DATA_UNSIGNED) && raw < 128 {
            raw as usize + 256
        } else {
            raw as usize
        }
    }

    fn render_background(&mut self) {
        let map_base = if self.lcdc.contains(Lcdc::BG_MAP_HIGH) {
            BG_MAP_HIGH
        } else {
            BG_MAP_LOW
        };
        let y = self.line.wrapping_add(self.scy);
        let row_base = map_base + ((y as usize >> 3) << 5);
        let row = (y & 7) as usize;

        let mut x = (self.scx & 7) as usize;
        let mut map_column = ((self.scx >> 3) & 31) as usize;
        let mut tile_row = self.tile_row(self.bg_tile_index(self.vram[row_base + map_column]), row);

        for column in 0..SCREEN_WIDTH {
            let pixel = tile_row[x];
            self.scanrow[column] = pixel;
            self.put_pixel(column, self.bg_palette[pixel as usize]);

            x += 1;
            if x == 8 {
                x = 0;
                map_column = (map_column + 1) & 31;
                let raw = self.vram[row_base + map_column];
                tile_row = self.tile_row(self.bg_tile_index(raw), row);
            }
        }
    }

    /// Draw up to ten sprites covering the current line, in OAM order.
    fn render_sprites(&mut self) {
        let tall = self.lcdc.contains(Lcdc::TALL_SPRITES);
        let height: i16 = if tall { 16 } else { 8 };
        let line = self.line as i16;
        let mut drawn = 0;

        for index in 0..SPRITE_COUNT {
            let sprite = self.sprites[index];
            if sprite.y > line || sprite.y + height <= line {
                continue;
            }
            if drawn == MAX_SPRITES_PER_LINE {
                break;
            }
            drawn += 1;

            let mut row = (line - sprite.y) as usize;
            if sprite.flags.contains(SpriteFlags::Y_FLIP) {
                row = height as usize - 1 - row;
            }
            let tile = if tall {
                (sprite.tile & 0xFE) as usize + row / 8
            } else {
                sprite.tile as usize
            };
            let tile_row = self.tile_row(tile, row);
            let palette_index = usize::from(sprite.flags.contains(SpriteFlags::PALETTE1));
            let palette = self.obj_palettes[palette_index];
            let x_flip = sprite.flags.contains(SpriteFlags::X_FLIP);

            for i in 0..8i16 {
                let column = sprite.x + i;
                if !(0..SCREEN_WIDTH as i16).contains(&column) {
                    continue;
                }
                let column = column as usize;
                let pixel = if x_flip {
                    tile_row[7 - i as usize]
                } else {
                    tile_row[i as usize]
                };
                if pixel != 0 && (sprite.has_priority() || self.scanrow[column] == 0) {
                    self.put_pixel(column, palette[pixel as usize]);
                }
            }
        }

        if drawn > 0 {
            log::trace!("PPU: line {} drew {drawn} sprites", self.line);
        }
    }
}
