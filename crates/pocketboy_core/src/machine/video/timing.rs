use super::{Mode, Ppu, LINE_STRIDE};

const OAM_READ_CYCLES: u16 = 20;
const VRAM_READ_CYCLES: u16 = 43;
const HBLANK_CYCLES: u16 = 51;
const VBLANK_LINE_CYCLES: u16 = 114;

const LAST_VISIBLE_LINE: u8 = 143;
const LAST_LINE: u8 = 153;

/// M-cycles in one complete frame.
#[cfg(test)]
pub(crate) const FRAME_CYCLES: u32 = (LAST_VISIBLE_LINE as u32 + 1)
    * (OAM_READ_CYCLES + VRAM_READ_CYCLES + HBLANK_CYCLES) as u32
    + (LAST_LINE - LAST_VISIBLE_LINE) as u32 * VBLANK_LINE_CYCLES as u32;

impl Ppu {
    /// Advance the mode state machine by the M-cycles the last instruction
    /// consumed. At most one transition happens per call and the
    /// accumulator restarts from zero on every transition.
    ///
    /// Returns `true` when this call entered VBlank.
    pub(crate) fn step(&mut self, m_cycles: u8) -> bool {
        self.mode_clock += m_cycles as u16;

        match self.mode {
            Mode::OamRead => {
                if self.mode_clock >= OAM_READ_CYCLES {
                    self.mode_clock = 0;
                    self.mode = Mode::VramRead;
                }
            }
            Mode::VramRead => {
                if self.mode_clock >= VRAM_READ_CYCLES {
                    self.mode_clock = 0;
                    self.mode = Mode::HBlank;
                    self.render_line();
                }
            }
            Mode::HBlank => {
                if self.mode_clock >= HBLANK_CYCLES {
                    self.mode_clock = 0;
                    let entered_vblank = self.line == LAST_VISIBLE_LINE;
                    self.mode = if entered_vblank {
                        Mode::VBlank
                    } else {
                        Mode::OamRead
                    };
                    self.line += 1;
                    self.scan_offset += LINE_STRIDE;
                    if entered_vblank {
                        log::trace!("PPU: VBlank entered");
                        return true;
                    }
                }
            }
            Mode::VBlank => {
                if self.mode_clock >= VBLANK_LINE_CYCLES {
                    self.mode_clock = 0;
                    self.line += 1;
                    if self.line > LAST_LINE {
                        self.line = 0;
                        self.scan_offset = 0;
                        self.mode = Mode::OamRead;
                    }
                }
            }
        }

        false
    }
}
