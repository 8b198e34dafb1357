use anyhow::Result;
use pocketboy_common::app::App;
use pocketboy_common::key::Key;

use crate::machine::registers::{LCDC, LY, SCX, SCY, STAT};
use crate::{GameBoy, SCREEN_HEIGHT, SCREEN_SCALE, SCREEN_WIDTH};

/// Frames between periodic status lines.
const STATUS_INTERVAL: u64 = 60;

/// SDL-facing application wrapper for the DMG machine.
///
/// Each `update` runs the core for one frame and copies the framebuffer
/// out, so the host may present it while the next frame is being built.
pub struct GameBoyApp {
    pub gb: GameBoy,
    should_exit: bool,
    frame_counter: u64,
    last_lcdc: u8,
}

impl GameBoyApp {
    pub fn new(gb: GameBoy) -> Self {
        Self {
            gb,
            should_exit: false,
            frame_counter: 0,
            last_lcdc: 0,
        }
    }

    fn log_status(&mut self) {
        let lcdc = self.gb.read8(LCDC);
        let stat = self.gb.read8(STAT);
        let scy = self.gb.read8(SCY);
        let scx = self.gb.read8(SCX);
        let ly = self.gb.read8(LY);
        let regs = &self.gb.cpu.regs;
        log::info!(
            "frame={} pc=0x{:04X} sp=0x{:04X} af=0x{:04X} bc=0x{:04X} de=0x{:04X} hl=0x{:04X} ime={} halted={} bank={} IF=0x{:02X} IE=0x{:02X} LCDC=0x{:02X} STAT=0x{:02X} LY={} SCX={} SCY={}",
            self.frame_counter,
            regs.pc,
            regs.sp,
            regs.af(),
            regs.bc(),
            regs.de(),
            regs.hl(),
            self.gb.cpu.ime,
            self.gb.cpu.halted,
            self.gb.rom_bank(),
            self.gb.bus.if_reg,
            self.gb.bus.ie_reg,
            lcdc,
            stat,
            ly,
            scx,
            scy,
        );
    }
}

impl App for GameBoyApp {
    fn init(&mut self) {
        log::info!("Game Boy init: \"{}\"", self.gb.cartridge_title());
        self.last_lcdc = self.gb.read8(LCDC);
    }

    fn update(&mut self, screen: &mut [u8]) -> Result<()> {
        self.gb.step_frame()?;
        self.gb.video_frame(screen);
        self.frame_counter = self.frame_counter.wrapping_add(1);

        let lcdc = self.gb.read8(LCDC);
        if lcdc != self.last_lcdc {
            log::debug!("Frame {}: LCDC 0x{:02X} -> 0x{lcdc:02X}", self.frame_counter, self.last_lcdc);
            self.last_lcdc = lcdc;
        }

        if self.frame_counter == 1 || self.frame_counter % STATUS_INTERVAL == 0 {
            self.log_status();
        }
        Ok(())
    }

    fn handle_key_event(&mut self, key: Key, is_down: bool) {
        match key {
            Key::Escape if is_down => self.should_exit = true,
            // The joypad register is a stub; other keys are only traced.
            _ => log::trace!("key {key:?} down={is_down}"),
        }
    }

    fn should_exit(&self) -> bool {
        self.should_exit
    }

    fn exit(&mut self) {
        log::info!("Game Boy exit after {} frames", self.frame_counter);
    }

    fn width(&self) -> u32 {
        SCREEN_WIDTH as u32
    }

    fn height(&self) -> u32 {
        SCREEN_HEIGHT as u32
    }

    fn scale(&self) -> u32 {
        SCREEN_SCALE
    }

    fn title(&self) -> String {
        match self.gb.cartridge_title() {
            "" => "pocketboy".to_string(),
            title => format!("pocketboy - {title}"),
        }
    }
}
