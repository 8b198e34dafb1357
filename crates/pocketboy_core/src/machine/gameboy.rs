use typed_builder::TypedBuilder;

use crate::cpu::{Bus, Cpu};
use crate::{CoreError, Result, BOOT_IMAGE_SIZE};

use super::cartridge::Cartridge;
use super::video::{registers, Mode, Sprite};
use super::GameBoyBus;

/// Inputs needed to power on a machine.
#[derive(TypedBuilder)]
pub struct MachineConfig {
    /// Raw cartridge image. Padded to at least 32 KiB.
    cartridge: Vec<u8>,
    /// Boot image mapped over 0x0000-0x00FF until PC reaches 0x0100. When
    /// absent, the machine starts in the state the boot image leaves behind.
    #[builder(default, setter(strip_option))]
    boot_image: Option<Vec<u8>>,
}

/// High-level DMG machine.
///
/// Holds the CPU core and the bus. This is the main entry point used by the
/// `GameBoyApp` wrapper and the headless frame dumper.
pub struct GameBoy {
    pub cpu: Cpu,
    pub(crate) bus: GameBoyBus,
}

impl GameBoy {
    /// Power on a machine. Fails if a boot image is supplied that is not
    /// exactly 256 bytes.
    pub fn new(config: MachineConfig) -> Result<Self> {
        let MachineConfig {
            cartridge,
            boot_image,
        } = config;

        let boot_image = boot_image
            .map(|bytes| {
                let actual = bytes.len();
                <[u8; BOOT_IMAGE_SIZE]>::try_from(bytes).map_err(|_| CoreError::BootImageSize {
                    expected: BOOT_IMAGE_SIZE,
                    actual,
                })
            })
            .transpose()?;

        let skip_boot = boot_image.is_none();
        let mut gb = Self {
            cpu: Cpu::new(),
            bus: GameBoyBus::new(Cartridge::new(cartridge), boot_image),
        };

        if skip_boot {
            gb.apply_post_boot_state();
        }
        Ok(gb)
    }

    /// Registers and LCD state as the DMG boot image hands them over.
    fn apply_post_boot_state(&mut self) {
        log::info!("No boot image; starting at 0x0100 with post-boot registers");
        self.cpu = Cpu::post_boot();
        self.bus.write8(registers::BGP, 0xFC);
        self.bus.write8(registers::OBP0, 0xFF);
        self.bus.write8(registers::OBP1, 0xFF);
        self.bus.write8(registers::LCDC, 0x91);
    }

    /// Execute one instruction and advance the video controller by its cost.
    #[inline]
    pub fn step(&mut self) -> Result<u8> {
        self.cpu.step(&mut self.bus)
    }

    /// Run until the video controller enters VBlank, i.e. one frame has been
    /// composited.
    pub fn step_frame(&mut self) -> Result<()> {
        while !self.bus.take_frame_ready() {
            self.step()?;
        }
        Ok(())
    }

    /// RGB24 framebuffer, 160x144.
    #[inline]
    pub fn framebuffer(&self) -> &[u8] {
        self.bus.ppu.framebuffer()
    }

    /// Copy the framebuffer into `buffer`, truncating to the shorter length.
    pub fn video_frame(&self, buffer: &mut [u8]) {
        let frame = self.framebuffer();
        let len = frame.len().min(buffer.len());
        buffer[..len].copy_from_slice(&frame[..len]);
    }

    /// Read a byte through the address space, with all its side effects.
    #[inline]
    pub fn read8(&mut self, addr: u16) -> u8 {
        self.bus.read8(addr)
    }

    /// Write a byte through the address space, with all its side effects.
    #[inline]
    pub fn write8(&mut self, addr: u16, value: u8) {
        self.bus.write8(addr, value)
    }

    #[inline]
    pub fn boot_active(&self) -> bool {
        self.bus.boot_active()
    }

    pub fn video_mode(&self) -> Mode {
        self.bus.ppu.mode()
    }

    pub fn scanline(&self) -> u8 {
        self.bus.ppu.line()
    }

    /// Decoded sprite-attribute record for OAM entry `index` (0-39).
    pub fn sprite(&self, index: usize) -> Option<Sprite> {
        self.bus.ppu.sprite(index).copied()
    }

    pub fn cartridge_title(&self) -> &str {
        self.bus.cartridge().title()
    }

    /// ROM bank currently mapped at 0x4000-0x7FFF.
    pub fn rom_bank(&self) -> u8 {
        self.bus.cartridge().rom_bank()
    }
}
