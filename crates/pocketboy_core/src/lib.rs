pub mod app;
pub mod cpu;
mod error;
pub mod machine;

pub use app::GameBoyApp;
pub use error::{CoreError, Result};
pub use machine::{GameBoy, MachineConfig};

/// Logical screen width in pixels for the DMG.
pub const SCREEN_WIDTH: usize = 160;
/// Logical screen height in pixels.
pub const SCREEN_HEIGHT: usize = 144;
/// Default integer scaling factor for the SDL frontend.
pub const SCREEN_SCALE: u32 = 4;
/// Exact size of a DMG boot image.
pub const BOOT_IMAGE_SIZE: usize = 256;
