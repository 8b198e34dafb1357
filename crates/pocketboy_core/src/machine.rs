mod bus;
mod cartridge;
mod gameboy;
mod video;

pub(crate) use bus::GameBoyBus;
pub(crate) use video::registers;
pub use gameboy::{GameBoy, MachineConfig};
pub use video::{Mode, Sprite, SpriteFlags};
