use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use pocketboy_core::{GameBoy, MachineConfig, SCREEN_HEIGHT, SCREEN_WIDTH};

const USAGE: &str = "Usage: frame_dump <cartridge> <out.ppm> [frames]";

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let (Some(rom_path), Some(out_path)) = (args.next(), args.next()) else {
        bail!(USAGE);
    };
    let (rom_path, out_path) = (PathBuf::from(rom_path), PathBuf::from(out_path));
    let frames: u32 = match args.next() {
        Some(arg) => arg
            .parse()
            .with_context(|| format!("invalid frame count '{arg}'\n{USAGE}"))?,
        None => 120,
    };

    let rom = std::fs::read(&rom_path)
        .with_context(|| format!("failed to read cartridge '{}'", rom_path.display()))?;

    let mut gb = GameBoy::new(MachineConfig::builder().cartridge(rom).build())?;
    for _ in 0..frames {
        gb.step_frame()?;
    }

    let file = std::fs::File::create(&out_path)
        .with_context(|| format!("failed to create '{}'", out_path.display()))?;
    let mut out = std::io::BufWriter::new(file);
    write!(out, "P6\n{SCREEN_WIDTH} {SCREEN_HEIGHT}\n255\n")?;
    out.write_all(gb.framebuffer())?;
    out.flush()?;

    println!(
        "Wrote {}x{} frame after {} frames to '{}'",
        SCREEN_WIDTH,
        SCREEN_HEIGHT,
        frames,
        out_path.display()
    );
    Ok(())
}
