use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use pocketboy::Images;

const DEFAULT_BOOT_IMAGE: &str = "boot.gb";
const USAGE: &str = "Usage: pocketboy <cartridge> [boot-image | --skip-boot]";

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let Some(cartridge_path) = args.next().map(PathBuf::from) else {
        bail!(USAGE);
    };
    let boot_path = match args.next().as_deref() {
        Some("--skip-boot") => None,
        Some(path) => Some(PathBuf::from(path)),
        None => Some(PathBuf::from(DEFAULT_BOOT_IMAGE)),
    };

    let cartridge = std::fs::read(&cartridge_path)
        .with_context(|| format!("failed to read cartridge '{}'", cartridge_path.display()))?;
    log::info!(
        "Loaded cartridge '{}' ({} bytes)",
        cartridge_path.display(),
        cartridge.len()
    );

    let boot_image = boot_path
        .map(|path| {
            std::fs::read(&path)
                .with_context(|| format!("failed to read boot image '{}'", path.display()))
        })
        .transpose()?;

    pocketboy::run(Images {
        cartridge,
        boot_image,
    })
}
