use anyhow::Result;
use pocketboy_core::{GameBoy, GameBoyApp, MachineConfig};
use pocketboy_sdl2::{App, SdlContext, SdlInitInfo};

/// Images needed to start a session.
pub struct Images {
    pub cartridge: Vec<u8>,
    /// `None` starts directly at 0x0100 with post-boot registers.
    pub boot_image: Option<Vec<u8>>,
}

/// Power on a machine from `images` and run it in an SDL window until the
/// window is closed, Escape is pressed, or the core reports a fatal error.
pub fn run(images: Images) -> Result<()> {
    let Images {
        cartridge,
        boot_image,
    } = images;
    let config = match boot_image {
        Some(boot) => MachineConfig::builder()
            .cartridge(cartridge)
            .boot_image(boot)
            .build(),
        None => MachineConfig::builder().cartridge(cartridge).build(),
    };

    let app = GameBoyApp::new(GameBoy::new(config)?);
    let init_info = SdlInitInfo::builder()
        .width(app.width())
        .height(app.height())
        .scale(app.scale())
        .title(app.title())
        .build();
    SdlContext::run(init_info, app)
}
