use anyhow::{anyhow, Result};
use sdl2::event::Event;
use sdl2::pixels::PixelFormatEnum;
use typed_builder::TypedBuilder;

pub use pocketboy_common::app::App;
use pocketboy_common::key::Key;
pub use sdl2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    RGB24,
}

#[derive(TypedBuilder)]
pub struct SdlInitInfo {
    pub width: u32,
    pub height: u32,
    pub scale: u32,
    pub title: String,
    #[builder(default = PixelFormat::RGB24)]
    pub pixel_format: PixelFormat,
}

pub struct SdlContext;

impl SdlContext {
    /// Open a window and drive `app` until it asks to exit, the window is
    /// closed, or `App::update` returns an error.
    ///
    /// Each iteration polls host events once, lets the app produce a frame
    /// into an RGB24 buffer and presents that buffer.
    pub fn run(sdl_init_info: SdlInitInfo, mut app: impl App) -> Result<()> {
        let SdlInitInfo {
            width,
            height,
            scale,
            title,
            pixel_format,
        } = sdl_init_info;
        let sdl_context = sdl2::init().map_err(|e| anyhow!("SDL init failed: {e}"))?;
        let video_subsystem = sdl_context
            .video()
            .map_err(|e| anyhow!("SDL video subsystem unavailable: {e}"))?;
        let window = video_subsystem
            .window(&title, width * scale, height * scale)
            .position_centered()
            .build()?;
        let mut canvas = window.into_canvas().present_vsync().build()?;
        canvas
            .set_scale(scale as f32, scale as f32)
            .map_err(|e| anyhow!("SDL canvas scale failed: {e}"))?;
        let creator = canvas.texture_creator();
        let mut texture =
            creator.create_texture_streaming(map_pixel_format(pixel_format), width, height)?;

        let color_size = map_pixel_format_size(pixel_format);
        let mut screen_state = vec![0u8; (width * color_size * height) as usize];
        let mut event_pump = sdl_context
            .event_pump()
            .map_err(|e| anyhow!("SDL event pump unavailable: {e}"))?;

        app.init();
        loop {
            if app.should_exit() {
                app.exit();
                break;
            }

            for event in event_pump.poll_iter() {
                match event {
                    Event::Quit { .. } => {
                        log::info!("Window closed");
                        app.exit();
                        return Ok(());
                    }
                    Event::KeyDown {
                        keycode: Some(keycode),
                        ..
                    } => app.handle_key_event(map_keycode(keycode), true),
                    Event::KeyUp {
                        keycode: Some(keycode),
                        ..
                    } => app.handle_key_event(map_keycode(keycode), false),
                    _ => {}
                }
            }

            if let Err(err) = app.update(&mut screen_state) {
                app.exit();
                return Err(err);
            }

            texture.update(None, &screen_state, (width * color_size) as usize)?;
            canvas
                .copy(&texture, None, None)
                .map_err(|e| anyhow!("SDL copy failed: {e}"))?;
            canvas.present();
        }

        Ok(())
    }
}

pub fn map_pixel_format(pixel_format: PixelFormat) -> PixelFormatEnum {
    match pixel_format {
        PixelFormat::RGB24 => PixelFormatEnum::RGB24,
    }
}

pub fn map_pixel_format_size(pixel_format: PixelFormat) -> u32 {
    match pixel_format {
        PixelFormat::RGB24 => 3,
    }
}

pub fn map_keycode(keycode: sdl2::keyboard::Keycode) -> Key {
    match keycode {
        sdl2::keyboard::Keycode::Escape => Key::Escape,
        sdl2::keyboard::Keycode::Up => Key::Up,
        sdl2::keyboard::Keycode::Down => Key::Down,
        sdl2::keyboard::Keycode::Left => Key::Left,
        sdl2::keyboard::Keycode::Right => Key::Right,
        sdl2::keyboard::Keycode::Z => Key::Z,
        sdl2::keyboard::Keycode::X => Key::X,
        sdl2::keyboard::Keycode::A => Key::A,
        sdl2::keyboard::Keycode::S => Key::S,
        _ => Key::None,
    }
}
