use anyhow::Result;

use crate::key::Key;

/// Contract between an emulated machine and a host frontend.
///
/// The host owns the window and the event loop. Once per outer iteration it
/// forwards pending key events, asks whether the app wants to stop, and calls
/// `update` with an RGB24 buffer of `width * height * 3` bytes that it then
/// presents.
pub trait App {
    fn init(&mut self);
    fn update(&mut self, screen: &mut [u8]) -> Result<()>;
    fn handle_key_event(&mut self, key: Key, is_down: bool);
    fn should_exit(&self) -> bool;
    fn exit(&mut self);

    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn scale(&self) -> u32;
    fn title(&self) -> String;
}
