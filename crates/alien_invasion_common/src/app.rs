use crate::key::Key;

/// A game driven by a frontend one frame at a time.
///
/// The frontend owns the window, the event queue and frame pacing; the app
/// owns the simulation and paints an RGB24 screen buffer of
/// `width() * height() * 3` bytes on every `update`.
pub trait App {
    fn init(&mut self);
    fn update(&mut self, screen: &mut [u8]);
    fn handle_key_event(&mut self, key: Key, is_down: bool);
    fn should_exit(&self) -> bool;
    fn exit(&mut self);

    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn scale(&self) -> u32;
    fn frame_rate(&self) -> u32;
    fn title(&self) -> String;
}
