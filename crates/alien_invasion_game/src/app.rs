use crate::game::{AlienInvasion, RunState};
use crate::{SCREEN_SCALE, TITLE};
use alien_invasion_common::app::App;
use alien_invasion_common::frame::FrameBuffer;
use alien_invasion_common::key::Key;

/// SDL2-facing application wrapper for the game.
///
/// This type implements the shared `App` trait so that the SDL2 frontend
/// (`alien_invasion_sdl2`) can drive the simulation frame by frame.
#[derive(Default)]
pub struct AlienInvasionApp {
    should_exit: bool,
    pub game: AlienInvasion,
}

impl AlienInvasionApp {
    pub fn new(game: AlienInvasion) -> Self {
        AlienInvasionApp {
            should_exit: false,
            game,
        }
    }
}

impl App for AlienInvasionApp {
    fn init(&mut self) {
        log::info!(
            "Alien Invasion init: {}x{} at {} fps",
            self.game.settings.screen_width,
            self.game.settings.screen_height,
            self.game.settings.frame_rate
        );
    }

    fn update(&mut self, screen_state: &mut [u8]) {
        self.game.step();

        let mut frame = FrameBuffer::new(
            screen_state,
            self.width() as usize,
            self.height() as usize,
        );
        self.game.draw(&mut frame);
    }

    fn handle_key_event(&mut self, key: Key, is_down: bool) {
        if self.game.handle_key(key, is_down) == RunState::Quit {
            log::info!("Quit requested");
            self.should_exit = true;
        }
    }

    fn should_exit(&self) -> bool {
        self.should_exit
    }

    fn exit(&mut self) {
        log::info!("Alien Invasion exit");
    }

    fn width(&self) -> u32 {
        self.game.settings.screen_width.max(0) as u32
    }

    fn height(&self) -> u32 {
        self.game.settings.screen_height.max(0) as u32
    }

    fn scale(&self) -> u32 {
        SCREEN_SCALE
    }

    fn frame_rate(&self) -> u32 {
        self.game.settings.frame_rate
    }

    fn title(&self) -> String {
        TITLE.to_string()
    }
}
