use alien_invasion_common::{FrameBuffer, Rect};

use crate::settings::{FleetDirection, Settings};
use crate::sprites;

/// A single member of the alien fleet.
#[derive(Clone, Debug)]
pub struct Alien {
    pub rect: Rect,
    /// Exact horizontal position; `rect.x` is its truncated view.
    pub x: f32,
}

impl Alien {
    pub fn new(settings: &Settings, x: i32, y: i32) -> Self {
        Alien {
            rect: Rect::new(x, y, settings.alien_width, settings.alien_height),
            x: x as f32,
        }
    }

    /// True when the alien touches or crosses the left or right screen edge.
    pub fn check_edges(&self, settings: &Settings) -> bool {
        self.rect.right() >= settings.screen_width || self.rect.left() <= 0
    }

    pub fn update(&mut self, settings: &Settings, direction: FleetDirection) {
        self.x += settings.alien_speed * direction.sign();
        self.rect.x = self.x as i32;
    }

    pub fn draw(&self, frame: &mut FrameBuffer, settings: &Settings) {
        frame.blit_sprite(&sprites::ALIEN, self.rect, settings.alien_color);
    }
}
