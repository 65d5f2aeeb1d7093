use alien_invasion_common::{FrameBuffer, Rect};

use crate::settings::Settings;
use crate::sprites;

/// The player's ship, parked on the bottom edge of the screen.
#[derive(Clone, Debug)]
pub struct Ship {
    pub rect: Rect,
    /// Exact horizontal position; `rect.x` is its truncated view.
    pub x: f32,
    pub moving_right: bool,
    pub moving_left: bool,
}

impl Ship {
    pub fn new(settings: &Settings) -> Self {
        let mut rect = Rect::new(0, 0, settings.ship_width, settings.ship_height);
        rect.set_mid_bottom(settings.screen_width / 2, settings.screen_height);
        Ship {
            rect,
            x: rect.x as f32,
            moving_right: false,
            moving_left: false,
        }
    }

    /// Move according to the held direction flags. Both flags may be set at
    /// once, in which case the two steps cancel out.
    pub fn update(&mut self, settings: &Settings) {
        if self.moving_right && self.rect.right() < settings.screen_width {
            self.x += settings.ship_speed;
        }
        if self.moving_left && self.rect.left() > 0 {
            self.x -= settings.ship_speed;
        }
        // Clamp after both steps: opposing steps cancel even next to an edge.
        let max_x = (settings.screen_width - self.rect.width) as f32;
        self.x = self.x.min(max_x).max(0.0);
        self.rect.x = self.x as i32;
    }

    pub fn draw(&self, frame: &mut FrameBuffer, settings: &Settings) {
        frame.blit_sprite(&sprites::SHIP, self.rect, settings.ship_color);
    }
}
