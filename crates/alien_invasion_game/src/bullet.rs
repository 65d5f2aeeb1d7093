use alien_invasion_common::{FrameBuffer, Rect};

use crate::settings::Settings;
use crate::ship::Ship;

/// A projectile fired straight up from the ship.
#[derive(Clone, Debug)]
pub struct Bullet {
    pub rect: Rect,
    /// Exact vertical position; `rect.y` is its truncated view.
    pub y: f32,
}

impl Bullet {
    /// Spawn a bullet centered on the top edge of `ship`.
    pub fn new(settings: &Settings, ship: &Ship) -> Self {
        let mut rect = Rect::new(0, 0, settings.bullet_width, settings.bullet_height);
        rect.set_mid_top(ship.rect.center_x(), ship.rect.top());
        Bullet {
            rect,
            y: rect.y as f32,
        }
    }

    pub fn update(&mut self, settings: &Settings) {
        self.y -= settings.bullet_speed;
        self.rect.y = self.y as i32;
    }

    /// True once the bullet has left through the top of the screen.
    pub fn is_off_screen(&self) -> bool {
        self.rect.bottom() <= 0
    }

    pub fn draw(&self, frame: &mut FrameBuffer, settings: &Settings) {
        frame.fill_rect(self.rect, settings.bullet_color);
    }
}

#[cfg(test)]
mod tests {
    use super::Bullet;
    use crate::settings::Settings;
    use crate::ship::Ship;

    #[test]
    fn spawns_at_ship_mid_top() {
        let settings = Settings::default();
        let ship = Ship::new(&settings);
        let bullet = Bullet::new(&settings, &ship);
        assert_eq!(bullet.rect.center_x(), ship.rect.center_x());
        assert_eq!(bullet.rect.top(), ship.rect.top());
        assert_eq!((bullet.rect.width, bullet.rect.height), (3, 15));
    }

    #[test]
    fn travels_up_by_bullet_speed() {
        let settings = Settings::default();
        let ship = Ship::new(&settings);
        let mut bullet = Bullet::new(&settings, &ship);
        bullet.update(&settings);
        assert_eq!(bullet.y, 748.5);
        assert_eq!(bullet.rect.y, 748);
        bullet.update(&settings);
        assert_eq!(bullet.rect.y, 745);
    }

    #[test]
    fn leaves_screen_within_bound() {
        let settings = Settings::default();
        let ship = Ship::new(&settings);
        let mut bullet = Bullet::new(&settings, &ship);
        let bound = (bullet.rect.bottom() as f32 / settings.bullet_speed).ceil() as u32;

        let mut updates = 0;
        while !bullet.is_off_screen() {
            bullet.update(&settings);
            updates += 1;
        }
        assert!(updates <= bound, "{updates} updates, bound {bound}");
    }
}
