use alien_invasion_common::{FrameBuffer, Key};

use crate::alien::Alien;
use crate::bullet::Bullet;
use crate::settings::{FleetDirection, Settings};
use crate::ship::Ship;

/// What the frontend loop should do after an input event.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum RunState {
    Running,
    Quit,
}

/// The game controller: owns every entity and advances them one frame at a time.
///
/// A frame is `handle_key` for each pending input event, then `step`, then
/// `draw`. The active `bullets` and `aliens` collections are the only owners
/// of their entities; removal from a collection ends an entity's life.
#[derive(Clone, Debug)]
pub struct AlienInvasion {
    pub settings: Settings,
    pub ship: Ship,
    pub bullets: Vec<Bullet>,
    pub aliens: Vec<Alien>,
    pub fleet_direction: FleetDirection,
}

impl Default for AlienInvasion {
    fn default() -> Self {
        AlienInvasion::new(Settings::default())
    }
}

impl AlienInvasion {
    pub fn new(settings: Settings) -> Self {
        let ship = Ship::new(&settings);
        let fleet_direction = settings.fleet_direction;
        let mut game = AlienInvasion {
            settings,
            ship,
            bullets: Vec::new(),
            aliens: Vec::new(),
            fleet_direction,
        };
        game.create_fleet();
        log::info!("Fleet created with {} aliens", game.aliens.len());
        game
    }

    pub fn handle_key(&mut self, key: Key, is_down: bool) -> RunState {
        match (key, is_down) {
            (Key::Escape, true) => return RunState::Quit,
            (Key::Right, _) => self.ship.moving_right = is_down,
            (Key::Left, _) => self.ship.moving_left = is_down,
            (Key::Space, true) => self.fire_bullet(),
            _ => {}
        }
        RunState::Running
    }

    /// Advance the simulation by one frame: ship, then bullets and
    /// collisions, then the fleet.
    pub fn step(&mut self) {
        self.ship.update(&self.settings);
        self.update_bullets();
        self.update_aliens();
    }

    pub fn draw(&self, frame: &mut FrameBuffer) {
        frame.fill(self.settings.background_color);
        for bullet in &self.bullets {
            bullet.draw(frame, &self.settings);
        }
        self.ship.draw(frame, &self.settings);
        for alien in &self.aliens {
            alien.draw(frame, &self.settings);
        }
    }

    /// Fire a new bullet unless `bullets_allowed` are already in flight.
    pub fn fire_bullet(&mut self) {
        if self.bullets.len() < self.settings.bullets_allowed {
            self.bullets.push(Bullet::new(&self.settings, &self.ship));
            log::trace!("Bullet fired, {} in flight", self.bullets.len());
        } else {
            log::trace!("Bullet dropped, limit of {} reached", self.settings.bullets_allowed);
        }
    }

    /// Fill the fleet grid, starting one alien size in from the top-left corner
    /// and spacing aliens by twice their size on both axes.
    pub fn create_fleet(&mut self) {
        let Settings {
            screen_width,
            screen_height,
            alien_width,
            alien_height,
            ..
        } = self.settings;
        if alien_width <= 0 || alien_height <= 0 {
            log::warn!("Alien size {alien_width}x{alien_height} is empty, no fleet created");
            return;
        }

        let mut current_y = alien_height;
        while current_y < screen_height - 3 * alien_height {
            let mut current_x = alien_width;
            while current_x < screen_width - 2 * alien_width {
                self.aliens
                    .push(Alien::new(&self.settings, current_x, current_y));
                current_x += 2 * alien_width;
            }
            current_y += 2 * alien_height;
        }
    }

    /// Move bullets, drop the ones that left the screen, then resolve hits.
    pub fn update_bullets(&mut self) {
        for bullet in &mut self.bullets {
            bullet.update(&self.settings);
        }
        self.bullets.retain(|bullet| !bullet.is_off_screen());

        self.check_bullet_alien_collisions();
    }

    /// Every bullet destroys all aliens it overlaps and is itself destroyed
    /// if it hit anything. Bullets are resolved in order, so an alien already
    /// destroyed by an earlier bullet cannot absorb a later one. Clearing the
    /// fleet removes all bullets and brings in a fresh fleet.
    pub fn check_bullet_alien_collisions(&mut self) {
        let aliens = &mut self.aliens;
        self.bullets.retain(|bullet| {
            let before = aliens.len();
            aliens.retain(|alien| !bullet.rect.overlaps(&alien.rect));
            aliens.len() == before
        });

        if self.aliens.is_empty() {
            log::debug!("Fleet destroyed, clearing {} bullets", self.bullets.len());
            self.bullets.clear();
            self.create_fleet();
            log::info!("Fleet created with {} aliens", self.aliens.len());
        }
    }

    pub fn update_aliens(&mut self) {
        self.check_fleet_edges();
        for alien in &mut self.aliens {
            alien.update(&self.settings, self.fleet_direction);
        }
    }

    fn check_fleet_edges(&mut self) {
        if self
            .aliens
            .iter()
            .any(|alien| alien.check_edges(&self.settings))
        {
            self.change_fleet_direction();
        }
    }

    fn change_fleet_direction(&mut self) {
        for alien in &mut self.aliens {
            alien.rect.y += self.settings.fleet_drop_speed;
        }
        self.fleet_direction = self.fleet_direction.reversed();
        log::debug!("Fleet reached an edge, now moving {:?}", self.fleet_direction);
    }
}
