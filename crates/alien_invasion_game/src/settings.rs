use alien_invasion_common::Color;
use typed_builder::TypedBuilder;

/// Horizontal direction shared by every alien in the fleet.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum FleetDirection {
    #[default]
    Right,
    Left,
}

impl FleetDirection {
    /// Signed step multiplier: `1.0` for right, `-1.0` for left.
    #[inline]
    pub const fn sign(self) -> f32 {
        match self {
            FleetDirection::Right => 1.0,
            FleetDirection::Left => -1.0,
        }
    }

    #[inline]
    pub const fn reversed(self) -> Self {
        match self {
            FleetDirection::Right => FleetDirection::Left,
            FleetDirection::Left => FleetDirection::Right,
        }
    }
}

/// Game configuration. Built once at startup and only read afterwards.
///
/// Speeds are in pixels per frame, sizes in pixels. Values are not validated.
#[derive(TypedBuilder, Clone, Debug, PartialEq)]
pub struct Settings {
    // screen
    #[builder(default = 1280)]
    pub screen_width: i32,
    #[builder(default = 800)]
    pub screen_height: i32,
    #[builder(default = Color::new_rgb(230, 230, 230))]
    pub background_color: Color,
    #[builder(default = 60)]
    pub frame_rate: u32,

    // ship
    #[builder(default = 2.5)]
    pub ship_speed: f32,
    #[builder(default = 60)]
    pub ship_width: i32,
    #[builder(default = 48)]
    pub ship_height: i32,
    #[builder(default = Color::new_rgb(40, 60, 110))]
    pub ship_color: Color,

    // bullets
    #[builder(default = 3.5)]
    pub bullet_speed: f32,
    #[builder(default = 3)]
    pub bullet_width: i32,
    #[builder(default = 15)]
    pub bullet_height: i32,
    #[builder(default = Color::new_rgb(60, 60, 60))]
    pub bullet_color: Color,
    #[builder(default = 8)]
    pub bullets_allowed: usize,

    // aliens
    #[builder(default = 1.0)]
    pub alien_speed: f32,
    #[builder(default = 40)]
    pub alien_width: i32,
    #[builder(default = 24)]
    pub alien_height: i32,
    #[builder(default = Color::new_rgb(60, 140, 60))]
    pub alien_color: Color,
    #[builder(default = 10)]
    pub fleet_drop_speed: i32,
    /// Direction the fleet moves in when the game starts.
    #[builder(default)]
    pub fleet_direction: FleetDirection,
}

impl Default for Settings {
    fn default() -> Self {
        Settings::builder().build()
    }
}

#[cfg(test)]
mod tests {
    use super::{FleetDirection, Settings};
    use alien_invasion_common::Color;

    #[test]
    fn defaults() {
        let settings = Settings::default();
        assert_eq!((settings.screen_width, settings.screen_height), (1280, 800));
        assert_eq!(settings.background_color, Color::new_rgb(230, 230, 230));
        assert_eq!(settings.frame_rate, 60);
        assert_eq!(settings.ship_speed, 2.5);
        assert_eq!(settings.bullet_speed, 3.5);
        assert_eq!((settings.bullet_width, settings.bullet_height), (3, 15));
        assert_eq!(settings.bullet_color, Color::new_rgb(60, 60, 60));
        assert_eq!(settings.bullets_allowed, 8);
        assert_eq!(settings.alien_speed, 1.0);
        assert_eq!(settings.fleet_drop_speed, 10);
        assert_eq!(settings.fleet_direction, FleetDirection::Right);
    }

    #[test]
    fn builder_overrides_single_fields() {
        let settings = Settings::builder().bullets_allowed(3).alien_speed(2.0).build();
        assert_eq!(settings.bullets_allowed, 3);
        assert_eq!(settings.alien_speed, 2.0);
        assert_eq!(settings.screen_width, 1280);
    }

    #[test]
    fn fleet_direction_flips() {
        assert_eq!(FleetDirection::Right.sign(), 1.0);
        assert_eq!(FleetDirection::Left.sign(), -1.0);
        assert_eq!(FleetDirection::Right.reversed(), FleetDirection::Left);
        assert_eq!(FleetDirection::Left.reversed().reversed(), FleetDirection::Left);
    }
}
