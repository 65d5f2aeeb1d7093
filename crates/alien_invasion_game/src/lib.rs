pub mod alien;
pub mod app;
pub mod bullet;
pub mod game;
pub mod settings;
pub mod ship;
mod sprites;

pub use app::AlienInvasionApp;
pub use game::{AlienInvasion, RunState};
pub use settings::{FleetDirection, Settings};

/// Window caption.
pub const TITLE: &str = "Alien Invasion";
/// Integer scaling factor for the SDL2 frontend. The game already renders at
/// full window resolution.
pub const SCREEN_SCALE: u32 = 1;
