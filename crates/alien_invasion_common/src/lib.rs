pub mod app;
pub mod color;
pub mod frame;
pub mod key;
pub mod rect;

pub use app::App;
pub use color::Color;
pub use frame::{FrameBuffer, Sprite};
pub use key::Key;
pub use rect::Rect;
