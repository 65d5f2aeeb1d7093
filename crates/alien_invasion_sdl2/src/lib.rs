use anyhow::{anyhow, Result};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::PixelFormatEnum;
use std::time::{Duration, Instant};
use typed_builder::TypedBuilder;

pub use alien_invasion_common;
pub use alien_invasion_common::app::App;
pub use sdl2;

use alien_invasion_common::key::Key;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    RGB24,
}

#[derive(TypedBuilder)]
pub struct SdlInitInfo {
    pub width: u32,
    pub height: u32,
    #[builder(default = 1)]
    pub scale: u32,
    pub title: String,
    #[builder(default = 60)]
    pub frame_rate: u32,
    #[builder(default = PixelFormat::RGB24)]
    pub pixel_format: PixelFormat,
}

impl SdlInitInfo {
    pub fn from_app(app: &impl App) -> Self {
        SdlInitInfo::builder()
            .width(app.width())
            .height(app.height())
            .scale(app.scale())
            .title(app.title())
            .frame_rate(app.frame_rate())
            .build()
    }
}

pub struct SdlContext;

impl SdlContext {
    pub fn run(sdl_init_info: SdlInitInfo, mut app: impl App) -> Result<()> {
        let SdlInitInfo {
            width,
            height,
            scale,
            title,
            frame_rate,
            pixel_format,
        } = sdl_init_info;

        let sdl_context = sdl2::init().map_err(|e| anyhow!(e))?;
        let video_subsystem = sdl_context.video().map_err(|e| anyhow!(e))?;
        let window = video_subsystem
            .window(&title, width * scale, height * scale)
            .position_centered()
            .build()?;
        let mut canvas = window.into_canvas().build()?;
        canvas
            .set_scale(scale as f32, scale as f32)
            .map_err(|e| anyhow!(e))?;

        let texture_creator = canvas.texture_creator();
        let mut texture = texture_creator.create_texture_streaming(
            map_pixel_format(pixel_format),
            width,
            height,
        )?;

        let color_size = map_pixel_format_size(pixel_format);
        let mut screen_state = vec![0u8; (width * color_size * height) as usize];
        let mut event_pump = sdl_context.event_pump().map_err(|e| anyhow!(e))?;
        let target_frame = frame_duration(frame_rate);
        log::info!(
            "SDL2 window '{}' {}x{} (scale {}), target frame {:?}",
            title,
            width,
            height,
            scale,
            target_frame
        );

        app.init();
        let mut last_frame = Instant::now();

        loop {
            if !dispatch_events(&mut app, event_pump.poll_iter()) {
                break;
            }

            app.update(&mut screen_state);

            texture.update(None, &screen_state, (width * color_size) as usize)?;
            canvas.clear();
            canvas.copy(&texture, None, None).map_err(|e| anyhow!(e))?;
            canvas.present();

            let elapsed = last_frame.elapsed();
            if elapsed < target_frame {
                std::thread::sleep(target_frame - elapsed);
            }
            last_frame = Instant::now();
        }

        app.exit();
        Ok(())
    }
}

/// Feed queued window events to `app`. Returns `false` once the app should
/// stop; remaining events are left undelivered so no further frame runs.
pub fn dispatch_events(app: &mut impl App, events: impl IntoIterator<Item = Event>) -> bool {
    if app.should_exit() {
        return false;
    }
    for event in events {
        match event {
            Event::Quit { .. } => return false,
            // Auto-repeat would fire a bullet per repeat; only physical
            // presses count.
            Event::KeyDown {
                keycode: Some(keycode),
                repeat: false,
                ..
            } => app.handle_key_event(map_keycode(keycode), true),
            Event::KeyUp {
                keycode: Some(keycode),
                ..
            } => app.handle_key_event(map_keycode(keycode), false),
            _ => continue,
        }
        if app.should_exit() {
            return false;
        }
    }
    true
}

/// Time budget for one frame. A frame rate of zero disables pacing.
pub fn frame_duration(frame_rate: u32) -> Duration {
    if frame_rate == 0 {
        return Duration::ZERO;
    }
    Duration::from_secs(1) / frame_rate
}

pub fn map_pixel_format(pixel_format: PixelFormat) -> PixelFormatEnum {
    match pixel_format {
        PixelFormat::RGB24 => PixelFormatEnum::RGB24,
    }
}

pub fn map_pixel_format_size(pixel_format: PixelFormat) -> u32 {
    match pixel_format {
        PixelFormat::RGB24 => 3,
    }
}

pub fn map_keycode(keycode: Keycode) -> Key {
    match keycode {
        Keycode::Left => Key::Left,
        Keycode::Right => Key::Right,
        Keycode::Space => Key::Space,
        Keycode::Escape => Key::Escape,
        _ => Key::None,
    }
}
