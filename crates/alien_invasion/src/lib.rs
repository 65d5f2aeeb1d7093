use alien_invasion_game::{AlienInvasion, AlienInvasionApp, Settings};
use alien_invasion_sdl2::{SdlContext, SdlInitInfo};
use anyhow::Result;

pub fn run() -> Result<()> {
    run_with_settings(Settings::default())
}

pub fn run_with_settings(settings: Settings) -> Result<()> {
    let app = AlienInvasionApp::new(AlienInvasion::new(settings));
    let init_info = SdlInitInfo::from_app(&app);
    SdlContext::run(init_info, app)?;
    Ok(())
}
