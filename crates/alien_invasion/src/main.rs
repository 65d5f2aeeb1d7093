fn main() -> anyhow::Result<()> {
    env_logger::init();

    log::info!("Starting Alien Invasion");
    alien_invasion::run()
}
