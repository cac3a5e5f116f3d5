//! Breakout entry point
//!
//! Sets up logging, loads settings and runs the game loop. Exits with -1 when
//! the window or graphics can't be initialized.

use breakout::Settings;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Breakout starting...");

    let settings = Settings::load();

    if let Err(report) = breakout::app::run(settings) {
        log::error!("{}", report);
        eprintln!("{:?}", report);
        std::process::exit(-1);
    }
}
