//=========================================================================
// OXO — Binary Entry Point
//=========================================================================

use log::error;

use oxo::EngineBuilder;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = EngineBuilder::new().build().run() {
        error!("{}", e);
        std::process::exit(1);
    }
}
