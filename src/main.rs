use anyhow::Result;
use clap::Parser;

use splat_viewer::cli::{Cli, RunMode};
use splat_viewer::config::ViewerConfig;
use splat_viewer::{replay, viewer};

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = ViewerConfig::resolve(&cli)?;

    match cli.run_mode() {
        RunMode::Replay(path) => {
            let script = replay::ReplayScript::load(&path)?;
            let placements = replay::run(&config, &script);
            replay::write_placements(std::io::stdout().lock(), &placements)?;
        }
        RunMode::Headless => {
            log::info!("Running headless, printing initial placement only");
            replay::write_placements(std::io::stdout().lock(), &[replay::initial(&config)])?;
        }
        RunMode::Windowed => viewer::run(&config)?,
    }

    Ok(())
}
