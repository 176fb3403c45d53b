// cli.rs - Command-line interface configuration
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "splat-viewer")]
#[command(about = "Orbit camera shell for a Gaussian splat viewer", long_about = None)]
pub struct Cli {
    /// JSON viewer config (target and camera settings)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Replay a JSON input script and print one camera placement per event
    #[arg(long)]
    pub replay: Option<PathBuf>,

    /// Initial orbit distance
    #[arg(long)]
    pub distance: Option<f32>,

    /// Initial yaw in degrees
    #[arg(long, allow_hyphen_values = true)]
    pub yaw: Option<f32>,

    /// Initial pitch in degrees
    #[arg(long, allow_hyphen_values = true)]
    pub pitch: Option<f32>,

    /// Headless: never open a window, only print placements
    #[arg(long = "no-ui", default_value = "false")]
    pub no_ui: bool,
}

/// What `main` should do for a parsed command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunMode {
    /// Replay a script and print one placement per event (headless)
    Replay(PathBuf),
    /// No window and no script: print the initial placement and exit
    Headless,
    /// Open the viewer window
    Windowed,
}

impl Cli {
    pub fn run_mode(&self) -> RunMode {
        match (&self.replay, self.no_ui) {
            (Some(path), _) => RunMode::Replay(path.clone()),
            (None, true) => RunMode::Headless,
            (None, false) => RunMode::Windowed,
        }
    }
}
