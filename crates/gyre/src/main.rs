use clap::Parser;
use gyre::config;
use gyre::gui::DEFAULT_SIZE;
use gyre::gui::app::{AppInit, AppModel};
use gyre::gui::canvas::Canvas;
use gyre::gui::clock::{ClockScene, LocalClock};
use gyre::sys::runtime;
use rand::SeedableRng;
use rand::rngs::StdRng;
use relm4::prelude::*;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Show the debug panel
    #[arg(short, long)]
    debug: bool,

    /// Draw on the desktop background layer instead of in a window
    #[arg(long)]
    overlay: bool,

    /// Number of decorative arcs, fixed for the session
    #[arg(short, long)]
    arcs: Option<usize>,

    /// Seed for the arc angles
    #[arg(long)]
    seed: Option<u64>,

    /// Write the default config file if none exists, print its path and exit
    #[arg(long)]
    write_config: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.write_config {
        let path = config::write_default_config()?;
        println!("{}", path.display());
        return Ok(());
    }

    let mut config = config::load_or_default();
    config.debug |= args.debug;
    config.overlay |= args.overlay;
    if let Some(arcs) = args.arcs {
        config.arcs = arcs;
    }
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let size = DEFAULT_SIZE as f64;
    let scene = ClockScene::new(
        size,
        size,
        config.scene_params(),
        config.arcs,
        &mut rng,
        LocalClock,
    );
    let canvas = Canvas::new(DEFAULT_SIZE, DEFAULT_SIZE)?;

    let (tx, rx) = async_channel::bounded(32);

    // Start Background Services
    runtime::start_background_services(tx);

    let app = RelmApp::new("org.gyre.clock").with_args(Vec::new());

    app.run::<AppModel>(AppInit {
        scene,
        canvas,
        color_hex: config.color.to_string(),
        debug: config.debug,
        overlay: config.overlay,
        rx,
    });

    Ok(())
}
