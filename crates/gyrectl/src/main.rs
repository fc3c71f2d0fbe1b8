use clap::{ArgAction, Parser, Subcommand};
use gyrectl::ipc::{self, ControlCommand, HexColor};

#[derive(Parser, Debug)]
#[command(name = "gyrectl", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Stop redrawing; the last frame stays on screen.
    Pause,
    /// Resume redrawing.
    Resume,
    /// Flip between paused and running
    Toggle,
    /// Reload the configuration file
    Reload,
    /// Show or hide the debug panel
    Debug,
    /// Change a style parameter on the running clock
    Set {
        #[command(subcommand)]
        param: Param,
    },
}

#[derive(Subcommand, Debug, Clone)]
enum Param {
    /// Stroke width, 1 to 10
    LineWidth { value: f64 },
    /// Arc rotation speed, -2 to 2 (negative reverses)
    Speed {
        #[arg(allow_negative_numbers = true)]
        value: f64,
    },
    /// Stroke color as #rrggbb
    Color { value: String },
    /// Enable or disable arc animation
    Animate {
        #[arg(action = ArgAction::Set)]
        value: bool,
    },
}

impl From<Commands> for ControlCommand {
    fn from(command: Commands) -> Self {
        match command {
            Commands::Pause => ControlCommand::Pause,
            Commands::Resume => ControlCommand::Resume,
            Commands::Toggle => ControlCommand::Toggle,
            Commands::Reload => ControlCommand::Reload,
            Commands::Debug => ControlCommand::Debug,
            Commands::Set { param } => match param {
                Param::LineWidth { value } => ControlCommand::LineWidth(value),
                Param::Speed { value } => ControlCommand::Speed(value),
                Param::Color { value } => ControlCommand::Color(HexColor::new(value)),
                Param::Animate { value } => ControlCommand::Animate(value),
            },
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let cmd = ControlCommand::from(cli.command);
    log::debug!("sending '{}'", cmd);

    ipc::send(&cmd).map_err(|e| {
        anyhow::anyhow!(
            "Failed to connect to gyre at {}: {}. Is gyre running?",
            ipc::socket_path().display(),
            e
        )
    })
}
