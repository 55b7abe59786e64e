//! m,n,k tic-tac-toe
//!
//! Plays against the computer in an egui window, or on the terminal with `--console`.

use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use mnk::ui::MnkApp;
use mnk::{console, GameSettings};

#[derive(Parser, Debug)]
#[command(name = "mnk", version, about = "Dynamic m,n,k tic-tac-toe against the computer")]
struct Cli {
    /// Number of board rows
    #[arg(long, default_value_t = 3)]
    rows: usize,

    /// Number of board columns
    #[arg(long, default_value_t = 3)]
    cols: usize,

    /// Marks in a row needed to win
    #[arg(long = "to-win", default_value_t = 3)]
    to_win: usize,

    /// Always score the opening move instead of taking the centre
    #[arg(long)]
    no_quick_open: bool,

    /// Score candidates on a single thread
    #[arg(long)]
    sequential: bool,

    /// Play on the terminal instead of opening a window
    #[arg(long)]
    console: bool,
}

impl Cli {
    fn settings(&self) -> GameSettings {
        GameSettings {
            rows: self.rows,
            cols: self.cols,
            required_in_a_row: self.to_win,
            quick_open: !self.no_quick_open,
        }
    }
}

fn create_app(
    cc: &eframe::CreationContext<'_>,
    settings: GameSettings,
    parallel: bool,
) -> Result<Box<dyn eframe::App>, Box<dyn std::error::Error + Send + Sync>> {
    Ok(Box::new(MnkApp::new(cc, settings, parallel)?))
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let settings = cli.settings();
    let parallel = !cli.sequential;

    if let Err(err) = settings.new_board() {
        error!(%err, "invalid game settings");
        eprintln!("error: {err}");
        return ExitCode::FAILURE;
    }

    if cli.console {
        return match console::run(settings, parallel) {
            Ok(_) => ExitCode::SUCCESS,
            Err(err) => {
                error!(%err, "console game failed");
                ExitCode::FAILURE
            }
        };
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 750.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Dynamic Tic-Tac-Toe"),
        ..Default::default()
    };

    let result = eframe::run_native(
        "Dynamic Tic-Tac-Toe",
        options,
        Box::new(move |cc| create_app(cc, settings, parallel)),
    );

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "gui exited with an error");
            ExitCode::FAILURE
        }
    }
}
