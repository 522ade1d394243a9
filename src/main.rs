// seatshow: Smart Seating Engine report, presenter and deck exporter

use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Mutex;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use seatshow::config::Config;
use seatshow::content;
use seatshow::diagram::TextFlowchartRenderer;
use seatshow::error::Result;
use seatshow::export::DeckExporter;
use seatshow::ui::{App, TerminalSession};

/// Smart Seating Engine report viewer
///
/// Opens the report in the terminal. Press `p` to present, `x` to export the
/// slide deck, `q` to quit.
#[derive(Parser, Debug)]
#[command(name = "seatshow")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to configuration file (default: seatshow.json in current directory)
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Log file used while the terminal UI is running
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// Enable verbose output (sets log level to debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write Smart_Seating_Engine.pptx without opening the UI
    Export {
        /// Output directory (overrides `exportDir` from the config)
        #[arg(short, long, value_name = "DIR")]
        out_dir: Option<PathBuf>,
    },
    /// Print the report as plain text
    Report,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let config = match load_config(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::from(1);
        }
    };

    let result = match args.command {
        Some(Command::Export { out_dir }) => {
            init_tracing(args.verbose, None).and_then(|()| export(&config, out_dir))
        }
        Some(Command::Report) => {
            print!("{}", content::report_text());
            Ok(())
        }
        None => {
            let log_file = args
                .log_file
                .unwrap_or_else(|| PathBuf::from(&config.log_file));
            init_tracing(args.verbose, Some(&log_file)).and_then(|()| run_tui(config))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(1)
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from_file(path),
        None => Config::load_from_dir(Path::new(".")),
    }
}

/// Install the global subscriber.
///
/// Priority: RUST_LOG env var > --verbose flag > default (info). The TUI owns
/// stdout, so it logs to a file; the other commands log to stderr.
fn init_tracing(verbose: bool, log_file: Option<&Path>) -> Result<()> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    match log_file {
        Some(path) => {
            let file = File::create(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}

fn export(config: &Config, out_dir: Option<PathBuf>) -> Result<()> {
    let dir = out_dir.unwrap_or_else(|| config.export_dir());
    std::fs::create_dir_all(&dir)?;
    let path = DeckExporter::new().export(&dir)?;
    println!("Wrote {}", path.display());
    Ok(())
}

fn run_tui(config: Config) -> Result<()> {
    tracing::info!(cooldown_ms = config.cooldown_ms, "Starting seatshow");
    let mut app = App::new(config, &TextFlowchartRenderer);

    let mut session = TerminalSession::enter()?;
    app.run(session.terminal_mut())?;
    drop(session);

    tracing::info!("seatshow exited");
    Ok(())
}
