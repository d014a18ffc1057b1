use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use rand::Rng;
use tracing_subscriber::filter::LevelFilter;

use command::{Command, HELP};
use session::Session;
use settings::{FileSettings, GameSection, Overrides, Preset, Settings};

mod command;
mod render;
mod session;
mod settings;

#[derive(Parser, Debug)]
#[command(version, about = "Play minesweeper in the terminal", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Board preset, individual dimensions override it
    #[arg(short, long, value_enum)]
    preset: Option<Preset>,

    #[arg(long)]
    rows: Option<u8>,

    #[arg(long)]
    cols: Option<u8>,

    #[arg(long)]
    mines: Option<u16>,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// TOML settings file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn init_logging(level: log::LevelFilter) {
    let level = match level {
        log::LevelFilter::Off => LevelFilter::OFF,
        log::LevelFilter::Error => LevelFilter::ERROR,
        log::LevelFilter::Warn => LevelFilter::WARN,
        log::LevelFilter::Info => LevelFilter::INFO,
        log::LevelFilter::Debug => LevelFilter::DEBUG,
        log::LevelFilter::Trace => LevelFilter::TRACE,
    };
    // also captures `log` records emitted by the engine
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose.log_level_filter());

    let file = match &args.config {
        Some(path) => FileSettings::load(path)?,
        None => FileSettings::default(),
    };
    let overrides = Overrides {
        preset: args.preset,
        game: GameSection {
            rows: args.rows,
            cols: args.cols,
            mines: args.mines,
        },
        seed: args.seed,
    };
    let settings = Settings::resolve(&file, &overrides).context("invalid game settings")?;
    let seed = settings.seed.unwrap_or_else(|| rand::rng().random());
    log::debug!("seed: {}", seed);

    let mut session = Session::new(settings.config, seed)?;
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    writeln!(stdout, "{HELP}")?;
    write!(stdout, "{}", render::render(&session.snapshot(), 0))?;

    for line in stdin.lock().lines() {
        let line = line.context("failed to read input")?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                writeln!(stdout, "error: {e}")?;
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => writeln!(stdout, "{HELP}")?,
            command => match session.apply(command) {
                Ok(true) => write!(
                    stdout,
                    "{}",
                    render::render(&session.snapshot(), session.elapsed_secs())
                )?,
                Ok(false) => writeln!(stdout, "nothing to do")?,
                Err(e) => writeln!(stdout, "error: {e}")?,
            },
        }
        stdout.flush()?;
    }

    log::debug!("session with seed {} finished", session.seed());
    Ok(())
}
